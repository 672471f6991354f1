use anyhow::Result;
use deck_config::DeckConfig;

mod scenes;
use scenes::Scene;

fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let config = DeckConfig::load();

    // Scene selection and initialization
    let scene_env = std::env::var("DEMO_SCENE").ok();
    let mut scene: Box<dyn Scene> = if scene_env.as_deref() == Some("ball")
        || std::env::args().any(|a| a == "--scene=ball" || a == "--ball")
    {
        Box::new(scenes::ball::BallScene::default())
    } else {
        Box::new(scenes::deck::DeckScene::default())
    };

    scene.run(&config)
}
