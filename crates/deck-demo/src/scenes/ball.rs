//! Decorative spring entrance: a ball dropping from the origin to a fixed
//! resting point.

use anyhow::Result;
use deck_config::DeckConfig;
use deck_scene::animation::AnimatedPosition;
use deck_scene::geom::Vec2;

use super::{FRAME_MS, Scene};

#[derive(Default)]
pub struct BallScene;

impl Scene for BallScene {
    fn run(&mut self, _config: &DeckConfig) -> Result<()> {
        let mut position = AnimatedPosition::new();
        position.animate_spring(Vec2::new(200.0, 500.0));

        let mut frame = 0u32;
        while position.is_animating() {
            position.tick(FRAME_MS);
            frame += 1;
            if frame % 6 == 0 {
                let at = position.layout();
                println!("frame {frame:3}  ball at ({:7.2}, {:7.2})", at.x, at.y);
            }
        }

        let rest = position.layout();
        log::info!("ball settled at ({}, {}) after {frame} frames", rest.x, rest.y);
        Ok(())
    }
}
