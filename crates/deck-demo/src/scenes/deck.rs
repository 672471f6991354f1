//! Scripted swipe-deck scene.
//!
//! Drives a small card deck through a sequence of drags and prints the
//! resulting layer tree as JSON after each release settles.

use anyhow::Result;
use deck_config::DeckConfig;
use deck_scene::deck::{Card, DeckController};
use deck_scene::gesture::PanTracker;
use serde_json::json;

use super::{FRAME_MS, Scene};

struct DemoCard {
    id: String,
    title: String,
}

impl Card for DemoCard {
    fn id(&self) -> &str {
        &self.id
    }
}

fn sample_cards() -> Vec<DemoCard> {
    [
        ("1", "Sunset over the bay"),
        ("2", "Mountain trail"),
        ("3", "City lights"),
    ]
    .into_iter()
    .map(|(id, title)| DemoCard {
        id: id.to_string(),
        title: title.to_string(),
    })
    .collect()
}

#[derive(Default)]
pub struct DeckScene;

impl Scene for DeckScene {
    fn run(&mut self, config: &DeckConfig) -> Result<()> {
        let mut deck = DeckController::new(sample_cards(), config)
            .on_swipe_right(|card: &DemoCard| log::info!("liked: {}", card.title))
            .on_swipe_left(|card: &DemoCard| log::info!("passed: {}", card.title));

        // Scripted pointer paths: (end x offset, end y offset) from a press
        // at the card center. With the default 400px viewport the commit
        // threshold is 100px.
        let drags: [(f32, f32); 3] = [(150.0, -20.0), (-50.0, 10.0), (-180.0, 0.0)];

        let mut tracker = PanTracker::new();
        let center = (config.viewport.width / 2.0, config.viewport.height / 2.0);

        for (end_x, end_y) in drags {
            if tracker.begin(center.0, center.1) && deck.claim_gesture() {
                // Walk the pointer toward the end position over a few frames.
                for step in 1..=8 {
                    let t = step as f32 / 8.0;
                    let sample = tracker
                        .sample(center.0 + end_x * t, center.1 + end_y * t)
                        .expect("gesture is live");
                    deck.gesture_move(sample);
                    deck.tick(FRAME_MS);
                }
                if let Some(sample) = tracker.finish(center.0 + end_x, center.1 + end_y) {
                    deck.gesture_release(sample);
                }
            }

            while !deck.is_at_rest() {
                deck.tick(FRAME_MS);
            }
            print_layers(&deck);
        }

        Ok(())
    }
}

fn print_layers(deck: &DeckController<DemoCard>) {
    let layers = deck.render_cards(
        |card| json!({ "title": card.title }),
        || json!({ "message": "no more cards" }),
    );
    println!("{}", serde_json::to_string_pretty(&layers).expect("layers serialize"));
}
