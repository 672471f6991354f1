//! Demo scenes driven by a headless frame loop.

use anyhow::Result;
use deck_config::DeckConfig;

pub mod ball;
pub mod deck;

/// One frame at ~60fps, in milliseconds.
pub const FRAME_MS: f32 = 16.67;

pub trait Scene {
    fn run(&mut self, config: &DeckConfig) -> Result<()>;
}
