//! Facade crate re-exporting the swipe-deck scene library.

pub use deck_scene::animation::{AnimatedPosition, EasingFunction, SettleEvent, SpringParams};
pub use deck_scene::deck::{Card, DeckController, SwipeDirection};
pub use deck_scene::geom::{Vec2, Viewport};
pub use deck_scene::gesture::{GestureSample, PanTracker};
pub use deck_scene::render::{CardLayer, CardStyle};
