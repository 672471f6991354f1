//! Swipeable card-deck scene.
//!
//! Given an ordered list of cards, the deck renders the current card as a
//! draggable layer, tracks a continuous pan gesture, and on release either
//! commits a directional swipe (advancing to the next card and invoking a
//! directional callback) or springs the card back to rest.
//!
//! # Overview
//!
//! - [`animation`] owns the gesture-driven 2D value and its drivers: an
//!   immediate write during dragging, a spring for settle-back, and a
//!   fixed-duration transition for the forced exit.
//! - [`gesture`] turns absolute pointer coordinates into cumulative pan
//!   samples and enforces the one-gesture-at-a-time claim protocol.
//! - [`deck`] is the controller: the swipe state machine, the threshold
//!   decision, and the stacked-card layer output.
//!
//! Everything is single-threaded and tick-driven: the host delivers gesture
//! events in arrival order and calls [`deck::DeckController::tick`] once per
//! animation frame.

pub mod animation;
pub mod deck;
pub mod geom;
pub mod gesture;
pub mod render;

pub use animation::{AnimatedPosition, EasingFunction, SettleEvent, SpringParams};
pub use deck::{Card, DeckController, SwipeDirection};
pub use geom::{Vec2, Viewport};
pub use gesture::{GestureSample, PanTracker};
pub use render::{CardLayer, CardStyle};
