//! Animation module for the deck scene.
//!
//! This module provides:
//! - **Easing functions**: CSS-style timing curves for fixed-duration runs
//! - **Spring solver**: Physically-modeled settle-back motion
//! - **Transitions**: Fixed-duration interpolation toward a target
//! - **AnimatedPosition**: The single gesture-driven 2D value the deck owns
//!
//! # Architecture
//!
//! ```text
//! AnimatedPosition
//!   ├── Driver::Timed  (eased, fixed-duration transition)
//!   └── Driver::Spring (spring-damper toward a target)
//!
//! tick(delta_ms) advances the driver and yields a SettleEvent exactly once
//! when the value reaches its target.
//! ```

pub mod easing;
pub mod interpolate;
pub mod position;
pub mod spring;
pub mod transition;

pub use easing::EasingFunction;
pub use interpolate::Interpolate;
pub use position::{AnimatedPosition, SettleEvent};
pub use spring::{SpringParams, SpringTransition};
pub use transition::{AnimationState, TimedTransition};
