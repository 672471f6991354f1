//! The gesture-driven animated position.
//!
//! `AnimatedPosition` owns the single mutable 2D value the deck renders
//! from. It is created once per controller, never replaced, and mutated only
//! through the entry points here: an immediate write during dragging, a
//! spring toward a target, or a fixed-duration transition. Starting a new
//! animation pre-empts whatever was in flight (last-writer-wins on target).

use super::interpolate::map_range_clamped;
use super::spring::{SpringParams, SpringTransition};
use super::transition::TimedTransition;
use super::EasingFunction;
use crate::geom::Vec2;

/// Emitted by [`AnimatedPosition::tick`] exactly once when a driver reaches
/// its target. Pre-empted drivers never emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleEvent {
    /// A spring came to rest within tolerance.
    SpringSettled,
    /// A fixed-duration transition ran to completion.
    TimedCompleted,
}

#[derive(Debug, Clone)]
enum Driver {
    Rest,
    Spring(SpringTransition),
    Timed(TimedTransition),
}

/// A 2D position driven either directly by a gesture or by an animation.
#[derive(Debug, Clone)]
pub struct AnimatedPosition {
    value: Vec2,
    driver: Driver,
    spring_params: SpringParams,
}

impl Default for AnimatedPosition {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimatedPosition {
    /// Create a position at the origin.
    pub fn new() -> Self {
        Self::with_spring_params(SpringParams::default())
    }

    pub fn with_spring_params(spring_params: SpringParams) -> Self {
        Self {
            value: Vec2::ZERO,
            driver: Driver::Rest,
            spring_params,
        }
    }

    /// Overwrite the position synchronously, cancelling any in-flight
    /// animation. Used while a drag tracks the finger 1:1.
    pub fn set_immediate(&mut self, x: f32, y: f32) {
        self.cancel_driver();
        self.value = Vec2::new(x, y);
    }

    /// Start a spring toward `target`. Settles within tolerance and then
    /// emits [`SettleEvent::SpringSettled`] from `tick`.
    pub fn animate_spring(&mut self, target: Vec2) {
        self.cancel_driver();
        self.driver = Driver::Spring(SpringTransition::new(
            self.value,
            target,
            self.spring_params,
        ));
    }

    /// Start a fixed-duration transition toward `target`. The duration does
    /// not depend on the distance remaining.
    pub fn animate_timed(&mut self, target: Vec2, duration_ms: f32, easing: EasingFunction) {
        self.cancel_driver();
        self.driver = Driver::Timed(TimedTransition::new(
            self.value,
            target,
            duration_ms,
            easing,
        ));
    }

    fn cancel_driver(&mut self) {
        match &mut self.driver {
            Driver::Rest => {}
            Driver::Spring(spring) => spring.cancel(),
            Driver::Timed(timed) => timed.cancel(),
        }
        self.driver = Driver::Rest;
    }

    /// Advance the in-flight animation by one frame.
    ///
    /// Returns the settle event exactly once, strictly after the last
    /// interpolation frame has been applied to the value.
    pub fn tick(&mut self, delta_ms: f32) -> Option<SettleEvent> {
        match &mut self.driver {
            Driver::Rest => None,
            Driver::Spring(spring) => {
                let still_running = spring.update(delta_ms);
                self.value = spring.current_value();
                if still_running {
                    None
                } else {
                    let settled = spring.is_finished();
                    self.driver = Driver::Rest;
                    settled.then_some(SettleEvent::SpringSettled)
                }
            }
            Driver::Timed(timed) => {
                let still_running = timed.update(delta_ms);
                self.value = timed.current_value();
                if still_running {
                    None
                } else {
                    let finished = timed.is_finished();
                    self.driver = Driver::Rest;
                    finished.then_some(SettleEvent::TimedCompleted)
                }
            }
        }
    }

    /// True while a spring or timed transition is in flight.
    pub fn is_animating(&self) -> bool {
        !matches!(self.driver, Driver::Rest)
    }

    /// Map the current x through a piecewise-linear domain/range, clamped at
    /// the extremes. Recomputed from the live value on every call.
    pub fn derive_rotation(&self, domain: [f32; 3], range: [f32; 3]) -> f32 {
        map_range_clamped(self.value.x, domain, range)
    }

    /// Current offset pair for the rendering layer.
    pub fn layout(&self) -> Vec2 {
        self.value
    }
}
