//! Spring-damper motion for the settle-back animation.
//!
//! The spring integrates a 2D position toward a target with semi-implicit
//! Euler steps. Unlike a timed transition its duration is dynamic: it runs
//! until both displacement and velocity fall inside the rest tolerances.

use serde::{Deserialize, Serialize};

use super::transition::AnimationState;
use crate::geom::Vec2;

/// Physical parameters of the spring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringParams {
    /// Spring stiffness. Higher values snap to the target faster.
    pub stiffness: f32,
    /// Damping coefficient. Lower values overshoot more.
    pub damping: f32,
    /// Mass of the animated value.
    pub mass: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: 180.0,
            damping: 20.0,
            mass: 1.0,
        }
    }
}

/// Displacement below which the spring may come to rest, in logical pixels.
const REST_DISPLACEMENT: f32 = 0.05;
/// Velocity below which the spring may come to rest, in pixels per second.
const REST_VELOCITY: f32 = 0.05;
/// Maximum integration step. Larger frame deltas are subdivided.
const MAX_STEP_S: f32 = 0.004;

/// An in-flight spring animation toward a fixed target.
#[derive(Debug, Clone)]
pub struct SpringTransition {
    params: SpringParams,
    target: Vec2,
    value: Vec2,
    velocity: Vec2,
    state: AnimationState,
}

impl SpringTransition {
    /// Start a spring from `from` toward `target` with zero initial velocity.
    pub fn new(from: Vec2, target: Vec2, params: SpringParams) -> Self {
        Self {
            params,
            target,
            value: from,
            velocity: Vec2::ZERO,
            state: AnimationState::Running,
        }
    }

    /// Current interpolated value.
    pub fn current_value(&self) -> Vec2 {
        if self.state == AnimationState::Finished {
            self.target
        } else {
            self.value
        }
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Advance the spring by `delta_ms`.
    ///
    /// Returns `true` while the spring is still in motion, `false` once it
    /// has settled within tolerance. On settle the value snaps exactly to
    /// the target so downstream state never accumulates drift.
    pub fn update(&mut self, delta_ms: f32) -> bool {
        if self.state != AnimationState::Running {
            return false;
        }

        let mut remaining = (delta_ms.max(0.0)) / 1000.0;
        while remaining > 0.0 {
            let dt = remaining.min(MAX_STEP_S);
            remaining -= dt;

            let displacement = Vec2::new(self.value.x - self.target.x, self.value.y - self.target.y);
            let ax = (-self.params.stiffness * displacement.x - self.params.damping * self.velocity.x)
                / self.params.mass;
            let ay = (-self.params.stiffness * displacement.y - self.params.damping * self.velocity.y)
                / self.params.mass;

            self.velocity.x += ax * dt;
            self.velocity.y += ay * dt;
            self.value.x += self.velocity.x * dt;
            self.value.y += self.velocity.y * dt;
        }

        if self.value.distance(self.target) < REST_DISPLACEMENT
            && self.velocity.length() < REST_VELOCITY
        {
            self.value = self.target;
            self.velocity = Vec2::ZERO;
            self.state = AnimationState::Finished;
            return false;
        }

        true
    }

    pub fn cancel(&mut self) {
        self.state = AnimationState::Cancelled;
    }

    pub fn is_finished(&self) -> bool {
        self.state == AnimationState::Finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_rest(spring: &mut SpringTransition) -> u32 {
        let mut frames = 0;
        while spring.update(16.67) {
            frames += 1;
            assert!(frames < 1000, "spring failed to settle");
        }
        frames
    }

    #[test]
    fn test_spring_settles_exactly_on_target() {
        let mut spring =
            SpringTransition::new(Vec2::new(80.0, -40.0), Vec2::ZERO, SpringParams::default());
        run_to_rest(&mut spring);

        assert!(spring.is_finished());
        assert_eq!(spring.current_value(), Vec2::ZERO);
    }

    #[test]
    fn test_spring_moves_toward_target() {
        let mut spring =
            SpringTransition::new(Vec2::new(100.0, 0.0), Vec2::ZERO, SpringParams::default());
        let start_distance = spring.current_value().distance(Vec2::ZERO);
        spring.update(50.0);
        assert!(spring.current_value().distance(Vec2::ZERO) < start_distance);
    }

    #[test]
    fn test_underdamped_spring_overshoots() {
        let params = SpringParams {
            stiffness: 180.0,
            damping: 4.0,
            mass: 1.0,
        };
        let mut spring = SpringTransition::new(Vec2::new(100.0, 0.0), Vec2::ZERO, params);

        let mut overshot = false;
        for _ in 0..1000 {
            if !spring.update(16.67) {
                break;
            }
            if spring.current_value().x < 0.0 {
                overshot = true;
            }
        }
        assert!(overshot, "lightly damped spring should cross the target");
    }

    #[test]
    fn test_cancelled_spring_stops_updating() {
        let mut spring =
            SpringTransition::new(Vec2::new(100.0, 0.0), Vec2::ZERO, SpringParams::default());
        spring.cancel();
        assert!(!spring.update(16.67));
        assert!(!spring.is_finished());
    }

    #[test]
    fn test_spring_already_at_target_settles_immediately() {
        let mut spring = SpringTransition::new(Vec2::ZERO, Vec2::ZERO, SpringParams::default());
        assert!(!spring.update(16.67));
        assert!(spring.is_finished());
    }
}
