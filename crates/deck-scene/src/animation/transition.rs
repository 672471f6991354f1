//! Fixed-duration transitions toward a target value.
//!
//! A `TimedTransition` interpolates the position from its start value to a
//! target over a constant duration, independent of the distance remaining.
//! The forced swipe-out uses this with `EasingFunction::Linear`.

use super::easing::EasingFunction;
use super::interpolate::Interpolate;
use crate::geom::Vec2;

/// Lifecycle state of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    /// Actively running.
    Running,
    /// Completed normally.
    Finished,
    /// Cancelled before completion (pre-empted by a newer animation).
    Cancelled,
}

/// An in-progress fixed-duration transition.
#[derive(Debug, Clone)]
pub struct TimedTransition {
    from: Vec2,
    to: Vec2,
    duration_ms: f32,
    elapsed_ms: f32,
    easing: EasingFunction,
    state: AnimationState,
}

impl TimedTransition {
    pub fn new(from: Vec2, to: Vec2, duration_ms: f32, easing: EasingFunction) -> Self {
        Self {
            from,
            to,
            duration_ms,
            elapsed_ms: 0.0,
            easing,
            state: AnimationState::Running,
        }
    }

    /// Current interpolated value.
    pub fn current_value(&self) -> Vec2 {
        match self.state {
            AnimationState::Finished => self.to,
            AnimationState::Cancelled => self.from.interpolate(&self.to, self.eased_progress()),
            AnimationState::Running => self.from.interpolate(&self.to, self.eased_progress()),
        }
    }

    fn eased_progress(&self) -> f32 {
        self.easing.evaluate(self.progress())
    }

    /// Linear progress in [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration_ms > 0.0 {
            (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    pub fn target(&self) -> Vec2 {
        self.to
    }

    /// Advance the transition by `delta_ms`.
    ///
    /// Returns `true` while still running, `false` once finished or
    /// cancelled.
    pub fn update(&mut self, delta_ms: f32) -> bool {
        match self.state {
            AnimationState::Finished | AnimationState::Cancelled => false,
            AnimationState::Running => {
                self.elapsed_ms += delta_ms;
                if self.elapsed_ms >= self.duration_ms {
                    self.state = AnimationState::Finished;
                    false
                } else {
                    true
                }
            }
        }
    }

    pub fn cancel(&mut self) {
        if self.state == AnimationState::Running {
            self.state = AnimationState::Cancelled;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state == AnimationState::Finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_lifecycle() {
        let mut transition = TimedTransition::new(
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            100.0,
            EasingFunction::Linear,
        );

        assert!(transition.update(50.0));
        assert!((transition.progress() - 0.5).abs() < 0.01);
        assert_eq!(transition.current_value(), Vec2::new(50.0, 0.0));

        assert!(!transition.update(60.0));
        assert!(transition.is_finished());
        assert_eq!(transition.current_value(), Vec2::new(100.0, 0.0));
    }

    #[test]
    fn test_duration_is_independent_of_distance() {
        let mut short = TimedTransition::new(
            Vec2::new(90.0, 0.0),
            Vec2::new(100.0, 0.0),
            250.0,
            EasingFunction::Linear,
        );
        let mut long = TimedTransition::new(
            Vec2::new(-400.0, 0.0),
            Vec2::new(100.0, 0.0),
            250.0,
            EasingFunction::Linear,
        );

        // Both complete on the same frame regardless of travel distance.
        assert!(short.update(249.0));
        assert!(long.update(249.0));
        assert!(!short.update(1.0));
        assert!(!long.update(1.0));
    }

    #[test]
    fn test_cancelled_transition_freezes() {
        let mut transition = TimedTransition::new(
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            100.0,
            EasingFunction::Linear,
        );
        transition.update(50.0);
        transition.cancel();

        let frozen = transition.current_value();
        assert!(!transition.update(100.0));
        assert_eq!(transition.current_value(), frozen);
        assert!(!transition.is_finished());
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let mut transition = TimedTransition::new(
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            0.0,
            EasingFunction::Linear,
        );
        assert_eq!(transition.current_value(), Vec2::new(100.0, 0.0));
        assert!(!transition.update(1.0));
        assert!(transition.is_finished());
    }
}
