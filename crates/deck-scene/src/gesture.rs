//! Pan gesture tracking.
//!
//! The gesture surface reports pointer-down, move and release events; the
//! deck consumes cumulative displacement since gesture start. `PanTracker`
//! does that bookkeeping: it records the down coordinates and converts each
//! subsequent absolute pointer position into a [`GestureSample`].

/// Cumulative pointer displacement since gesture start.
///
/// Transient: produced per move/release event and never retained.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureSample {
    pub dx: f32,
    pub dy: f32,
}

impl GestureSample {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

/// Tracks one pan gesture at a time from absolute pointer coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanTracker {
    origin: Option<(f32, f32)>,
}

impl PanTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a gesture at the given pointer position.
    ///
    /// Returns `false` if a gesture is already live; the second touch is
    /// ignored rather than restarting the gesture.
    pub fn begin(&mut self, x: f32, y: f32) -> bool {
        if self.origin.is_some() {
            log::trace!("pan begin ignored, gesture already live");
            return false;
        }
        self.origin = Some((x, y));
        true
    }

    /// Cumulative displacement for the current pointer position, or `None`
    /// when no gesture is live.
    pub fn sample(&self, x: f32, y: f32) -> Option<GestureSample> {
        self.origin
            .map(|(ox, oy)| GestureSample::new(x - ox, y - oy))
    }

    /// End the gesture, yielding the final displacement.
    pub fn finish(&mut self, x: f32, y: f32) -> Option<GestureSample> {
        let sample = self.sample(x, y);
        self.origin = None;
        sample
    }

    /// Drop the gesture without producing a final sample.
    pub fn abandon(&mut self) {
        self.origin = None;
    }

    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_are_cumulative_from_origin() {
        let mut tracker = PanTracker::new();
        assert!(tracker.begin(200.0, 300.0));

        assert_eq!(
            tracker.sample(250.0, 290.0),
            Some(GestureSample::new(50.0, -10.0))
        );
        assert_eq!(
            tracker.sample(350.0, 330.0),
            Some(GestureSample::new(150.0, 30.0))
        );
    }

    #[test]
    fn test_second_begin_is_rejected() {
        let mut tracker = PanTracker::new();
        assert!(tracker.begin(100.0, 100.0));
        assert!(!tracker.begin(500.0, 500.0));

        // Origin is unchanged by the rejected begin.
        assert_eq!(
            tracker.sample(110.0, 100.0),
            Some(GestureSample::new(10.0, 0.0))
        );
    }

    #[test]
    fn test_finish_ends_the_gesture() {
        let mut tracker = PanTracker::new();
        tracker.begin(0.0, 0.0);
        assert_eq!(tracker.finish(120.0, 5.0), Some(GestureSample::new(120.0, 5.0)));
        assert!(!tracker.is_active());
        assert_eq!(tracker.sample(10.0, 10.0), None);
        assert!(tracker.begin(10.0, 10.0));
    }

    #[test]
    fn test_abandon_discards_gesture() {
        let mut tracker = PanTracker::new();
        tracker.begin(0.0, 0.0);
        tracker.abandon();
        assert!(!tracker.is_active());
        assert_eq!(tracker.finish(50.0, 0.0), None);
    }
}
