//! Interpolation for animatable values.
//!
//! The `Interpolate` trait is the mechanism a transition uses to blend
//! between its start and target values at an eased progress factor.

use crate::geom::Vec2;

/// Trait for types that can be interpolated between two values.
///
/// When t = 0.0, returns self. When t = 1.0, returns `to`.
pub trait Interpolate: Sized {
    fn interpolate(&self, to: &Self, t: f32) -> Self;
}

#[inline]
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

impl Interpolate for f32 {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        lerp(*self, *to, t)
    }
}

impl Interpolate for Vec2 {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        Vec2 {
            x: lerp(self.x, to.x, t),
            y: lerp(self.y, to.y, t),
        }
    }
}

/// Piecewise-linear mapping of `input` through a three-point domain onto a
/// three-point range, clamping outside the domain extremes.
///
/// Used to derive the card tilt from the horizontal drag offset: the domain
/// midpoint maps to the range midpoint, and values past either end of the
/// domain clamp to the nearest range endpoint.
pub fn map_range_clamped(input: f32, domain: [f32; 3], range: [f32; 3]) -> f32 {
    let [d0, d1, d2] = domain;
    let [r0, r1, r2] = range;

    if input <= d0 {
        r0
    } else if input < d1 {
        lerp(r0, r1, (input - d0) / (d1 - d0))
    } else if input == d1 {
        r1
    } else if input < d2 {
        lerp(r1, r2, (input - d1) / (d2 - d1))
    } else {
        r2
    }
}
