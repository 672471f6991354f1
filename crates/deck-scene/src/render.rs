//! Render output for the card stack.
//!
//! The controller does not draw; it produces an ordered list of layers the
//! host compositor paints back-to-front. Each layer carries the caller's
//! render output plus the style the deck computed for it.

use serde::{Deserialize, Serialize};

use crate::geom::Vec2;

/// Visual style applied to one card layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardStyle {
    /// Offset from the card's resting position, in logical pixels.
    pub translate: Vec2,
    /// Tilt around the card center, in degrees.
    pub rotation_deg: f32,
}

impl CardStyle {
    /// Style of a card at rest.
    pub fn rest() -> Self {
        Self {
            translate: Vec2::ZERO,
            rotation_deg: 0.0,
        }
    }

    /// Static style of a stacked card fanned out below the top card.
    pub fn stacked(offset_y: f32) -> Self {
        Self {
            translate: Vec2::new(0.0, offset_y),
            rotation_deg: 0.0,
        }
    }
}

impl Default for CardStyle {
    fn default() -> Self {
        Self::rest()
    }
}

/// One composited layer of the deck, in painter's order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardLayer<R> {
    /// Stable render key: the item id, or `None` for the "no more cards"
    /// output.
    pub key: Option<String>,
    /// The caller-supplied render output for this layer.
    pub content: R,
    /// Style the host applies when compositing the layer.
    pub style: CardStyle,
    /// Whether gesture handlers attach to this layer. Only ever true for
    /// the top card.
    pub interactive: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_style() {
        let style = CardStyle::rest();
        assert_eq!(style.translate, Vec2::ZERO);
        assert_eq!(style.rotation_deg, 0.0);
        assert_eq!(CardStyle::default(), style);
    }

    #[test]
    fn test_stacked_style_offsets_vertically() {
        let style = CardStyle::stacked(20.0);
        assert_eq!(style.translate, Vec2::new(0.0, 20.0));
        assert_eq!(style.rotation_deg, 0.0);
    }
}
