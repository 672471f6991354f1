//! The card-deck controller.
//!
//! `DeckController` orchestrates gesture capture, the swipe-commit decision,
//! and stacked-card rendering over an ordered list of cards. It owns the one
//! [`AnimatedPosition`] in the scene and the current index into the deck.
//!
//! # State machine
//!
//! ```text
//! Idle ──claim_gesture──▶ Dragging ──release, |dx| > threshold──▶ Committing
//!   ▲                        │                                       │
//!   │                        └──release, |dx| ≤ threshold──▶ SettlingBack
//!   │                                                            │
//!   └──────── settle / swipe-out completion (inside tick) ◀──────┘
//! ```
//!
//! Everything runs on one control thread: gesture events arrive in order,
//! and animation completion effects execute inside `tick`, strictly after
//! the last interpolation frame and before any later gesture event.

use tracing::{debug, trace};

use crate::animation::{AnimatedPosition, EasingFunction, SettleEvent};
use crate::geom::{Vec2, Viewport};
use crate::gesture::GestureSample;
use crate::render::{CardLayer, CardStyle};
use deck_config::DeckConfig;

/// An item that can appear in the deck.
///
/// The id must be unique within the deck and stable across renders; it is
/// used as the render key for each layer.
pub trait Card {
    fn id(&self) -> &str;
}

/// Direction of a committed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeckState {
    Idle,
    Dragging,
    Committing(SwipeDirection),
    SettlingBack,
}

type SwipeCallback<T> = Box<dyn FnMut(&T)>;

/// Controller for a swipeable deck of cards.
pub struct DeckController<T: Card> {
    cards: Vec<T>,
    index: usize,
    state: DeckState,
    position: AnimatedPosition,
    viewport: Viewport,
    threshold: f32,
    swipe_out_ms: f32,
    rotation_domain: [f32; 3],
    rotation_range: [f32; 3],
    stack_offset_step: f32,
    on_swipe_left: SwipeCallback<T>,
    on_swipe_right: SwipeCallback<T>,
}

impl<T: Card> DeckController<T> {
    /// Create a controller over `cards`.
    ///
    /// The viewport is read from the config once here; its width is both the
    /// threshold base and the off-screen travel distance.
    pub fn new(cards: Vec<T>, config: &DeckConfig) -> Self {
        let viewport = Viewport::new(config.viewport.width, config.viewport.height);
        let reach = config.swipe.rotation_reach_ratio * viewport.width;
        let max_deg = config.swipe.rotation_max_deg;

        Self {
            cards,
            index: 0,
            state: DeckState::Idle,
            position: AnimatedPosition::with_spring_params(
                crate::animation::SpringParams {
                    stiffness: config.spring.stiffness,
                    damping: config.spring.damping,
                    mass: config.spring.mass,
                },
            ),
            viewport,
            threshold: config.swipe.threshold_ratio * viewport.width,
            swipe_out_ms: config.swipe.out_duration_ms,
            rotation_domain: [-reach, 0.0, reach],
            rotation_range: [-max_deg, 0.0, max_deg],
            stack_offset_step: config.stack.offset_step,
            on_swipe_left: Box::new(|_| {}),
            on_swipe_right: Box::new(|_| {}),
        }
    }

    /// Set the callback invoked when a card is swiped left.
    pub fn on_swipe_left(mut self, callback: impl FnMut(&T) + 'static) -> Self {
        self.on_swipe_left = Box::new(callback);
        self
    }

    /// Set the callback invoked when a card is swiped right.
    pub fn on_swipe_right(mut self, callback: impl FnMut(&T) + 'static) -> Self {
        self.on_swipe_right = Box::new(callback);
        self
    }

    /// Claim the gesture for the top card.
    ///
    /// Accepted from `Idle` whenever a top card exists. A start while a
    /// gesture or animation is live is rejected (returns `false`), never an
    /// error.
    pub fn claim_gesture(&mut self) -> bool {
        if self.state != DeckState::Idle || self.is_exhausted() {
            trace!(state = ?self.state, "gesture start rejected");
            return false;
        }
        self.state = DeckState::Dragging;
        trace!("gesture claimed");
        true
    }

    /// Track a move sample while dragging.
    ///
    /// The position follows the raw cumulative finger offset 1:1. Samples
    /// outside a drag are ignored.
    pub fn gesture_move(&mut self, sample: GestureSample) {
        if self.state != DeckState::Dragging {
            return;
        }
        self.position.set_immediate(sample.dx, sample.dy);
    }

    /// Decide on release whether to commit a swipe or settle back.
    ///
    /// Only horizontal displacement is evaluated, with strict inequality: a
    /// release exactly at the threshold resets. Ignored outside a drag.
    pub fn gesture_release(&mut self, sample: GestureSample) {
        if self.state != DeckState::Dragging {
            return;
        }

        if sample.dx > self.threshold {
            self.force_swipe(SwipeDirection::Right);
        } else if sample.dx < -self.threshold {
            self.force_swipe(SwipeDirection::Left);
        } else {
            debug!(dx = sample.dx, "below threshold, settling back");
            self.state = DeckState::SettlingBack;
            self.position.animate_spring(Vec2::ZERO);
        }
    }

    fn force_swipe(&mut self, direction: SwipeDirection) {
        let x = match direction {
            SwipeDirection::Right => self.viewport.width,
            SwipeDirection::Left => -self.viewport.width,
        };
        debug!(?direction, "committing swipe");
        self.state = DeckState::Committing(direction);
        self.position
            .animate_timed(Vec2::new(x, 0.0), self.swipe_out_ms, EasingFunction::Linear);
    }

    /// Advance animations by one frame and run any completion effects.
    ///
    /// A committed swipe completes here with three ordered effects: invoke
    /// the direction's callback with the card that was swiped, reset the
    /// position without animation, then advance the index.
    pub fn tick(&mut self, delta_ms: f32) {
        let event = self.position.tick(delta_ms);

        match (self.state, event) {
            (DeckState::SettlingBack, Some(SettleEvent::SpringSettled)) => {
                self.state = DeckState::Idle;
            }
            (DeckState::Committing(direction), Some(SettleEvent::TimedCompleted)) => {
                self.complete_swipe(direction);
            }
            _ => {}
        }
    }

    fn complete_swipe(&mut self, direction: SwipeDirection) {
        if let Some(card) = self.cards.get(self.index) {
            match direction {
                SwipeDirection::Right => (self.on_swipe_right)(card),
                SwipeDirection::Left => (self.on_swipe_left)(card),
            }
        }
        self.position.set_immediate(0.0, 0.0);
        self.index += 1;
        self.state = DeckState::Idle;
        debug!(index = self.index, ?direction, "swipe complete");
    }

    /// Replace the deck with a new sequence of cards.
    ///
    /// This is the explicit identity-change signal: every call resets the
    /// index to 0 immediately, even mid-drag or mid-animation. An in-flight
    /// gesture is abandoned without firing a swipe callback.
    pub fn replace_deck(&mut self, cards: Vec<T>) {
        debug!(len = cards.len(), "deck replaced");
        self.cards = cards;
        self.index = 0;
        self.state = DeckState::Idle;
        self.position.set_immediate(0.0, 0.0);
    }

    /// Index of the current top card; equals `len()` once exhausted.
    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// True once every card has been swiped (terminal state).
    pub fn is_exhausted(&self) -> bool {
        self.index >= self.cards.len()
    }

    /// True when no gesture or animation is live and the position is at
    /// rest.
    pub fn is_at_rest(&self) -> bool {
        self.state == DeckState::Idle && !self.position.is_animating()
    }

    /// Current offset of the top card.
    pub fn offset(&self) -> Vec2 {
        self.position.layout()
    }

    /// Live style of the top card: offset plus derived rotation.
    fn top_card_style(&self) -> CardStyle {
        CardStyle {
            translate: self.position.layout(),
            rotation_deg: self
                .position
                .derive_rotation(self.rotation_domain, self.rotation_range),
        }
    }

    /// Produce the layer list for the visible card stack, back-to-front.
    ///
    /// Already-swiped cards are omitted. Stacked cards get a static vertical
    /// offset growing with depth; the top card gets the live animated style
    /// and is the only interactive layer. Once the deck is exhausted the
    /// output is the single "no more cards" layer.
    pub fn render_cards<R>(
        &self,
        render_card: impl Fn(&T) -> R,
        render_no_more: impl Fn() -> R,
    ) -> Vec<CardLayer<R>> {
        if self.is_exhausted() {
            return vec![CardLayer {
                key: None,
                content: render_no_more(),
                style: CardStyle::rest(),
                interactive: false,
            }];
        }

        // Painter's order: deepest stacked card first, top card last.
        (self.index..self.cards.len())
            .rev()
            .map(|i| {
                let card = &self.cards[i];
                if i == self.index {
                    CardLayer {
                        key: Some(card.id().to_string()),
                        content: render_card(card),
                        style: self.top_card_style(),
                        interactive: true,
                    }
                } else {
                    let depth = (i - self.index) as f32;
                    CardLayer {
                        key: Some(card.id().to_string()),
                        content: render_card(card),
                        style: CardStyle::stacked(self.stack_offset_step * depth),
                        interactive: false,
                    }
                }
            })
            .collect()
    }
}
