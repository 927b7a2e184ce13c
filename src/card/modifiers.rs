//! Chainable card configuration.
//!
//! Each modifier consumes the card and hands back one with a single option
//! changed. Options are disjoint, so call order never matters.

use super::host::CardView;

pub trait CardModifiers: Sized {
    /// Dim the whole screen behind the card (light appearance only)
    fn with_overlay(self) -> Self;
    /// Fire a success pulse when the card appears
    fn with_haptic_feedback_on_appear(self) -> Self;
    /// Tapping outside the card dismisses it
    fn dismiss_on_outside_tap(self) -> Self;
    /// Show a close button in the top-trailing corner
    fn with_dismiss_button(self) -> Self;
    /// Corner radius of the card. 10 by default.
    fn with_corner_radius(self, corner_radius: f32) -> Self;
    /// Leading, trailing and bottom inset of the card. 5 by default.
    fn with_padding(self, padding: f32) -> Self;
}

impl<F> CardModifiers for CardView<F> {
    fn with_overlay(mut self) -> Self {
        self.properties.overlays_screen = true;
        self
    }

    fn with_haptic_feedback_on_appear(mut self) -> Self {
        self.properties.haptic_on_appear = true;
        self
    }

    fn dismiss_on_outside_tap(mut self) -> Self {
        self.properties.should_dismiss_on_tap = true;
        self
    }

    fn with_dismiss_button(mut self) -> Self {
        self.properties.has_dismiss_button = true;
        self
    }

    fn with_corner_radius(mut self, corner_radius: f32) -> Self {
        self.properties.corner_radius = corner_radius;
        self
    }

    fn with_padding(mut self, padding: f32) -> Self {
        self.properties.card_padding = padding;
        self
    }
}
