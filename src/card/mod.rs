//! Bottom-sheet card widget
//!
//! # Module Structure
//!
//! - `properties` - Option record set through the modifiers
//! - `modifiers` - Chainable configuration trait
//! - `presentation` - Hidden/Appearing/Presented/Dismissing state machine
//! - `overlay` - Dimming / tap-catching layer behind the card
//! - `shell` - Card surface widget and its geometry
//! - `glyph` - Dismiss button face
//! - `host` - `CardView`, tying it all together

mod glyph;
mod host;
mod modifiers;
mod overlay;
mod presentation;
mod properties;
mod shell;

#[cfg(test)]
mod tests;

// Re-export public API
pub use glyph::{DismissGlyph, BADGE_SIZE, CROSS_SIZE, GLYPH_HEIGHT, GLYPH_WIDTH};
pub use host::{CardView, DismissTrigger, TapOutcome, ThemedCard, DEFAULT_HEIGHT_RATIO};
pub use modifiers::CardModifiers;
pub use overlay::{blend, overlay_layer, OverlayLayer};
pub use presentation::{
    ease_in, ease_in_out, AnimationTiming, PhaseChange, Presentation, PresentationPhase,
};
pub use properties::{CardProperties, DEFAULT_CARD_PADDING, DEFAULT_CORNER_RADIUS};
pub use shell::{CardShell, ShellLayout};
