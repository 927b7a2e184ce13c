//! quickcard - bottom-sheet modal card widget for ratatui
//!
//! A card slides up from the bottom of the screen, optionally dims what is
//! behind it, optionally shows a dismiss button, optionally dismisses on an
//! outside tap and optionally fires haptic feedback when it appears.
//!
//! ```no_run
//! use quickcard::{CardModifiers, CardView, State, Theme};
//! use ratatui::widgets::Paragraph;
//!
//! let presented = State::new(false);
//! let mut card = CardView::new(presented.binding(), || Paragraph::new("Hello"))
//!     .with_dismiss_button()
//!     .dismiss_on_outside_tap()
//!     .with_corner_radius(20.0);
//!
//! presented.set(true);
//! card.update(std::time::Duration::from_millis(16));
//! let theme = Theme::default();
//! let _widget = card.themed(&theme);
//! ```

pub mod binding;
pub mod card;
pub mod config;
pub mod haptics;
pub mod ui;

pub use binding::{Binding, State};
pub use card::{
    AnimationTiming, CardModifiers, CardProperties, CardView, DismissTrigger, PresentationPhase,
    TapOutcome,
};
pub use config::Config;
pub use haptics::{FeedbackKind, HapticFeedback, NoFeedback, TerminalBell};
pub use ui::{Appearance, Theme};
