//! UI support shared by the card and its host
//!
//! Structure:
//! - `theme.rs` - Light/dark appearance, color themes and presets

pub mod theme;

// Re-export commonly used types
pub use theme::{Appearance, Theme};
