//! Card configuration record

/// Default card corner radius in logical units
pub const DEFAULT_CORNER_RADIUS: f32 = 10.0;
/// Default side/bottom inset in logical units
pub const DEFAULT_CARD_PADDING: f32 = 5.0;

/// Options set through the card modifiers.
///
/// Every `CardView` owns its own copy; modifiers never share one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardProperties {
    /// Corner rounding. Anything above zero draws rounded corners.
    pub corner_radius: f32,
    /// Leading, trailing and bottom inset
    pub card_padding: f32,
    /// Show the close glyph in the top-trailing corner
    pub has_dismiss_button: bool,
    /// Tapping outside the card dismisses it
    pub should_dismiss_on_tap: bool,
    /// Dim the screen behind the card
    pub overlays_screen: bool,
    /// Fire a success pulse when the card appears
    pub haptic_on_appear: bool,
}

impl Default for CardProperties {
    fn default() -> Self {
        Self {
            corner_radius: DEFAULT_CORNER_RADIUS,
            card_padding: DEFAULT_CARD_PADDING,
            has_dismiss_button: false,
            should_dismiss_on_tap: false,
            overlays_screen: false,
            haptic_on_appear: false,
        }
    }
}

impl CardProperties {
    /// Whether an overlay layer sits behind the card at all
    pub fn installs_overlay(&self) -> bool {
        self.overlays_screen || self.should_dismiss_on_tap
    }

    /// Horizontal inset in columns (one logical unit per column)
    pub fn horizontal_inset(&self) -> u16 {
        to_cells(self.card_padding)
    }

    /// Bottom inset in rows (cells are roughly twice as tall as wide)
    pub fn bottom_inset(&self) -> u16 {
        to_cells(self.card_padding / 2.0)
    }

    pub fn rounded_corners(&self) -> bool {
        self.corner_radius > 0.0
    }
}

/// Negative and NaN values collapse to zero cells
fn to_cells(units: f32) -> u16 {
    if units.is_nan() || units <= 0.0 {
        0
    } else {
        units.round().min(u16::MAX as f32) as u16
    }
}
