//! Full-screen layer behind the card.
//!
//! Dimming only happens in light appearance. Everywhere else the layer is a
//! transparent tap catcher, and with neither `overlays_screen` nor
//! `should_dismiss_on_tap` set there is no layer at all.

use ratatui::{buffer::Buffer, layout::Rect, style::Color};

use super::properties::CardProperties;
use crate::ui::theme::Appearance;

/// What sits behind the card
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayLayer {
    /// Tinted layer at `opacity` once fully faded in
    Dim { opacity: f64 },
    /// Invisible but still receives taps
    TapCatcher,
}

impl OverlayLayer {
    /// Opacity once fully faded in
    pub fn opacity(&self) -> f64 {
        match self {
            OverlayLayer::Dim { opacity } => *opacity,
            OverlayLayer::TapCatcher => 0.0,
        }
    }

    /// Paint the layer over `area`. `fraction` is how far the fade has
    /// progressed.
    pub fn render(&self, area: Rect, buf: &mut Buffer, tint: Color, fraction: f64) {
        let OverlayLayer::Dim { opacity } = *self else {
            return;
        };
        let alpha = (opacity * fraction).clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }

        let area = area.intersection(buf.area);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_bg(blend(cell.bg, tint, alpha));
                    cell.set_fg(blend(cell.fg, tint, alpha));
                }
            }
        }
    }
}

/// Pick the overlay layer for the given options and appearance
pub fn overlay_layer(
    props: &CardProperties,
    appearance: Appearance,
    dim_opacity: f64,
) -> Option<OverlayLayer> {
    if !props.installs_overlay() {
        return None;
    }
    if props.overlays_screen && appearance.is_light() {
        Some(OverlayLayer::Dim {
            opacity: dim_opacity,
        })
    } else {
        Some(OverlayLayer::TapCatcher)
    }
}

/// Mix `tint` into `base` by `alpha`. Non-RGB colors can't be mixed, so
/// they snap to the tint past the halfway point.
pub fn blend(base: Color, tint: Color, alpha: f64) -> Color {
    match (base, tint) {
        (Color::Rgb(br, bg, bb), Color::Rgb(tr, tg, tb)) => {
            let mix = |b: u8, t: u8| (b as f64 + (t as f64 - b as f64) * alpha).round() as u8;
            Color::Rgb(mix(br, tr), mix(bg, tg), mix(bb, tb))
        }
        _ if alpha >= 0.5 => tint,
        _ => base,
    }
}
