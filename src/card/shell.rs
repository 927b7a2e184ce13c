//! Card shell widget
//!
//! Renders the visible card:
//! - Drop shadow (light appearance only)
//! - Rounded surface, inset by the card padding on both sides and the bottom
//! - Embedded content
//! - Dismiss glyph straddling the top edge (if enabled)

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Padding, Widget},
};

use super::glyph::{DismissGlyph, GLYPH_HEIGHT, GLYPH_WIDTH};
use super::properties::CardProperties;
use crate::ui::theme::Theme;

/// Columns between the glyph and the surface's trailing edge
const GLYPH_TRAILING_GAP: u16 = 2;

/// Geometry of a rendered shell, shared by drawing and hit testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    /// The card surface itself
    pub surface: Rect,
    /// Dismiss glyph, and with it the dismiss tap target
    pub glyph: Option<Rect>,
}

impl ShellLayout {
    /// Lay out a shell inside `slot` (the unpadded card area)
    pub fn new(slot: Rect, props: &CardProperties) -> Self {
        let inset = props.horizontal_inset();
        let bottom = props.bottom_inset();
        let width = slot.width.saturating_sub(inset.saturating_mul(2));
        let height = slot.height.saturating_sub(bottom);
        let surface = Rect::new(slot.x.saturating_add(inset), slot.y, width, height);

        let glyph = (props.has_dismiss_button && !surface.is_empty()).then(|| {
            let width = GLYPH_WIDTH.min(surface.width);
            let x = if surface.width >= width + GLYPH_TRAILING_GAP * 2 {
                surface.right() - width - GLYPH_TRAILING_GAP
            } else {
                surface.right() - width
            };
            Rect::new(x, surface.y, width, GLYPH_HEIGHT)
        });

        Self { surface, glyph }
    }

    /// Shadow rectangle, one cell down and right of the surface
    pub fn shadow(&self) -> Rect {
        Rect::new(
            self.surface.x.saturating_add(1),
            self.surface.y.saturating_add(1),
            self.surface.width,
            self.surface.height,
        )
    }

    /// Union of everything the shell paints
    pub fn bounds(&self, with_shadow: bool) -> Rect {
        let mut bounds = self.surface;
        if with_shadow && !self.surface.is_empty() {
            bounds = bounds.union(self.shadow());
        }
        if let Some(glyph) = self.glyph {
            bounds = bounds.union(glyph);
        }
        bounds
    }
}

/// Card surface widget
pub struct CardShell<'a, W> {
    props: &'a CardProperties,
    theme: &'a Theme,
    content: W,
}

impl<'a, W: Widget> CardShell<'a, W> {
    pub fn new(props: &'a CardProperties, theme: &'a Theme, content: W) -> Self {
        Self {
            props,
            theme,
            content,
        }
    }

    /// Surface fill: white-ish when dimming in light appearance, muted gray
    /// otherwise
    fn surface_color(&self) -> ratatui::style::Color {
        if self.theme.is_light() && self.props.overlays_screen {
            self.theme.card_surface
        } else {
            self.theme.card_surface_muted
        }
    }
}

impl<W: Widget> Widget for CardShell<'_, W> {
    /// `area` is the unpadded card slot
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = ShellLayout::new(area, self.props);
        if layout.surface.is_empty() {
            return;
        }

        if self.theme.is_light() {
            let shadow = layout.shadow().intersection(buf.area);
            buf.set_style(shadow, Style::default().bg(self.theme.shadow));
        }

        let border_type = if self.props.rounded_corners() {
            BorderType::Rounded
        } else {
            BorderType::Plain
        };
        let fill = Style::default()
            .bg(self.surface_color())
            .fg(self.theme.foreground);
        let block = Block::bordered()
            .border_type(border_type)
            .border_style(Style::default().fg(self.theme.card_border))
            .padding(Padding::horizontal(1))
            .style(fill);

        let inner = block.inner(layout.surface);
        block.render(layout.surface, buf);
        if !inner.is_empty() {
            self.content.render(inner, buf);
        }

        if let Some(glyph) = layout.glyph {
            DismissGlyph::new(self.theme).render(glyph, buf);
        }
    }
}
