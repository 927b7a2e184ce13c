//! Dismiss glyph: a small round badge with a cross in the middle

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::Theme;

/// Badge size in logical units (square)
pub const BADGE_SIZE: f32 = 30.0;
/// Cross size in logical units (square)
pub const CROSS_SIZE: f32 = 17.0;

/// Badge width in columns
pub const GLYPH_WIDTH: u16 = 3;
/// Badge height in rows
pub const GLYPH_HEIGHT: u16 = 1;

const CROSS: &str = "✕";

/// Dismiss button face. Has no interaction of its own; the shell owns the
/// tap target.
pub struct DismissGlyph<'a> {
    theme: &'a Theme,
}

impl<'a> DismissGlyph<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for DismissGlyph<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }

        let badge = Style::default().bg(self.theme.glyph_badge);
        buf.set_style(area, badge);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(" ");
                }
            }
        }

        let cross_width = CROSS.width() as u16;
        if area.width < cross_width {
            return;
        }
        let x = area.x + (area.width - cross_width) / 2;
        let y = area.y + area.height.saturating_sub(1) / 2;
        let style = badge
            .fg(self.theme.glyph_cross)
            .add_modifier(Modifier::BOLD);
        buf.set_string(x, y, CROSS, style);
    }
}
