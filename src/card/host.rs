//! Card host: overlay + shell composition and the presentation state machine.
//!
//! The host application owns the `isPresented` flag and hands the card a
//! [`Binding`] to it. Each frame the host calls [`CardView::update`] with the
//! elapsed time and renders [`CardView::themed`]. Taps go through
//! [`CardView::handle_tap`] (or [`CardView::handle_event`] for crossterm
//! mouse events).

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    widgets::Widget,
};

use super::overlay::{overlay_layer, OverlayLayer};
use super::presentation::{AnimationTiming, PhaseChange, Presentation, PresentationPhase};
use super::properties::CardProperties;
use super::shell::{CardShell, ShellLayout};
use crate::binding::Binding;
use crate::haptics::{FeedbackKind, HapticFeedback, NoFeedback};
use crate::ui::theme::{Appearance, Theme};

/// Default share of the screen height taken by the card
pub const DEFAULT_HEIGHT_RATIO: f32 = 0.5;

/// What triggered a dismissal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    /// The close glyph
    Button,
    /// A tap on the overlay outside the card
    OutsideTap,
}

/// Result of routing a tap through the card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Nothing of the card is under the tap; the content beneath gets it
    PassThrough,
    /// Landed on the card surface
    Card,
    /// Landed on the overlay, which swallowed it without dismissing
    Overlay,
    /// The card is going away
    Dismissed(DismissTrigger),
}

impl TapOutcome {
    pub fn is_consumed(self) -> bool {
        !matches!(self, TapOutcome::PassThrough)
    }
}

/// Bottom-sheet card.
///
/// `F` produces the embedded content each time the card is drawn.
#[derive(Clone)]
pub struct CardView<F> {
    is_presented: Binding<bool>,
    content: F,
    pub(super) properties: CardProperties,
    presentation: Presentation,
    haptics: Rc<dyn HapticFeedback>,
    height_ratio: f32,
}

impl<F> CardView<F> {
    pub fn new(is_presented: Binding<bool>, content: F) -> Self {
        Self {
            is_presented,
            content,
            properties: CardProperties::default(),
            presentation: Presentation::default(),
            haptics: Rc::new(NoFeedback),
            height_ratio: DEFAULT_HEIGHT_RATIO,
        }
    }

    /// Feedback service used when the card appears
    pub fn with_haptics(mut self, haptics: Rc<dyn HapticFeedback>) -> Self {
        self.haptics = haptics;
        self
    }

    pub fn with_timing(mut self, timing: AnimationTiming) -> Self {
        self.presentation.set_timing(timing);
        self
    }

    /// Share of the screen height taken by the card, clamped to `[0, 1]`
    pub fn with_height_ratio(mut self, ratio: f32) -> Self {
        self.height_ratio = if ratio.is_nan() {
            DEFAULT_HEIGHT_RATIO
        } else {
            ratio.clamp(0.0, 1.0)
        };
        self
    }

    pub fn properties(&self) -> &CardProperties {
        &self.properties
    }

    pub fn phase(&self) -> PresentationPhase {
        self.presentation.phase()
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    /// Current value of the bound flag
    pub fn is_presented(&self) -> bool {
        self.is_presented.get()
    }

    /// Reconcile the bound flag with the presentation phase
    pub fn sync(&mut self) -> Option<PhaseChange> {
        let change = if self.is_presented.get() {
            self.presentation.show()
        } else {
            self.presentation.hide()
        };
        if change.is_some_and(|c| c.to == PresentationPhase::Appearing) {
            self.on_appear();
        }
        change
    }

    /// Drive the running animation
    pub fn advance(&mut self, dt: Duration) -> Option<PhaseChange> {
        self.presentation.advance(dt)
    }

    /// Per-frame entry point: sync with the binding, then animate
    pub fn update(&mut self, dt: Duration) -> Vec<PhaseChange> {
        [self.sync(), self.advance(dt)].into_iter().flatten().collect()
    }

    /// Close the card: clear the bound flag and start sliding out
    pub fn dismiss(&mut self) -> Option<PhaseChange> {
        self.is_presented.set(false);
        self.presentation.hide()
    }

    /// Rows between the card's resting position and where it is now
    pub fn card_offset(&self, screen_height: u16) -> u16 {
        self.presentation.card_offset(screen_height)
    }

    /// Overlay layer for the given appearance, if any
    pub fn overlay_layer(&self, appearance: Appearance) -> Option<OverlayLayer> {
        overlay_layer(
            &self.properties,
            appearance,
            self.presentation.timing().dim_opacity,
        )
    }

    /// Unpadded card area within `screen`, at its current animated offset
    pub fn slot(&self, screen: Rect) -> Rect {
        let height = ((screen.height as f32) * self.height_ratio).round() as u16;
        let height = height.clamp(screen.height.min(1), screen.height);
        let rest_y = screen.bottom() - height;
        let offset = self.card_offset(screen.height);
        Rect::new(screen.x, rest_y.saturating_add(offset), screen.width, height)
    }

    /// Shell geometry for the current frame; `None` while hidden
    pub fn layout(&self, screen: Rect) -> Option<ShellLayout> {
        self.phase()
            .is_visible()
            .then(|| ShellLayout::new(self.slot(screen), &self.properties))
    }

    /// Route a tap at `position` on a screen of size `screen`
    pub fn handle_tap(&mut self, screen: Rect, position: Position) -> TapOutcome {
        let Some(layout) = self.layout(screen) else {
            return TapOutcome::PassThrough;
        };

        let outcome = if layout.glyph.is_some_and(|g| g.contains(position)) {
            self.dismiss();
            TapOutcome::Dismissed(DismissTrigger::Button)
        } else if layout.surface.contains(position) {
            TapOutcome::Card
        } else if !self.properties.installs_overlay() {
            TapOutcome::PassThrough
        } else if self.properties.should_dismiss_on_tap {
            self.dismiss();
            TapOutcome::Dismissed(DismissTrigger::OutsideTap)
        } else {
            TapOutcome::Overlay
        };

        tracing::debug!("tap at ({}, {}): {:?}", position.x, position.y, outcome);
        outcome
    }

    /// Route a crossterm event. Only left-button presses count as taps.
    pub fn handle_event(&mut self, screen: Rect, event: &Event) -> TapOutcome {
        match event {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => self.handle_tap(screen, Position::new(*column, *row)),
            _ => TapOutcome::PassThrough,
        }
    }

    /// Render adapter carrying the current theme
    pub fn themed<'a>(&'a self, theme: &'a Theme) -> ThemedCard<'a, F> {
        ThemedCard { view: self, theme }
    }

    fn on_appear(&self) {
        if self.properties.haptic_on_appear {
            tracing::debug!("card appearing, firing haptic feedback");
            self.haptics.notify(FeedbackKind::Success);
        }
    }
}

impl<F> fmt::Debug for CardView<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardView")
            .field("is_presented", &self.is_presented)
            .field("properties", &self.properties)
            .field("presentation", &self.presentation)
            .field("height_ratio", &self.height_ratio)
            .finish_non_exhaustive()
    }
}

/// A [`CardView`] paired with the theme to draw it in
pub struct ThemedCard<'a, F> {
    view: &'a CardView<F>,
    theme: &'a Theme,
}

impl<F, W> Widget for ThemedCard<'_, F>
where
    F: Fn() -> W,
    W: Widget,
{
    /// `area` is the whole screen the card slides over
    fn render(self, area: Rect, buf: &mut Buffer) {
        let view = self.view;
        if !view.phase().is_visible() {
            return;
        }

        if let Some(layer) = view.overlay_layer(self.theme.appearance) {
            let fraction = view.presentation.overlay_fraction();
            layer.render(area, buf, self.theme.overlay_dim, fraction);
        }

        let slot = view.slot(area);
        let layout = ShellLayout::new(slot, &view.properties);
        let bounds = layout.bounds(self.theme.is_light());
        let visible = bounds.intersection(area).intersection(buf.area);
        if visible.is_empty() {
            return;
        }

        // The card may hang below the screen mid-slide; draw it whole into a
        // scratch buffer and copy back the part that is on screen.
        let mut scratch = Buffer::empty(bounds);
        copy_cells(buf, &mut scratch, visible);
        CardShell::new(&view.properties, self.theme, (view.content)()).render(slot, &mut scratch);
        copy_cells(&scratch, buf, visible);
    }
}

fn copy_cells(from: &Buffer, to: &mut Buffer, area: Rect) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let (Some(src), Some(dst)) = (from.cell((x, y)), to.cell_mut((x, y))) {
                *dst = src.clone();
            }
        }
    }
}
