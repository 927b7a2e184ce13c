//! End-to-end tests for the card widget

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Widget},
};

use super::*;
use crate::binding::State;
use crate::haptics::{FeedbackKind, HapticFeedback};
use crate::ui::theme::Theme;

type Content = fn() -> Paragraph<'static>;

/// 40x20 screen: card slot is rows 10..20, surface (5, 10, 30, 7),
/// glyph (30, 10, 3, 1) when enabled
const SCREEN: Rect = Rect {
    x: 0,
    y: 0,
    width: 40,
    height: 20,
};
const OUTSIDE: Position = Position { x: 1, y: 1 };
const ON_CARD: Position = Position { x: 10, y: 12 };
const ON_GLYPH: Position = Position { x: 31, y: 10 };

#[derive(Default)]
struct RecordingFeedback {
    pulses: RefCell<Vec<FeedbackKind>>,
}

impl RecordingFeedback {
    fn count(&self) -> usize {
        self.pulses.borrow().len()
    }
}

impl HapticFeedback for RecordingFeedback {
    fn notify(&self, kind: FeedbackKind) {
        self.pulses.borrow_mut().push(kind);
    }
}

fn content() -> Paragraph<'static> {
    Paragraph::new("Quick actions")
}

fn card(state: &State<bool>) -> CardView<Content> {
    CardView::new(state.binding(), content as Content)
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Present and run the slide to completion
fn present(view: &mut CardView<Content>, state: &State<bool>) {
    state.set(true);
    view.update(ms(1000));
    assert_eq!(view.phase(), PresentationPhase::Presented);
}

fn backdrop() -> Buffer {
    let mut buf = Buffer::empty(SCREEN);
    buf.set_style(SCREEN, Style::default().bg(Color::Rgb(0, 0, 0)));
    for y in 0..SCREEN.height {
        buf.set_string(0, y, ".".repeat(SCREEN.width as usize), Style::default());
    }
    buf
}

#[test]
fn test_cycle_visits_every_phase_once() {
    let state = State::new(false);
    let mut view = card(&state);
    let mut visited = vec![view.phase()];

    let mut step = |view: &mut CardView<Content>, dt| {
        visited.extend(view.update(dt).into_iter().map(|c| c.to));
    };

    state.set(true);
    step(&mut view, ms(16));
    step(&mut view, ms(200));
    step(&mut view, ms(200));
    step(&mut view, ms(16));
    state.set(false);
    step(&mut view, ms(16));
    step(&mut view, ms(400));
    step(&mut view, ms(16));

    assert_eq!(
        visited,
        vec![
            PresentationPhase::Hidden,
            PresentationPhase::Appearing,
            PresentationPhase::Presented,
            PresentationPhase::Dismissing,
            PresentationPhase::Hidden,
        ]
    );
}

#[test]
fn test_haptic_fires_once_per_appearance() {
    let state = State::new(false);
    let recorder = Rc::new(RecordingFeedback::default());
    let mut view = card(&state)
        .with_haptic_feedback_on_appear()
        .with_haptics(recorder.clone());

    state.set(true);
    for _ in 0..10 {
        view.update(ms(16));
    }
    view.sync();
    assert_eq!(recorder.count(), 1);
    assert_eq!(*recorder.pulses.borrow(), vec![FeedbackKind::Success]);

    view.dismiss();
    view.update(ms(1000));
    assert_eq!(view.phase(), PresentationPhase::Hidden);

    present(&mut view, &state);
    assert_eq!(recorder.count(), 2);
}

#[test]
fn test_haptic_silent_when_disabled() {
    let state = State::new(false);
    let recorder = Rc::new(RecordingFeedback::default());
    let mut view = card(&state).with_haptics(recorder.clone());

    present(&mut view, &state);
    assert_eq!(recorder.count(), 0);
}

#[test]
fn test_reappearing_mid_dismiss_is_a_new_appearance() {
    let state = State::new(false);
    let recorder = Rc::new(RecordingFeedback::default());
    let mut view = card(&state)
        .with_haptic_feedback_on_appear()
        .with_haptics(recorder.clone());

    present(&mut view, &state);
    state.set(false);
    view.update(ms(50));
    assert_eq!(view.phase(), PresentationPhase::Dismissing);

    state.set(true);
    view.update(ms(16));
    assert_eq!(view.phase(), PresentationPhase::Appearing);
    assert_eq!(recorder.count(), 2);
}

#[test]
fn test_overlay_dims_only_in_light_with_overlay() {
    let state = State::new(false);
    let mut view = card(&state).with_overlay();
    present(&mut view, &state);

    let light = Theme::light();
    let mut buf = backdrop();
    view.themed(&light).render(SCREEN, &mut buf);
    assert_eq!(buf[(0, 0)].bg, Color::Rgb(64, 64, 64));
    assert_eq!(buf[(0, 0)].symbol(), ".");

    let dark = Theme::darkwall();
    let mut buf = backdrop();
    view.themed(&dark).render(SCREEN, &mut buf);
    assert_eq!(buf[(0, 0)].bg, Color::Rgb(0, 0, 0));

    assert_eq!(
        view.overlay_layer(light.appearance).map(|l| l.opacity()),
        Some(0.5)
    );
    assert_eq!(
        view.overlay_layer(dark.appearance),
        Some(OverlayLayer::TapCatcher)
    );
}

#[test]
fn test_tap_catcher_without_dim() {
    let state = State::new(false);
    let mut view = card(&state).dismiss_on_outside_tap();
    present(&mut view, &state);

    let light = Theme::light();
    let mut buf = backdrop();
    view.themed(&light).render(SCREEN, &mut buf);
    assert_eq!(buf[(0, 0)].bg, Color::Rgb(0, 0, 0));
    assert_eq!(
        view.overlay_layer(light.appearance),
        Some(OverlayLayer::TapCatcher)
    );

    assert_eq!(
        view.handle_tap(SCREEN, OUTSIDE),
        TapOutcome::Dismissed(DismissTrigger::OutsideTap)
    );
}

#[test]
fn test_outside_tap_passes_through_without_overlay() {
    let state = State::new(false);
    let mut view = card(&state);
    present(&mut view, &state);

    assert_eq!(view.overlay_layer(Theme::light().appearance), None);
    assert_eq!(view.handle_tap(SCREEN, OUTSIDE), TapOutcome::PassThrough);
    assert!(state.get());
}

#[test]
fn test_dim_overlay_swallows_tap_without_dismissing() {
    let state = State::new(false);
    let mut view = card(&state).with_overlay();
    present(&mut view, &state);

    assert_eq!(view.handle_tap(SCREEN, OUTSIDE), TapOutcome::Overlay);
    assert!(state.get());
    assert_eq!(view.phase(), PresentationPhase::Presented);
}

#[test]
fn test_glyph_position_without_button_is_just_card() {
    let state = State::new(false);
    let mut view = card(&state);
    present(&mut view, &state);

    assert_eq!(view.layout(SCREEN).and_then(|l| l.glyph), None);
    assert_eq!(view.handle_tap(SCREEN, ON_GLYPH), TapOutcome::Card);
    view.update(ms(16));
    assert!(state.get());
    assert_eq!(view.phase(), PresentationPhase::Presented);
}

#[test]
fn test_dismiss_button_tap() {
    let state = State::new(false);
    let mut view = card(&state).with_dismiss_button();
    present(&mut view, &state);

    assert_eq!(view.handle_tap(SCREEN, ON_CARD), TapOutcome::Card);
    assert_eq!(
        view.handle_tap(SCREEN, ON_GLYPH),
        TapOutcome::Dismissed(DismissTrigger::Button)
    );
    assert!(!state.get());
    assert_eq!(view.phase(), PresentationPhase::Dismissing);
}

#[test]
fn test_tap_while_hidden_passes_through() {
    let state = State::new(false);
    let mut view = card(&state).with_dismiss_button().dismiss_on_outside_tap();

    assert_eq!(view.handle_tap(SCREEN, OUTSIDE), TapOutcome::PassThrough);
    assert_eq!(view.handle_tap(SCREEN, ON_GLYPH), TapOutcome::PassThrough);
    assert!(!TapOutcome::PassThrough.is_consumed());
}

#[test]
fn test_external_dismiss() {
    let state = State::new(false);
    let mut view = card(&state).with_dismiss_button();
    present(&mut view, &state);

    state.set(false);
    let changes = view.update(ms(16));
    assert_eq!(changes[0].to, PresentationPhase::Dismissing);
    view.update(ms(1000));
    assert_eq!(view.phase(), PresentationPhase::Hidden);
}

#[test]
fn test_binding_dropped_mid_animation() {
    let state = State::new(false);
    let mut view = card(&state).with_dismiss_button().dismiss_on_outside_tap();
    present(&mut view, &state);

    state.set(false);
    view.update(ms(50));
    drop(state);

    assert!(!view.is_presented());
    assert_eq!(view.phase(), PresentationPhase::Dismissing);
    assert!(view.dismiss().is_none());
    view.handle_tap(SCREEN, OUTSIDE);
    view.update(ms(1000));
    assert_eq!(view.phase(), PresentationPhase::Hidden);
}

#[test]
fn test_mouse_event_routing() {
    let state = State::new(false);
    let mut view = card(&state).with_dismiss_button();
    present(&mut view, &state);

    let mouse = |kind| {
        Event::Mouse(MouseEvent {
            kind,
            column: ON_GLYPH.x,
            row: ON_GLYPH.y,
            modifiers: KeyModifiers::NONE,
        })
    };

    assert_eq!(
        view.handle_event(SCREEN, &mouse(MouseEventKind::Moved)),
        TapOutcome::PassThrough
    );
    assert_eq!(
        view.handle_event(SCREEN, &mouse(MouseEventKind::Down(MouseButton::Right))),
        TapOutcome::PassThrough
    );
    assert_eq!(
        view.handle_event(SCREEN, &mouse(MouseEventKind::Down(MouseButton::Left))),
        TapOutcome::Dismissed(DismissTrigger::Button)
    );
}

#[test]
fn test_hidden_card_renders_nothing() {
    let state = State::new(false);
    let view = card(&state).with_overlay().with_dismiss_button();

    let mut buf = backdrop();
    view.themed(&Theme::light()).render(SCREEN, &mut buf);
    assert_eq!(buf, backdrop());
}

#[test]
fn test_card_clipped_mid_slide() {
    let state = State::new(false);
    let mut view = card(&state);
    state.set(true);
    view.update(ms(200));
    assert_eq!(view.phase(), PresentationPhase::Appearing);
    assert_eq!(view.card_offset(SCREEN.height), 6);

    let mut buf = backdrop();
    view.themed(&Theme::darkwall()).render(SCREEN, &mut buf);

    assert_eq!(buf[(5, 15)].symbol(), ".");
    assert_eq!(buf[(5, 16)].symbol(), "╭");
    assert_eq!(buf[(5, 19)].symbol(), "│");
    assert_eq!(buf[(4, 19)].symbol(), ".");
}

#[test]
fn test_end_to_end_outside_tap() {
    let state = State::new(false);
    let mut view = card(&state)
        .with_dismiss_button()
        .dismiss_on_outside_tap()
        .with_corner_radius(20.0);
    present(&mut view, &state);

    let props = view.properties();
    assert_eq!(props.corner_radius, 20.0);
    assert!(props.has_dismiss_button);
    assert!(props.should_dismiss_on_tap);

    let theme = Theme::darkwall();
    let mut buf = backdrop();
    view.themed(&theme).render(SCREEN, &mut buf);
    assert_eq!(buf[(5, 10)].symbol(), "╭");
    assert_eq!(buf[(ON_GLYPH.x, ON_GLYPH.y)].symbol(), "✕");
    assert_eq!(buf[(7, 11)].symbol(), "Q");

    assert_eq!(
        view.handle_tap(SCREEN, OUTSIDE),
        TapOutcome::Dismissed(DismissTrigger::OutsideTap)
    );
    assert!(!state.get());

    view.update(ms(1000));
    assert_eq!(view.phase(), PresentationPhase::Hidden);
}
