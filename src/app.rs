use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use quickcard::{CardView, Config, State, TapOutcome, Theme};

/// Content factory for the demo card
pub type DemoContent = fn() -> Paragraph<'static>;

fn quick_actions() -> Paragraph<'static> {
    let title = Style::default().add_modifier(Modifier::BOLD);
    Paragraph::new(vec![
        Line::from(Span::styled("Quick actions", title)),
        Line::from(""),
        Line::from("  New note"),
        Line::from("  Share"),
        Line::from("  Archive"),
    ])
}

/// What should happen after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Demo application state
pub struct App {
    /// Owner of the card's presentation flag
    presented: State<bool>,
    /// The card itself
    card: CardView<DemoContent>,
    /// Current theme
    theme: Theme,
    /// Last routed tap, for the status line
    last_tap: Option<TapOutcome>,
}

impl App {
    pub fn new(config: &Config, theme: Theme, start_presented: bool) -> Self {
        let presented = State::new(start_presented);
        let card = CardView::new(presented.binding(), quick_actions as DemoContent)
            .with_timing(config.animation.timing())
            .with_haptics(config.resolve_haptics());
        let card = config.card.apply(card);

        Self {
            presented,
            card,
            theme,
            last_tap: None,
        }
    }

    pub fn card(&self) -> &CardView<DemoContent> {
        &self.card
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn is_presented(&self) -> bool {
        self.presented.get()
    }

    pub fn last_tap(&self) -> Option<TapOutcome> {
        self.last_tap
    }

    /// Advance the card by one frame
    pub fn tick(&mut self, dt: Duration) {
        for change in self.card.update(dt) {
            tracing::debug!("{:?} -> {:?}", change.from, change.to);
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Flow::Quit,
            KeyCode::Char('q') => Flow::Quit,
            KeyCode::Esc => {
                if self.card.phase().is_visible() {
                    self.card.dismiss();
                    Flow::Continue
                } else {
                    Flow::Quit
                }
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                let presented = self.presented.toggle();
                tracing::info!("isPresented = {}", presented);
                Flow::Continue
            }
            KeyCode::Char('t') => {
                let appearance = self.theme.appearance.flipped();
                self.theme = self.theme.clone().with_appearance(appearance);
                tracing::info!("appearance: {:?}", appearance);
                Flow::Continue
            }
            _ => Flow::Continue,
        }
    }

    /// Route a mouse event through the card
    pub fn handle_event(&mut self, screen: Rect, event: &Event) {
        if let Event::Mouse(_) = event {
            let outcome = self.card.handle_event(screen, event);
            if outcome.is_consumed() {
                self.last_tap = Some(outcome);
            }
        }
    }
}
