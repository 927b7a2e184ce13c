use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use quickcard::{DismissTrigger, TapOutcome};

use crate::app::App;

/// Main draw function
pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    let theme = app.theme();

    let bg_block = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(bg_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Page content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_page(f, app, chunks[0]);
    draw_status_bar(f, app, chunks[1]);

    // Card goes last; it slides over the whole screen
    f.render_widget(app.card().themed(theme), area);
}

/// Draw the content the card slides over
fn draw_page(f: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let lines = vec![
        Line::from("Space / Enter  toggle the card"),
        Line::from("Click          tap (dismiss button, outside the card)"),
        Line::from("t              flip light/dark"),
        Line::from("Esc            dismiss, or quit when hidden"),
        Line::from("q              quit"),
    ];

    let page = Paragraph::new(lines)
        .style(Style::default().fg(theme.foreground).bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .title(" quickcard "),
        );
    f.render_widget(page, area);
}

/// Draw the status bar
fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let tap = match app.last_tap() {
        Some(TapOutcome::Dismissed(DismissTrigger::Button)) => "dismiss button",
        Some(TapOutcome::Dismissed(DismissTrigger::OutsideTap)) => "outside tap",
        Some(TapOutcome::Card) => "card",
        Some(TapOutcome::Overlay) => "overlay",
        Some(TapOutcome::PassThrough) | None => "-",
    };
    let status = format!(
        " isPresented: {} | phase: {:?} | {:?} | last tap: {}",
        app.is_presented(),
        app.card().phase(),
        theme.appearance,
        tap
    );

    let status_bar =
        Paragraph::new(status).style(Style::default().fg(theme.dimmed).bg(theme.background));
    f.render_widget(status_bar, area);
}
