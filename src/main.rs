mod app;
mod draw;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::{App, Flow};
use quickcard::{Appearance, Config};

/// Frame interval for animation
const FRAME: Duration = Duration::from_millis(16);

#[derive(Parser, Debug)]
#[command(name = "quickcard")]
#[command(about = "Bottom-sheet card demo")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(long)]
    config: Option<String>,

    /// Force light or dark appearance
    #[arg(long, value_parser = ["light", "dark"])]
    appearance: Option<String>,

    /// Disable haptic feedback
    #[arg(long)]
    no_haptics: bool,

    /// Start with the card presented
    #[arg(long, short)]
    present: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quickcard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    // Load config
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| Config::default_path().to_string_lossy().into_owned());
    let mut config = Config::load(&config_path)?;
    if cli.no_haptics {
        config.haptics.backend = "none".to_string();
    }
    match cli.appearance.as_deref() {
        Some("light") => config.appearance.mode = Some(Appearance::Light),
        Some("dark") => config.appearance.mode = Some(Appearance::Dark),
        _ => {}
    }
    let theme = config.resolve_theme();
    tracing::info!("Using {:?} appearance", theme.appearance);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(&config, theme, cli.present);

    // Run main loop
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    let mut last_frame = Instant::now();

    loop {
        let now = Instant::now();
        app.tick(now - last_frame);
        last_frame = now;

        terminal.draw(|f| draw::draw(f, app))?;

        if event::poll(FRAME)? {
            let event = event::read()?;
            match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key) == Flow::Quit {
                        return Ok(());
                    }
                }
                Event::Mouse(_) => {
                    let size = terminal.size()?;
                    let screen = Rect::new(0, 0, size.width, size.height);
                    app.handle_event(screen, &event);
                }
                _ => {}
            }
        }
    }
}
