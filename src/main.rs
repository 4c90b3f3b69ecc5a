//! Giveaway TUI - terminal entry form for the Soul Calibre LLC giveaway
//!
//! A Ratatui-based form that validates an entry, simulates submitting it,
//! and records it in the log.

mod app;
mod config;
mod platform;
mod state;
mod submission;
mod ui;

use anyhow::Result;
use app::App;
use config::GiveawayConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Frame interval while a submission is animating (~60fps)
const FAST_POLL: Duration = Duration::from_millis(16);
/// Frame interval otherwise
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Log to a file so records do not bleed into the alternate screen
fn init_logging(config: &GiveawayConfig) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    if let Some(log_path) = GiveawayConfig::log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(file).with_ansi(false))
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let (config, config_error) = match GiveawayConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (GiveawayConfig::default(), Some(err)),
    };

    init_logging(&config)?;
    if let Some(err) = config_error {
        tracing::warn!(error = %err, "Failed to load config, using defaults");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!(error = ?err, "Giveaway TUI exited with an error");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Apply submission results before drawing
        app.poll_submission();

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        let poll_duration = if app.form.is_loading() {
            FAST_POLL
        } else {
            IDLE_POLL
        };

        // Poll without blocking the runtime so the submission task keeps running
        let ready = tokio::task::block_in_place(|| event::poll(poll_duration))?;
        if ready {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        app.request_quit();
                    } else {
                        app.handle_key(key)?;
                    }
                }
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
