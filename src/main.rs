// ABOUTME: Main entry point for deckmate with TUI and CLI support
//
// Binary: deckmate
// Usage: deckmate [COMMAND]
// - No command: launches TUI
// - catalog: print templates, brands and channels
// - preview: print the slides a selection would generate
// - ask: print the canned answer to a question
// - config: print the effective config (--save writes it to the user config)

#![allow(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, prelude::*, Terminal};
use std::{
    io::{self, IsTerminal},
    time::{Duration, Instant},
};

use deckmate::app::{App, EventHandler};
use deckmate::cli;
use deckmate::components::LayoutComponent;
use deckmate::config::AppConfig;

fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Unified terminal cleanup that works with a terminal instance
fn cleanup_terminal_with_instance<B: Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = setup_logging() {
        eprintln!("Logging disabled: {:#}", e);
    }
    setup_panic_handler();

    let args = cli::Cli::parse();

    let result = match args.command {
        // CLI commands
        Some(cli::Commands::Catalog) => cli::catalog::execute(args.format),
        Some(cli::Commands::Preview(preview_args)) => {
            cli::preview::execute(preview_args, args.format)
        }
        Some(cli::Commands::Ask(ask_args)) => cli::ask::execute(ask_args, args.format),
        Some(cli::Commands::Config(config_args)) => {
            cli::config::execute(config_args, args.format)
        }

        // TUI mode (explicit or default)
        Some(cli::Commands::Tui) | None => {
            let mut app = match AppConfig::load() {
                Ok(config) => App::new(config),
                Err(e) => {
                    tracing::warn!("Failed to load config, using defaults: {:#}", e);
                    let mut app = App::new(AppConfig::default());
                    app.state.add_warning_notification(
                        format!("Config ignored: {:#}", e),
                        Instant::now(),
                    );
                    app
                }
            };
            let mut layout = LayoutComponent::new();
            run_tui(&mut app, &mut layout).await
        }
    };

    // Ensure terminal is cleaned up on any error
    if result.is_err() {
        cleanup_terminal();
    }

    result
}

async fn run_tui(app: &mut App, layout: &mut LayoutComponent) -> Result<()> {
    if !IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!(
            "No TTY detected. This application requires a terminal.\n\
             Try 'deckmate catalog' or 'deckmate preview' for non-interactive output."
        ));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_tui_loop(app, layout, &mut terminal).await;

    if let Err(e) = cleanup_terminal_with_instance(&mut terminal) {
        tracing::error!("Failed to cleanup terminal: {}", e);
        cleanup_terminal();
    }

    result
}

async fn run_tui_loop(
    app: &mut App,
    layout: &mut LayoutComponent,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let tick_rate = app.state.config.timing.tick_rate();
    let mut last_tick = Instant::now();
    tracing::info!("TUI started");

    loop {
        terminal.draw(|frame| {
            layout.render(frame, &app.state);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    if let Some(app_event) =
                        EventHandler::handle_key_event(key_event, &mut app.state)
                    {
                        EventHandler::process_event(app_event, &mut app.state);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }

        if app.state.should_quit {
            tracing::info!("TUI exiting");
            return Ok(());
        }

        tokio::task::yield_now().await;
    }
}

fn setup_logging() -> Result<()> {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;

    let log_dir = dirs::home_dir()
        .map(|home| home.join(".deckmate").join("logs"))
        .unwrap_or_else(|| std::path::PathBuf::from(".deckmate/logs"));

    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create {}", log_dir.display()))?;

    // JSONL log file with timestamp
    let log_file = log_dir.join(format!(
        "deckmate-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deckmate=info".into()),
        )
        .init();

    Ok(())
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        cleanup_terminal();

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
