// ABOUTME: Main entry point for the snackbar TUI application

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    Terminal,
};
use std::{
    io,
    path::PathBuf,
    time::Duration,
};

use snackbar::app::{host, App, HostEvents, InputReader};
use snackbar::components::LayoutComponent;
use snackbar::config::{AppConfig, LoggingConfig};

#[derive(Debug, Parser)]
#[command(name = "snackbar", version, about = "Terminal snackbar notifications that clear themselves")]
struct Cli {
    /// Config file to use instead of ~/.snackbar/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// How long a notification stays up, in milliseconds
    #[arg(long)]
    duration_ms: Option<u64>,

    /// UI redraw interval, in milliseconds
    #[arg(long)]
    tick_rate_ms: Option<u64>,
}

impl Cli {
    fn load_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load_from(path)?,
            None => AppConfig::load()?,
        };

        if let Some(duration_ms) = self.duration_ms {
            config.notifications.display_duration_ms = duration_ms;
        }
        if let Some(tick_rate_ms) = self.tick_rate_ms {
            config.ui.tick_rate_ms = tick_rate_ms;
        }
        config.validate().context("Invalid command line overrides")?;
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    setup_logging(&config.logging);
    setup_panic_handler();

    let tick_rate = config.ui.tick_rate();
    let mut app = App::with_config(config);
    app.init().await;
    let mut layout = LayoutComponent::new();

    let result = run_tui(&mut app, &mut layout, tick_rate).await;
    app.shutdown().await;

    result
}

async fn run_tui(app: &mut App, layout: &mut LayoutComponent, tick_rate: Duration) -> Result<()> {
    if let Err(e) = crossterm::terminal::is_raw_mode_enabled() {
        eprintln!("Cannot check terminal raw mode: {}", e);
        return Err(anyhow::anyhow!("Terminal not compatible: {}", e));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Terminal polling blocks, so it runs off the runtime thread the timers use
    let input = InputReader::spawn(host::read_terminal_key);
    let mut events = HostEvents::new(input, tick_rate, &app.state.notifications);

    loop {
        terminal.draw(|frame| {
            layout.render(frame, &app.state);
        })?;

        match events.next().await {
            Some(event) => host::step(app, event).await,
            None => break,
        }

        if app.state.should_quit {
            break;
        }
    }

    events.stop().await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn setup_logging(logging: &LoggingConfig) {
    use tracing_subscriber::prelude::*;
    use std::fs::OpenOptions;

    let log_dir = logging.log_dir();
    let _ = std::fs::create_dir_all(&log_dir);

    let log_file = log_dir.join(format!("snackbar-{}.log",
        chrono::Local::now().format("%Y%m%d-%H%M%S")));

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.filter.as_str().into());

    match OpenOptions::new().create(true).append(true).open(&log_file) {
        Ok(file) => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_writer(file)
                        .with_ansi(false) // No ANSI colors in log file
                )
                .with(filter)
                .init();
        }
        Err(e) => {
            // Never log to stdout, the TUI owns it
            eprintln!("Failed to create log file {}: {}", log_file.display(), e);
            tracing_subscriber::registry()
                .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
                .with(filter)
                .init();
        }
    }
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        let _ = disable_raw_mode();
        let _ = execute!(
            std::io::stderr(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
