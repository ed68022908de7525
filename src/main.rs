mod app;
mod config;
mod content;
mod domain;
mod engine;
mod input;
mod notifications;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use config::{init_settings, load_settings, log_path, settings_path, SettingsOverrides};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{Settings, Theme};
use notifications::SoundNotifier;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "pomoterm")]
#[command(about = "A terminal Pomodoro timer with tasks, themes and gentle break ideas", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Settings file (defaults to $POMOTERM_CONFIG, then the platform config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Focus length in minutes (1-60)
    #[arg(long)]
    focus: Option<u32>,

    /// Short break length in minutes (1-30)
    #[arg(long)]
    short_break: Option<u32>,

    /// Long break length in minutes (1-60)
    #[arg(long)]
    long_break: Option<u32>,

    /// Colour theme: tomato, ocean, forest, sunset, purple or custom
    #[arg(long, value_parser = parse_theme)]
    theme: Option<Theme>,

    /// Start in dark mode
    #[arg(long)]
    dark: bool,

    /// Use plain ASCII glyphs instead of emoji
    #[arg(long)]
    ascii: bool,

    /// Write logs to this file (defaults to $POMOTERM_LOG; off when unset)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a settings file with default values
    Init {
        /// Output path. Defaults to the resolved settings file.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the effective settings as JSON
    Settings,
}

fn parse_theme(name: &str) -> Result<Theme, String> {
    Theme::from_name(name).ok_or_else(|| {
        let names: Vec<String> = Theme::all().iter().map(|t| t.name().to_lowercase()).collect();
        format!("unknown theme '{}', expected one of: {}", name, names.join(", "))
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    match &cli.command {
        Some(Commands::Init { output }) => {
            let path = match output {
                Some(path) => path.clone(),
                None => settings_path(cli.config.as_deref())?,
            };
            let written = init_settings(&path)?;
            println!("Created settings file: {}", written.display());
            Ok(())
        }
        Some(Commands::Settings) => {
            let settings = effective_settings(&cli)?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
            Ok(())
        }
        None => {
            let settings = effective_settings(&cli)?;
            run_tui(settings, !cli.ascii)
        }
    }
}

/// Settings file (or defaults) with command line flags on top
fn effective_settings(cli: &Cli) -> Result<Settings> {
    let path = settings_path(cli.config.as_deref())?;
    let settings = load_settings(&path)?;

    let overrides = SettingsOverrides {
        focus_mins: cli.focus,
        short_break_mins: cli.short_break,
        long_break_mins: cli.long_break,
        theme: cli.theme,
        dark_mode: cli.dark,
    };
    Ok(overrides.apply(settings))
}

/// Logs go to a file only; the terminal belongs to the UI
fn init_logging(explicit: Option<&Path>) -> Result<()> {
    let Some(path) = log_path(explicit) else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("pomoterm=info".parse()?),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    tracing::info!(log = %path.display(), "logging started");
    Ok(())
}

fn run_tui(settings: Settings, use_emoji: bool) -> Result<()> {
    let mut app = AppState::new(settings, Box::new(SoundNotifier::new()));
    app.use_emoji = use_emoji;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(
        completed = app.session.completed_focus_count(),
        "session ended"
    );

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        // Advance the countdown
        app.tick(Instant::now());
    }
}
