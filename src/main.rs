//! Syllabus Statement Builder - Main entry point
//!
//! Runs the interactive wizard by default; `generate` builds a statement
//! from option numbers without touching the terminal UI.

use anyhow::{Context, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use syllabus_builder::catalog;
use syllabus_builder::cli::{Cli, Commands, GenerateArgs};
use syllabus_builder::error::BuilderError;
use syllabus_builder::{App, BuilderConfig, Cardinality, Category};

/// Initialize tracing.
///
/// With a log file everything from `info` up goes there. Without one only
/// warnings reach stderr, so the wizard screen is not overwritten.
/// `RUST_LOG` overrides either default.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {:?}", path))?;
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

/// Load and validate the configuration, or fall back to defaults
fn load_config(path: Option<&Path>) -> Result<BuilderConfig> {
    let Some(path) = path else {
        debug!("No config file given, using defaults");
        return Ok(BuilderConfig::default());
    };
    info!("Loading configuration from: {:?}", path);
    let config = BuilderConfig::load_from_file(path)?;
    config.validate()?;
    Ok(config)
}

/// Main application entry point
fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.log_file.as_deref())?;
    info!("Syllabus Statement Builder starting up");

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {:#}", e);
            eprintln!("✗ Configuration error: {:#}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        None => run_wizard(config, None),
        Some(Commands::Build { output }) => run_wizard(config, output.as_deref()),
        Some(Commands::Generate(args)) => run_generate(&config, &args),
        Some(Commands::Options { category }) => {
            print_options(category);
            Ok(())
        }
        Some(Commands::InitConfig { path }) => {
            BuilderConfig::default().save_to_file(&path)?;
            info!("Wrote default configuration to {:?}", path);
            println!("✓ Default configuration written to {}", path.display());
            Ok(())
        }
    }
}

/// Run the interactive wizard and emit the final statement
fn run_wizard(config: BuilderConfig, output: Option<&Path>) -> Result<()> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode()
        .map_err(|e| BuilderError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen).map_err(|e| {
        BuilderError::terminal(format!("Failed to enter alternate screen: {}", e))
    })?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| BuilderError::terminal(format!("Failed to create terminal: {}", e)))?;

    let mut app = App::new(config);
    let result = app.run(&mut terminal);

    // Always attempt cleanup, even if the app failed
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result?;

    let statement = app.finish();
    match output {
        Some(path) => {
            std::fs::write(path, format!("{statement}\n"))
                .with_context(|| format!("Failed to write statement to {:?}", path))?;
            info!("Statement written to {:?}", path);
            println!("✓ Statement written to {}", path.display());
        }
        None => println!("{statement}"),
    }
    Ok(())
}

/// Generate a statement from CLI option numbers
fn run_generate(config: &BuilderConfig, args: &GenerateArgs) -> Result<()> {
    let output = match args.build(config) {
        Ok(output) => output,
        Err(e) => {
            error!("Invalid generate arguments: {}", e);
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };
    info!(
        answered = output.selections.answered_count(),
        mode = %output.mode,
        "Generated statement"
    );

    if args.json {
        println!("{}", output.to_json()?);
    } else {
        println!("{}", output.statement);
    }
    Ok(())
}

/// Print the numbered option catalog
fn print_options(only: Option<Category>) {
    for category in Category::all().filter(|c| only.is_none_or(|o| o == *c)) {
        let kind = match category.cardinality() {
            Cardinality::Single => "choose one",
            Cardinality::Multi => "check any",
        };
        println!("{}  [{}, {}]", catalog::heading(category), category, kind);
        for (i, option) in catalog::options(category).iter().enumerate() {
            println!("  {}. {}", i + 1, option);
        }
        println!();
    }
}
