//! Terminal entry point.
//!
//! Loads configuration, starts tracing, connects to the brew API, and runs a
//! read-eval-render loop over [`brewlog::console`] commands:
//!
//! ```text
//! stdin line → console::parse → Runtime::dispatch → worker → Runtime::settle → render
//! ```
//!
//! Styling is stripped when stdout is not a terminal so output can be piped.

#![allow(clippy::multiple_crate_versions)]

use brewlog::api::InMemoryBrewApi;
use brewlog::console::{self, Command, HELP};
use brewlog::runtime::Runtime;
use brewlog::ui::helpers::strip_ansi;
use brewlog::{infrastructure, initialize, observability, Config, Event, Result};
use clap::Parser;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Fallback width when the terminal does not report one.
const DEFAULT_COLS: usize = 80;

#[derive(Parser, Debug)]
#[command(name = "brewlog")]
#[command(about = "BrewLog - log your coffee brews from the terminal", long_about = None)]
struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/brewlog/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base URL of the brew API, overriding config and environment
    #[arg(long)]
    api_url: Option<String>,

    /// Built-in theme name, overriding config
    #[arg(long)]
    theme: Option<String>,

    /// Keep brews in memory instead of talking to a server
    #[arg(long)]
    offline: bool,

    /// Render width in columns (default: $COLUMNS or 80)
    #[arg(short, long)]
    width: Option<usize>,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("brewlog: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match cli.config.clone().or_else(infrastructure::config_file) {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };
    if let Some(theme) = &cli.theme {
        config.theme.clone_from(theme);
        config.theme_file = None;
    }
    let config = config.with_env()?;
    match &cli.api_url {
        Some(url) => config.with_overrides(|name| (name == brewlog::ENV_API_URL).then(|| url.clone())),
        None => Ok(config),
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    if let Some(data_dir) = infrastructure::data_dir() {
        if let Some(trace_file) = observability::init_tracing(&config, &data_dir) {
            tracing::debug!(trace_file = %trace_file.display(), "tracing initialized");
        }
    }

    let state = initialize(&config);
    let mut runtime = if cli.offline {
        tracing::info!("running offline");
        Runtime::new(state, Box::new(InMemoryBrewApi::new()), config.response_timeout())?
    } else {
        Runtime::connect(&config, state)?
    };

    let cols = cli
        .width
        .or_else(|| std::env::var("COLUMNS").ok().and_then(|cols| cols.parse().ok()))
        .unwrap_or(DEFAULT_COLS);
    let styled = io::stdout().is_terminal();

    runtime.dispatch(&Event::Load)?;
    draw(&runtime, cols, styled)?;
    runtime.settle()?;
    draw(&runtime, cols, styled)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        match console::parse(&line, runtime.state()) {
            Ok(Command::Help) => println!("{HELP}"),
            Ok(Command::Show) => draw(&runtime, cols, styled)?,
            Ok(Command::Events(events)) => {
                for event in &events {
                    runtime.dispatch(event)?;
                }
                if !runtime.is_running() {
                    break;
                }
                if runtime.in_flight() > 0 {
                    draw(&runtime, cols, styled)?;
                    runtime.settle()?;
                }
                draw(&runtime, cols, styled)?;
            }
            Err(e) => eprintln!("{e}"),
        }
    }

    tracing::debug!("exiting");
    Ok(())
}

fn draw(runtime: &Runtime, cols: usize, styled: bool) -> Result<()> {
    let screen = runtime.render(cols);
    let mut stdout = io::stdout().lock();
    if styled {
        write!(stdout, "{screen}> ")?;
    } else {
        write!(stdout, "{}> ", strip_ansi(&screen))?;
    }
    stdout.flush()?;
    Ok(())
}
