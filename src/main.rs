mod app;
mod command;
mod config;
mod consts;
mod game;
mod highscore;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::game::Game;
use anyhow::Context;
use crossterm::event::{DisableFocusChange, EnableFocusChange};
use lexopt::{Arg, Parser};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments
#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    log_file: Option<PathBuf>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Cli {
    Run(Arguments),
    Help,
    Version,
}

impl Cli {
    fn from_parser(mut parser: Parser) -> Result<Cli, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Cli::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Cli::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Cli::Run(args))
    }
}

static USAGE: &str = "\
Usage: gridsnake [-c|--config <file>] [--log-file <file>]

Play Snake in the terminal.

Options:
  -c, --config <file>   Read configuration from the given file
      --log-file <file> Write diagnostic log messages to the given file
  -h, --help            Show this help and exit
  -V, --version         Show the program version and exit
";

fn main() -> ExitCode {
    match Cli::from_parser(Parser::from_env()) {
        Ok(Cli::Run(args)) => match run(args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => error_exit(&e),
        },
        Ok(Cli::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Cli::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gridsnake: {e}");
            eprintln!("Run `gridsnake --help` for usage information.");
            ExitCode::from(2)
        }
    }
}

fn run(args: Arguments) -> anyhow::Result<()> {
    if let Some(path) = args.log_file {
        init_logging(&path)?;
    }
    let config = match args.config {
        Some(path) => Config::load(&path, false),
        None => Config::default_path().and_then(|path| Config::load(&path, true)),
    }
    .context("Failed to load configuration")?;
    let store = config.high_score_store();
    let game = Game::new(config.game, store, rand::rng());
    let terminal = ratatui::init();
    let r = crossterm::execute!(io::stdout(), EnableFocusChange)
        .and_then(|()| App::new(game, config.styles).run(terminal));
    disable_focus_change(io::stdout());
    ratatui::restore();
    r.map_err(Into::into)
}

/// Turn off focus-change reporting on `out`.  Failure is logged but otherwise
/// ignored, as the terminal is being torn down anyway.
fn disable_focus_change<W: io::Write>(mut out: W) {
    if let Err(e) = crossterm::execute!(out, DisableFocusChange) {
        tracing::warn!(error = ?e, "Could not disable focus-change reporting");
    }
}

/// Send `tracing` output to the file at `path`, filtered by `RUST_LOG`
fn init_logging(path: &std::path::Path) -> anyhow::Result<()> {
    let file = fs_err::File::create(path).context("Failed to open log file")?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "gridsnake=info".into()))
        .init();
    Ok(())
}

fn error_exit(e: &anyhow::Error) -> ExitCode {
    if e
        .downcast_ref::<io::Error>()
        .is_some_and(|ioe| ioe.kind() == ErrorKind::BrokenPipe)
    {
        return ExitCode::SUCCESS;
    }
    tracing::error!(error = ?e, "Exiting on error");
    eprintln!("gridsnake: {e:?}");
    ExitCode::from(2)
}
