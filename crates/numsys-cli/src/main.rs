#![forbid(unsafe_code)]

//! # numsys
//!
//! Terminal number-base converter.
//!
//! ## Usage
//!
//! ```bash
//! numsys                             # Interactive converter
//! numsys convert 255                 # Decimal to every base
//! numsys convert ff --from hex       # Hexadecimal input
//! numsys theme toggle                # Switch and save the theme
//! ```

mod cli;
mod commands;
mod interactive;
mod settings;
mod terminal;

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::Context;
use numsys_theme::{ColorSchemeSource, ThemeController};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use commands::{CliThemeController, Outcome};
use settings::FileStore;
use terminal::TerminalRoot;

/// Exit status for rejected input.
const EXIT_REJECTED: u8 = 2;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse_args();
    init_logging(cli.log_level());

    let outcome = match &cli.command {
        Some(Command::Convert(args)) => {
            commands::convert(args, &mut io::stdout().lock(), &mut io::stderr().lock())?
        }
        Some(Command::Theme { action }) => {
            let scheme = terminal::color_scheme();
            let mut controller = theme_controller(&cli, &scheme)?;
            commands::theme(
                action.unwrap_or_default(),
                &mut controller,
                &scheme,
                &mut io::stdout().lock(),
            )?
        }
        Some(Command::Interactive) | None => {
            let scheme = terminal::color_scheme();
            let controller = theme_controller(&cli, &scheme)?;
            interactive::run(interactive::Page::new(controller))?;
            Outcome::Success
        }
    };

    Ok(match outcome {
        Outcome::Success => ExitCode::SUCCESS,
        Outcome::Rejected => ExitCode::from(EXIT_REJECTED),
    })
}

/// Logs go to stderr. `RUST_LOG` overrides the `-v` level.
fn init_logging(level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

fn theme_controller(
    cli: &Cli,
    scheme: &dyn ColorSchemeSource,
) -> anyhow::Result<CliThemeController> {
    let path = cli
        .config
        .clone()
        .or_else(settings::default_path)
        .context("could not determine the settings directory; pass --config <PATH>")?;
    let store = FileStore::new(path);
    tracing::debug!(path = %store.path().display(), "Using settings file");
    Ok(ThemeController::init(store, TerminalRoot::new(), scheme))
}
