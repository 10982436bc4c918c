//! Command-line interface for `numsys`.
//!
//! # Examples
//!
//! ```bash
//! # Interactive converter (the default)
//! numsys
//!
//! # One-shot conversion
//! numsys convert FF --from hex
//! numsys convert 1010 --from bin --format json
//!
//! # Theme preference
//! numsys theme toggle
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use numsys::Base;
use tracing::level_filters::LevelFilter;

/// Convert numbers between decimal, binary, hexadecimal and octal.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "numsys",
    author,
    version,
    about = "Convert numbers between decimal, binary, hexadecimal and octal",
    long_about = "Convert numbers between decimal, binary, hexadecimal and octal. \
                  Without a subcommand an interactive converter is started."
)]
pub struct Cli {
    /// Settings file holding the theme preference
    ///
    /// Defaults to `settings.toml` in the platform config directory
    #[arg(long, short = 'c', global = true, env = "NUMSYS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (repeat for more)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Optional subcommand
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Convert a single value and print it in every base
    Convert(ConvertArgs),

    /// Show or change the theme preference
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },

    /// Run the interactive converter
    Interactive,
}

/// Arguments for the convert subcommand.
#[derive(Parser, Debug, Clone)]
pub struct ConvertArgs {
    /// The number to convert
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Base of VALUE: decimal, binary, hexadecimal, octal (or d, b, h, o, 10, 2, 16, 8)
    #[arg(long, short = 'f', default_value = "decimal")]
    pub from: Base,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Plain)]
    pub format: Format,
}

/// Theme subcommand actions.
#[derive(Subcommand, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeAction {
    /// Print the current theme and where it came from
    #[default]
    Show,
    /// Flip between light and dark and save the choice
    Toggle,
    /// Forget the saved choice and follow the terminal again
    Reset,
}

/// Convert output formats.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// One `Name: value` line per base
    #[default]
    Plain,
    /// A JSON object keyed by base name
    Json,
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get log level based on verbosity.
    #[must_use]
    pub const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn defaults_to_interactive() {
        let cli = parse(&["numsys"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level(), LevelFilter::WARN);
    }

    #[test]
    fn convert_with_base_alias() {
        let cli = parse(&["numsys", "convert", "FF", "--from", "hex", "--format", "json"]);
        let Some(Command::Convert(args)) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.value, "FF");
        assert_eq!(args.from, Base::Hexadecimal);
        assert_eq!(args.format, Format::Json);
    }

    #[test]
    fn convert_passes_hyphen_values_through() {
        let cli = parse(&["numsys", "convert", "-42"]);
        let Some(Command::Convert(args)) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.value, "-42");
        assert_eq!(args.from, Base::Decimal);
    }

    #[test]
    fn unknown_base_is_rejected() {
        assert!(Cli::try_parse_from(["numsys", "convert", "1", "--from", "base64"]).is_err());
    }

    #[test]
    fn theme_without_action_shows() {
        let cli = parse(&["numsys", "theme"]);
        let Some(Command::Theme { action }) = cli.command else {
            panic!("expected theme");
        };
        assert_eq!(action.unwrap_or_default(), ThemeAction::Show);
    }

    #[test]
    fn verbosity_counts() {
        assert_eq!(parse(&["numsys", "-vv"]).log_level(), LevelFilter::DEBUG);
        assert_eq!(parse(&["numsys", "-vvvv"]).log_level(), LevelFilter::TRACE);
    }
}
