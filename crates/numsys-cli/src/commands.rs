//! One-shot subcommands.

use std::io::Write;

use anyhow::{Context, ensure};
use numsys::ConversionResult;
use numsys_theme::{ColorSchemeSource, Theme, ThemeController, ThemeStore};
use tracing::debug;

use crate::cli::{ConvertArgs, Format, ThemeAction};
use crate::settings::FileStore;
use crate::terminal::TerminalRoot;

/// Theme controller persisting to the settings file.
pub type CliThemeController = ThemeController<FileStore, TerminalRoot>;

/// Outcome of a subcommand that maps onto the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The input was rejected; the message went to stderr.
    Rejected,
}

/// Validates and converts `args.value`, printing the result to `out`.
///
/// Rejected input is reported on `err`, not as an `Err`.
pub fn convert(
    args: &ConvertArgs,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<Outcome> {
    let converted = numsys::check(&args.value, args.from)
        .and_then(|()| numsys::try_convert(&args.value, args.from));

    let result = match converted {
        Ok(result) => result,
        Err(e) => {
            debug!(numsys.base = %args.from, error = %e, "Conversion rejected");
            writeln!(err, "error: {e}").context("failed to write to stderr")?;
            return Ok(Outcome::Rejected);
        }
    };

    match args.format {
        Format::Plain => write_plain(&result, out)?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, &result).context("failed to encode JSON")?;
            writeln!(out)?;
        }
    }
    Ok(Outcome::Success)
}

fn write_plain(result: &ConversionResult, out: &mut impl Write) -> anyhow::Result<()> {
    for (base, text) in result.iter() {
        let text = if text.is_empty() { "0" } else { text };
        writeln!(out, "{}: {text}", base.label())?;
    }
    Ok(())
}

/// Shows, toggles or resets the persisted theme.
///
/// # Errors
///
/// Fails when a toggle or reset could not be written to the settings file.
pub fn theme(
    action: ThemeAction,
    controller: &mut CliThemeController,
    scheme: &dyn ColorSchemeSource,
    out: &mut impl Write,
) -> anyhow::Result<Outcome> {
    let theme = match action {
        ThemeAction::Show => controller.current(),
        ThemeAction::Toggle => {
            let theme = controller.toggle();
            ensure_saved(controller, Some(theme))?;
            theme
        }
        ThemeAction::Reset => {
            let theme = controller.reset(scheme);
            ensure_saved(controller, None)?;
            theme
        }
    };
    writeln!(out, "{}", describe(theme, controller.has_explicit_preference()))?;
    Ok(Outcome::Success)
}

/// The controller only logs a failed write; a one-shot command must report it.
fn ensure_saved(controller: &CliThemeController, expected: Option<Theme>) -> anyhow::Result<()> {
    let path = controller.store().path().display().to_string();
    let saved = controller
        .store()
        .load()
        .with_context(|| format!("failed to save theme preference to {path}"))?;
    ensure!(saved == expected, "failed to save theme preference to {path}");
    Ok(())
}

fn describe(theme: Theme, saved: bool) -> String {
    let source = if saved { "saved" } else { "terminal" };
    format!("{theme} ({source})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use numsys::Base;
    use numsys_theme::FixedColorScheme;
    use std::fs;
    use tempfile::TempDir;

    fn args(value: &str, from: Base, format: Format) -> ConvertArgs {
        ConvertArgs {
            value: value.to_string(),
            from,
            format,
        }
    }

    fn run_convert(args: &ConvertArgs) -> (Outcome, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let outcome = convert(args, &mut out, &mut err).unwrap();
        (
            outcome,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn plain_hex() {
        let (outcome, out, err) = run_convert(&args("FF", Base::Hexadecimal, Format::Plain));
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(
            out,
            "Decimal: 255\nBinary: 11111111\nHexadecimal: FF\nOctal: 377\n"
        );
        assert!(err.is_empty());
    }

    #[test]
    fn json_binary() {
        let (_, out, _) = run_convert(&args("1010", Base::Binary, Format::Json));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["decimal"], "10");
        assert_eq!(value["hexadecimal"], "A");
        assert_eq!(value["octal"], "12");
    }

    #[test]
    fn empty_value_prints_zeros() {
        let (outcome, out, _) = run_convert(&args("", Base::Decimal, Format::Plain));
        assert_eq!(outcome, Outcome::Success);
        assert!(out.lines().all(|line| line.ends_with(": 0")));
    }

    #[test]
    fn invalid_digits_rejected() {
        let (outcome, out, err) = run_convert(&args("12a", Base::Decimal, Format::Plain));
        assert_eq!(outcome, Outcome::Rejected);
        assert!(out.is_empty());
        assert_eq!(err, "error: Invalid decimal number\n");
    }

    #[test]
    fn out_of_range_rejected() {
        let (outcome, _, err) =
            run_convert(&args("9007199254740992", Base::Decimal, Format::Plain));
        assert_eq!(outcome, Outcome::Rejected);
        assert!(err.contains("Number exceeds the supported range"));
    }

    #[test]
    fn sign_is_not_a_digit() {
        let (outcome, _, err) = run_convert(&args("-42", Base::Decimal, Format::Plain));
        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(err, "error: Invalid decimal number\n");
    }

    #[test]
    fn theme_toggle_and_reset() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("settings.toml"));
        let scheme = FixedColorScheme::new(true);
        let mut controller = ThemeController::init(store, TerminalRoot::new(), &scheme);

        let mut out = Vec::new();
        theme(ThemeAction::Toggle, &mut controller, &scheme, &mut out).unwrap();
        assert_eq!(controller.store().load().unwrap(), Some(Theme::Light));

        theme(ThemeAction::Reset, &mut controller, &scheme, &mut out).unwrap();
        assert_eq!(controller.store().load().unwrap(), None);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "light (saved)\ndark (terminal)\n"
        );
    }

    #[test]
    fn unsaved_toggle_is_an_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let store = FileStore::new(blocker.join("settings.toml"));
        let scheme = FixedColorScheme::new(true);
        let mut controller = ThemeController::init(store, TerminalRoot::new(), &scheme);

        let mut out = Vec::new();
        let err = theme(ThemeAction::Toggle, &mut controller, &scheme, &mut out).unwrap_err();
        assert!(err.to_string().contains("failed to save theme preference"));
        assert!(out.is_empty());

        let err = theme(ThemeAction::Reset, &mut controller, &scheme, &mut out).unwrap_err();
        assert!(err.to_string().contains("failed to save theme preference"));
    }
}
