//! Terminal color scheme detection and the palette the theme is applied to.

use crossterm::style::Color;
use numsys_theme::{FixedColorScheme, Theme, ThemeRoot};
use tracing::debug;

/// Reports whether a `COLORFGBG` value (`"fg;bg"` or `"fg;default;bg"`)
/// describes a dark background.
///
/// ANSI colors 0-8 count as dark. Anything unparseable defaults to dark, the
/// common terminal setup.
#[must_use]
pub fn is_dark_background(colorfgbg: Option<&str>) -> bool {
    colorfgbg
        .and_then(|value| value.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .is_none_or(|bg| bg <= 8)
}

/// The terminal's preference, read once from `COLORFGBG`.
///
/// Terminals do not announce background changes, so the scheme is fixed for
/// the lifetime of the process.
#[must_use]
pub fn color_scheme() -> FixedColorScheme {
    let colorfgbg = std::env::var("COLORFGBG").ok();
    let dark = is_dark_background(colorfgbg.as_deref());
    debug!(colorfgbg = ?colorfgbg, scheme.prefers_dark = dark, "Detected terminal color scheme");
    FixedColorScheme::new(dark)
}

/// Colors used to draw the interactive page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub foreground: Color,
    pub background: Color,
    pub accent: Color,
    pub muted: Color,
    pub error: Color,
}

impl Palette {
    #[must_use]
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                foreground: Color::Black,
                background: Color::White,
                accent: Color::DarkBlue,
                muted: Color::DarkGrey,
                error: Color::DarkRed,
            },
            Theme::Dark => Self {
                foreground: Color::White,
                background: Color::Black,
                accent: Color::Cyan,
                muted: Color::Grey,
                error: Color::Red,
            },
        }
    }
}

/// Theme root for the terminal: records the palette to draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalRoot {
    palette: Palette,
}

impl TerminalRoot {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            palette: Palette::for_theme(Theme::Light),
        }
    }

    #[must_use]
    pub const fn palette(&self) -> Palette {
        self.palette
    }
}

impl Default for TerminalRoot {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeRoot for TerminalRoot {
    fn apply(&mut self, theme: Theme) {
        self.palette = Palette::for_theme(theme);
    }
}
