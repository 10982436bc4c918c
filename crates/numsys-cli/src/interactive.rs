//! Full-screen interactive converter.
//!
//! Keys:
//! - printable characters edit the input, subject to validation
//! - `Backspace` deletes the last character, or clears a value the
//!   selected base cannot read
//! - `Ctrl-U` clears the input
//! - `Tab` / `Shift-Tab` cycle the input base
//! - `Ctrl-T` toggles the theme
//! - `Esc` / `Ctrl-C` quit

use std::io::{self, IsTerminal, Write};

use anyhow::{Context, bail};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};
use numsys::{Base, Session, validate};
use tracing::{debug, info};

use crate::commands::CliThemeController;
use crate::terminal::Palette;

const TITLE: &str = "Number System Converter";
const SUBTITLE: &str = "Convert between decimal, binary, hexadecimal, and octal number systems";
const FOOTER: &str = "Real-time conversion \u{2022} Persistent theme \u{2022} Responsive design";
const HELP: &str = "Tab/Shift-Tab: base   Ctrl-U: clear   Ctrl-T: toggle theme   Esc: quit";

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

/// How a line of the page is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Text,
    Muted,
    Error,
}

impl LineStyle {
    const fn color(self, palette: Palette) -> Color {
        match self {
            Self::Title => palette.accent,
            Self::Text => palette.foreground,
            Self::Muted => palette.muted,
            Self::Error => palette.error,
        }
    }
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub style: LineStyle,
}

impl Line {
    fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    fn blank() -> Self {
        Self::new("", LineStyle::Text)
    }
}

/// The converter page state: a session plus the theme controller.
pub struct Page {
    session: Session,
    controller: CliThemeController,
}

impl Page {
    #[must_use]
    pub fn new(controller: CliThemeController) -> Self {
        Self {
            session: Session::new(),
            controller,
        }
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn controller(&self) -> &CliThemeController {
        &self.controller
    }

    /// Applies a key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.kind != KeyEventKind::Press {
            return Action::Continue;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => return Action::Quit,
            KeyCode::Char('c') if ctrl => return Action::Quit,
            KeyCode::Char('t') if ctrl => {
                self.controller.toggle();
            }
            KeyCode::Char('u') if ctrl => self.session.clear(),
            KeyCode::Char(c) if !ctrl => {
                let mut candidate = self.session.value().to_string();
                candidate.push(c);
                self.session.input(&candidate);
            }
            KeyCode::Backspace => {
                // A value kept across a base switch may not be editable in
                // the new base.
                if !validate(self.session.value(), self.session.base()) {
                    self.session.clear();
                    return Action::Continue;
                }
                let mut candidate = self.session.value().to_string();
                if candidate.pop().is_some() {
                    self.session.input(&candidate);
                }
            }
            KeyCode::Tab => self.session.select_base(self.session.base().next()),
            KeyCode::BackTab => self.session.select_base(self.session.base().prev()),
            _ => {}
        }
        Action::Continue
    }

    /// The page as styled text rows.
    #[must_use]
    pub fn lines(&self) -> Vec<Line> {
        let theme = self.controller.current();
        let base = self.session.base();
        let mut lines = vec![
            Line::new(TITLE, LineStyle::Title),
            Line::new(SUBTITLE, LineStyle::Muted),
            Line::blank(),
            Line::new(
                format!(
                    "Number system: {}    {} {theme}",
                    selector(base),
                    theme.toggle_icon()
                ),
                LineStyle::Text,
            ),
        ];

        if self.session.value().is_empty() {
            lines.push(Line::new(format!("> {}", base.placeholder()), LineStyle::Muted));
        } else {
            lines.push(Line::new(format!("> {}", self.session.value()), LineStyle::Text));
        }
        lines.push(match self.session.error_message() {
            Some(message) => Line::new(message, LineStyle::Error),
            None => Line::blank(),
        });
        lines.push(Line::blank());

        let results = self.session.results();
        for (base, _) in results.iter() {
            lines.push(Line::new(
                format!("{:<12} {}", base.label(), results.display(base)),
                LineStyle::Text,
            ));
        }

        lines.push(Line::blank());
        lines.push(Line::new(FOOTER, LineStyle::Muted));
        lines.push(Line::new(HELP, LineStyle::Muted));
        lines
    }

    /// Redraws the whole page.
    pub fn draw(&self, out: &mut impl Write) -> io::Result<()> {
        let palette = self.controller.root().palette();
        queue!(
            out,
            SetBackgroundColor(palette.background),
            Clear(ClearType::All)
        )?;
        for (row, line) in self.lines().iter().enumerate() {
            let row = u16::try_from(row).unwrap_or(u16::MAX);
            queue!(
                out,
                MoveTo(0, row),
                SetForegroundColor(line.style.color(palette)),
                Print(&line.text)
            )?;
        }
        queue!(out, ResetColor)?;
        out.flush()
    }
}

fn selector(selected: Base) -> String {
    Base::ALL
        .iter()
        .map(|&base| {
            if base == selected {
                format!("[{}]", base.label())
            } else {
                base.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Raw mode and alternate screen, restored on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter(out: &mut impl Write) -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(err) = execute!(out, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), ResetColor, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Runs the page until the user quits.
///
/// # Errors
///
/// Fails when stdin or stdout is not a terminal, or on terminal I/O errors.
pub fn run(mut page: Page) -> anyhow::Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        bail!("interactive mode needs a terminal; use `numsys convert <VALUE>` instead");
    }

    let mut stdout = io::stdout();
    let _guard = TerminalGuard::enter(&mut stdout).context("failed to set up the terminal")?;
    let (width, height) = terminal::size().unwrap_or((80, 24));
    info!(width, height, "Interactive converter started");

    page.draw(&mut stdout)?;
    loop {
        match event::read().context("failed to read terminal event")? {
            Event::Key(key) => {
                if page.handle_key(key) == Action::Quit {
                    break;
                }
            }
            Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
            _ => continue,
        }
        page.draw(&mut stdout)?;
    }

    info!(
        theme = %page.controller().current(),
        numsys.base = %page.session().base(),
        "Interactive converter closed"
    );
    Ok(())
}
