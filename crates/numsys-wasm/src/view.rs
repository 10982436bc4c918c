//! Text content of the converter page, derived from session and theme state.

use numsys::{Base, Session};
use numsys_theme::Theme;

pub const TITLE: &str = "Number System Converter";
pub const SUBTITLE: &str = "Convert between decimal, binary, hexadecimal, and octal number systems";
pub const FOOTER: &str = "Real-time conversion \u{2022} Persistent theme \u{2022} Responsive design";
pub const TOGGLE_LABEL: &str = "Toggle theme";
pub const SELECT_LABEL: &str = "Number system";

/// Everything the page displays after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub base: Base,
    pub value: String,
    pub placeholder: String,
    pub error: Option<String>,
    /// Result box title and text in selector order.
    pub results: [(&'static str, String); 4],
    pub toggle_icon: &'static str,
}

impl ViewModel {
    #[must_use]
    pub fn new(session: &Session, theme: Theme) -> Self {
        let results = session.results();
        Self {
            base: session.base(),
            value: session.value().to_string(),
            placeholder: session.base().placeholder(),
            error: session.error_message(),
            results: Base::ALL.map(|base| (base.label(), results.display(base).to_string())),
            toggle_icon: theme.toggle_icon(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_session_shows_zeros() {
        let view = ViewModel::new(&Session::new(), Theme::Light);
        assert_eq!(view.placeholder, "Enter decimal number");
        assert_eq!(view.error, None);
        assert!(view.results.iter().all(|(_, text)| text == "0"));
        assert_eq!(view.toggle_icon, Theme::Light.toggle_icon());
    }

    #[test]
    fn converted_session() {
        let mut session = Session::with_base(Base::Binary);
        session.input("1010");
        let view = ViewModel::new(&session, Theme::Dark);

        assert_eq!(view.value, "1010");
        assert_eq!(
            view.results.map(|(title, text)| format!("{title}={text}")),
            ["Decimal=10", "Binary=1010", "Hexadecimal=A", "Octal=12"]
        );
    }

    #[test]
    fn rejected_input_shows_error() {
        let mut session = Session::new();
        session.input("z");
        let view = ViewModel::new(&session, Theme::Dark);
        assert_eq!(view.error.as_deref(), Some("Invalid decimal number"));
        assert_eq!(view.value, "");
    }
}
