//! Input and error state of one converter surface.
//!
//! A [`Session`] is what a front end holds between events. Every keystroke is
//! passed to [`Session::input`]; the selector calls [`Session::select_base`].
//! Both re-run the conversion synchronously so [`Session::results`] is always
//! current.

use tracing::{debug, trace};

use crate::base::Base;
use crate::convert::{ConversionResult, try_convert};
use crate::error::Error;
use crate::validate::check;

/// Selected base, stored input, current error and current results.
///
/// The stored value only ever holds input that was valid for the base that
/// was selected when it was typed. Rejected candidates never replace it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    base: Base,
    value: String,
    error: Option<Error>,
    results: ConversionResult,
}

impl Session {
    /// Creates an empty session reading decimal input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session reading input in `base`.
    #[must_use]
    pub fn with_base(base: Base) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    /// Returns the selected base.
    #[must_use]
    pub const fn base(&self) -> Base {
        self.base
    }

    /// Returns the stored input.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the current error, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Returns the current error message, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// Returns the conversion of the stored input.
    #[must_use]
    pub const fn results(&self) -> &ConversionResult {
        &self.results
    }

    /// Handles a change of the input field to `candidate`.
    ///
    /// The previous error is cleared first. A candidate with a character
    /// outside the selected base's digit set is rejected: the error names the
    /// base, the stored value and results stay as they were, and `false` is
    /// returned so the caller can restore its field. An accepted candidate is
    /// stored and converted.
    pub fn input(&mut self, candidate: &str) -> bool {
        self.error = None;

        if let Err(err) = check(candidate, self.base) {
            debug!(numsys.base = %self.base, numsys.candidate = candidate, "Input rejected");
            self.error = Some(err);
            return false;
        }

        trace!(numsys.base = %self.base, numsys.value = candidate, "Input accepted");
        candidate.clone_into(&mut self.value);
        self.refresh();
        true
    }

    /// Selects the base the stored input is read in.
    ///
    /// The stored value is kept and re-read in the new base, so switching
    /// from hexadecimal `19` to binary yields `1`, and hexadecimal `FF` read
    /// as decimal reports an error.
    pub fn select_base(&mut self, base: Base) {
        if base != self.base {
            debug!(numsys.from = %self.base, numsys.to = %base, "Base selected");
        }
        self.base = base;
        self.error = None;
        self.refresh();
    }

    /// Clears the stored input, error and results.
    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
        self.results = ConversionResult::empty();
    }

    /// Re-runs the conversion. Failures become the current error and an
    /// all-empty result.
    fn refresh(&mut self) {
        self.results = match try_convert(&self.value, self.base) {
            Ok(results) => results,
            Err(err) => {
                self.error = Some(err);
                ConversionResult::empty()
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_empty_decimal() {
        let session = Session::new();
        assert_eq!(session.base(), Base::Decimal);
        assert_eq!(session.value(), "");
        assert!(session.error().is_none());
        assert!(session.results().is_empty());
    }

    #[test]
    fn accepted_input_is_converted() {
        let mut session = Session::with_base(Base::Hexadecimal);
        assert!(session.input("FF"));
        assert_eq!(session.value(), "FF");
        assert_eq!(session.results().decimal, "255");
        assert!(session.error().is_none());
    }

    #[test]
    fn rejected_keystroke_keeps_previous_value() {
        let mut session = Session::new();
        assert!(session.input("12"));
        assert!(!session.input("12a"));

        assert_eq!(session.value(), "12");
        assert_eq!(session.results().decimal, "12");
        let message = session.error_message().unwrap();
        assert!(message.contains("decimal"), "{message}");
    }

    #[test]
    fn next_keystroke_clears_error() {
        let mut session = Session::new();
        session.input("a");
        assert!(session.error().is_some());
        session.input("1");
        assert!(session.error().is_none());
        assert_eq!(session.results().binary, "1");
    }

    #[test]
    fn clearing_the_field_empties_results() {
        let mut session = Session::with_base(Base::Binary);
        session.input("1010");
        session.input("");
        assert!(session.results().is_empty());
        assert!(session.error().is_none());
    }

    #[test]
    fn switching_base_rereads_leading_digits() {
        let mut session = Session::with_base(Base::Hexadecimal);
        session.input("19");
        session.select_base(Base::Binary);

        assert_eq!(session.value(), "19");
        assert_eq!(session.results().decimal, "1");
        assert!(session.error().is_none());
    }

    #[test]
    fn switching_base_can_make_value_unparseable() {
        let mut session = Session::with_base(Base::Hexadecimal);
        session.input("FF");
        session.select_base(Base::Decimal);

        assert!(session.results().is_empty());
        assert_eq!(session.error(), Some(&Error::NotANumber));

        session.select_base(Base::Hexadecimal);
        assert!(session.error().is_none());
        assert_eq!(session.results().octal, "377");
    }

    #[test]
    fn out_of_range_input_is_stored_but_reports_error() {
        let mut session = Session::new();
        assert!(session.input("9007199254740992"));
        assert_eq!(session.value(), "9007199254740992");
        assert_eq!(session.error(), Some(&Error::OutOfRange));
        assert!(session.results().is_empty());
    }

    #[test]
    fn clear_resets_everything_but_base() {
        let mut session = Session::with_base(Base::Octal);
        session.input("17");
        session.clear();
        assert_eq!(session.base(), Base::Octal);
        assert_eq!(session.value(), "");
        assert!(session.results().is_empty());
    }
}
