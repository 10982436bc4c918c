//! Per-base syntactic validation of typed input.

use crate::base::Base;
use crate::error::{Error, Result};

/// Reports whether `candidate` is acceptable input for `base`.
///
/// A candidate is valid when every character belongs to the base's digit set.
/// The empty string is valid for every base. No length or magnitude bound is
/// applied here; that is the converter's job.
///
/// # Example
///
/// ```rust
/// use numsys::{validate, Base};
///
/// assert!(validate("ff00", Base::Hexadecimal));
/// assert!(validate("", Base::Binary));
/// assert!(!validate("12", Base::Binary));
/// ```
#[must_use]
pub fn validate(candidate: &str, base: Base) -> bool {
    candidate.chars().all(|c| base.is_digit(c))
}

/// Like [`validate`], but returns the error message a front end shows.
///
/// # Errors
///
/// Returns [`Error::InvalidDigits`] naming `base` when `candidate` contains a
/// character outside its digit set.
pub fn check(candidate: &str, base: Base) -> Result<()> {
    if validate(candidate, base) {
        Ok(())
    } else {
        Err(Error::InvalidDigits(base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_valid_everywhere() {
        for base in Base::ALL {
            assert!(validate("", base), "empty rejected for {base}");
        }
    }

    #[test]
    fn binary_digits() {
        assert!(validate("0101", Base::Binary));
        assert!(!validate("0102", Base::Binary));
    }

    #[test]
    fn octal_digits() {
        assert!(validate("01234567", Base::Octal));
        assert!(!validate("8", Base::Octal));
    }

    #[test]
    fn decimal_digits() {
        assert!(validate("0123456789", Base::Decimal));
        assert!(!validate("12a", Base::Decimal));
        assert!(!validate("-1", Base::Decimal));
        assert!(!validate("1.5", Base::Decimal));
    }

    #[test]
    fn hexadecimal_accepts_both_cases() {
        assert!(validate("0123456789abcdefABCDEF", Base::Hexadecimal));
        assert!(!validate("0x1F", Base::Hexadecimal));
        assert!(!validate("G", Base::Hexadecimal));
    }

    #[test]
    fn whitespace_is_rejected() {
        assert!(!validate(" 1", Base::Decimal));
        assert!(!validate("1 ", Base::Binary));
    }

    #[test]
    fn non_ascii_digits_are_rejected() {
        // Arabic-Indic and fullwidth digits
        assert!(!validate("\u{0663}", Base::Decimal));
        assert!(!validate("\u{FF11}", Base::Decimal));
    }

    #[test]
    fn check_reports_the_base() {
        assert!(check("777", Base::Octal).is_ok());
        let err = check("a", Base::Decimal).unwrap_err();
        assert_eq!(err, Error::InvalidDigits(Base::Decimal));
        assert!(err.to_string().contains("decimal"));
    }
}
