//! Error type for validation and conversion.

use crate::base::Base;

/// Errors surfaced to the user while typing or converting.
///
/// The `Display` output of each variant is the exact message shown in the
/// error line of a front end.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A keystroke introduced a character outside the base's digit set.
    ///
    /// The candidate input is discarded and the stored value is unchanged.
    #[error("Invalid {0} number")]
    InvalidDigits(Base),

    /// The stored value has no leading digit run in the selected base.
    ///
    /// This happens after switching bases with a value typed for another
    /// base, e.g. `FF` typed as hexadecimal and then read as decimal.
    #[error("Invalid input for selected number system")]
    NotANumber,

    /// The parsed magnitude exceeds [`MAX_MAGNITUDE`](crate::MAX_MAGNITUDE).
    #[error("Number exceeds the supported range")]
    OutOfRange,

    /// A base name that is not one of the four supported bases.
    #[error("unknown number base: {0:?}")]
    UnknownBase(String),
}

/// A specialized [`Result`] type for numsys operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_digits_names_the_base() {
        assert_eq!(
            Error::InvalidDigits(Base::Decimal).to_string(),
            "Invalid decimal number"
        );
        assert_eq!(
            Error::InvalidDigits(Base::Hexadecimal).to_string(),
            "Invalid hexadecimal number"
        );
    }

    #[test]
    fn conversion_messages() {
        assert_eq!(
            Error::NotANumber.to_string(),
            "Invalid input for selected number system"
        );
        assert_eq!(
            Error::OutOfRange.to_string(),
            "Number exceeds the supported range"
        );
    }
}
