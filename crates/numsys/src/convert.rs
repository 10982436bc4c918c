//! Conversion of a typed value into all four bases.
//!
//! Parsing reads the leading digit run of the input: surrounding whitespace is
//! ignored, an optional sign is accepted, hexadecimal input may carry a `0x`
//! prefix, and the numeral ends at the first character that is not a digit of
//! the base. The parsed magnitude is bounded by [`MAX_MAGNITUDE`].

use tracing::debug;

use crate::base::Base;
use crate::error::{Error, Result};

/// Largest magnitude accepted by the converter: 2^53 - 1.
///
/// Every integer up to this bound survives a round trip through an IEEE 754
/// double, which keeps results identical to what a browser computes.
pub const MAX_MAGNITUDE: u64 = (1 << 53) - 1;

/// One integer rendered in every supported base.
///
/// Either all four fields are empty (no input yet, or a failed conversion),
/// or all four denote the same integer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConversionResult {
    pub decimal: String,
    pub binary: String,
    pub hexadecimal: String,
    pub octal: String,
}

impl ConversionResult {
    /// Creates an all-empty result.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Renders `value` in every base.
    #[must_use]
    pub fn from_value(value: i64) -> Self {
        Self {
            decimal: format_radix(value, Base::Decimal),
            binary: format_radix(value, Base::Binary),
            hexadecimal: format_radix(value, Base::Hexadecimal),
            octal: format_radix(value, Base::Octal),
        }
    }

    /// Returns `true` when no representation is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decimal.is_empty()
            && self.binary.is_empty()
            && self.hexadecimal.is_empty()
            && self.octal.is_empty()
    }

    /// Returns the representation for `base`.
    #[must_use]
    pub fn get(&self, base: Base) -> &str {
        match base {
            Base::Binary => &self.binary,
            Base::Decimal => &self.decimal,
            Base::Hexadecimal => &self.hexadecimal,
            Base::Octal => &self.octal,
        }
    }

    /// Returns the text a result box shows for `base`: the value, or `"0"`
    /// when empty.
    #[must_use]
    pub fn display(&self, base: Base) -> &str {
        match self.get(base) {
            "" => "0",
            value => value,
        }
    }

    /// Iterates `(base, representation)` pairs in selector order.
    pub fn iter(&self) -> impl Iterator<Item = (Base, &str)> {
        Base::ALL.into_iter().map(move |base| (base, self.get(base)))
    }
}

/// Parses the leading digit run of `value` in `base`.
///
/// # Errors
///
/// Returns [`Error::NotANumber`] when no digit of `base` follows the optional
/// sign and prefix, and [`Error::OutOfRange`] when the magnitude exceeds
/// [`MAX_MAGNITUDE`].
///
/// # Example
///
/// ```rust
/// use numsys::{parse_leading, Base, Error};
///
/// assert_eq!(parse_leading("ff", Base::Hexadecimal), Ok(255));
/// assert_eq!(parse_leading("19", Base::Binary), Ok(1));
/// assert_eq!(parse_leading("FF", Base::Decimal), Err(Error::NotANumber));
/// ```
pub fn parse_leading(value: &str, base: Base) -> Result<i64> {
    let trimmed = value.trim();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = match base {
        Base::Hexadecimal => unsigned
            .strip_prefix("0x")
            .or_else(|| unsigned.strip_prefix("0X"))
            .unwrap_or(unsigned),
        _ => unsigned,
    };

    let radix = u64::from(base.radix());
    let mut magnitude: u64 = 0;
    let mut seen_digit = false;
    for digit in digits.chars().map_while(|c| c.to_digit(base.radix())) {
        seen_digit = true;
        magnitude = magnitude * radix + u64::from(digit);
        if magnitude > MAX_MAGNITUDE {
            return Err(Error::OutOfRange);
        }
    }

    if !seen_digit {
        return Err(Error::NotANumber);
    }

    // MAX_MAGNITUDE < i64::MAX, so the cast is lossless.
    #[allow(clippy::cast_possible_wrap)]
    let magnitude = magnitude as i64;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Formats `value` as digits of `base`.
///
/// Hexadecimal uses uppercase letters. There are no leading zeros and no radix
/// prefix; negative values carry a leading `-`.
#[must_use]
pub fn format_radix(value: i64, base: Base) -> String {
    let magnitude = value.unsigned_abs();
    let digits = match base {
        Base::Binary => format!("{magnitude:b}"),
        Base::Decimal => magnitude.to_string(),
        Base::Hexadecimal => format!("{magnitude:X}"),
        Base::Octal => format!("{magnitude:o}"),
    };
    if value < 0 {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Converts `value`, read in base `from`, into all four bases.
///
/// The empty string converts to an all-empty result.
///
/// # Errors
///
/// Propagates the errors of [`parse_leading`].
///
/// # Example
///
/// ```rust
/// use numsys::{try_convert, Base};
///
/// let result = try_convert("FF", Base::Hexadecimal).unwrap();
/// assert_eq!(result.decimal, "255");
/// assert_eq!(result.binary, "11111111");
/// assert_eq!(result.octal, "377");
/// ```
pub fn try_convert(value: &str, from: Base) -> Result<ConversionResult> {
    if value.is_empty() {
        return Ok(ConversionResult::empty());
    }

    match parse_leading(value, from) {
        Ok(n) => Ok(ConversionResult::from_value(n)),
        Err(err) => {
            debug!(numsys.base = %from, numsys.value = value, error = %err, "Conversion failed");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(decimal: &str, binary: &str, hexadecimal: &str, octal: &str) -> ConversionResult {
        ConversionResult {
            decimal: decimal.into(),
            binary: binary.into(),
            hexadecimal: hexadecimal.into(),
            octal: octal.into(),
        }
    }

    #[test]
    fn empty_value_converts_to_empty_result() {
        for base in Base::ALL {
            let converted = try_convert("", base).unwrap();
            assert!(converted.is_empty());
        }
    }

    #[test]
    fn hex_ff() {
        assert_eq!(
            try_convert("FF", Base::Hexadecimal).unwrap(),
            result("255", "11111111", "FF", "377")
        );
    }

    #[test]
    fn binary_1010() {
        assert_eq!(
            try_convert("1010", Base::Binary).unwrap(),
            result("10", "1010", "A", "12")
        );
    }

    #[test]
    fn lowercase_hex_is_rendered_uppercase() {
        let converted = try_convert("beef", Base::Hexadecimal).unwrap();
        assert_eq!(converted.hexadecimal, "BEEF");
        assert_eq!(converted.decimal, "48879");
    }

    #[test]
    fn leading_zeros_are_dropped() {
        assert_eq!(
            try_convert("0007", Base::Octal).unwrap(),
            result("7", "111", "7", "7")
        );
        assert_eq!(
            try_convert("000", Base::Decimal).unwrap(),
            result("0", "0", "0", "0")
        );
    }

    #[test]
    fn leading_digit_run_stops_at_foreign_character() {
        assert_eq!(parse_leading("19", Base::Binary), Ok(1));
        assert_eq!(parse_leading("778", Base::Octal), Ok(63));
        assert_eq!(parse_leading("12ab", Base::Decimal), Ok(12));
    }

    #[test]
    fn no_leading_digit_is_not_a_number() {
        assert_eq!(parse_leading("FF", Base::Decimal), Err(Error::NotANumber));
        assert_eq!(parse_leading("9", Base::Octal), Err(Error::NotANumber));
        assert_eq!(parse_leading("-", Base::Decimal), Err(Error::NotANumber));
        assert_eq!(parse_leading("   ", Base::Binary), Err(Error::NotANumber));
        assert_eq!(parse_leading("0x", Base::Hexadecimal), Err(Error::NotANumber));
    }

    #[test]
    fn whitespace_sign_and_prefix() {
        assert_eq!(parse_leading("  42 ", Base::Decimal), Ok(42));
        assert_eq!(parse_leading("+42", Base::Decimal), Ok(42));
        assert_eq!(parse_leading("-42", Base::Decimal), Ok(-42));
        assert_eq!(parse_leading("0x1f", Base::Hexadecimal), Ok(31));
        assert_eq!(parse_leading("-0X10", Base::Hexadecimal), Ok(-16));
        // The prefix is only meaningful for hexadecimal.
        assert_eq!(parse_leading("0x10", Base::Decimal), Ok(0));
    }

    #[test]
    fn negative_values_format_with_sign() {
        assert_eq!(
            ConversionResult::from_value(-10),
            result("-10", "-1010", "-A", "-12")
        );
        assert_eq!(format_radix(0, Base::Binary), "0");
    }

    #[test]
    fn magnitude_bound() {
        let max = MAX_MAGNITUDE.to_string();
        let converted = try_convert(&max, Base::Decimal).unwrap();
        assert_eq!(converted.hexadecimal, "1FFFFFFFFFFFFF");
        assert_eq!(converted.binary, "1".repeat(53));

        assert_eq!(
            try_convert("9007199254740992", Base::Decimal),
            Err(Error::OutOfRange)
        );
        assert_eq!(
            try_convert("20000000000000", Base::Hexadecimal),
            Err(Error::OutOfRange)
        );
        assert_eq!(
            try_convert(&"1".repeat(200), Base::Binary),
            Err(Error::OutOfRange)
        );
    }

    #[test]
    fn display_falls_back_to_zero() {
        let empty = ConversionResult::empty();
        assert_eq!(empty.display(Base::Octal), "0");
        let full = ConversionResult::from_value(8);
        assert_eq!(full.display(Base::Octal), "10");
    }

    #[test]
    fn iter_follows_selector_order() {
        let converted = ConversionResult::from_value(255);
        let pairs: Vec<_> = converted.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (Base::Decimal, "255"),
                (Base::Binary, "11111111"),
                (Base::Hexadecimal, "FF"),
                (Base::Octal, "377"),
            ]
        );
    }
}
