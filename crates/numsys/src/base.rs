//! The closed set of supported number bases.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A positional number system supported by the converter.
///
/// Each base maps to a numeric radix, a lowercase name used in messages
/// (`"hexadecimal"`), and a capitalized label used in selectors and result
/// boxes (`"Hexadecimal"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Base {
    Binary,
    #[default]
    Decimal,
    Hexadecimal,
    Octal,
}

impl Base {
    /// All bases in selector order: Decimal, Binary, Hexadecimal, Octal.
    pub const ALL: [Self; 4] = [Self::Decimal, Self::Binary, Self::Hexadecimal, Self::Octal];

    /// Returns the numeric radix.
    #[must_use]
    pub const fn radix(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
            Self::Octal => 8,
        }
    }

    /// Returns the lowercase name, e.g. `"binary"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Decimal => "decimal",
            Self::Hexadecimal => "hexadecimal",
            Self::Octal => "octal",
        }
    }

    /// Returns the display label, e.g. `"Binary"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Binary => "Binary",
            Self::Decimal => "Decimal",
            Self::Hexadecimal => "Hexadecimal",
            Self::Octal => "Octal",
        }
    }

    /// Returns the input placeholder, e.g. `"Enter octal number"`.
    #[must_use]
    pub fn placeholder(self) -> String {
        format!("Enter {} number", self.name())
    }

    /// Reports whether `c` is a digit of this base.
    ///
    /// Hexadecimal accepts both `a-f` and `A-F`.
    #[must_use]
    pub fn is_digit(self, c: char) -> bool {
        c.is_digit(self.radix())
    }

    /// Returns the next base in selector order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Decimal => Self::Binary,
            Self::Binary => Self::Hexadecimal,
            Self::Hexadecimal => Self::Octal,
            Self::Octal => Self::Decimal,
        }
    }

    /// Returns the previous base in selector order, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Decimal => Self::Octal,
            Self::Binary => Self::Decimal,
            Self::Hexadecimal => Self::Binary,
            Self::Octal => Self::Hexadecimal,
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Base {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" | "bin" | "b" | "2" => Ok(Self::Binary),
            "decimal" | "dec" | "d" | "10" => Ok(Self::Decimal),
            "hexadecimal" | "hex" | "h" | "x" | "16" => Ok(Self::Hexadecimal),
            "octal" | "oct" | "o" | "8" => Ok(Self::Octal),
            _ => Err(Error::UnknownBase(s.to_string())),
        }
    }
}
