#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! # numsys
//!
//! Validation and conversion of integers between binary, decimal,
//! hexadecimal and octal.
//!
//! The crate is the logic behind a number-base converter surface:
//!
//! - [`validate`] decides whether typed input belongs to a base's digit set
//! - [`try_convert`] renders a value in all four bases at once
//! - [`Session`] holds the selected base, stored input, error and results of
//!   one surface and routes keystrokes through both
//!
//! ## Example
//!
//! ```rust
//! use numsys::{Base, Session};
//!
//! let mut session = Session::with_base(Base::Binary);
//! assert!(session.input("1010"));
//! assert_eq!(session.results().hexadecimal, "A");
//!
//! // A keystroke outside the digit set is rejected and the value kept.
//! assert!(!session.input("10102"));
//! assert_eq!(session.value(), "1010");
//! assert_eq!(session.error_message().as_deref(), Some("Invalid binary number"));
//! ```
//!
//! ## Numeric domain
//!
//! Magnitudes up to [`MAX_MAGNITUDE`] (2^53 - 1) are supported. Larger input
//! passes validation but fails conversion with [`Error::OutOfRange`].
//!
//! ## Feature flags
//!
//! - `serde` (default): `Serialize`/`Deserialize` for [`Base`] and
//!   [`ConversionResult`]

pub mod base;
pub mod convert;
pub mod error;
pub mod session;
pub mod validate;

pub use base::Base;
pub use convert::{ConversionResult, MAX_MAGNITUDE, format_radix, parse_leading, try_convert};
pub use error::{Error, Result};
pub use session::Session;
pub use validate::{check, validate};
