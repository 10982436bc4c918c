//! Errors raised by theme stores.

/// Failure reading, writing or interpreting the persisted preference.
///
/// None of these are fatal to a [`ThemeController`](crate::ThemeController):
/// a failed read counts as "no explicit preference" and a failed write still
/// changes the in-memory theme.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// The stored value is neither `"light"` nor `"dark"`.
    #[error("unknown theme {0:?}, expected \"light\" or \"dark\"")]
    UnknownTheme(String),

    /// The backing store cannot be reached at all.
    #[error("theme storage unavailable: {0}")]
    Unavailable(String),

    /// Reading the preference failed.
    #[error("failed to read theme preference: {0}")]
    Read(String),

    /// Writing or removing the preference failed.
    #[error("failed to write theme preference: {0}")]
    Write(String),
}
