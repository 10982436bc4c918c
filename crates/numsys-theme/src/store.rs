//! Durable storage of the explicit theme preference.

use crate::error::ThemeError;
use crate::theme::Theme;

/// A key-value store holding the explicit theme preference.
///
/// Implementations store the value under [`STORAGE_KEY`](crate::STORAGE_KEY)
/// as `"light"` or `"dark"`. An absent key means the user never chose.
pub trait ThemeStore {
    /// Reads the persisted preference.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownTheme`] for an unrecognized value, or a
    /// backend error.
    fn load(&self) -> Result<Option<Theme>, ThemeError>;

    /// Persists `theme` as the explicit preference.
    ///
    /// # Errors
    ///
    /// Returns a backend error when the value cannot be written.
    fn save(&mut self, theme: Theme) -> Result<(), ThemeError>;

    /// Removes the explicit preference.
    ///
    /// # Errors
    ///
    /// Returns a backend error when the value cannot be removed.
    fn clear(&mut self) -> Result<(), ThemeError>;
}

/// In-memory store holding the raw persisted string.
///
/// Useful for tests and for surfaces without durable storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    raw: Option<String>,
}

impl MemoryStore {
    /// Creates an empty store (no explicit preference).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `theme`.
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self::with_raw(theme.as_str())
    }

    /// Creates a store holding an arbitrary raw value.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    /// Returns the raw stored value.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self) -> Result<Option<Theme>, ThemeError> {
        self.raw.as_deref().map(str::parse::<Theme>).transpose()
    }

    fn save(&mut self, theme: Theme) -> Result<(), ThemeError> {
        self.raw = Some(theme.as_str().to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), ThemeError> {
        self.raw = None;
        Ok(())
    }
}
