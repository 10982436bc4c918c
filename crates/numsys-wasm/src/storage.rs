//! Theme preference persisted in `window.localStorage`.

use numsys_theme::{STORAGE_KEY, Theme, ThemeError, ThemeStore};
use tracing::warn;
use web_sys::{Storage, Window};

use crate::js_error;

/// [`ThemeStore`] backed by the browser's per-origin `localStorage`.
///
/// Storage can be missing (sandboxed iframes, some private modes); every
/// operation then fails with [`ThemeError::Unavailable`].
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    /// Looks up `localStorage` on `window`.
    #[must_use]
    pub fn from_window(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                warn!(error = %js_error(&err), "localStorage is not accessible");
                None
            }
        };
        Self { storage }
    }

    /// Reports whether a backing store was found.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.storage.is_some()
    }

    fn storage(&self) -> Result<&Storage, ThemeError> {
        self.storage
            .as_ref()
            .ok_or_else(|| ThemeError::Unavailable("window.localStorage is not accessible".into()))
    }
}

impl ThemeStore for LocalStorage {
    fn load(&self) -> Result<Option<Theme>, ThemeError> {
        let raw = self
            .storage()?
            .get_item(STORAGE_KEY)
            .map_err(|err| ThemeError::Read(js_error(&err)))?;
        raw.as_deref().map(str::parse::<Theme>).transpose()
    }

    fn save(&mut self, theme: Theme) -> Result<(), ThemeError> {
        self.storage()?
            .set_item(STORAGE_KEY, theme.as_str())
            .map_err(|err| ThemeError::Write(js_error(&err)))
    }

    fn clear(&mut self) -> Result<(), ThemeError> {
        self.storage()?
            .remove_item(STORAGE_KEY)
            .map_err(|err| ThemeError::Write(js_error(&err)))
    }
}
