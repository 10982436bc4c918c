//! Settings file and the theme store backed by it.
//!
//! Settings live in the platform config directory:
//! - Linux: `~/.config/numsys/settings.toml`
//! - macOS: `~/Library/Application Support/numsys/settings.toml`
//! - Windows: `%APPDATA%\numsys\config\settings.toml`

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use numsys_theme::{Theme, ThemeError, ThemeStore};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

const APP_QUALIFIER: &str = "";
const APP_ORG: &str = "";
const APP_NAME: &str = "numsys";
const CONFIG_FILENAME: &str = "settings.toml";

/// Contents of `settings.toml`.
///
/// The theme is kept as written so that an unrecognized value reads as "no
/// preference" instead of making the whole file unreadable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl Settings {
    /// Reads settings from `path`. A missing file yields the defaults.
    pub fn read(path: &Path) -> Result<Self, ThemeError> {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content)
                .map_err(|e| ThemeError::Read(format!("{}: {e}", path.display()))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No settings file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(ThemeError::Read(format!("{}: {e}", path.display()))),
        }
    }

    /// Writes settings to `path`, creating the parent directory if needed.
    pub fn write(&self, path: &Path) -> Result<(), ThemeError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| ThemeError::Write(format!("{}: {e}", parent.display())))?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| ThemeError::Write(e.to_string()))?;
        fs::write(path, content)
            .map_err(|e| ThemeError::Write(format!("{}: {e}", path.display())))?;
        info!(path = %path.display(), "Saved settings");
        Ok(())
    }
}

/// Default location of the settings file.
///
/// Returns `None` if the platform config directory cannot be determined.
pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Theme preference persisted in a settings file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn update(&self, theme: Option<Theme>) -> Result<(), ThemeError> {
        // Rewrite from scratch if the existing file is unreadable.
        let mut settings = Settings::read(&self.path).unwrap_or_default();
        settings.theme = theme.map(|t| t.as_str().to_string());
        settings.write(&self.path)
    }
}

impl ThemeStore for FileStore {
    fn load(&self) -> Result<Option<Theme>, ThemeError> {
        Settings::read(&self.path)?
            .theme
            .as_deref()
            .map(str::parse::<Theme>)
            .transpose()
    }

    fn save(&mut self, theme: Theme) -> Result<(), ThemeError> {
        self.update(Some(theme))
    }

    fn clear(&mut self) -> Result<(), ThemeError> {
        if !self.path.exists() {
            return Ok(());
        }
        self.update(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_has_no_preference() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("settings.toml"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn save_creates_parent_and_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.toml");
        let mut store = FileStore::new(&path);

        store.save(Theme::Dark).unwrap();
        assert_eq!(store.load().unwrap(), Some(Theme::Dark));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("theme = \"dark\""));
    }

    #[test]
    fn clear_removes_the_key() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("settings.toml"));
        store.save(Theme::Light).unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn clear_without_file_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        let mut store = FileStore::new(&path);
        store.clear().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn unknown_value_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "theme = \"blue\"\n").unwrap();
        let store = FileStore::new(&path);
        assert_eq!(
            store.load().unwrap_err(),
            ThemeError::UnknownTheme("blue".into())
        );
    }

    #[test]
    fn malformed_file_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "theme = ").unwrap();
        let store = FileStore::new(&path);
        assert!(matches!(store.load(), Err(ThemeError::Read(_))));
    }

    #[test]
    fn default_settings_serialize_empty() {
        let content = toml::to_string_pretty(&Settings::default()).unwrap();
        assert!(content.trim().is_empty());
    }
}
