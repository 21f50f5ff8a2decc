//! Theme preference: a light/dark toggle persisted across sessions.
//!
//! Pure side-effecting component with no game-logic coupling. The
//! [`ThemeStore`] trait is the persistence seam: the file store keeps a
//! single small file under the platform config dir, and the in-memory store
//! backs tests and headless adapters. The preference is read once at
//! startup and written on every toggle.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The two display modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Persisted string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = ThemeStoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeStoreError::UnknownTheme(other.to_string())),
        }
    }
}

/// Failure to read or write the persisted preference.
#[derive(Debug, Error)]
pub enum ThemeStoreError {
    #[error("failed to access theme preference: {0}")]
    Io(#[from] io::Error),

    #[error("no config directory available on this platform")]
    NoConfigDir,

    #[error("unknown theme {0:?}")]
    UnknownTheme(String),
}

/// Persistence seam for the theme preference.
///
/// `load` returns `Ok(None)` when no preference has been saved yet; callers
/// fall back to [`Theme::default`].
pub trait ThemeStore {
    fn load(&self) -> Result<Option<Theme>, ThemeStoreError>;
    fn save(&self, theme: Theme) -> Result<(), ThemeStoreError>;
}

/// File-backed store: one word in one file under the config dir.
#[derive(Clone, Debug)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    /// Store backed by an explicit file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform default location.
    pub fn at_default_path() -> Result<Self, ThemeStoreError> {
        let base = dirs::config_dir().ok_or(ThemeStoreError::NoConfigDir)?;
        Ok(Self::new(base.join("termflip").join("theme")))
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Result<Option<Theme>, ThemeStoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        match raw.trim().parse::<Theme>() {
            Ok(theme) => Ok(Some(theme)),
            Err(_) => {
                // A corrupt file is treated as unset rather than an error.
                log::warn!("ignoring unrecognized theme preference {:?}", raw.trim());
                Ok(None)
            }
        }
    }

    fn save(&self, theme: Theme) -> Result<(), ThemeStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, theme.as_str())?;
        Ok(())
    }
}

/// In-memory store with shared interior, so a clone held by a test observes
/// writes made through the session - a simulated restart reads the same
/// store a previous manager wrote.
#[derive(Clone, Debug, Default)]
pub struct MemoryThemeStore {
    saved: Arc<Mutex<Option<Theme>>>,
}

impl MemoryThemeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<Theme>, ThemeStoreError> {
        let guard = self.saved.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(*guard)
    }

    fn save(&self, theme: Theme) -> Result<(), ThemeStoreError> {
        let mut guard = self.saved.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(theme);
        Ok(())
    }
}

/// Owns the current theme and persists every toggle immediately.
pub struct ThemeManager {
    current: Theme,
    store: Box<dyn ThemeStore>,
}

impl ThemeManager {
    /// Load the persisted preference, defaulting to light when unset.
    ///
    /// A failing load never blocks startup; it logs and falls back.
    pub fn load_or_default(store: impl ThemeStore + 'static) -> Self {
        let current = match store.load() {
            Ok(Some(theme)) => theme,
            Ok(None) => Theme::default(),
            Err(err) => {
                log::warn!("failed to load theme preference: {err}");
                Theme::default()
            }
        };
        Self {
            current,
            store: Box::new(store),
        }
    }

    /// The active theme.
    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Switch modes and persist the new preference.
    pub fn toggle(&mut self) -> Result<Theme, ThemeStoreError> {
        self.current = self.current.toggled();
        self.store.save(self.current)?;
        Ok(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_returns_to_original() {
        let mut manager = ThemeManager::load_or_default(MemoryThemeStore::new());
        let original = manager.current();

        manager.toggle().unwrap();
        assert_ne!(manager.current(), original);
        manager.toggle().unwrap();
        assert_eq!(manager.current(), original);
    }

    #[test]
    fn test_default_is_light_when_unset() {
        let manager = ThemeManager::load_or_default(MemoryThemeStore::new());
        assert_eq!(manager.current(), Theme::Light);
    }

    #[test]
    fn test_persists_across_simulated_restart() {
        let store = MemoryThemeStore::new();

        let mut manager = ThemeManager::load_or_default(store.clone());
        manager.toggle().unwrap();
        assert_eq!(manager.current(), Theme::Dark);
        drop(manager);

        let reloaded = ThemeManager::load_or_default(store);
        assert_eq!(reloaded.current(), Theme::Dark);
    }

    #[test]
    fn test_theme_string_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.as_str().parse::<Theme>().unwrap(), theme);
        }
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileThemeStore::new(dir.path().join("prefs").join("theme"));

        assert_eq!(store.load().unwrap(), None);
        store.save(Theme::Dark).unwrap();
        assert_eq!(store.load().unwrap(), Some(Theme::Dark));
    }

    #[test]
    fn test_file_store_ignores_corrupt_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme");
        std::fs::write(&path, "solarized").unwrap();

        let store = FileThemeStore::new(path);
        assert_eq!(store.load().unwrap(), None);
    }
}
