//! Theme preference persistence.
//!
//! The site remembers one flag: light or dark. The preference lives as a
//! small JSON file in the user config directory; a missing file means the
//! default (dark).

use folio_common::Result;
use folio_render::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Serialize, Deserialize)]
struct ThemePref {
    theme: Theme,
}

/// File-backed theme preference store.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    /// Create a store at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ThemeStore { path: path.into() }
    }

    /// Store at the conventional user config location
    /// (`<config dir>/folio/theme.json`).
    pub fn default_location() -> Option<Self> {
        dirs::config_dir().map(|dir| ThemeStore::new(dir.join("folio").join("theme.json")))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved preference; a missing file yields the default theme.
    pub fn load(&self) -> Result<Theme> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let pref: ThemePref = serde_json::from_str(&contents)?;
                Ok(pref.theme)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no saved theme, using default");
                Ok(Theme::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Persist a preference, creating parent directories as needed.
    pub fn save(&self, theme: Theme) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&ThemePref { theme })?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), %theme, "theme saved");
        Ok(())
    }

    /// Flip the saved preference and return the new theme.
    pub fn toggle(&self) -> Result<Theme> {
        let next = self.load()?.toggled();
        self.save(next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> ThemeStore {
        ThemeStore::new(dir.path().join("nested").join("theme.json"))
    }

    #[test]
    fn test_missing_file_defaults_to_dark() {
        let dir = TempDir::new().unwrap();
        assert_eq!(store(&dir).load().unwrap(), Theme::Dark);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.save(Theme::Light).unwrap();
        assert_eq!(store.load().unwrap(), Theme::Light);
    }

    #[test]
    fn test_toggle_flips_twice() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        assert_eq!(store.toggle().unwrap(), Theme::Light);
        assert_eq!(store.toggle().unwrap(), Theme::Dark);
        assert_eq!(store.load().unwrap(), Theme::Dark);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "not json").unwrap();
        assert!(store.load().is_err());
    }

    #[test]
    fn test_file_format() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.save(Theme::Light).unwrap();
        let contents = fs::read_to_string(store.path()).unwrap();
        assert!(contents.contains(r#""theme": "light""#));
    }
}
