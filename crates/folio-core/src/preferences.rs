//! Persisted user preferences
//!
//! The only preference today is the light/dark theme. It is stored as a small
//! TOML file in the data directory and read once at startup.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Result;

/// Two-valued theme preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme mode '{}', expected 'light' or 'dark'", other)),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PreferencesFile {
    #[serde(default)]
    theme: Option<ThemeMode>,
}

/// Handle to the preferences file
#[derive(Debug, Clone)]
pub struct Preferences {
    path: PathBuf,
    theme: Option<ThemeMode>,
}

impl Preferences {
    /// Load preferences from `path`; a missing file yields empty preferences
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            toml::from_str::<PreferencesFile>(&content)?
        } else {
            PreferencesFile::default()
        };

        debug!("Loaded preferences from {}", path.display());

        Ok(Self {
            path,
            theme: file.theme,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saved theme, if the user ever chose one
    pub fn theme(&self) -> Option<ThemeMode> {
        self.theme
    }

    /// Saved theme or the given default
    pub fn theme_or(&self, default: ThemeMode) -> ThemeMode {
        self.theme.unwrap_or(default)
    }

    /// Set and persist the theme
    pub fn set_theme(&mut self, mode: ThemeMode) -> Result<()> {
        self.theme = Some(mode);
        self.save()
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = PreferencesFile { theme: self.theme };
        let content = toml::to_string(&file).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("Light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert_eq!(" dark ".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert!("blue".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::load(dir.path().join("preferences.toml")).unwrap();
        assert_eq!(prefs.theme(), None);
        assert_eq!(prefs.theme_or(ThemeMode::Dark), ThemeMode::Dark);
    }

    #[test]
    fn test_set_theme_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("preferences.toml");

        let mut prefs = Preferences::load(&path).unwrap();
        prefs.set_theme(ThemeMode::Light).unwrap();

        let reloaded = Preferences::load(&path).unwrap();
        assert_eq!(reloaded.theme(), Some(ThemeMode::Light));
    }
}
