//! On-disk preferences: the theme flag and the demo storage value.
//!
//! Stored as JSON at `$CAPDECK_PREFS` if set, else
//! `$HOME/.config/capdeck/prefs.json`. A missing file loads as defaults;
//! a corrupt one is an error the caller decides how to handle.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prefs {
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default)]
    pub demo_value: String,
}

/// Error while loading or saving preferences.
#[derive(Debug)]
pub struct PrefsError {
    pub message: String,
}

impl std::fmt::Display for PrefsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Prefs {
    /// Load preferences, treating a missing file as first run.
    pub fn load(path: &Path) -> Result<Self, PrefsError> {
        if !path.exists() {
            log::debug!("No preferences at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path).map_err(|e| PrefsError {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;
        serde_json::from_str(&raw).map_err(|e| PrefsError {
            message: format!("Malformed preferences {}: {}", path.display(), e),
        })
    }

    /// Persist preferences, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), PrefsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| PrefsError {
                message: format!("Failed to create {}: {}", parent.display(), e),
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| PrefsError {
            message: format!("Failed to encode preferences: {}", e),
        })?;
        fs::write(path, json).map_err(|e| PrefsError {
            message: format!("Failed to write {}: {}", path.display(), e),
        })?;

        log::debug!("Preferences saved to {}", path.display());
        Ok(())
    }
}

/// Resolve where preferences live for this process.
pub fn default_path() -> PathBuf {
    if let Some(explicit) = std::env::var_os("CAPDECK_PREFS") {
        return PathBuf::from(explicit);
    }
    if let Some(home) = std::env::var_os("HOME") {
        return PathBuf::from(home)
            .join(".config")
            .join("capdeck")
            .join("prefs.json");
    }
    // Last resort: alongside the working directory.
    PathBuf::from("capdeck-prefs.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_prefs_path(tag: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("capdeck-test-{}", std::process::id()))
            .join(tag)
            .join("prefs.json")
    }

    #[test]
    fn missing_file_loads_defaults() {
        let path = temp_prefs_path("missing");
        let prefs = Prefs::load(&path).unwrap();
        assert_eq!(prefs, Prefs::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = temp_prefs_path("roundtrip");
        let prefs = Prefs {
            dark_mode: true,
            demo_value: "hello deck".to_string(),
        };
        prefs.save(&path).unwrap();

        let loaded = Prefs::load(&path).unwrap();
        assert_eq!(loaded, prefs);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let path = temp_prefs_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{not json").unwrap();

        assert!(Prefs::load(&path).is_err());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let path = temp_prefs_path("partial");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"dark_mode": true}"#).unwrap();

        let prefs = Prefs::load(&path).unwrap();
        assert!(prefs.dark_mode);
        assert!(prefs.demo_value.is_empty());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
