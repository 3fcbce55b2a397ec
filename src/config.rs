//! Display profiles for the headless toolkit.
//!
//! A [`DisplayProfile`] describes the screen a [`HeadlessToolkit`] pretends
//! to drive: its size, color depth, DPI, initial pointer position and
//! platform.
//!
//! # Configuration Loading
//!
//! Profiles can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use tk_misc::DisplayProfile;
//! use std::path::Path;
//!
//! // Load from file
//! let profile = DisplayProfile::from_json_file(Path::new("display.json"))?;
//!
//! // Or use defaults
//! let profile = DisplayProfile::default_desktop();
//! # Ok::<(), tk_misc::MiscError>(())
//! ```
//!
//! [`HeadlessToolkit`]: crate::HeadlessToolkit

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::toolkit::Platform;
use crate::{MiscError, Result};

/// Screen characteristics reported by the headless toolkit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayProfile {
    /// Width in pixels
    pub width: i64,

    /// Height in pixels
    pub height: i64,

    /// Color depth in bits per pixel
    pub depth: i64,

    /// Pixels per inch
    pub dpi: f64,

    /// Initial pointer position
    #[serde(default)]
    pub pointer: (i64, i64),

    /// Platform to report; detected at runtime when absent
    #[serde(default)]
    pub platform: Option<Platform>,
}

impl Default for DisplayProfile {
    fn default() -> Self {
        Self::default_desktop()
    }
}

impl DisplayProfile {
    /// Full HD true-color display at 96 dpi
    pub fn default_desktop() -> Self {
        Self {
            width: 1920,
            height: 1080,
            depth: 24,
            dpi: 96.0,
            pointer: (0, 0),
            platform: None,
        }
    }

    /// Platform to report, falling back to the running one
    pub fn platform(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::current)
    }

    /// Load a profile from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| MiscError::config(format!("cannot read {}", path.display()), e))?;
        Self::from_json(&content)
    }

    /// Parse a profile from JSON text
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| MiscError::config("invalid display profile", e))
    }

    /// Save the profile to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| MiscError::config("cannot serialize display profile", e))?;
        std::fs::write(path, json)
            .map_err(|e| MiscError::config(format!("cannot write {}", path.display()), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_desktop() {
        let profile = DisplayProfile::default_desktop();
        assert_eq!((profile.width, profile.height), (1920, 1080));
        assert_eq!(profile.dpi, 96.0);
        assert_eq!(profile.platform(), Platform::current());
    }

    #[test]
    fn test_json_with_defaults() {
        let profile = DisplayProfile::from_json(
            r#"{"width": 1280, "height": 800, "depth": 30, "dpi": 110.0, "platform": "Windows"}"#,
        )
        .unwrap();
        assert_eq!(profile.pointer, (0, 0));
        assert_eq!(profile.platform(), Platform::Windows);
    }

    #[test]
    fn test_invalid_json() {
        let err = DisplayProfile::from_json("{\"width\": \"wide\"}").unwrap_err();
        assert!(matches!(err, MiscError::Config { .. }));
    }

    #[test]
    fn test_file_roundtrip() {
        let path = std::env::temp_dir().join(format!("tk_misc_profile_{}.json", std::process::id()));
        let profile = DisplayProfile {
            pointer: (10, 20),
            platform: Some(Platform::MacOs),
            ..DisplayProfile::default_desktop()
        };

        profile.to_json_file(&path).unwrap();
        let loaded = DisplayProfile::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, profile);
    }

    #[test]
    fn test_missing_file() {
        let err = DisplayProfile::from_json_file(Path::new("/nonexistent/display.json")).unwrap_err();
        assert!(matches!(err, MiscError::Config { .. }));
    }
}
