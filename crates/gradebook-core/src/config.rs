//! Store configuration for gradebook
//!
//! Configuration lives in `.gradebook/config.toml`. A missing file or missing
//! keys fall back to defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GradebookError, Result};
use crate::grading::NO_GRADE_MARKER;

/// Current store format version
pub const STORE_FORMAT_VERSION: u32 = 1;

/// Store configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Presentation settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// How grades are presented to users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Shown in place of an enrollment that has no grade yet
    #[serde(default = "default_no_grade_marker")]
    pub no_grade_marker: String,

    /// Decimal places for GPA in human output
    #[serde(default = "default_gpa_decimals")]
    pub gpa_decimals: usize,
}

fn default_version() -> u32 {
    STORE_FORMAT_VERSION
}

fn default_no_grade_marker() -> String {
    NO_GRADE_MARKER.to_string()
}

fn default_gpa_decimals() -> usize {
    2
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            version: STORE_FORMAT_VERSION,
            display: DisplayConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            no_grade_marker: default_no_grade_marker(),
            gpa_decimals: default_gpa_decimals(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: StoreConfig = toml::from_str(&content)?;

        if config.version > STORE_FORMAT_VERSION {
            return Err(GradebookError::InvalidStore {
                reason: format!(
                    "store format version {} is newer than supported version {}",
                    config.version, STORE_FORMAT_VERSION
                ),
            });
        }

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GradebookError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Text to show for an optional stored grade
    pub fn display_grade<'a>(&'a self, grade: Option<&'a str>) -> &'a str {
        grade.unwrap_or(self.display.no_grade_marker.as_str())
    }
}
