//! Generator configuration

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory holding the per-country files
    pub output_dir: PathBuf,
    /// Appended to the country code to form each file name
    pub file_suffix: String,
    pub default_count: u32,
    pub max_count: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("phones_output"),
            file_suffix: "_phones.txt".into(),
            default_count: 10,
            max_count: 10_000,
        }
    }
}

impl GeneratorConfig {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config: GeneratorConfig = serde_json::from_str(&json).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: format!("JSON parse error: {}", e),
        })?;
        config.check(path)?;
        Ok(config)
    }

    fn check(&self, path: &Path) -> Result<()> {
        if self.max_count == 0 || self.default_count == 0 || self.default_count > self.max_count {
            return Err(Error::Config {
                path: path.to_path_buf(),
                message: format!(
                    "default_count ({}) must be between 1 and max_count ({})",
                    self.default_count, self.max_count
                ),
            });
        }
        if self.file_suffix.is_empty() {
            return Err(Error::Config {
                path: path.to_path_buf(),
                message: "file_suffix must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Reject counts outside `1..=max_count`.
    pub fn check_count(&self, count: u32) -> Result<u32> {
        if count == 0 || count > self.max_count {
            return Err(Error::InvalidCount {
                count,
                max: self.max_count,
            });
        }
        Ok(count)
    }
}
