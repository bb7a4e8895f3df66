use serde::{Deserialize, Serialize};
use std::path::Path;

use super::consts::CONFIG_FILE_NAME;
use crate::error::{FilemergeError, Result};

/// filemerge.toml schema
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub merge: MergeDefaults,
}

/// `[merge]` table; every key is optional and overridden by CLI flags
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MergeDefaults {
    /// Delimiter, escape tokens (`\t`) allowed
    #[serde(default)]
    pub delimiter: Option<String>,
    #[serde(default)]
    pub no_headers: Option<bool>,
    #[serde(default)]
    pub file_template: Option<String>,
    #[serde(default)]
    pub chunk: Option<bool>,
    #[serde(default)]
    pub chunk_name: Option<String>,
    #[serde(default)]
    pub extension: Option<String>,
}

impl Config {
    /// Read and parse a config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| FilemergeError::io(path, e))?;

        toml::from_str(&content).map_err(|e| FilemergeError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load `explicit` if given, else `filemerge.toml` in `dir` if present
    ///
    /// An explicit path must exist; the implicit file is optional.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let implicit = dir.join(CONFIG_FILE_NAME);
        if implicit.is_file() {
            log::debug!("Using config {}", implicit.display());
            Self::from_file(implicit)
        } else {
            Ok(Self::default())
        }
    }
}
