//! Patch definition files
//!
//! A patch file bundles a target path, the expected and replacement text, and
//! an optional replace mode:
//!
//! ```yaml
//! target: index/template.yaml
//! expected: |
//!   old text
//! replacement: |
//!   new text
//! mode: first
//! ```
//!
//! Relative targets resolve against the directory containing the patch file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{self, Result, TextpatchError};
use crate::patch::ReplaceMode;

/// Patch definition loaded from YAML
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PatchFile {
    /// File to patch
    pub target: PathBuf,

    /// Text that must be present in the target
    pub expected: String,

    /// Text substituted for `expected`
    pub replacement: String,

    #[serde(default)]
    pub mode: ReplaceMode,

    #[serde(default)]
    pub description: Option<String>,
}

impl PatchFile {
    /// Parse a patch definition from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load a patch definition, resolving a relative target against the
    /// patch file's directory
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path).map_err(|e| error::config::read_failed(path, &e))?;
        let mut config = Self::from_yaml(&yaml).map_err(|e| match e {
            TextpatchError::ConfigParseFailed { reason, .. } => {
                error::config::parse_failed(path, reason)
            }
            other => other,
        })?;

        if config.target.is_relative() {
            if let Some(base) = path.parent() {
                config.target = base.join(&config.target);
            }
        }

        Ok(config)
    }
}

/// Read a literal from a file verbatim
pub fn read_literal(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| error::config::read_failed(path, &e))
}
