//! Configuration types for Skilltree.
//!
//! `SkillTreeConfig` represents the top-level `config.toml`. It only tunes the
//! derived topology view; the skill graph operations take no configuration.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration.
///
/// Loaded from `~/.skilltree/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillTreeConfig {
    #[serde(default)]
    pub topology: TopologyConfig,
}

impl SkillTreeConfig {
    /// Decode a config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read and decode a config file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }
}

/// How topology derivation treats skills and their parent references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyConfig {
    /// What to do with a parent id that does not resolve to a node.
    #[serde(default)]
    pub dangling_parents: DanglingParentPolicy,

    /// Include tombstoned skills as nodes. Off by default, which makes a
    /// reference to a deleted skill dangling.
    #[serde(default)]
    pub include_deleted: bool,
}

/// Handling of parent ids with no matching skill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DanglingParentPolicy {
    /// Drop the edge. A skill whose parents are all dangling becomes a root.
    #[default]
    Ignore,
    /// Fail the derivation.
    Error,
}

impl fmt::Display for DanglingParentPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ignore => write!(f, "ignore"),
            Self::Error => write!(f, "error"),
        }
    }
}
