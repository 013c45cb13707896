//! Configuration loader for Skilltree.
//!
//! Reads `config.toml` from the data directory (`~/.skilltree/` by default)
//! and deserializes it into [`SkillTreeConfig`]. The lenient loader falls back
//! to defaults when the file is missing or malformed; the strict one reports
//! the failure.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use skilltree_types::config::SkillTreeConfig;

/// Name of the config file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "SKILLTREE_DATA_DIR";

/// Resolve the data directory.
///
/// Priority:
/// 1. `SKILLTREE_DATA_DIR` environment variable
/// 2. `~/.skilltree` under the user's home directory
/// 3. `.skilltree` in the current directory
pub fn resolve_data_dir() -> PathBuf {
    data_dir_from(std::env::var_os(DATA_DIR_ENV), dirs::home_dir())
}

fn data_dir_from(env_dir: Option<OsString>, home: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = env_dir.filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }

    if let Some(home) = home {
        return home.join(".skilltree");
    }

    PathBuf::from(".skilltree")
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`SkillTreeConfig::default()`].
/// - If the file cannot be read or parsed, logs a warning and returns the default.
/// - Otherwise returns the parsed config.
pub fn load_config(data_dir: &Path) -> SkillTreeConfig {
    let config_path = data_dir.join(CONFIG_FILE_NAME);

    let content = match std::fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return SkillTreeConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return SkillTreeConfig::default();
        }
    };

    match SkillTreeConfig::from_toml_str(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", config_path.display());
            SkillTreeConfig::default()
        }
    }
}

/// Load configuration from an explicit file, failing on any error.
///
/// The underlying [`ConfigError`](skilltree_types::error::ConfigError) stays reachable through
/// `anyhow::Error::downcast_ref`.
pub fn try_load_config(path: &Path) -> anyhow::Result<SkillTreeConfig> {
    SkillTreeConfig::from_path(path)
        .with_context(|| format!("Failed to load {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use skilltree_types::config::DanglingParentPolicy;
    use skilltree_types::error::ConfigError;
    use tempfile::TempDir;

    #[test]
    fn data_dir_env_override_wins() {
        let dir = data_dir_from(
            Some(OsString::from("/srv/skilltree")),
            Some(PathBuf::from("/home/ada")),
        );
        assert_eq!(dir, PathBuf::from("/srv/skilltree"));
    }

    #[test]
    fn data_dir_falls_back_to_home() {
        let dir = data_dir_from(None, Some(PathBuf::from("/home/ada")));
        assert_eq!(dir, PathBuf::from("/home/ada/.skilltree"));

        let dir = data_dir_from(Some(OsString::new()), Some(PathBuf::from("/home/ada")));
        assert_eq!(dir, PathBuf::from("/home/ada/.skilltree"));
    }

    #[test]
    fn data_dir_last_resort_is_relative() {
        assert_eq!(data_dir_from(None, None), PathBuf::from(".skilltree"));
    }

    #[test]
    fn resolve_data_dir_ends_in_skilltree_without_override() {
        if std::env::var_os(DATA_DIR_ENV).is_none() {
            assert!(resolve_data_dir().ends_with(".skilltree"));
        }
    }

    #[test]
    fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path());
        assert_eq!(config, SkillTreeConfig::default());
    }

    #[test]
    fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            r#"
[topology]
dangling_parents = "error"
include_deleted = true
"#,
        )
        .unwrap();

        let config = load_config(tmp.path());
        assert_eq!(config.topology.dangling_parents, DanglingParentPolicy::Error);
        assert!(config.topology.include_deleted);
    }

    #[test]
    fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            "this is not { valid toml !!!",
        )
        .unwrap();

        let config = load_config(tmp.path());
        assert_eq!(config, SkillTreeConfig::default());
    }

    #[test]
    fn try_load_config_reports_missing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);

        let err = try_load_config(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to load"));
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Read(_))
        ));
    }

    #[test]
    fn try_load_config_reports_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[topology]\ndangling_parents = 42\n").unwrap();

        let err = try_load_config(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to load"));
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn try_load_config_parses_valid_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[topology]\ninclude_deleted = true\n").unwrap();

        let config = try_load_config(&path).unwrap();
        assert!(config.topology.include_deleted);
        assert_eq!(config.topology.dangling_parents, DanglingParentPolicy::Ignore);
    }
}
