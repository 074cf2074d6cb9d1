use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Repository discovery limits (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// How many parent directories to climb before giving up.
    pub max_depth: usize,
}

/// Global configuration loaded from `~/.config/gitloc/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitlocConfig {
    /// Scheme that locators are registered under (e.g. "git" for `git:///repo/file`).
    pub scheme: String,
    /// Entry names whose presence marks a directory as a repository root.
    pub repository_markers: Vec<String>,
    /// Optional discovery limits; if missing, the walk goes up to the filesystem root.
    #[serde(default)]
    pub discovery: Option<DiscoveryConfig>,
}

impl Default for GitlocConfig {
    fn default() -> Self {
        Self {
            scheme: "git".to_string(),
            repository_markers: vec![".git".to_string()],
            discovery: None,
        }
    }
}

impl GitlocConfig {
    pub fn max_depth(&self) -> Option<usize> {
        self.discovery.as_ref().map(|d| d.max_depth)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gitloc")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GitlocConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit config file location.
pub fn load_or_init_at(path: &Path) -> Result<GitlocConfig> {
    if !path.exists() {
        let default_cfg = GitlocConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: GitlocConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = GitlocConfig::default();
        assert_eq!(cfg.scheme, "git");
        assert_eq!(cfg.repository_markers, vec![".git".to_string()]);
        assert_eq!(cfg.max_depth(), None);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = GitlocConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: GitlocConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            scheme = "vcs"
            repository_markers = [".git", ".hg"]

            [discovery]
            max_depth = 8
        "#;
        let cfg: GitlocConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.scheme, "vcs");
        assert_eq!(cfg.repository_markers.len(), 2);
        assert_eq!(cfg.max_depth(), Some(8));
    }

    #[test]
    fn load_or_init_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let created = load_or_init_at(&path).unwrap();
        assert_eq!(created, GitlocConfig::default());
        assert!(path.exists());

        fs::write(&path, "scheme = \"gitx\"\nrepository_markers = [\".git\"]\n").unwrap();
        let loaded = load_or_init_at(&path).unwrap();
        assert_eq!(loaded.scheme, "gitx");
    }

    #[test]
    fn load_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "scheme = ").unwrap();
        assert!(load_or_init_at(&path).is_err());
    }
}
