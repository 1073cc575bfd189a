//! Configuration for graphws
//!
//! Read from `--config PATH`, otherwise from `graphws.toml` in the working
//! directory. Missing keys take their defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GraphError, Result};

pub use types::{Config, LoadConfig, LogConfig, OutputConfig, DEFAULT_LOG_LEVEL};

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "graphws.toml";

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let candidate: PathBuf = dir.join(CONFIG_FILE_NAME);
                if candidate.is_file() {
                    tracing::debug!(path = %candidate.display(), "using config file");
                    Self::load(&candidate)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::OutputFormat;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output.format, OutputFormat::Human);
        assert_eq!(config.log.level, "warn");
        assert!(!config.log.json);
        assert!(!config.load.undirected);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graphws.toml");

        let mut config = Config::default();
        config.output.format = OutputFormat::Json;
        config.load.undirected = true;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_takes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "[log]\nlevel = \"debug\"\n\n[extra]\nignored = 1\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.log.level, "debug");
        assert!(!config.log.json);
        assert_eq!(config.output.format, OutputFormat::Human);
    }

    #[test]
    fn test_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[output]\nformat = \"yaml\"\n").unwrap();

        assert!(matches!(Config::load(&path), Err(GraphError::Toml(_))));
    }

    #[test]
    fn test_resolve() {
        let dir = tempdir().unwrap();
        assert_eq!(Config::resolve(None, dir.path()).unwrap(), Config::default());

        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[load]\nundirected = true\n").unwrap();
        assert!(Config::resolve(None, dir.path()).unwrap().load.undirected);

        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            Config::resolve(Some(&missing), dir.path()),
            Err(GraphError::Io(_))
        ));
    }
}
