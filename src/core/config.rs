//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Wardrobe configuration with layered hierarchy
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog database file
    pub database: Option<PathBuf>,

    /// Default output format
    pub default_format: Option<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    ///
    /// Loading is best-effort: a missing or malformed config file yields
    /// the built-in defaults.
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/wardrobe/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&global_path) {
                    if let Ok(global) = serde_yml::from_str::<Config>(&contents) {
                        config.merge(global);
                    }
                }
            }
        }

        // 3. Environment variables (WARDROBE_DB is also read by the --db
        //    arg; handling it here covers library callers that skip clap)
        if let Ok(db) = std::env::var("WARDROBE_DB") {
            if !db.is_empty() {
                config.database = Some(PathBuf::from(db));
            }
        }

        config
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "wardrobe")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.database.is_some() {
            self.database = other.database;
        }
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
    }

    /// Resolve the catalog path: explicit flag, then env/config, then the
    /// platform data directory
    pub fn resolve_db_path(&self, flag: Option<&Path>) -> PathBuf {
        if let Some(path) = flag {
            return path.to_path_buf();
        }
        if let Some(ref path) = self.database {
            return path.clone();
        }
        Self::default_db_path()
    }

    /// Platform data dir location, falling back to the working directory
    fn default_db_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "wardrobe")
            .map(|dirs| dirs.data_dir().join("wardrobe.db"))
            .unwrap_or_else(|| PathBuf::from("wardrobe.db"))
    }
}
