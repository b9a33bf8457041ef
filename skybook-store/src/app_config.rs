use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Simulated latency applied to every search, in milliseconds
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

fn default_latency_ms() -> u64 {
    500
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StorageConfig {
    /// Data directory for durable storage. The platform's per-user data
    /// dir is used when unset.
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    pub fn resolve_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }

        directories::ProjectDirs::from("", "", "skybook")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".skybook"))
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file.
            // Every file source is optional; the serde defaults above keep
            // the binary runnable with no config directory at all.
            .add_source(config::File::with_name("config/default").required(false))
            // Add in the current environment file, 'development' by default
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of SKYBOOK)
            // Eg.. `SKYBOOK_SEARCH__LATENCY_MS=0` would set the latency
            .add_source(config::Environment::with_prefix("SKYBOOK").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.search.latency_ms, 500);
        assert!(config.storage.data_dir.is_none());
    }

    #[test]
    fn test_configured_data_dir_wins() {
        let storage = StorageConfig {
            data_dir: Some(PathBuf::from("/tmp/skybook-test")),
        };
        assert_eq!(storage.resolve_dir(), PathBuf::from("/tmp/skybook-test"));
    }
}
