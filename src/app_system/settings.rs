use std::path::PathBuf;
use serde::Deserialize;

/// Runtime settings for the store system and the demo binary.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StoreConfig {
    pub store_name: String,
    /// Request queue size of the store actor.
    pub channel_capacity: usize,
    pub export_path: PathBuf,
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_name: "TechMart".to_string(),
            channel_capacity: 32,
            export_path: PathBuf::from("store_export.txt"),
            log_filter: "info".to_string(),
        }
    }
}

impl StoreConfig {
    /// Loads `config/store.{toml,json,yaml,...}` if present, then `STORE_*`
    /// environment variables (e.g. `STORE_EXPORT_PATH`).
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config/store")
    }

    pub fn load_from(file: &str) -> Result<Self, config::ConfigError> {
        Self::layered(file, config::Environment::with_prefix("STORE"))
    }

    /// Defaults, then `file`, then `env`.
    fn layered(file: &str, env: config::Environment) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        let s = config::Config::builder()
            .set_default("store_name", defaults.store_name)?
            .set_default("channel_capacity", defaults.channel_capacity as u64)?
            .set_default("export_path", defaults.export_path.to_string_lossy().into_owned())?
            .set_default("log_filter", defaults.log_filter)?
            // Optional: a missing file leaves the defaults in place
            .add_source(config::File::with_name(file).required(false))
            .add_source(env)
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// `STORE_*` source fed from `vars` instead of the process environment.
    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix("STORE").source(Some(vars))
    }

    #[test]
    fn test_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");

        let config = StoreConfig::layered(missing.to_str().unwrap(), env(&[])).unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.toml");
        std::fs::write(
            &path,
            "store_name = \"Gadget Hut\"\nchannel_capacity = 8\nexport_path = \"/tmp/gadget.txt\"\n",
        )
        .unwrap();

        let config = StoreConfig::layered(path.to_str().unwrap(), env(&[])).unwrap();
        assert_eq!(config.store_name, "Gadget Hut");
        assert_eq!(config.channel_capacity, 8);
        assert_eq!(config.export_path, PathBuf::from("/tmp/gadget.txt"));
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.toml");
        std::fs::write(&path, "store_name = \"Gadget Hut\"\nlog_filter = \"warn\"\n").unwrap();

        let vars = env(&[("STORE_STORE_NAME", "Volt Depot"), ("STORE_EXPORT_PATH", "/tmp/volt.txt")]);
        let config = StoreConfig::layered(path.to_str().unwrap(), vars).unwrap();
        assert_eq!(config.store_name, "Volt Depot");
        assert_eq!(config.export_path, PathBuf::from("/tmp/volt.txt"));
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.channel_capacity, 32);
    }
}
