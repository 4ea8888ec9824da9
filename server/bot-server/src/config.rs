//! Runtime configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! file, then environment variables (`SCHEMA_SERVICE_URL`, `MODEL_NAME`, ...).

use config::{Config, Environment, File};
use intent_engine::OracleConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use store_client::StoreClientConfig;

pub const DEFAULT_SCHEMA_SERVICE_URL: &str = "http://localhost:5001";
pub const DEFAULT_VALUES_SERVICE_URL: &str = "http://localhost:5002";
pub const DEFAULT_STORE_TIMEOUT_SECS: u64 = 10;

/// Everything the bot needs to reach its collaborators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotConfig {
    pub schema_service_url: String,
    pub values_service_url: String,
    /// Full URL of the Ollama generate endpoint
    pub ollama_url: String,
    pub model_name: String,
    pub oracle_timeout_secs: u64,
    pub store_timeout_secs: u64,
    pub num_predict: u32,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            schema_service_url: DEFAULT_SCHEMA_SERVICE_URL.to_string(),
            values_service_url: DEFAULT_VALUES_SERVICE_URL.to_string(),
            ollama_url: intent_engine::DEFAULT_OLLAMA_URL.to_string(),
            model_name: intent_engine::DEFAULT_MODEL.to_string(),
            oracle_timeout_secs: intent_engine::DEFAULT_TIMEOUT_SECS,
            store_timeout_secs: DEFAULT_STORE_TIMEOUT_SECS,
            num_predict: intent_engine::DEFAULT_NUM_PREDICT,
        }
    }
}

impl BotConfig {
    /// Load from defaults, `config_file` (if it exists) and the process
    /// environment
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be parsed or a value has the
    /// wrong type.
    pub fn load(config_file: Option<&str>) -> Result<Self, config::ConfigError> {
        Self::load_from(config_file, None)
    }

    /// Like [`BotConfig::load`], reading variables from `env` instead of the
    /// process environment when given
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be parsed or a value has the
    /// wrong type.
    pub fn load_from(
        config_file: Option<&str>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        let mut builder = Config::builder()
            .set_default("schema_service_url", defaults.schema_service_url)?
            .set_default("values_service_url", defaults.values_service_url)?
            .set_default("ollama_url", defaults.ollama_url)?
            .set_default("model_name", defaults.model_name)?
            .set_default("oracle_timeout_secs", defaults.oracle_timeout_secs)?
            .set_default("store_timeout_secs", defaults.store_timeout_secs)?
            .set_default("num_predict", defaults.num_predict)?;

        if let Some(path) = config_file {
            builder = builder.add_source(File::with_name(path).required(false));
        }

        builder
            .add_source(Environment::default().try_parsing(true).source(env))
            .build()?
            .try_deserialize()
    }

    pub fn oracle(&self) -> OracleConfig {
        OracleConfig::ollama(&self.ollama_url, &self.model_name)
            .with_timeout_secs(self.oracle_timeout_secs)
            .with_num_predict(self.num_predict)
    }

    pub fn values_store(&self) -> StoreClientConfig {
        StoreClientConfig::new(&self.values_service_url).with_timeout_secs(self.store_timeout_secs)
    }

    pub fn schema_store(&self) -> StoreClientConfig {
        StoreClientConfig::new(&self.schema_service_url).with_timeout_secs(self.store_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn env(vars: &[(&str, &str)]) -> Option<HashMap<String, String>> {
        Some(
            vars.iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_defaults() {
        let config = BotConfig::load_from(None, env(&[])).unwrap();
        assert_eq!(config, BotConfig::default());
        assert_eq!(config.ollama_url, "http://localhost:11434/api/generate");
        assert_eq!(config.model_name, "tinyllama");
        assert_eq!(config.oracle_timeout_secs, 60);
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let config = BotConfig::load_from(
            None,
            env(&[
                ("SCHEMA_SERVICE_URL", "http://schema:5001"),
                ("MODEL_NAME", "llama3"),
                ("NUM_PREDICT", "64"),
            ]),
        )
        .unwrap();

        assert_eq!(config.schema_service_url, "http://schema:5001");
        assert_eq!(config.model_name, "llama3");
        assert_eq!(config.num_predict, 64);
        assert_eq!(config.values_service_url, DEFAULT_VALUES_SERVICE_URL);
    }

    #[test]
    fn test_file_layer_sits_between_defaults_and_environment() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "values_service_url = \"http://values:5002\"\nmodel_name = \"from-file\""
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config =
            BotConfig::load_from(Some(&path), env(&[("MODEL_NAME", "from-env")])).unwrap();

        assert_eq!(config.values_service_url, "http://values:5002");
        assert_eq!(config.model_name, "from-env");
    }

    #[test]
    fn test_missing_file_is_ignored() {
        let config = BotConfig::load_from(Some("/nonexistent/confbot"), env(&[])).unwrap();
        assert_eq!(config, BotConfig::default());
    }

    #[test]
    fn test_bad_number_is_error() {
        assert!(BotConfig::load_from(None, env(&[("STORE_TIMEOUT_SECS", "soon")])).is_err());
    }

    #[test]
    fn test_derived_client_configs() {
        let config = BotConfig::default();
        assert_eq!(config.oracle().timeout_secs, 60);
        assert_eq!(config.values_store().base_url, DEFAULT_VALUES_SERVICE_URL);
        assert_eq!(config.schema_store().timeout_secs, 10);
    }
}
