use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::datatypes::{SearchResultDecoder, UnknownResourcePolicy};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SearchConfig {
    #[serde(default)]
    pub unknown_resource: UnknownResourcePolicy,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let home = env::var("HOME").unwrap_or_else(|_| ".".into());

        Config::builder()
            // 1. Global config from ~/.softlayer/codec.{toml,json,ini}
            .add_source(File::with_name(&format!("{}/.softlayer/codec", home)).required(false))
            // 2. Project config from config/codec
            .add_source(File::with_name("config/codec").required(false))
            // 3. Local overrides from config/local (not checked in)
            .add_source(File::with_name("config/local").required(false))
            // 4. Environment, e.g. SOFTLAYER_CODEC__SEARCH__UNKNOWN_RESOURCE=strict
            .add_source(Environment::with_prefix("SOFTLAYER_CODEC").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn search_decoder(&self) -> SearchResultDecoder {
        SearchResultDecoder::new(self.search.unknown_resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(raw: &str) -> Settings {
        Config::builder()
            .add_source(File::from_str(raw, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults_to_tolerant() {
        let settings = from_toml("");
        assert_eq!(settings.search.unknown_resource, UnknownResourcePolicy::Tolerant);
        assert_eq!(settings.search_decoder().policy(), UnknownResourcePolicy::Tolerant);
    }

    #[test]
    fn test_strict_policy_from_file() {
        let settings = from_toml("[search]\nunknown_resource = \"strict\"\n");
        assert_eq!(settings.search.unknown_resource, UnknownResourcePolicy::Strict);
    }

    #[test]
    fn test_unknown_policy_value_is_an_error() {
        let result = Config::builder()
            .add_source(File::from_str(
                "[search]\nunknown_resource = \"lenient\"\n",
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize::<Settings>();
        assert!(result.is_err());
    }
}
