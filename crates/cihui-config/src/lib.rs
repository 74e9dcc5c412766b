use std::env;
use std::str::FromStr;

use self::generator::GeneratorConfig;
use self::server::ServerConfig;

pub mod generator;
pub mod server;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    MissingApiKey(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub server: ServerConfig,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// The provider API key is mandatory; everything else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Config {
            generator: GeneratorConfig::from_lookup(&lookup)?,
            server: ServerConfig::from_lookup(&lookup),
        })
    }
}

pub(crate) fn parse_opt<T: FromStr>(value: Option<String>) -> Option<T> {
    value.and_then(|v| v.trim().parse().ok())
}

/// Unparsable values fall back to the default
pub(crate) fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    parse_opt(value).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn missing_api_key_is_fatal() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey("API_KEY")));

        let err = Config::from_lookup(lookup(&[("API_KEY", "   ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey(_)));
    }

    #[test]
    fn defaults_apply() {
        let config = Config::from_lookup(lookup(&[("API_KEY", "secret")])).unwrap();

        assert_eq!(config.generator.api_key, "secret");
        assert_eq!(config.generator.model, "gemini-2.5-flash");
        assert_eq!(
            config.generator.api_url,
            "https://generativelanguage.googleapis.com"
        );
        assert_eq!(config.generator.temperature, 0.5);
        assert_eq!(config.generator.max_attempts, 3);
        assert_eq!(config.generator.timeout_seconds, None);
        assert_eq!(config.server.bind_addr, "127.0.0.1:8888");
    }

    #[test]
    fn overrides_and_bad_values() {
        let config = Config::from_lookup(lookup(&[
            ("API_KEY", "secret"),
            ("GEMINI_MODEL", "gemini-2.0-flash"),
            ("GEMINI_API_URL", "http://localhost:9000/"),
            ("GEMINI_TEMPERATURE", "warm"),
            ("GENERATION_MAX_ATTEMPTS", "0"),
            ("GEMINI_TIMEOUT_SECONDS", " 20 "),
            ("BIND_ADDR", "0.0.0.0:3000"),
        ]))
        .unwrap();

        assert_eq!(config.generator.model, "gemini-2.0-flash");
        assert_eq!(config.generator.api_url, "http://localhost:9000");
        assert_eq!(config.generator.temperature, 0.5);
        assert_eq!(config.generator.max_attempts, 1);
        assert_eq!(config.generator.timeout_seconds, Some(20));
        assert_eq!(config.server.bind_addr, "0.0.0.0:3000");
    }

    #[test]
    fn api_key_is_redacted() {
        let config = Config::from_lookup(lookup(&[("API_KEY", "secret")])).unwrap();
        assert!(!format!("{config:?}").contains("secret"));
    }

    #[test]
    fn unparsable_timeout_is_unset() {
        let config = Config::from_lookup(lookup(&[
            ("API_KEY", "secret"),
            ("GEMINI_TIMEOUT_SECONDS", "soon"),
        ]))
        .unwrap();
        assert_eq!(config.generator.timeout_seconds, None);
    }
}
