//! Application configuration
//!
//! Settings resolve in layers, later layers winning:
//! 1. Built-in defaults
//! 2. JSON config file (`--config`)
//! 3. Environment (`LIFEWEEKS_*`)
//! 4. Command-line flags

use std::fmt;
use std::net::SocketAddr;
use std::path::Path;
use std::str::FromStr;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, Source};
use lifeweeks_core::{FeatureFlags, Language, LifeError, LifeResult, LIFE_EXPECTANCY_YEARS};
use lifeweeks_stats::{check_life_expectancy, StatsConfig};
use serde::{Deserialize, Serialize};

pub const ENV_PREFIX: &str = "LIFEWEEKS";
pub const ENV_LIFE_EXPECTANCY: &str = "LIFEWEEKS_LIFE_EXPECTANCY";
pub const ENV_LANGUAGE: &str = "LIFEWEEKS_LANGUAGE";
pub const ENV_BIND: &str = "LIFEWEEKS_BIND";
pub const ENV_LOG_FORMAT: &str = "LIFEWEEKS_LOG_FORMAT";

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Log output format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(LifeError::Config(format!("unknown log format '{other}'"))),
        }
    }
}

impl TryFrom<String> for LogFormat {
    type Error = LifeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => f.write_str("text"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

/// Logging configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub format: LogFormat,
    /// Filter directive used when `RUST_LOG` is unset
    pub default_directive: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            default_directive: "info".to_string(),
        }
    }
}

/// HTTP server configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
        }
    }
}

/// Values given on the command line
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    pub life_expectancy_years: Option<u32>,
    pub language: Option<Language>,
    pub bind: Option<SocketAddr>,
    pub log_format: Option<LogFormat>,
}

/// Application configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub life_expectancy_years: u32,
    pub language: Language,
    pub features: FeatureFlags,
    pub server: ServerConfig,
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            life_expectancy_years: LIFE_EXPECTANCY_YEARS,
            language: Language::default(),
            features: FeatureFlags::default(),
            server: ServerConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl AppConfig {
    /// Resolve every layer from the process environment and validate the result
    pub fn load(path: Option<&Path>, overrides: &Overrides) -> LifeResult<Self> {
        Self::resolve(path, Environment::with_prefix(ENV_PREFIX), overrides)
    }

    /// Resolve layers with an explicit environment source
    pub fn resolve(
        path: Option<&Path>,
        env: Environment,
        overrides: &Overrides,
    ) -> LifeResult<Self> {
        let mut builder = Config::builder().add_source(defaults()?);
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Json));
        }

        let builder = env_layer(builder, env).map_err(config_error)?;
        let builder = override_layer(builder, overrides).map_err(config_error)?;

        let config: AppConfig = builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(config_error)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON document; missing keys keep their defaults
    pub fn from_json(raw: &str) -> LifeResult<Self> {
        Config::builder()
            .add_source(defaults()?)
            .add_source(File::from_str(raw, FileFormat::Json))
            .build()
            .and_then(Config::try_deserialize)
            .map_err(config_error)
    }

    pub fn validate(&self) -> LifeResult<()> {
        check_life_expectancy(self.life_expectancy_years)
    }

    /// Language used for output; non-default languages need `multi_language`
    pub fn effective_language(&self) -> Language {
        if self.features.multi_language {
            self.language
        } else {
            Language::default()
        }
    }

    pub fn stats_config(&self) -> StatsConfig {
        StatsConfig {
            life_expectancy_years: self.life_expectancy_years,
        }
    }
}

fn config_error(err: ConfigError) -> LifeError {
    LifeError::Config(err.to_string())
}

fn defaults() -> LifeResult<Config> {
    Config::try_from(&AppConfig::default()).map_err(config_error)
}

/// Map the `LIFEWEEKS_*` variables onto their config keys
fn env_layer(
    builder: ConfigBuilder<DefaultState>,
    env: Environment,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let vars = env.collect()?;
    let var = |key: &str| vars.get(key).cloned();

    builder
        .set_override_option("life_expectancy_years", var("life_expectancy"))?
        .set_override_option("language", var("language"))?
        .set_override_option("server.bind", var("bind"))?
        .set_override_option("log.format", var("log_format"))
}

fn override_layer(
    builder: ConfigBuilder<DefaultState>,
    overrides: &Overrides,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    builder
        .set_override_option(
            "life_expectancy_years",
            overrides.life_expectancy_years.map(i64::from),
        )?
        .set_override_option("language", overrides.language.map(Language::tag))?
        .set_override_option("server.bind", overrides.bind.map(|addr| addr.to_string()))?
        .set_override_option("log.format", overrides.log_format.map(|f| f.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Environment {
        let vars: config::Map<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(vars))
    }

    fn resolve(pairs: &[(&str, &str)], overrides: &Overrides) -> LifeResult<AppConfig> {
        AppConfig::resolve(None, env(pairs), overrides)
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.life_expectancy_years, 80);
        assert_eq!(config.language, Language::EnUs);
        assert_eq!(config.server.bind.to_string(), DEFAULT_BIND);
        assert_eq!(config.log.format, LogFormat::Text);
        assert!(config.validate().is_ok());

        let resolved = resolve(&[], &Overrides::default()).unwrap();
        assert_eq!(resolved, config);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json(
            r#"{ "life_expectancy_years": 90, "features": { "milestones": true }, "log": { "format": "json" } }"#,
        )
        .unwrap();
        assert_eq!(config.life_expectancy_years, 90);
        assert!(config.features.milestones);
        assert!(config.features.multi_language);
        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(config.log.default_directive, "info");
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn test_language_tag_in_json() {
        let config = AppConfig::from_json(r#"{ "language": "es-ES" }"#).unwrap();
        assert_eq!(config.language, Language::EsEs);
    }

    #[test]
    fn test_env_layer() {
        let config = resolve(
            &[
                (ENV_LIFE_EXPECTANCY, "85"),
                (ENV_LANGUAGE, "zh-cn"),
                (ENV_BIND, "0.0.0.0:9000"),
                (ENV_LOG_FORMAT, "JSON"),
            ],
            &Overrides::default(),
        )
        .unwrap();
        assert_eq!(config.life_expectancy_years, 85);
        assert_eq!(config.language, Language::ZhCn);
        assert_eq!(config.server.bind.port(), 9000);
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn test_unrelated_env_ignored() {
        let config = resolve(&[("LIFEWEEKS_UNUSED", "x")], &Overrides::default()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_env_rejects_garbage() {
        let err = resolve(&[(ENV_LIFE_EXPECTANCY, "eighty")], &Overrides::default()).unwrap_err();
        assert!(matches!(err, LifeError::Config(_)));

        let err = resolve(&[(ENV_LANGUAGE, "fr-FR")], &Overrides::default()).unwrap_err();
        assert!(matches!(&err, LifeError::Config(msg) if msg.contains("fr-FR")), "{err}");
    }

    #[test]
    fn test_overrides_beat_env() {
        let overrides = Overrides {
            life_expectancy_years: Some(70),
            language: Some(Language::EsEs),
            ..Default::default()
        };
        let config = resolve(
            &[(ENV_LIFE_EXPECTANCY, "85"), (ENV_LANGUAGE, "zh-CN")],
            &overrides,
        )
        .unwrap();
        assert_eq!(config.life_expectancy_years, 70);
        assert_eq!(config.language, Language::EsEs);
    }

    #[test]
    fn test_resolve_validates() {
        let err = resolve(&[(ENV_LIFE_EXPECTANCY, "200")], &Overrides::default()).unwrap_err();
        assert_eq!(err, LifeError::InvalidLifeExpectancy(200));
    }

    #[test]
    fn test_validate_bounds() {
        let mut config = AppConfig::default();
        config.life_expectancy_years = 0;
        assert_eq!(config.validate(), Err(LifeError::InvalidLifeExpectancy(0)));
        config.life_expectancy_years = 151;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_effective_language_needs_flag() {
        let mut config = AppConfig {
            language: Language::EsEs,
            ..Default::default()
        };
        assert_eq!(config.effective_language(), Language::EsEs);
        config.features.multi_language = false;
        assert_eq!(config.effective_language(), Language::EnUs);
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
