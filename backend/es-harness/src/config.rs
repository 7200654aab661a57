use crate::error::ConfigError;
use std::env;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_URL: &str = "http://localhost:9200";
const DEFAULT_INDEX: &str = "test_index";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSettings {
    pub number_of_shards: u32,
    pub number_of_replicas: u32,
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self {
            number_of_shards: 5,
            number_of_replicas: 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub url: String,
    pub credentials: Option<Credentials>,
    pub test_index: String,
    pub index_settings: IndexSettings,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            credentials: None,
            test_index: DEFAULT_INDEX.to_string(),
            index_settings: IndexSettings::default(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    /// Reads the process environment, after loading `.env` when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let url = lookup("ELASTICSEARCH_URL").unwrap_or(defaults.url);
        let credentials = match (
            lookup("ELASTICSEARCH_USERNAME"),
            lookup("ELASTICSEARCH_PASSWORD"),
        ) {
            (Some(username), Some(password)) => Some(Credentials { username, password }),
            (None, None) => None,
            _ => return Err(ConfigError::PartialCredentials),
        };
        let test_index = lookup("ELASTICSEARCH_TEST_INDEX").unwrap_or(defaults.test_index);

        let index_settings = IndexSettings {
            number_of_shards: parse_var(
                &lookup,
                "ELASTICSEARCH_SHARDS",
                defaults.index_settings.number_of_shards,
            )?,
            number_of_replicas: parse_var(
                &lookup,
                "ELASTICSEARCH_REPLICAS",
                defaults.index_settings.number_of_replicas,
            )?,
        };
        let timeout_secs: u64 = parse_var(&lookup, "ELASTICSEARCH_TIMEOUT_SECS", 30)?;

        Ok(Config {
            url,
            credentials,
            test_index,
            index_settings,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
            value,
        }),
        None => Ok(default),
    }
}
