use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_REST_TIMEOUT, DEFAULT_TOKEN_PATH};
use serde::Deserialize;
use std::env;
use std::fmt;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub rest_api: RestApiConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RestApiConfig {
    pub base_url: String,
    /// Transport timeout in seconds.
    pub timeout: u64,
}

/// Where the token pair is persisted between runs.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    File,
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub path: String,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "file" => Ok(StorageBackend::File),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(format!("unknown storage backend: {other}")),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::File => write!(f, "file"),
            StorageBackend::Memory => write!(f, "memory"),
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{\"rest_api\":{},\"storage\":{}}}",
            self.rest_api, self.storage
        )
    }
}

impl fmt::Display for RestApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{\"base_url\":{},\"timeout\":{}}}",
            json_string(&self.base_url),
            self.timeout
        )
    }
}

impl fmt::Display for StorageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{\"backend\":\"{}\",\"path\":{}}}",
            self.backend,
            json_string(&self.path)
        )
    }
}

fn json_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "STOREFRONT_API_BASE_URL",
                    String::from(DEFAULT_API_BASE_URL),
                ),
                timeout: get_env_or_default("STOREFRONT_API_TIMEOUT", DEFAULT_REST_TIMEOUT),
            },
            storage: StorageConfig {
                backend: get_env_or_default("STOREFRONT_TOKEN_STORE", StorageBackend::File),
                path: get_env_or_default(
                    "STOREFRONT_TOKEN_PATH",
                    String::from(DEFAULT_TOKEN_PATH),
                ),
            },
        }
    }
}
