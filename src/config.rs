//! # Service Configuration
//!
//! Environment-driven configuration for both demo services. Values are read
//! through the `config` crate's environment source, so `PORT` maps to `port`,
//! `REDIS_HOST` to `redis_host` and so on. Every setting has a default, which
//! lets either binary start with an empty environment.
//!
//! The Redis port is read from `REDIS_PORT_NUMBER`. Plain `REDIS_PORT` is left
//! alone: Kubernetes and Docker links set it to a `tcp://host:port` address
//! for a service named `redis`.

use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_REDIS_PORT: u16 = 6379;

/// Configuration-related errors with detailed context
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The environment could not be read or a value had the wrong type
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    /// A value parsed but is not acceptable
    #[error("Invalid value '{value}' for field '{field}': {context}")]
    InvalidValue {
        field: String,
        value: String,
        context: String,
    },
}

pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Which list store backs the task service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Redis,
    Memory,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Redis => "redis",
            Self::Memory => "memory",
        }
    }
}

/// HTTP listener settings shared by both services
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_host: String,
    pub port: u16,
    pub request_timeout_ms: u64,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// Key-value store settings for the task service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub redis_host: String,
    pub redis_port: u16,
    /// Full connection URL; takes precedence over host and port when set
    pub redis_url: Option<String>,
    pub connection_timeout_ms: u64,
}

impl StoreConfig {
    pub fn redis_url(&self) -> String {
        self.redis_url
            .clone()
            .unwrap_or_else(|| format!("redis://{}:{}/", self.redis_host, self.redis_port))
    }

    pub fn connection_timeout(&self) -> Duration {
        Duration::from_millis(self.connection_timeout_ms)
    }
}

/// Flat view of the environment as deserialized by the `config` crate
#[derive(Debug, Deserialize)]
struct RawSettings {
    app_env: String,
    bind_host: String,
    port: u16,
    request_timeout_ms: u64,
    store_backend: StoreBackend,
    redis_host: String,
    redis_port_number: u16,
    redis_url: Option<String>,
    redis_connect_timeout_ms: u64,
}

/// Complete configuration for a demo service process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub environment: String,
    pub server: ServerConfig,
    pub store: StoreConfig,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_source(None)
    }

    /// Load configuration from an explicit variable map instead of the
    /// process environment. Keys use the same names as the environment
    /// variables (`PORT`, `REDIS_HOST`, ...).
    pub fn from_vars(vars: HashMap<String, String>) -> ConfigResult<Self> {
        Self::from_source(Some(vars))
    }

    fn from_source(vars: Option<HashMap<String, String>>) -> ConfigResult<Self> {
        let settings = config::Config::builder()
            .set_default("app_env", "development")?
            .set_default("bind_host", "0.0.0.0")?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("request_timeout_ms", 30_000_i64)?
            .set_default("store_backend", "redis")?
            .set_default("redis_host", "localhost")?
            .set_default("redis_port_number", i64::from(DEFAULT_REDIS_PORT))?
            .set_default("redis_connect_timeout_ms", 2_000_i64)?
            .add_source(config::Environment::default().source(vars))
            .build()?;

        let raw: RawSettings = settings.try_deserialize()?;
        let config = Self::from_raw(raw);
        config.validate()?;

        debug!(
            environment = %config.environment,
            bind_address = %config.server.bind_address(),
            store_backend = config.store.backend.as_str(),
            "Configuration loaded"
        );

        Ok(config)
    }

    fn from_raw(raw: RawSettings) -> Self {
        Self {
            environment: raw.app_env,
            server: ServerConfig {
                bind_host: raw.bind_host,
                port: raw.port,
                request_timeout_ms: raw.request_timeout_ms,
            },
            store: StoreConfig {
                backend: raw.store_backend,
                redis_host: raw.redis_host,
                redis_port: raw.redis_port_number,
                redis_url: raw.redis_url.filter(|url| !url.trim().is_empty()),
                connection_timeout_ms: raw.redis_connect_timeout_ms,
            },
        }
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.server.bind_host.trim().is_empty() {
            return Err(ConfigurationError::InvalidValue {
                field: "bind_host".to_string(),
                value: self.server.bind_host.clone(),
                context: "bind host must not be empty".to_string(),
            });
        }

        if self.server.request_timeout_ms == 0 {
            return Err(ConfigurationError::InvalidValue {
                field: "request_timeout_ms".to_string(),
                value: "0".to_string(),
                context: "request timeout must be positive".to_string(),
            });
        }

        if self.store.backend == StoreBackend::Redis
            && self.store.redis_url.is_none()
            && self.store.redis_host.trim().is_empty()
        {
            return Err(ConfigurationError::InvalidValue {
                field: "redis_host".to_string(),
                value: self.store.redis_host.clone(),
                context: "redis host must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
