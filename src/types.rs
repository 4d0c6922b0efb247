use crate::utils::storage::{self, MemoryStorage, MockStorage, Storage};
use async_trait::async_trait;
use std::env;
use std::fmt;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StorageBackend {
    Mock,
    Memory,
}

impl StorageBackend {
    pub fn parse(raw_backend: &str) -> Result<Self, Error> {
        match raw_backend {
            "mock" => Ok(Self::Mock),
            "memory" => Ok(Self::Memory),
            other => Err(Error::UnknownStorageBackend(other.to_string())),
        }
    }
}

#[derive(Debug)]
pub enum Error {
    InvalidPort(String),
    InvalidBodyLimit(String),
    UnknownStorageBackend(String),
    MemoryStorageInProduction,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort(port) => write!(f, "Invalid PORT number: {}", port),
            Self::InvalidBodyLimit(limit) => write!(f, "Invalid BODY_LIMIT: {}", limit),
            Self::UnknownStorageBackend(backend) => {
                write!(f, "Unknown STORAGE_BACKEND: {} (expected mock or memory)", backend)
            }
            Self::MemoryStorageInProduction => {
                write!(f, "STORAGE_BACKEND=memory is not allowed when APP_ENV=production")
            }
        }
    }
}

impl std::error::Error for Error {}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
    pub body_limit: usize,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub storage: Arc<dyn Storage>,
}

impl Context {
    /// Context for tests and embedding: default app settings, given storage.
    pub fn with_storage(storage: Arc<dyn Storage>) -> Self {
        let app = AppConfig::default();

        Self {
            app: AppContext {
                host: app.host,
                environment: app.environment,
                port: app.port,
                body_limit: app.body_limit,
            },
            storage,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
    pub body_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            environment: AppEnvironment::Development,
            port: 8000,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub backend: StorageBackend,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppConfig,
    pub storage: StorageConfig,
}

const DEFAULT_BODY_LIMIT: usize = 1024 * 1024 * 10;

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let environment = lookup("APP_ENV").unwrap_or_else(|| "development".to_string());
        let port = match lookup("PORT") {
            Some(raw_port) => raw_port
                .parse::<u16>()
                .map_err(|_| Error::InvalidPort(raw_port))?,
            None => 8000,
        };
        let body_limit = match lookup("BODY_LIMIT") {
            Some(raw_limit) => raw_limit
                .parse::<usize>()
                .map_err(|_| Error::InvalidBodyLimit(raw_limit))?,
            None => DEFAULT_BODY_LIMIT,
        };
        let backend = match lookup("STORAGE_BACKEND") {
            Some(raw_backend) => StorageBackend::parse(&raw_backend)?,
            None => StorageBackend::Mock,
        };

        let environment = AppEnvironment::from(environment);

        // Memory storage keeps every upload for the life of the process.
        if environment == AppEnvironment::Production && backend == StorageBackend::Memory {
            return Err(Error::MemoryStorageInProduction);
        }

        Ok(Self {
            app: AppConfig {
                host,
                environment,
                port,
                body_limit,
            },
            storage: StorageConfig { backend },
        })
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Context;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Context {
        let storage: Arc<dyn Storage> = match self.storage.backend {
            StorageBackend::Mock => Arc::new(MockStorage::new(storage::BASE_URL)),
            StorageBackend::Memory => Arc::new(MemoryStorage::new(storage::BASE_URL)),
        };

        Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
                body_limit: self.app.body_limit,
            },
            storage,
        }
    }
}
