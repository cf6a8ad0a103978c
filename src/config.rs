// src/config.rs
use std::{
    env,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    catalog_path: PathBuf,
    request_path: Option<PathBuf>,
    log_filter: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_log_filter() -> String {
    "info".into()
}

impl AppConfig {
    /// Build configuration from environment variables, loading a `.env`
    /// file first when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let catalog_path = lookup("ECO_NEWS_CATALOG_PATH")
            .ok_or(ConfigError::Missing("ECO_NEWS_CATALOG_PATH"))?;
        if catalog_path.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "ECO_NEWS_CATALOG_PATH must not be empty".into(),
            ));
        }

        // An empty request path means "read stdin", same as leaving it unset.
        let request_path = lookup("ECO_NEWS_REQUEST_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let log_filter = lookup("RUST_LOG")
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(default_log_filter);

        Ok(Self {
            catalog_path: PathBuf::from(catalog_path),
            request_path,
            log_filter,
        })
    }

    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    /// `None` means the request is read from stdin.
    pub fn request_path(&self) -> Option<&Path> {
        self.request_path.as_deref()
    }

    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }
}
