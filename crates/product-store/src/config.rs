//! Store configuration.
//!
//! Read from the environment by the binary, built directly by tests and embedders.

use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming the backing JSON file.
pub const PATH_VAR: &str = "PRODUCT_STORE_PATH";
/// Environment variable setting the actor mailbox capacity.
pub const BUFFER_VAR: &str = "PRODUCT_STORE_BUFFER";

pub const DEFAULT_PATH: &str = "products.json";
pub const DEFAULT_BUFFER_SIZE: usize = 32;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("PRODUCT_STORE_BUFFER must be a positive integer, got {0:?}")]
    InvalidBuffer(String),
}

/// Where the collection lives and how many requests may queue for the actor.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub path: PathBuf,
    pub buffer_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PATH)
    }
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    /// Sets the mailbox capacity. Clamped to at least 1.
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size.max(1);
        self
    }

    /// Reads [`PATH_VAR`] and [`BUFFER_VAR`], falling back to the defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let path = lookup(PATH_VAR).unwrap_or_else(|| DEFAULT_PATH.to_string());

        let buffer_size = match lookup(BUFFER_VAR) {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidBuffer(raw)),
            },
            None => DEFAULT_BUFFER_SIZE,
        };

        Ok(Self::new(path).with_buffer_size(buffer_size))
    }
}
