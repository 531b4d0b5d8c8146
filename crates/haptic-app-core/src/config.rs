// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Read-only config service and its storage port.
//!
//! Front-ends read preferences that a user wrote by hand; nothing here
//! writes them back.

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Storage port for raw config blobs, keyed by logical name.
pub trait ConfigStore {
    /// Bytes stored under `key`, or `None` when nothing is stored there.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, ConfigError>;
}

/// Error type for config operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform has no per-user config directory.
    #[error("could not resolve a config directory")]
    NoConfigDir,
    /// Stored blob exists but could not be read.
    #[error("reading {key}: {source}")]
    Io {
        /// Logical key being read.
        key: String,
        /// Underlying failure.
        source: std::io::Error,
    },
    /// Stored blob is not valid JSON for the requested type.
    #[error("parsing {key}: {source}")]
    Parse {
        /// Logical key being parsed.
        key: String,
        /// Underlying failure.
        source: serde_json::Error,
    },
}

/// Decodes JSON config values from a [`ConfigStore`].
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Service reading from `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the inner store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: ConfigStore> ConfigService<S> {
    /// Decode the value under `key`. Missing or blank blobs are `Ok(None)`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ConfigError> {
        let Some(bytes) = self.store.read(key)? else {
            return Ok(None);
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                key: key.to_owned(),
                source,
            })
    }
}
