//! Credential store access and per-user API key resolution.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{Error, FailureKind, LookupFailure, Result};

/// A source of API keys, keyed by user name.
///
/// `Ok(None)` means the name is not registered; infrastructure faults
/// surface as errors.
pub trait CredentialSource: Send + Sync {
    fn lookup(&self, name: &str) -> Result<Option<String>>;
}

/// File-backed credential store: a flat JSON object mapping user name to
/// API key.
///
/// The whole document is read and parsed on every lookup; callers that want
/// caching get it from [`User`], which holds the resolved key.
#[derive(Debug)]
pub struct JsonCredentialStore {
    path: PathBuf,
}

impl JsonCredentialStore {
    /// Open the store backed by `path`.
    ///
    /// The file must already exist. A missing store is a deployment problem,
    /// reported as [`Error::StoreMissing`] rather than a domain failure.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_file() {
            return Err(Error::StoreMissing {
                path: path.display().to_string(),
            });
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialSource for JsonCredentialStore {
    fn lookup(&self, name: &str) -> Result<Option<String>> {
        let raw = fs::read(&self.path)?;
        let keys: HashMap<String, String> = serde_json::from_slice(&raw)?;
        Ok(keys.get(name).cloned())
    }
}

/// A named caller with a lazily resolved API key.
///
/// The key is read from the backing source on first access and cached for
/// the lifetime of the instance; later accesses return the cached value
/// without touching the source. A failed resolution is not cached, so a
/// later access re-queries.
pub struct User {
    name: String,
    source: Box<dyn CredentialSource>,
    api_key: Option<String>,
}

impl User {
    pub fn new(name: impl Into<String>, source: Box<dyn CredentialSource>) -> Self {
        Self {
            name: name.into(),
            source,
            api_key: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolve this user's API key, reading the source at most once.
    ///
    /// An unregistered name raises [`FailureKind::NameNotFound`] with a
    /// message identifying the name.
    pub fn api_key(&mut self) -> Result<&str> {
        if self.api_key.is_none() {
            debug!(name = %self.name, "resolving api key");
            let key = self.source.lookup(&self.name)?.ok_or_else(|| {
                LookupFailure::with_message(
                    FailureKind::NameNotFound,
                    format!("No api key available for name {:?}", self.name),
                )
            })?;
            self.api_key = Some(key);
        }
        Ok(self.api_key.as_deref().unwrap_or_default())
    }
}
