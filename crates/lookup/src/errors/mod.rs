//! Error types and the failure taxonomy for the lookup crate.
//!
//! This module provides:
//! - [`LookupFailure`]: a typed domain failure tagged with a [`FailureKind`]
//! - [`FailureCategory`]: attribution of a failure to the caller or the service
//! - [`Error`]: the crate-level error enum, covering the taxonomy plus
//!   infrastructure faults that deliberately stay outside of it

use std::fmt;

use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the lookup crate.
///
/// Domain failures travel as [`Error::Lookup`]; everything else is an
/// infrastructure fault that callers are not expected to branch on.
#[derive(Error, Debug)]
pub enum Error {
    /// A domain failure from the taxonomy.
    #[error("{0}")]
    Lookup(#[from] LookupFailure),

    /// The credential store file does not exist. Raised when the store is
    /// opened, before any name is looked up.
    #[error("Credential store file not found: {path}")]
    StoreMissing {
        /// Path the store was expected at
        path: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A transport-level fault while talking to the remote endpoint.
    /// Not part of the taxonomy: neither side of the exchange can be blamed.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl Error {
    /// Returns the taxonomy failure inside this error, if it is one.
    pub fn as_failure(&self) -> Option<&LookupFailure> {
        match self {
            Error::Lookup(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Which side of the exchange a failure is attributed to.
///
/// Callers branch on this, never on diagnostic text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureCategory {
    /// The caller supplied something the system cannot act on.
    Caller,
    /// The remote service could not satisfy a well-formed request.
    Service,
}

/// The concrete kinds of domain failure.
///
/// Each kind maps to immutable classification metadata: a category, a status
/// code mirroring HTTP semantics, and a fixed internal diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The requested user name is not registered in the credential store.
    NameNotFound,
    /// No API key is present for a registered name. Reserved: no code path
    /// raises it today.
    ApiKeyNotFound,
    /// The API key failed validation. Reserved: no code path raises it today.
    InvalidApiKey,
    /// The remote search matched nothing for the queried symbol.
    NoSymbolFound,
}

impl FailureKind {
    /// The side of the exchange this kind is attributed to.
    pub fn category(self) -> FailureCategory {
        match self {
            Self::NameNotFound | Self::ApiKeyNotFound | Self::InvalidApiKey => {
                FailureCategory::Caller
            }
            Self::NoSymbolFound => FailureCategory::Service,
        }
    }

    /// Status code mirroring HTTP semantics for this kind.
    pub fn status(self) -> StatusCode {
        match self.category() {
            FailureCategory::Caller => StatusCode::INTERNAL_SERVER_ERROR,
            FailureCategory::Service => StatusCode::BAD_REQUEST,
        }
    }

    /// Fixed internal diagnostic message. For humans and logs only.
    pub fn internal_message(self) -> &'static str {
        match self {
            Self::NameNotFound => "Name not found",
            Self::ApiKeyNotFound => "Api key has not been found",
            Self::InvalidApiKey => "Api key is not valid",
            Self::NoSymbolFound => "No symbol found",
        }
    }

    /// The kind's type name, as rendered by `Display` and [`FailureLog`].
    pub fn name(self) -> &'static str {
        match self {
            Self::NameNotFound => "NameNotFound",
            Self::ApiKeyNotFound => "ApiKeyNotFound",
            Self::InvalidApiKey => "InvalidApiKey",
            Self::NoSymbolFound => "NoSymbolFound",
        }
    }
}

/// A typed domain failure.
///
/// Carries its [`FailureKind`], an optional message supplied at the raise
/// site, and any auxiliary detail values. The kind's metadata is immutable;
/// only the user message and details vary per instance.
#[derive(Debug, Clone)]
pub struct LookupFailure {
    kind: FailureKind,
    user_message: Option<String>,
    details: Vec<String>,
}

impl LookupFailure {
    /// A failure with no user message.
    pub fn new(kind: FailureKind) -> Self {
        Self {
            kind,
            user_message: None,
            details: Vec::new(),
        }
    }

    /// A failure carrying a message for the raise site's context.
    pub fn with_message(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            user_message: Some(message.into()),
            details: Vec::new(),
        }
    }

    /// Attach an auxiliary detail value. Preserved verbatim, never interpreted.
    pub fn detail(mut self, value: impl Into<String>) -> Self {
        self.details.push(value.into());
        self
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn category(&self) -> FailureCategory {
        self.kind.category()
    }

    pub fn status(&self) -> StatusCode {
        self.kind.status()
    }

    pub fn internal_message(&self) -> &'static str {
        self.kind.internal_message()
    }

    pub fn user_message(&self) -> Option<&str> {
        self.user_message.as_deref()
    }

    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// The structured record for observability. Never fails.
    pub fn log(&self) -> FailureLog {
        FailureLog {
            name: self.kind.name(),
            status: self.kind.status().as_u16(),
            internal_message: self.kind.internal_message(),
            user_message: self.user_message.clone(),
        }
    }
}

impl fmt::Display for LookupFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(status={}", self.kind.name(), self.status().as_u16())?;
        if let Some(message) = &self.user_message {
            write!(f, ", message={message}")?;
        }
        write!(f, ")")
    }
}

impl std::error::Error for LookupFailure {}

/// The structured form of a [`LookupFailure`], as returned by
/// [`LookupFailure::log`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureLog {
    /// The failure kind's type name
    pub name: &'static str,
    /// Numeric status code
    pub status: u16,
    /// The kind's fixed diagnostic message
    pub internal_message: &'static str,
    /// The message supplied at the raise site, if any
    pub user_message: Option<String>,
}
