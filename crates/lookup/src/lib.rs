//! Tickerscout Lookup Crate
//!
//! Resolves a named user's API key from a local credential store, searches a
//! remote endpoint for ticker symbols with that key, and falls back to a
//! local database snapshot when the credential path fails.
//!
//! # Core Types
//!
//! - [`User`] - a named caller with a lazily resolved, cached API key
//! - [`JsonCredentialStore`] - file-backed name-to-key store
//! - [`FmpProvider`] - FinancialModelingPrep symbol search client
//! - [`LocalDatabase`] - offline record snapshot scanned by symbol
//! - [`LookupFailure`] - typed domain failure with category, status and
//!   structured log form

pub mod credentials;
pub mod database;
pub mod errors;
pub mod provider;

// Re-export the public interface
pub use credentials::{CredentialSource, JsonCredentialStore, User};
pub use database::LocalDatabase;
pub use errors::{Error, FailureCategory, FailureKind, FailureLog, LookupFailure, Result};
pub use provider::{get_symbol_info, FmpProvider, SymbolSearchProvider};
