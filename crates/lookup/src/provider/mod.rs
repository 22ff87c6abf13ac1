//! Remote symbol search providers.

pub mod fmp;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::credentials::User;
use crate::errors::{FailureKind, LookupFailure, Result};

pub use fmp::FmpProvider;

/// A remote endpoint capable of searching ticker symbols.
#[async_trait]
pub trait SymbolSearchProvider: Send + Sync {
    /// Stable identifier for logs.
    fn id(&self) -> &'static str;

    /// Search for `query`, authenticating with `api_key`.
    ///
    /// Returns the response body exactly as the endpoint produced it; the
    /// emptiness check lives in [`get_symbol_info`], not here.
    async fn search_symbol(&self, query: &str, api_key: &str) -> Result<Value>;
}

/// Resolve `user`'s API key and search `provider` for `symbol`.
///
/// Credential failures propagate unchanged, not wrapped. An empty result
/// raises [`FailureKind::NoSymbolFound`] naming the queried symbol; a
/// non-empty one is returned as parsed, with no filtering, ranking or
/// shaping.
pub async fn get_symbol_info(
    provider: &dyn SymbolSearchProvider,
    symbol: &str,
    user: &mut User,
) -> Result<Value> {
    let api_key = user.api_key()?.to_owned();
    let matches = provider.search_symbol(symbol, &api_key).await?;

    if is_empty_result(&matches) {
        debug!(provider = provider.id(), symbol, "search matched nothing");
        return Err(LookupFailure::with_message(
            FailureKind::NoSymbolFound,
            format!("No symbol found for {symbol:?}"),
        )
        .into());
    }
    Ok(matches)
}

/// True when the body signals "no match": JSON null, an empty array, an
/// empty object or an empty string.
fn is_empty_result(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}
