//! # Catalog Source
//!
//! Fetches the current product count for the monitored search term.
//!
//! A fetch has three results: a count, no count (the response carried no
//! `result.products_total` field), or an error. Only the first one reaches the
//! state machine; errors are reported by the monitor and a missing count is a
//! no-op cycle.

pub mod client;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{Result, WatchError};

pub use client::KspCatalogClient;

/// Anything that can report the current product count
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// `Ok(None)` when the response has no product total
    async fn fetch_products_total(&self) -> Result<Option<i64>>;
}

/// Extract `result.products_total` from a category search body.
///
/// Absent or null fields yield `Ok(None)`. A body that is not JSON, a level
/// that is not an object, or a total that is not an integer is an error.
pub fn parse_products_total(body: &[u8]) -> Result<Option<i64>> {
    let response: Value = serde_json::from_slice(body)?;
    let Some(result) = field(&response, "body", "result")? else {
        return Ok(None);
    };
    let Some(total) = field(result, "result", "products_total")? else {
        return Ok(None);
    };

    total.as_i64().map(Some).ok_or_else(|| {
        WatchError::DecodeError(format!("products_total is not an integer: {total}"))
    })
}

/// Look up `key` in `value`, which must be an object. Null reads as absent.
fn field<'a>(value: &'a Value, name: &str, key: &str) -> Result<Option<&'a Value>> {
    let object = value
        .as_object()
        .ok_or_else(|| WatchError::DecodeError(format!("{name} is not a JSON object")))?;
    Ok(object.get(key).filter(|v| !v.is_null()))
}
