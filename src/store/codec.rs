//! JSON codec for persisted values and exports.

use crate::error::{StoreError, StoreResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Parse persisted or imported text. `what` names the payload in errors.
pub(crate) fn decode<T: DeserializeOwned>(what: &str, text: &str) -> StoreResult<T> {
    serde_json::from_str(text).map_err(|source| StoreError::Deserialize {
        what: what.to_string(),
        source,
    })
}

/// Compact form, used for storage values.
pub(crate) fn encode<T: Serialize + ?Sized>(what: &str, value: &T) -> StoreResult<String> {
    serde_json::to_string(value).map_err(|source| StoreError::Serialize {
        what: what.to_string(),
        source,
    })
}

/// Two-space indented form, used for exports.
pub(crate) fn encode_pretty<T: Serialize + ?Sized>(what: &str, value: &T) -> StoreResult<String> {
    serde_json::to_string_pretty(value).map_err(|source| StoreError::Serialize {
        what: what.to_string(),
        source,
    })
}
