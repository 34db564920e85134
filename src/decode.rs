//! Structural decode step shared by every service method.
//!
//! Response bodies are first parsed into an untyped [`serde_json::Value`] and
//! then mapped onto the endpoint's typed structure. Models declare their wire
//! names with serde renames and carry a flattened [`UnmappedFields`] bag, so
//! fields the API grows after this crate was written surface in the bag
//! instead of being silently dropped. A wire value whose runtime shape does
//! not match the destination field fails with [`Error::Decode`].

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Catch-all bag for response fields the typed models do not declare.
///
/// The declared fields of a model together with its bag reconstruct the
/// original wire mapping at that nesting level.
pub type UnmappedFields = serde_json::Map<String, Value>;

/// Decode an untyped wire value into a typed structure.
pub(crate) fn from_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|source| Error::Decode {
        source,
        response: None,
    })
}

/// Parse a raw response body into an untyped wire value, then decode it.
pub(crate) fn from_slice<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let value: Value = serde_json::from_slice(body).map_err(|source| Error::Decode {
        source,
        response: None,
    })?;
    from_value(value)
}
