//! Scene request encoding using `MessagePack`.
//!
//! Lets an out-of-process composer receive a [`SceneRequest`] as bytes.
//! Only in-memory encoding is provided; transport is the caller's concern.

use crate::error::{Result, SceneError};
use crate::stage::SceneRequest;

/// Serializes a scene request to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(request: &SceneRequest) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(request).map_err(|e| SceneError::Handoff(e.to_string()))
}

/// Deserializes a scene request from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not a valid encoded request.
pub fn from_bytes(bytes: &[u8]) -> Result<SceneRequest> {
    rmp_serde::from_slice(bytes).map_err(|e| SceneError::Handoff(e.to_string()))
}
