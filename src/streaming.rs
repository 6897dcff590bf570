//! Streaming channel key derivation
//!
//! Each query gets a short stable key used to pick a streaming channel. The
//! key must be unique per distinct query execution plan but is not secure; it
//! only exists to avoid channel collisions.

use serde::Serialize;

use crate::digest::DigestProvider;

/// Canonical digest input for a query.
///
/// Serializes to `{"topic":"..."}` with no whitespace, or to `{}` when the
/// query has no topic. This form is the digest input, so it must stay stable.
#[derive(Serialize)]
struct CanonicalQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    topic: Option<&'a str>,
}

/// Derive the streaming channel key for a query.
///
/// Key format: `{datasource_uid}/{hex16}/{org_id}`, where `hex16` is the
/// lowercase hex encoding of the first 8 digest bytes. Identical
/// `(uid, topic, org_id)` inputs always produce the same key; changing any of
/// them changes the key.
///
/// A missing `datasource_uid` passes through as the literal `"undefined"` so
/// existing channel names keep working.
pub fn live_stream_key(
    provider: &dyn DigestProvider,
    datasource_uid: Option<&str>,
    topic: Option<&str>,
    org_id: i64,
) -> Result<String, String> {
    let message = serde_json::to_string(&CanonicalQuery { topic })
        .map_err(|e| format!("Failed to serialize query: {}", e))?;

    let digest = provider.digest(message.as_bytes());
    let uid = datasource_uid.unwrap_or("undefined");

    Ok(format!("{}/{}/{}", uid, hex::encode(&digest[..8]), org_id))
}
