//! MQTT Datasource Streaming Core
//!
//! Library behind an MQTT datasource plugin's streaming glue:
//! - Digest providers (platform-backed SHA-1 and a software fallback)
//! - Streaming channel key derivation
//! - Topic encoding for restricted channel names
//!
//! Broker connectivity, subscription management, and the query pipeline live
//! in the host; this crate only computes identifiers from already-resolved
//! strings.

pub mod digest;
pub mod sha1;
pub mod streaming;
pub mod topic;

pub use digest::{DigestProvider, NativeSha1, SoftwareSha1, DIGEST_LEN};
pub use streaming::live_stream_key;
pub use topic::{decode_topic_path, TopicEncoding};
