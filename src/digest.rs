//! Digest providers
//!
//! Channel keys are derived from a SHA-1 digest of the query's canonical
//! form. The digest backend is picked once at startup and injected wherever a
//! key is derived:
//! - `NativeSha1` uses the RustCrypto `sha1` crate.
//! - `SoftwareSha1` uses the from-scratch implementation in `crate::sha1`,
//!   for builds where the platform-backed hash is unavailable.
//!
//! The two must produce byte-identical output for identical input.

use sha1::{Digest, Sha1};

/// SHA-1 digest length in bytes.
pub const DIGEST_LEN: usize = 20;

/// Abstract digest backend (native, software, or a test double).
pub trait DigestProvider: Send + Sync {
    fn digest(&self, message: &[u8]) -> [u8; DIGEST_LEN];
    fn name(&self) -> &'static str {
        "digest"
    }
}

/// Digest provider backed by the platform SHA-1 implementation.
pub struct NativeSha1;

impl DigestProvider for NativeSha1 {
    fn digest(&self, message: &[u8]) -> [u8; DIGEST_LEN] {
        let mut hasher = Sha1::new();
        hasher.update(message);
        hasher.finalize().into()
    }

    fn name(&self) -> &'static str {
        "native"
    }
}

/// Self-contained software fallback.
pub struct SoftwareSha1;

impl DigestProvider for SoftwareSha1 {
    fn digest(&self, message: &[u8]) -> [u8; DIGEST_LEN] {
        crate::sha1::sha1(message)
    }

    fn name(&self) -> &'static str {
        "software"
    }
}
