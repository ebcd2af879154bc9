//! Content-based hashing for symbol naming and deduplication

use sha2::{Digest, Sha256};
use std::fmt;

/// Length of the identifier returned by [`ContentHash::ident`].
pub const IDENT_LEN: usize = 12;

/// A SHA-256 based content hash.
///
/// Generated symbols are named after the hash of what they hold, so two
/// resources with identical content share one declaration.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// Compute a hash from bytes
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Self(hasher.finalize().into())
    }

    /// Compute a hash from a string
    pub fn from_str(s: &str) -> Self {
        Self::from_bytes(s.as_bytes())
    }

    /// Compute a hash over several parts.
    ///
    /// Each part is length-prefixed, so `["ab", "c"]` and `["a", "bc"]`
    /// hash differently.
    pub fn from_parts(parts: &[&[u8]]) -> Self {
        let mut hasher = Sha256::new();
        for part in parts {
            hasher.update((part.len() as u64).to_le_bytes());
            hasher.update(part);
        }
        Self(hasher.finalize().into())
    }

    /// Short identifier safe to splice into generated source.
    ///
    /// The top nibble is mapped into `a..=p` so the identifier never starts
    /// with a digit; the remaining characters are lowercase hex.
    pub fn ident(&self) -> String {
        let mut ident = String::with_capacity(IDENT_LEN);
        ident.push((b'a' + (self.0[0] >> 4)) as char);
        ident.push_str(&self.to_hex()[1..IDENT_LEN]);
        ident
    }

    /// Get the hash as a hex string
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ident())
    }
}
