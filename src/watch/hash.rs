// src/watch/hash.rs

use blake3::Hasher;
use tracing::debug;

/// Hex blake3 digest of `bytes`.
pub fn content_hash(bytes: &[u8]) -> String {
    let mut hasher = Hasher::new();
    hasher.update(bytes);
    hasher.finalize().to_hex().to_string()
}

/// Remembers the hash of the last accepted file contents.
///
/// Editors often emit several notify events for one save (truncate, write,
/// metadata); only the first one with new contents is let through.
#[derive(Debug, Default)]
pub struct ContentTracker {
    last: Option<String>,
}

impl ContentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with contents that are already loaded.
    pub fn with_initial(bytes: &[u8]) -> Self {
        Self {
            last: Some(content_hash(bytes)),
        }
    }

    /// Returns `true` (and remembers the new hash) if `bytes` differ from
    /// the last accepted contents.
    pub fn observe(&mut self, bytes: &[u8]) -> bool {
        let hash = content_hash(bytes);
        if self.last.as_deref() == Some(hash.as_str()) {
            debug!(hash = %hash, "contents unchanged");
            return false;
        }
        debug!(hash = %hash, "contents changed");
        self.last = Some(hash);
        true
    }

    pub fn last_hash(&self) -> Option<&str> {
        self.last.as_deref()
    }
}
