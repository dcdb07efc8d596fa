//! Digest Module
//!
//! Computes the content-addressed hash behind every template placeholder.
//! The hash only depends on the string key and its context, so the same
//! source string always lands on the same placeholder.

use sha2::{Digest, Sha256};

/// Number of digest bytes kept in a placeholder (128 bits).
const DIGEST_BYTES: usize = 16;

// Neither byte can occur inside UTF-8 text, so the encoding of
// `(key, context)` below is unambiguous.
const CONTEXT_SEPARATOR: u8 = 0xff;
const NO_CONTEXT: u8 = 0xfe;

/// Hash a string key together with its context.
///
/// An empty context is encoded with its own marker, so `[]` and `[""]`
/// hash differently.
pub fn string_hash(key: &str, context: &[String]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    if context.is_empty() {
        hasher.update([NO_CONTEXT]);
    } else {
        for part in context {
            hasher.update([CONTEXT_SEPARATOR]);
            hasher.update(part.as_bytes());
        }
    }
    to_hex(&hasher.finalize()[..DIGEST_BYTES])
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
