//! Physical-key encoding.
//!
//! Every tenant owns a key prefix; a logical key `k` under prefix `P` is
//! stored at the physical key `P#k`. The `#` separator is the layer's
//! on-disk contract: swapping backends must preserve it or existing data
//! becomes unreachable.
//!
//! The separator is guaranteed never to appear inside a prefix (prefixes
//! are validated, and registry-derived prefixes are `[A-Z0-9_]` only).
//! Logical keys may contain `#` freely: decoding strips a fixed-length
//! `prefix + separator` head rather than searching for the separator, so
//! encode/decode are exact inverses.

use crate::error::{Error, Result};

/// Reserved character joining a prefix to a logical key.
pub const SEPARATOR: char = '#';

/// Check that a namespace prefix is usable.
///
/// A prefix must be non-empty and must not contain [`SEPARATOR`]; anything
/// else would break the fixed-offset decoding below.
pub fn validate_prefix(prefix: &str) -> Result<()> {
    if prefix.is_empty() {
        return Err(Error::InvalidPrefix("prefix is empty".to_string()));
    }
    if prefix.contains(SEPARATOR) {
        return Err(Error::InvalidPrefix(format!(
            "prefix '{}' contains reserved separator '{}'",
            prefix, SEPARATOR
        )));
    }
    Ok(())
}

/// Encode a logical key into its physical backend key.
pub fn physical_key(prefix: &str, key: &str) -> String {
    let mut out = String::with_capacity(prefix.len() + SEPARATOR.len_utf8() + key.len());
    out.push_str(prefix);
    out.push(SEPARATOR);
    out.push_str(key);
    out
}

/// Decode a physical key back to its logical key.
///
/// Returns `None` when the physical key does not live under `prefix`.
/// This is the namespace membership test used when filtering a global key
/// listing.
pub fn logical_key<'a>(prefix: &str, physical: &'a str) -> Option<&'a str> {
    physical
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix(SEPARATOR))
}
