//! Tenant identifier normalization.
//!
//! Identifiers arrive as arbitrary human-readable strings ("memes galore",
//! "Memes-Galore", "memesGalore"). Before the registry stores or looks one
//! up, it is normalized to a canonical camel-case key, so near-duplicates
//! that differ only in casing or word separators collapse to a single
//! tenant. The storage prefix is the upper snake-case form of that key:
//!
//! ```text
//! "memes galore" -> key "memesGalore" -> prefix "MEMES_GALORE"
//! ```
//!
//! Both functions are pure and deterministic, and distinct canonical keys
//! always yield distinct prefixes - the property that keeps two tenants
//! from ever colliding on a physical key prefix.

/// Split an identifier into words.
///
/// Word boundaries are runs of non-alphanumeric characters and
/// lower-to-upper case transitions ("fooBar" splits as `foo`, `Bar`).
fn words(identifier: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;
    for c in identifier.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase();
        current.push(c);
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// Normalize an identifier to its canonical camel-case registry key.
///
/// The first word is lowercased in full; every later word is lowercased
/// with its first character capitalized. Identifiers with no alphanumeric
/// content normalize to the empty key.
pub fn camel_key(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len());
    for (i, word) in words(identifier).iter().enumerate() {
        if i == 0 {
            out.extend(word.chars().flat_map(|c| c.to_lowercase()));
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.extend(chars.flat_map(|c| c.to_lowercase()));
            }
        }
    }
    out
}

/// Derive the storage prefix from a canonical camel-case key.
///
/// Uppercase transitions become underscores and everything is uppercased:
/// `memesGalore` -> `MEMES_GALORE`. The output alphabet is alphanumerics
/// plus `_`, which keeps the reserved `#` separator out of every prefix.
pub fn prefix_from_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_uppercase() && !out.is_empty() {
            out.push('_');
        }
        out.extend(c.to_uppercase());
    }
    out
}
