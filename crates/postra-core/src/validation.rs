//! Field validation for post commands.
//!
//! Pure functions; every create and update runs [`validate_post_fields`]
//! before touching storage.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::error::FieldError;

/// Maximum title length, counted in Unicode scalar values.
pub const MAX_TITLE_LEN: usize = 140;

/// Maximum content URI length in bytes.
pub const MAX_CONTENT_URI_LEN: usize = 1024;

/// Content URI schemes accepted after lower-casing.
pub const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "ipfs"];

static CONTENT_HASH_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(sha256:)?[0-9a-f]{64}$").expect("content hash pattern is valid")
});

/// Validate all mutable post fields, stopping at the first failure
/// (title, then content URI, then content hash).
pub fn validate_post_fields(
    title: &str,
    content_uri: &str,
    content_hash: &str,
) -> Result<(), FieldError> {
    validate_title(title)?;
    validate_content_uri(content_uri)?;
    validate_content_hash(content_hash)?;
    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), FieldError> {
    let len = title.chars().count();
    if len == 0 || len > MAX_TITLE_LEN {
        return Err(FieldError::InvalidTitle);
    }
    if title.trim().is_empty() {
        return Err(FieldError::InvalidTitle);
    }
    Ok(())
}

pub fn validate_content_uri(content_uri: &str) -> Result<(), FieldError> {
    if content_uri.is_empty() || content_uri.len() > MAX_CONTENT_URI_LEN {
        return Err(FieldError::InvalidContentUri);
    }
    // The URL parser strips or repairs these; the stored string would not be a URI.
    if content_uri
        .chars()
        .any(|c| c.is_ascii_whitespace() || c.is_control())
        || has_malformed_escape(content_uri)
    {
        return Err(FieldError::InvalidContentUri);
    }
    let parsed = Url::parse(content_uri).map_err(|_| FieldError::InvalidContentUri)?;
    let scheme = parsed.scheme().to_ascii_lowercase();
    if scheme.is_empty() || !ALLOWED_SCHEMES.contains(&scheme.as_str()) {
        return Err(FieldError::InvalidContentUri);
    }
    Ok(())
}

/// A `%` not followed by two hex digits.
fn has_malformed_escape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.iter().enumerate().any(|(i, &b)| {
        b == b'%'
            && !matches!(
                bytes.get(i + 1..i + 3),
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
            )
    })
}

pub fn validate_content_hash(content_hash: &str) -> Result<(), FieldError> {
    if content_hash.is_empty() || !CONTENT_HASH_PATTERN.is_match(content_hash) {
        return Err(FieldError::InvalidContentHash);
    }
    Ok(())
}
