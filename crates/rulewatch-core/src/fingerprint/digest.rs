//! Content hashing and date normalization.
//!
//! Hashes are hex-encoded SHA-256 over the UTF-8 bytes of the text; absent
//! text hashes as the empty string.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of `text`.
///
/// ```
/// use rulewatch_core::fingerprint::digest::sha256_hex;
///
/// assert_eq!(
///     sha256_hex(""),
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
/// );
/// ```
pub fn sha256_hex(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// Hash of the article text.
pub fn body_hash(article: Option<&str>) -> String {
    sha256_hex(article.unwrap_or_default())
}

/// Hash of supplementary provisions followed by appendix text.
pub fn supp_hash(supplementary: Option<&str>, appendix: Option<&str>) -> String {
    let mut joined = String::from(supplementary.unwrap_or_default());
    joined.push_str(appendix.unwrap_or_default());
    sha256_hex(&joined)
}

/// `YYYYMMDD` → `YYYY.MM.DD` after trimming; anything else passes through
/// trimmed.
pub fn normalize_date(raw: &str) -> String {
    let s = raw.trim();
    if s.len() == 8 && s.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}.{}.{}", &s[0..4], &s[4..6], &s[6..8])
    } else {
        s.to_string()
    }
}
