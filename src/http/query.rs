//! Query-string parameter extraction.
//!
//! Permissive by contract: repeated keys take the first occurrence and
//! malformed input reads as an absent parameter, never an error.

/// Return the value of the first occurrence of `name` in a raw query string.
///
/// A key without `=` yields an empty value. No percent-decoding is applied;
/// the only consumed parameter holds plain digits, and an encoded value
/// simply falls into the unknown-category path.
pub fn first_value<'a>(query: Option<&'a str>, name: &str) -> Option<&'a str> {
    query?
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}
