//! Span transforms that replace the delimited text.

/// Lowercase hexadecimal MD5 digest of `text` (32 characters).
///
/// # Example
/// ```
/// use markdown2html::inline::digest_hex;
///
/// assert_eq!(digest_hex("hello"), "5d41402abc4b2a76b9719d911017c592");
/// ```
pub fn digest_hex(text: &str) -> String {
    format!("{:x}", md5::compute(text.as_bytes()))
}

/// `text` with every `c` and `C` removed.
pub fn strip_c(text: &str) -> String {
    text.chars().filter(|&ch| ch != 'c' && ch != 'C').collect()
}
