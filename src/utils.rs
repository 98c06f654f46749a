//! Utility functions for string processing.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for matching: lowercase, then strip diacritics.
///
/// This enables fuzzy matching between ASCII and accented spellings:
/// - "Café" → "cafe"
/// - "CUADERNO DE DIBUJO Ñ" → "cuaderno de dibujo n"
/// - "naïve" → "naive"
///
/// # Algorithm
///
/// 1. Lowercase (Unicode-aware, handles final sigma)
/// 2. NFD normalize (decompose characters into base + combining marks)
/// 3. Filter out combining marks
///
/// Lowercasing first matters: some uppercase letters lowercase into a base
/// letter plus a combining mark ("İ" → "i̇"), and that mark must be stripped
/// in the same pass for `normalize(normalize(x)) == normalize(x)` to hold.
///
/// Whitespace is preserved as-is. Queries are trimmed by the caller.
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Length in Unicode scalar values, the unit every score ratio uses.
#[inline]
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
