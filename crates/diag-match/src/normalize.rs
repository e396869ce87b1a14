//! Text normalization shared by descriptions and trigger terms.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalizes text for matching.
///
/// - Converts to lowercase
/// - Decomposes (NFKD) and drops combining marks, so `não` becomes `nao`
/// - Lowercases and folds once more, since compatibility characters such as
///   `ℌ` or `𝐋` only decompose into capital letters
/// - Collapses whitespace runs to a single space and trims
pub fn normalize_text(raw: &str) -> String {
    raw.to_lowercase()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
