//! Category label helpers.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Comparison key for a category label.
///
/// Decomposes to NFKD, drops combining marks, lowercases alphanumerics and
/// collapses every run of other characters into a single space, so
/// `"Café "`, `"cafe"` and `"CAFE"` share the key `"cafe"`.
pub fn category_key(label: &str) -> String {
    let mut out = String::new();
    let mut pending_space = false;
    for ch in label.trim().nfkd() {
        if is_combining_mark(ch) {
            continue;
        }
        if ch.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.extend(ch.to_lowercase());
        } else {
            pending_space = true;
        }
    }
    out
}
