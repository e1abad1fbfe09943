use std::sync::LazyLock;

use regex::Regex;

/// Connective "ou" (or) between whitespace, case-insensitive.
static ALTERNATIVE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+ou\s+").expect("alternative separator pattern"));

/// Split a meal protocol into food-item phrases.
///
/// Entries are separated by `;`. Each entry that lists alternatives
/// ("100g arroz ou 120g batata") contributes only its first alternative.
pub fn tokenize(protocol: &str) -> Vec<String> {
    tokenize_with(protocol, false)
}

/// Like [`tokenize`], optionally treating line breaks as entry separators too.
pub fn tokenize_with(protocol: &str, split_on_newlines: bool) -> Vec<String> {
    protocol
        .split(|c: char| c == ';' || (split_on_newlines && c == '\n'))
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| {
            if has_alternatives(entry) {
                log::debug!("keeping first alternative of '{}'", entry);
            }
            clean_phrase(first_alternative(entry))
        })
        .collect()
}

/// First alternative of an entry; the entry itself if it has none.
pub fn first_alternative(entry: &str) -> &str {
    // `split` always yields at least one segment
    ALTERNATIVE_SEPARATOR.split(entry).next().unwrap_or(entry)
}

/// Whether an entry lists mutually exclusive alternatives.
pub fn has_alternatives(entry: &str) -> bool {
    ALTERNATIVE_SEPARATOR.is_match(entry)
}

/// Strip a leading `+` concatenation marker and surrounding whitespace.
fn clean_phrase(segment: &str) -> Option<String> {
    let segment = segment.trim();
    let segment = segment.strip_prefix('+').unwrap_or(segment).trim();

    if segment.is_empty() {
        None
    } else {
        Some(segment.to_string())
    }
}
