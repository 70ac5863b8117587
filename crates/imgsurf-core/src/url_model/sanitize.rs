//! Filename sanitization.

/// Characters that are unsafe in filenames on common filesystems.
const UNSAFE_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Replaces every character in `< > : " / \ | ? *` with `_`.
///
/// Nothing else is touched: no trimming, no collapsing, no length limit.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| if UNSAFE_CHARS.contains(&c) { '_' } else { c })
        .collect()
}
