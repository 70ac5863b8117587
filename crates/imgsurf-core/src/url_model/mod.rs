//! URL modeling and filename derivation.
//!
//! Derives a safe local filename for each discovered image: last URL path
//! segment or a synthesized `image_<n>.jpg`, sanitized, then made unique
//! against what is already in the output directory.

mod path;
mod sanitize;
mod unique;

pub use path::filename_from_url_path;
pub use sanitize::sanitize_filename;
pub use unique::{split_extension, unique_path};

/// Extension used for synthesized names when the URL yields nothing usable.
const FALLBACK_EXTENSION: &str = "jpg";

/// Name used when the URL has no final path segment with an extension.
pub fn synthesized_filename(index: usize) -> String {
    format!("image_{}.{}", index, FALLBACK_EXTENSION)
}

/// Derives a sanitized filename for the image at 1-based discovery `index`.
///
/// Uses the last path segment of `url`; falls back to `image_<index>.jpg`
/// when that segment is empty or has no `.`.
///
/// # Examples
///
/// - `derive_filename("https://ex.com/a/cat.png", 1)` → `"cat.png"`
/// - `derive_filename("https://ex.com/download?id=5", 3)` → `"image_3.jpg"`
pub fn derive_filename(url: &str, index: usize) -> String {
    let raw = filename_from_url_path(url)
        .filter(|segment| segment.contains('.'))
        .unwrap_or_else(|| synthesized_filename(index));
    sanitize_filename(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_filename_from_url_path() {
        assert_eq!(derive_filename("https://ex.com/a/cat.png", 1), "cat.png");
        assert_eq!(
            derive_filename("https://cdn.ex.com/img/2024/banner.webp", 7),
            "banner.webp"
        );
    }

    #[test]
    fn derive_filename_without_extension_is_synthesized() {
        assert_eq!(derive_filename("https://ex.com/download?id=5", 3), "image_3.jpg");
        assert_eq!(derive_filename("https://ex.com/photos/raw", 2), "image_2.jpg");
    }

    #[test]
    fn derive_filename_empty_segment_is_synthesized() {
        assert_eq!(derive_filename("https://ex.com/", 1), "image_1.jpg");
        assert_eq!(derive_filename("https://ex.com/gallery/", 4), "image_4.jpg");
    }

    #[test]
    fn derive_filename_unparseable_url_is_synthesized() {
        assert_eq!(derive_filename("not a url", 9), "image_9.jpg");
    }

    #[test]
    fn derive_filename_is_sanitized() {
        assert_eq!(
            derive_filename("https://ex.com/weird:name%3F.png", 1),
            "weird_name%3F.png"
        );
    }
}
