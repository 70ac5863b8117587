//! Relative reference resolution and image-extension filtering.

use url::Url;

/// Extensions accepted as images, compared case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 7] = [".jpg", ".jpeg", ".png", ".gif", ".bmp", ".webp", ".svg"];

/// Resolves `reference` against `base`. Empty or whitespace-only references
/// and references the URL parser rejects yield `None`.
pub fn resolve_reference(base: &Url, reference: &str) -> Option<Url> {
    let reference = reference.trim();
    if reference.is_empty() {
        return None;
    }
    match base.join(reference) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::debug!(reference, "skipping unresolvable reference: {}", e);
            None
        }
    }
}

/// True if the serialized URL ends with a recognized image extension.
///
/// The match is on the end of the whole URL, so `img.png?v=2` is rejected.
pub fn has_image_extension(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Resolves `reference` and keeps it only if it names an image.
pub fn resolve_image_url(base: &Url, reference: &str) -> Option<String> {
    let absolute = resolve_reference(base, reference)?;
    let absolute = String::from(absolute);
    if has_image_extension(&absolute) {
        Some(absolute)
    } else {
        None
    }
}
