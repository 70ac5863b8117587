//! Filename extraction from URL path.

/// Returns the final segment of the URL path (text after the last `/`).
///
/// The segment is returned as it appears in the serialized URL, so
/// percent-escapes are kept. Returns `None` if the URL cannot be parsed or
/// the path ends in `/`.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().rsplit('/').next()?;
    if segment.is_empty() {
        return None;
    }
    Some(segment.to_string())
}
