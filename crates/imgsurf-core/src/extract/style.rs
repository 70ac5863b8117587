//! `background-image: url(...)` extraction from inline style attributes.

use regex::Regex;
use std::sync::OnceLock;

fn background_image_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"background-image:\s*url\(["']?(.*?)["']?\)"#)
            .expect("background-image pattern")
    })
}

/// Returns the URL token of the first `background-image: url(...)` in `style`.
///
/// Surrounding single or double quotes are dropped. Malformed declarations
/// yield `None`.
pub fn background_image_url(style: &str) -> Option<&str> {
    let caps = background_image_re().captures(style)?;
    caps.get(1).map(|m| m.as_str())
}
