//! Image URL discovery over a rendered DOM snapshot.
//!
//! Walks `<img>` elements (`src` and lazy-load `data-src`) and elements whose
//! inline style carries a `background-image`, resolves each reference against
//! the document base (first `<base href>`, else the page URL), keeps only
//! image extensions, and dedups by exact string.

mod candidates;
mod resolve;
mod style;

pub use candidates::ImageCandidates;
pub use resolve::{has_image_extension, resolve_image_url, resolve_reference, IMAGE_EXTENSIONS};
pub use style::background_image_url;

use scraper::{Html, Selector};
use url::Url;

/// Attributes read from every `<img>`, in order.
const IMG_SOURCE_ATTRS: [&str; 2] = ["src", "data-src"];

/// Base URL for relative references: the first `<base href>` resolved
/// against `page_url`, or `page_url` itself.
fn document_base(document: &Html, page_url: &Url) -> Url {
    let selector_base = Selector::parse("base[href]").expect("base selector");
    document
        .select(&selector_base)
        .next()
        .and_then(|el| el.value().attr("href"))
        .and_then(|href| resolve_reference(page_url, href))
        .unwrap_or_else(|| page_url.clone())
}

/// Extracts the deduplicated absolute image URLs referenced by `html`, a
/// document served from `page_url`.
pub fn extract_image_urls(html: &str, page_url: &Url) -> ImageCandidates {
    let document = Html::parse_document(html);
    let base = document_base(&document, page_url);
    let selector_img = Selector::parse("img").expect("img selector");
    let selector_bg =
        Selector::parse(r#"[style*="background-image"]"#).expect("background-image selector");

    let mut out = ImageCandidates::new();

    for img in document.select(&selector_img) {
        for attr in IMG_SOURCE_ATTRS {
            let Some(raw) = img.value().attr(attr) else {
                continue;
            };
            if let Some(url) = resolve_image_url(&base, raw) {
                out.insert(url);
            }
        }
    }

    for element in document.select(&selector_bg) {
        let Some(style) = element.value().attr("style") else {
            continue;
        };
        let Some(raw) = background_image_url(style) else {
            tracing::debug!(style, "no url() in background-image declaration");
            continue;
        };
        if let Some(url) = resolve_image_url(&base, raw) {
            out.insert(url);
        }
    }

    tracing::debug!(page = %base, found = out.len(), "extracted image candidates");
    out
}
