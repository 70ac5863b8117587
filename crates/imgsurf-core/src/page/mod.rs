//! Page loading: turns a page URL into a rendered DOM snapshot.
//!
//! [`ChromePage`] drives a real headless browser; [`StaticPage`] serves fixed
//! HTML and stands in for the browser in tests.

mod chrome;

pub use chrome::{ChromeOptions, ChromePage};

use anyhow::Result;
use url::Url;

/// Rendered document and the URL it was finally served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSnapshot {
    /// Document URL after redirects; relative references resolve against it.
    pub url: Url,
    pub html: String,
}

/// Something that can load a page and hand back its DOM as HTML.
pub trait PageSource {
    /// Loads `url` and returns the serialized document after lazy content had
    /// a chance to attach.
    fn load(&mut self, url: &Url) -> Result<PageSnapshot>;
}

/// Page source that returns the same HTML for every URL.
#[derive(Debug, Clone, Default)]
pub struct StaticPage {
    html: String,
    redirect: Option<Url>,
    loaded: Vec<Url>,
}

impl StaticPage {
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            redirect: None,
            loaded: Vec::new(),
        }
    }

    /// Reports `url` as the final document URL, as if the load was redirected.
    pub fn redirected_to(mut self, url: Url) -> Self {
        self.redirect = Some(url);
        self
    }

    /// URLs passed to `load`, in call order.
    pub fn loaded(&self) -> &[Url] {
        &self.loaded
    }
}

impl PageSource for StaticPage {
    fn load(&mut self, url: &Url) -> Result<PageSnapshot> {
        self.loaded.push(url.clone());
        Ok(PageSnapshot {
            url: self.redirect.clone().unwrap_or_else(|| url.clone()),
            html: self.html.clone(),
        })
    }
}
