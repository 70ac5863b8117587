//! Single-GET image downloader.
//!
//! Fetches the whole body with one libcurl request (browser User-Agent,
//! fixed timeout, redirects followed) and writes it to the destination path.

mod error;

pub use error::FetchError;

use crate::config::ImgsurfConfig;
use std::fs;
use std::path::Path;
use std::time::Duration;

const MAX_REDIRECTIONS: u32 = 10;

/// HTTP client settings shared by every image request of a run.
#[derive(Debug, Clone)]
pub struct ImageFetcher {
    user_agent: String,
    timeout: Duration,
}

impl ImageFetcher {
    pub fn new(user_agent: impl Into<String>, timeout: Duration) -> Self {
        Self {
            user_agent: user_agent.into(),
            timeout,
        }
    }

    pub fn from_config(cfg: &ImgsurfConfig) -> Self {
        Self::new(cfg.user_agent.clone(), cfg.request_timeout())
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// GETs `url` and returns the full response body.
    /// Any non-2xx final status is an error.
    pub fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.useragent(&self.user_agent)?;
        easy.follow_location(true)?;
        easy.max_redirections(MAX_REDIRECTIONS)?;
        easy.timeout(self.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http(code));
        }
        Ok(body)
    }

    /// Fetches `url` and writes the body to `dest`, replacing any existing file.
    /// Returns the number of bytes written.
    pub fn download_to(&self, url: &str, dest: &Path) -> Result<u64, FetchError> {
        let body = self.fetch(url)?;
        fs::write(dest, &body).map_err(|source| FetchError::Write {
            path: dest.to_path_buf(),
            source,
        })?;
        tracing::debug!(url, path = %dest.display(), bytes = body.len(), "image saved");
        Ok(body.len() as u64)
    }
}
