//! Headless Chrome page source (DevTools protocol via `headless_chrome`).

use super::{PageSnapshot, PageSource};
use crate::config::ImgsurfConfig;
use anyhow::{Context, Result};
use headless_chrome::{Browser, LaunchOptions};
use std::ffi::OsStr;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Scrolls to the bottom so lazy-loaded images get their sources assigned.
const SCROLL_TO_BOTTOM_JS: &str = "window.scrollTo(0, document.body.scrollHeight);";

/// Browser launch and page readiness settings.
#[derive(Debug, Clone)]
pub struct ChromeOptions {
    /// Upper bound for `<body>` to show up after navigation.
    pub page_load_timeout: Duration,
    /// Pause after scrolling before the DOM is captured.
    pub scroll_settle: Duration,
    /// Explicit browser binary; `None` lets the launcher search for one.
    pub chrome_path: Option<PathBuf>,
}

impl ChromeOptions {
    pub fn from_config(cfg: &ImgsurfConfig) -> Self {
        Self {
            page_load_timeout: cfg.page_load_timeout(),
            scroll_settle: cfg.scroll_settle(),
            chrome_path: cfg.chrome_path.clone(),
        }
    }
}

/// Owns a headless browser process for the duration of a run.
///
/// The browser is shut down when this value is dropped, on success and on
/// error alike.
pub struct ChromePage {
    browser: Browser,
    opts: ChromeOptions,
}

impl ChromePage {
    /// Starts a headless browser with sandbox and image loading disabled.
    pub fn launch(opts: ChromeOptions) -> Result<Self> {
        let args: Vec<&OsStr> = vec![
            OsStr::new("--disable-dev-shm-usage"),
            OsStr::new("--blink-settings=imagesEnabled=false"),
        ];
        let launch_options = LaunchOptions::default_builder()
            .headless(true)
            .sandbox(false)
            .path(opts.chrome_path.clone())
            .args(args)
            .build()
            .map_err(|e| anyhow::anyhow!("chrome launch options: {}", e))?;

        let browser = Browser::new(launch_options).context("failed to start headless browser")?;
        tracing::info!("headless browser started");
        Ok(Self { browser, opts })
    }
}

impl PageSource for ChromePage {
    fn load(&mut self, url: &Url) -> Result<PageSnapshot> {
        let tab = self.browser.new_tab().context("failed to open browser tab")?;
        tab.navigate_to(url.as_str())
            .with_context(|| format!("failed to navigate to {}", url))?;
        tab.wait_for_element_with_custom_timeout("body", self.opts.page_load_timeout)
            .with_context(|| format!("page body did not appear within {:?}", self.opts.page_load_timeout))?;

        tab.evaluate(SCROLL_TO_BOTTOM_JS, false)
            .context("scroll to bottom failed")?;
        std::thread::sleep(self.opts.scroll_settle);

        let html = tab.get_content().context("failed to read page DOM")?;
        let final_url = match Url::parse(&tab.get_url()) {
            Ok(u) => u,
            Err(e) => {
                tracing::debug!(url = %url, "tab reported unparseable URL: {}", e);
                url.clone()
            }
        };
        tracing::debug!(url = %final_url, bytes = html.len(), "captured DOM snapshot");
        if let Err(e) = tab.close(false) {
            tracing::debug!("closing tab failed: {}", e);
        }
        Ok(PageSnapshot {
            url: final_url,
            html,
        })
    }
}

impl Drop for ChromePage {
    fn drop(&mut self) {
        tracing::info!("releasing headless browser");
    }
}
