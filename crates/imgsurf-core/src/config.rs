use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Browser-identifying header sent with every image request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Folder used when the user gives no output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "downloaded_images";

/// Global configuration loaded from `~/.config/imgsurf/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImgsurfConfig {
    /// Output folder used when none is given on the command line or at the prompt.
    pub default_output_dir: String,
    /// Timeout in seconds for each image GET.
    pub request_timeout_secs: u64,
    /// Pause in milliseconds after each image attempt (success or failure).
    pub request_delay_ms: u64,
    /// How long to wait for the page `body` to appear.
    pub page_load_timeout_secs: u64,
    /// Pause in milliseconds after scrolling so lazy content can attach.
    pub scroll_settle_ms: u64,
    /// User-Agent header for image requests.
    pub user_agent: String,
    /// Chrome/Chromium binary; auto-detected when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome_path: Option<PathBuf>,
}

impl Default for ImgsurfConfig {
    fn default() -> Self {
        Self {
            default_output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            request_timeout_secs: 10,
            request_delay_ms: 500,
            page_load_timeout_secs: 10,
            scroll_settle_ms: 2000,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            chrome_path: None,
        }
    }
}

impl ImgsurfConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    pub fn page_load_timeout(&self) -> Duration {
        Duration::from_secs(self.page_load_timeout_secs)
    }

    pub fn scroll_settle(&self) -> Duration {
        Duration::from_millis(self.scroll_settle_ms)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgsurf")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ImgsurfConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ImgsurfConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ImgsurfConfig = toml::from_str(&data)?;
    Ok(cfg)
}
