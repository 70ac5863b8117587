//! CLI command handlers, one per file.

mod fetch;
mod list;

pub use fetch::run_fetch;
pub use list::run_list;

use super::prompt;
use anyhow::Result;
use url::Url;

/// Uses `url` if given, otherwise asks for it. Returns the normalized page URL
/// and whether the user was prompted.
fn page_url_or_prompt(url: Option<String>) -> Result<(Url, bool)> {
    match url {
        Some(raw) => Ok((prompt::normalize_page_url(&raw)?, false)),
        None => {
            let raw = prompt::ask("Enter the website URL: ")?;
            Ok((prompt::normalize_page_url(&raw)?, true))
        }
    }
}
