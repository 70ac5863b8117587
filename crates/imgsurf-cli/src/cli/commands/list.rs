//! `imgsurf list [URL]` – print discovered image URLs without downloading.

use anyhow::Result;
use imgsurf_core::config::ImgsurfConfig;
use imgsurf_core::page::{ChromeOptions, ChromePage};
use imgsurf_core::pipeline;

use super::page_url_or_prompt;

pub fn run_list(cfg: &ImgsurfConfig, url: Option<String>) -> Result<()> {
    let (page_url, _) = page_url_or_prompt(url)?;

    let mut page = ChromePage::launch(ChromeOptions::from_config(cfg))?;
    println!("Loading website: {}", page_url);
    let result = pipeline::collect_candidates(&mut page, &page_url);
    drop(page);

    let candidates = result?;
    for url in candidates.iter() {
        println!("{}", url);
    }
    println!("Found {} unique images", candidates.len());
    Ok(())
}
