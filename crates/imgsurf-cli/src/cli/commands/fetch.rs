//! `imgsurf fetch [URL]` – download every image a page references.

use anyhow::Result;
use imgsurf_core::config::ImgsurfConfig;
use imgsurf_core::downloader::ImageFetcher;
use imgsurf_core::page::{ChromeOptions, ChromePage};
use imgsurf_core::pipeline::{self, FailureStage, RunEvent, RunOptions, RunSummary};
use std::path::PathBuf;

use super::page_url_or_prompt;
use crate::cli::prompt;
use crate::cli::FetchArgs;

pub fn run_fetch(cfg: &ImgsurfConfig, args: FetchArgs) -> Result<()> {
    let (page_url, prompted) = page_url_or_prompt(args.url)?;
    let output_dir = resolve_output_dir(args.output, prompted, &cfg.default_output_dir, || {
        prompt::ask(&format!(
            "Enter output folder name (press Enter for '{}'): ",
            cfg.default_output_dir
        ))
    })?;

    let opts = RunOptions {
        output_dir,
        request_delay: cfg.request_delay(),
    };
    let fetcher = ImageFetcher::from_config(cfg);

    let mut page = ChromePage::launch(ChromeOptions::from_config(cfg))?;
    println!("Loading website: {}", page_url);
    let result = pipeline::run(&mut page, &fetcher, &page_url, &opts, &mut |ev| {
        println!("{}", event_line(&ev))
    });
    drop(page);

    print_summary(&result?);
    Ok(())
}

/// Picks the output folder: explicit flag, else the prompt answer (only when
/// the URL was prompted for too), else the configured default.
fn resolve_output_dir<F>(
    output: Option<PathBuf>,
    prompted: bool,
    default_dir: &str,
    ask: F,
) -> Result<PathBuf>
where
    F: FnOnce() -> Result<String>,
{
    if let Some(dir) = output {
        return Ok(dir);
    }
    if prompted {
        let answer = ask()?;
        if !answer.is_empty() {
            return Ok(PathBuf::from(answer));
        }
    }
    Ok(PathBuf::from(default_dir))
}

/// Console line for one progress event.
fn event_line(ev: &RunEvent<'_>) -> String {
    match ev {
        RunEvent::CandidatesFound(n) => format!("Found {} unique images", n),
        RunEvent::Saved(saved) => {
            let name = saved
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| saved.path.display().to_string());
            format!("Downloaded: {}", name)
        }
        RunEvent::Failed(failed) => match failed.stage {
            FailureStage::Naming => {
                format!("Error processing image {}: {}", failed.index, failed.reason)
            }
            FailureStage::Download => format!("Failed to download {}: {}", failed.url, failed.reason),
        },
    }
}

fn print_summary(summary: &RunSummary) {
    println!();
    println!("Download complete!");
    println!(
        "Successfully downloaded {} out of {} images",
        summary.downloaded(),
        summary.found
    );
    println!("Images saved to: {}", summary.output_dir.display());
}
