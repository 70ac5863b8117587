//! Run orchestration: load page, extract candidates, name and download each.
//!
//! Strictly sequential. Page load and extraction errors abort the run;
//! naming and download errors are recorded per candidate and the run
//! continues with the next one. Console output is left to the caller,
//! which is notified through [`RunEvent`]s as the run progresses.

mod summary;

pub use summary::{FailedImage, FailureStage, RunSummary, SavedImage};

use crate::downloader::ImageFetcher;
use crate::extract::{extract_image_urls, ImageCandidates};
use crate::page::PageSource;
use crate::url_model::{derive_filename, unique_path};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Settings for one run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub output_dir: PathBuf,
    /// Pause after every download attempt.
    pub request_delay: Duration,
}

/// Progress notification emitted while a run is underway.
#[derive(Debug, Clone, Copy)]
pub enum RunEvent<'a> {
    /// Extraction finished with this many unique candidates.
    CandidatesFound(usize),
    Saved(&'a SavedImage),
    Failed(&'a FailedImage),
}

/// Loads `page_url` through `page` and returns the image candidates on it.
///
/// Relative references resolve against the document URL the page source
/// reports, which differs from `page_url` after a redirect.
pub fn collect_candidates(page: &mut dyn PageSource, page_url: &Url) -> Result<ImageCandidates> {
    tracing::info!(url = %page_url, "loading page");
    let snapshot = page
        .load(page_url)
        .with_context(|| format!("failed to load {}", page_url))?;
    if snapshot.url != *page_url {
        tracing::info!(from = %page_url, to = %snapshot.url, "page was redirected");
    }
    Ok(extract_image_urls(&snapshot.html, &snapshot.url))
}

/// Runs the full pipeline and returns what was saved and what failed.
pub fn run(
    page: &mut dyn PageSource,
    fetcher: &ImageFetcher,
    page_url: &Url,
    opts: &RunOptions,
    progress: &mut dyn FnMut(RunEvent<'_>),
) -> Result<RunSummary> {
    fs::create_dir_all(&opts.output_dir)
        .with_context(|| format!("create output dir {}", opts.output_dir.display()))?;

    let candidates = collect_candidates(page, page_url)?;
    tracing::info!(found = candidates.len(), "image candidates collected");
    progress(RunEvent::CandidatesFound(candidates.len()));

    let mut summary = RunSummary {
        found: candidates.len(),
        output_dir: std::path::absolute(&opts.output_dir)
            .unwrap_or_else(|_| opts.output_dir.clone()),
        ..RunSummary::default()
    };

    for (i, url) in candidates.iter().enumerate() {
        let index = i + 1;
        match process_candidate(fetcher, url, index, &opts.output_dir) {
            Ok(saved) => {
                progress(RunEvent::Saved(&saved));
                summary.saved.push(saved);
            }
            Err(failed) => {
                progress(RunEvent::Failed(&failed));
                summary.failed.push(failed);
            }
        }
        if !opts.request_delay.is_zero() {
            std::thread::sleep(opts.request_delay);
        }
    }

    tracing::info!(
        found = summary.found,
        downloaded = summary.downloaded(),
        failed = summary.failed.len(),
        "run finished"
    );
    Ok(summary)
}

fn process_candidate(
    fetcher: &ImageFetcher,
    url: &str,
    index: usize,
    output_dir: &Path,
) -> Result<SavedImage, FailedImage> {
    let filename = derive_filename(url, index);
    let dest = unique_path(output_dir, &filename).map_err(|e| {
        tracing::warn!(index, url, "could not pick a filename: {}", e);
        FailedImage {
            index,
            url: url.to_string(),
            stage: FailureStage::Naming,
            reason: e.to_string(),
        }
    })?;

    match fetcher.download_to(url, &dest) {
        Ok(bytes) => Ok(SavedImage {
            index,
            url: url.to_string(),
            path: dest,
            bytes,
        }),
        Err(e) => {
            if e.is_timeout() {
                tracing::warn!(index, url, timeout = ?fetcher.timeout(), "download timed out");
            } else {
                tracing::warn!(index, url, "download failed: {}", e);
            }
            Err(FailedImage {
                index,
                url: url.to_string(),
                stage: FailureStage::Download,
                reason: e.to_string(),
            })
        }
    }
}
