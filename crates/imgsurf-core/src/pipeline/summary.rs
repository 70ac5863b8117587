//! Per-run result aggregation.

use std::path::PathBuf;

/// Why a single candidate was not saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStage {
    /// Picking a free filename in the output directory failed.
    Naming,
    /// The GET or the write failed.
    Download,
}

/// One candidate that did not make it to disk.
#[derive(Debug, Clone)]
pub struct FailedImage {
    pub index: usize,
    pub url: String,
    pub stage: FailureStage,
    pub reason: String,
}

/// One candidate written to disk.
#[derive(Debug, Clone)]
pub struct SavedImage {
    pub index: usize,
    pub url: String,
    pub path: PathBuf,
    pub bytes: u64,
}

/// Outcome of a full run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Unique candidates discovered on the page.
    pub found: usize,
    pub saved: Vec<SavedImage>,
    pub failed: Vec<FailedImage>,
    /// Absolute path of the output directory.
    pub output_dir: PathBuf,
}

impl RunSummary {
    pub fn downloaded(&self) -> usize {
        self.saved.len()
    }

    pub fn total_bytes(&self) -> u64 {
        self.saved.iter().map(|s| s.bytes).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_bytes() {
        let summary = RunSummary {
            found: 3,
            saved: vec![
                SavedImage {
                    index: 1,
                    url: "https://ex.com/a.png".into(),
                    path: PathBuf::from("a.png"),
                    bytes: 10,
                },
                SavedImage {
                    index: 3,
                    url: "https://ex.com/c.png".into(),
                    path: PathBuf::from("c.png"),
                    bytes: 5,
                },
            ],
            failed: vec![FailedImage {
                index: 2,
                url: "https://ex.com/b.png".into(),
                stage: FailureStage::Download,
                reason: "HTTP 404".into(),
            }],
            output_dir: PathBuf::from("/tmp/out"),
        };
        assert_eq!(summary.downloaded(), 2);
        assert_eq!(summary.total_bytes(), 15);
    }
}
