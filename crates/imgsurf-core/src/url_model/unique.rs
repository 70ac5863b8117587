//! Collision avoidance against the output directory.

use std::io;
use std::path::{Path, PathBuf};

/// Splits `name` into stem and extension (with its leading `.`) at the last dot.
///
/// Leading dots do not start an extension, so `.hidden` has none.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(dot) if name[..dot].chars().any(|c| c != '.') => name.split_at(dot),
        _ => (name, ""),
    }
}

/// Returns a path in `dir` for `filename` that does not exist yet.
///
/// Tries `filename`, then `stem_1.ext`, `stem_2.ext`, … The check runs
/// against the real filesystem and is not atomic with the later write;
/// callers are expected to write sequentially.
pub fn unique_path(dir: &Path, filename: &str) -> io::Result<PathBuf> {
    let candidate = dir.join(filename);
    if !candidate.try_exists()? {
        return Ok(candidate);
    }
    let (stem, ext) = split_extension(filename);
    let mut counter = 1u64;
    loop {
        let candidate = dir.join(format!("{}_{}{}", stem, counter, ext));
        if !candidate.try_exists()? {
            return Ok(candidate);
        }
        counter += 1;
    }
}
