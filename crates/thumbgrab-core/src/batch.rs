//! Batch driver: one URL per line, processed sequentially.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::thumbnail::Downloader;

/// Calls `handle` for every non-blank line of `reader`, trimmed, in order.
/// Returns `(lines handled, handler successes)`.
pub fn for_each_url<R, F>(reader: R, mut handle: F) -> Result<(usize, usize)>
where
    R: BufRead,
    F: FnMut(&str) -> bool,
{
    let mut seen = 0usize;
    let mut ok = 0usize;
    for line in reader.lines() {
        let line = line.context("read input line")?;
        let url = line.trim();
        if url.is_empty() {
            continue;
        }
        seen += 1;
        if handle(url) {
            ok += 1;
        }
    }
    Ok((seen, ok))
}

/// Downloads the thumbnail for every URL listed in `path`.
///
/// Per-URL failures are reported and skipped; only failing to open or read
/// the list itself is an error.
pub fn download_thumbnails_from_file(path: &Path, downloader: &Downloader) -> Result<()> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let (seen, saved) = for_each_url(BufReader::new(file), |url| {
        downloader.download_thumbnail(url, None)
    })?;
    tracing::info!(
        "processed {} url(s) from {}: {} saved, {} failed",
        seen,
        path.display(),
        saved,
        seen - saved
    );
    Ok(())
}
