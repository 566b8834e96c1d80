//! `thumbgrab batch [file]` – thumbnails for every URL in a list.

use anyhow::Result;
use std::path::Path;
use thumbgrab_core::batch;
use thumbgrab_core::config::ThumbgrabConfig;
use thumbgrab_core::Downloader;

pub fn run_batch(cfg: &ThumbgrabConfig, file: &Path) -> Result<()> {
    let downloader = Downloader::new(cfg);
    tracing::info!(
        "batch from {} into {}",
        file.display(),
        downloader.output_dir().display()
    );
    batch::download_thumbnails_from_file(file, &downloader)
}
