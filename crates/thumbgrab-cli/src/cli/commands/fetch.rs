//! `thumbgrab fetch <url>` – thumbnail for one page.

use anyhow::Result;
use thumbgrab_core::config::ThumbgrabConfig;
use thumbgrab_core::Downloader;

pub fn run_fetch(cfg: &ThumbgrabConfig, url: &str, filename: Option<&str>) -> Result<()> {
    let downloader = Downloader::new(cfg);
    if !downloader.download_thumbnail(url, filename) {
        anyhow::bail!("no thumbnail saved for {}", url);
    }
    Ok(())
}
