//! Per-URL fetch-and-save: page → preview meta → streamed image → file.

use crate::config::ThumbgrabConfig;
use crate::error::ThumbnailError;
use crate::http::{self, HttpOptions};
use crate::naming;
use crate::preview;
use crate::storage::ThumbnailWriter;
use std::path::{Path, PathBuf};

/// Downloads thumbnails into one output directory.
#[derive(Debug, Clone)]
pub struct Downloader {
    output_dir: PathBuf,
    image_extension: String,
    preview_property: String,
    http: HttpOptions,
}

impl Downloader {
    pub fn new(cfg: &ThumbgrabConfig) -> Self {
        Self {
            output_dir: cfg.output_dir.clone(),
            image_extension: cfg.image_extension.clone(),
            preview_property: cfg.preview_property.clone(),
            http: HttpOptions {
                buffer_size: cfg.buffer_size,
            },
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Fetches `url`, finds its preview image and saves it, returning the saved path.
    ///
    /// The file is named `filename` if given, else after the last segment of
    /// `url`; either way it ends in the configured extension. Nothing is
    /// created on disk unless the image response is a 200.
    pub fn fetch_thumbnail(
        &self,
        url: &str,
        filename: Option<&str>,
    ) -> Result<PathBuf, ThumbnailError> {
        tracing::debug!(url, "fetching page");
        let page = http::fetch_page(url, &self.http)?;
        let html = String::from_utf8_lossy(&page);

        let reference = preview::find_preview_image(&html, &self.preview_property).ok_or_else(
            || ThumbnailError::MissingMetadata {
                property: self.preview_property.clone(),
            },
        )?;
        let image_url = preview::resolve_image_url(url, &reference);
        tracing::debug!(url, image_url = %image_url, "found preview image");

        let name = naming::derive_filename(url, filename, &self.image_extension);
        let dest = self.output_dir.join(name);
        self.save_image(&image_url, &dest)
    }

    /// Streams `image_url` into `dest`. The writer is opened on the first chunk.
    fn save_image(&self, image_url: &str, dest: &Path) -> Result<PathBuf, ThumbnailError> {
        let mut writer: Option<ThumbnailWriter> = None;
        let streamed = http::stream_body(image_url, &self.http, |chunk| {
            let w = match writer {
                Some(ref mut w) => w,
                None => writer.insert(ThumbnailWriter::create(dest)?),
            };
            w.write_chunk(chunk)
        });

        match streamed {
            Ok(()) => {
                // A 200 with an empty body never called the sink.
                let w = match writer {
                    Some(w) => w,
                    None => ThumbnailWriter::create(dest)?,
                };
                Ok(w.finalize()?)
            }
            Err(e) => {
                if let Some(w) = writer {
                    w.abort();
                }
                Err(e)
            }
        }
    }

    /// Runs [`Downloader::fetch_thumbnail`] and reports the outcome on the console.
    ///
    /// Never propagates an error: every failure becomes `false` plus one line.
    pub fn download_thumbnail(&self, url: &str, filename: Option<&str>) -> bool {
        match self.fetch_thumbnail(url, filename) {
            Ok(path) => {
                tracing::info!(url, path = %path.display(), "saved thumbnail");
                println!(
                    "Downloaded thumbnail for: {} saved as: {}",
                    url,
                    path.display()
                );
                true
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "thumbnail download failed");
                println!("{}", e.console_message(url));
                false
            }
        }
    }
}
