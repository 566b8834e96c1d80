//! Error taxonomy for a single thumbnail download.

use thiserror::Error;

/// Why one URL did not produce a saved thumbnail.
///
/// Every failure of the per-URL operation maps to exactly one variant; the
/// batch driver only ever sees these through the reporting wrapper.
#[derive(Debug, Error)]
pub enum ThumbnailError {
    /// Transport failure on the page or image request (DNS, connect, reset, ...).
    #[error("{0}")]
    Network(#[from] curl::Error),
    /// The page has no `<meta property=...>` element with a `content` attribute.
    #[error("Thumbnail URL not found. No {property} metadata in page")]
    MissingMetadata { property: String },
    /// Image response finished with a status other than 200.
    #[error("Status code {0}")]
    BadStatus(u32),
    /// Creating the output directory or writing the file failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl ThumbnailError {
    /// Console line for this failure on `url`.
    pub fn console_message(&self, url: &str) -> String {
        match self {
            ThumbnailError::MissingMetadata { .. } => format!("{}: {}", self, url),
            _ => format!("Error downloading thumbnail for {}: {}", url, self),
        }
    }
}
