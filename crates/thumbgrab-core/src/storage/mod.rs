//! Thumbnail file lifecycle.
//!
//! Streamed bytes go to `<name>.part`; the final name only appears once the
//! transfer has completed (atomic rename), so a failed download never leaves
//! a truncated image under the final name.

mod writer;

pub use writer::ThumbnailWriter;

use std::path::{Path, PathBuf};

/// Suffix of the in-progress file next to the final one.
pub const TEMP_SUFFIX: &str = ".part";

/// `thumbnails/abc.jpg` → `thumbnails/abc.jpg.part`. Appends rather than
/// replacing the extension, so `watch?v=1.jpg` keeps its full name.
pub fn part_path(final_path: &Path) -> PathBuf {
    let mut name = final_path.as_os_str().to_owned();
    name.push(TEMP_SUFFIX);
    name.into()
}
