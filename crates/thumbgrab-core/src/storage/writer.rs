//! Sequential writer for a thumbnail's temp file.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes streamed image bytes to `<final>.part`, then renames onto the final path.
pub struct ThumbnailWriter {
    file: BufWriter<File>,
    temp_path: PathBuf,
    final_path: PathBuf,
}

impl ThumbnailWriter {
    /// Create the parent directory if needed and open a fresh temp file for `final_path`.
    /// Truncates a leftover temp file from an earlier run.
    pub fn create(final_path: &Path) -> io::Result<Self> {
        if let Some(parent) = final_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let temp_path = super::part_path(final_path);
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)?;
        Ok(ThumbnailWriter {
            file: BufWriter::new(file),
            temp_path,
            final_path: final_path.to_path_buf(),
        })
    }

    /// Append one chunk.
    pub fn write_chunk(&mut self, data: &[u8]) -> io::Result<()> {
        self.file.write_all(data)
    }

    /// Path to the current temp file.
    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    /// Flush and rename the temp file onto the final path, replacing any existing file.
    ///
    /// On any error the temp file is removed before returning, so a failed
    /// finalize leaves neither a `.part` file nor a changed final file.
    pub fn finalize(self) -> io::Result<PathBuf> {
        let ThumbnailWriter {
            file,
            temp_path,
            final_path,
        } = self;
        let committed = file
            .into_inner()
            .map_err(|e| e.into_error())
            .and_then(|f| f.sync_all())
            .and_then(|()| fs::rename(&temp_path, &final_path));
        match committed {
            Ok(()) => Ok(final_path),
            Err(e) => {
                remove_temp(&temp_path);
                Err(e)
            }
        }
    }

    /// Drop the temp file after a failed transfer. The final path is never touched.
    pub fn abort(self) {
        drop(self.file);
        remove_temp(&self.temp_path);
    }
}

fn remove_temp(temp_path: &Path) {
    if let Err(e) = fs::remove_file(temp_path) {
        tracing::warn!("could not remove {}: {}", temp_path.display(), e);
    }
}
