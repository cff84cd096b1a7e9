//! Filesystem sink: write to a unique `.<name>.XXXXXX.part` temp file, then
//! atomically rename it over the final path.

use super::Sink;
use crate::filename::sanitize_for_disk;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Persists exports under a fixed directory.
#[derive(Debug, Clone)]
pub struct FileSystemSink {
    dir: PathBuf,
}

impl FileSystemSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Bytes of the final name kept in the temp file's name; leaves room for the
/// random part and suffix under NAME_MAX.
const TEMP_STEM_MAX: usize = 200;

/// Creates a fresh temp file next to the final file. Each call gets its own
/// name, so concurrent writes of the same filename never share a temp path.
fn temp_file_in(dir: &Path, name: &str) -> io::Result<NamedTempFile> {
    let mut end = name.len().min(TEMP_STEM_MAX);
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    tempfile::Builder::new()
        .prefix(&format!(".{}.", &name[..end]))
        .suffix(TEMP_SUFFIX)
        .tempfile_in(dir)
}

impl Sink for FileSystemSink {
    fn persist(&self, filename: &str, bytes: &[u8]) -> io::Result<Option<PathBuf>> {
        let name = sanitize_for_disk(filename).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("unusable filename: {:?}", filename),
            )
        })?;
        if name != filename {
            tracing::debug!(resolved = %filename, on_disk = %name, "sanitized filename for disk");
        }

        // Created on every write; tolerates an existing directory.
        fs::create_dir_all(&self.dir)?;

        let final_path = self.dir.join(&name);
        // Dropping the temp file on an early return removes it.
        let mut tmp = temp_file_in(&self.dir, &name)?;
        tmp.write_all(bytes)?;
        tmp.as_file().sync_all()?;
        // Last rename wins when several exports share a name.
        tmp.persist(&final_path).map_err(|e| e.error)?;
        Ok(Some(final_path))
    }
}
