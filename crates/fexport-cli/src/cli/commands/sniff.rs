//! `fexport sniff <path>` – detect a file type from its magic bytes.

use anyhow::{Context, Result};
use fexport_core::sniff::{sniff, SNIFF_LEN};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Prints the detected extension, or `unknown`. Returns `Ok(false)` when nothing matched.
pub fn run_sniff(path: &Path) -> Result<bool> {
    let mut head = Vec::with_capacity(SNIFF_LEN);
    File::open(path)
        .with_context(|| format!("open {}", path.display()))?
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut head)
        .with_context(|| format!("read {}", path.display()))?;

    match sniff(&head) {
        Some(ext) => {
            println!("{}  {}", ext, path.display());
            Ok(true)
        }
        None => {
            println!("unknown  {}", path.display());
            Ok(false)
        }
    }
}
