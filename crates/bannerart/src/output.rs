//! Writing rendered art to a file.

use std::fs;
use std::path::Path;

use crate::error::{BannerError, Result};

/// Saves rendered output to `path`, creating or truncating the file.
pub fn save_to_file(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, content).map_err(|e| BannerError::Write(format!("{}: {e}", path.display())))
}
