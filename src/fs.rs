//! File output adapter.

use std::fs;
use std::path::Path;

use crate::error::FileError;

/// Writes `content` to `path`, replacing any existing content.
///
/// The content goes to a temp file in the target directory first and is
/// renamed into place, so an interrupted run never leaves a half-written
/// file behind.
pub fn write_output(path: &Path, content: &str) -> Result<(), FileError> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    fs::write(&temp_path, content).map_err(|err| FileError::classify(path, err))?;
    fs::rename(&temp_path, path).map_err(|err| FileError::classify(path, err))?;

    Ok(())
}
