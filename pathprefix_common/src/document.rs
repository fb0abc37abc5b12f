use std::{fs, path::Path};

use crate::error::{Result, RewriteError};

/// Reads the whole file as UTF-8 text.
pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| RewriteError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Truncates the file and writes `contents` in one call. Not atomic: a failure part way through
/// can leave a partial file behind.
pub fn write_document(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| RewriteError::Write {
        path: path.to_path_buf(),
        source,
    })
}
