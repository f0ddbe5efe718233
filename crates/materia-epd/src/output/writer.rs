//! Writing synthesized documents.

use std::path::{Path, PathBuf};

use materia_core::errors::OutputError;

use super::copy::create_dir;

/// Write `contents` to `<out_dir>/<folder>/<uuid>.xml`.
pub fn write_document(
    out_dir: &Path,
    folder: &str,
    uuid: &str,
    contents: &str,
) -> Result<PathBuf, OutputError> {
    let dir = out_dir.join(folder);
    create_dir(&dir)?;
    let path = dir.join(format!("{uuid}.xml"));
    std::fs::write(&path, contents).map_err(|e| OutputError::Write {
        path: path.clone(),
        message: e.to_string(),
    })?;
    Ok(path)
}
