//! Copy a template dataset, leaving out its bulk folders.

use std::path::Path;

use walkdir::WalkDir;

use materia_core::errors::OutputError;

/// Copy `src` into `dst`, skipping top-level entries named in `excluded`.
/// When `dst` lies inside `src` it is skipped too. Returns the number of
/// files copied.
pub fn copy_except_folders(src: &Path, dst: &Path, excluded: &[String]) -> Result<usize, OutputError> {
    create_dir(dst)?;
    let dst_canonical = dst.canonicalize().ok();
    let mut copied = 0;

    let walker = WalkDir::new(src)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            let top_excluded = entry.depth() == 1
                && entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| excluded.iter().any(|e| e == name));
            let is_output = dst_canonical
                .as_deref()
                .is_some_and(|d| entry.path().canonicalize().ok().as_deref() == Some(d));
            !top_excluded && !is_output
        });

    for entry in walker {
        let entry = entry.map_err(|e| OutputError::Copy {
            from: src.to_path_buf(),
            to: dst.to_path_buf(),
            message: e.to_string(),
        })?;
        let relative = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            create_dir(&target)?;
        } else if entry.file_type().is_file() {
            std::fs::copy(entry.path(), &target).map_err(|e| OutputError::Copy {
                from: entry.path().to_path_buf(),
                to: target.clone(),
                message: e.to_string(),
            })?;
            copied += 1;
        }
    }

    tracing::debug!(from = %src.display(), to = %dst.display(), copied, "Template folders copied");
    Ok(copied)
}

pub(crate) fn create_dir(path: &Path) -> Result<(), OutputError> {
    std::fs::create_dir_all(path).map_err(|e| OutputError::CreateDir {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
