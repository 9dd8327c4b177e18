//! Recursive file tree copy and removal
//!
//! Neither operation is transactional: a failure partway leaves a partial
//! tree, and convergence is reached by re-running the install.

use std::path::Path;

use walkdir::WalkDir;

use crate::error::{Result, SkillpackError};

fn copy_error(path: &Path, reason: impl ToString) -> SkillpackError {
    SkillpackError::CopyFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Copy the whole tree at `src` into `dest`, creating `dest` and any missing
/// ancestors, overwriting files that already exist. No-op when `src` is absent.
pub fn copy_tree(src: &Path, dest: &Path) -> Result<()> {
    if !src.exists() {
        return Ok(());
    }

    std::fs::create_dir_all(dest).map_err(|e| copy_error(dest, e))?;

    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry.map_err(|e| copy_error(src, e))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| copy_error(entry.path(), e))?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target).map_err(|e| copy_error(&target, e))?;
        } else {
            std::fs::copy(entry.path(), &target).map_err(|e| copy_error(&target, e))?;
        }
    }

    Ok(())
}

/// Delete the tree at `dir` bottom-up, then `dir` itself. No-op when absent.
pub fn remove_tree(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Ok(());
    }

    std::fs::remove_dir_all(dir).map_err(|e| SkillpackError::RemoveFailed {
        path: dir.display().to_string(),
        reason: e.to_string(),
    })
}
