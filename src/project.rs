//! Project root discovery
//!
//! The installation target is resolved in priority order: explicit
//! `--workspace` flag, the `INIT_CWD` environment variable (set by package
//! managers to the directory the user ran them from), then a marker-file
//! search from the current working directory upward. Discovery never fails;
//! the working directory is always a valid fallback.

use std::path::{Path, PathBuf};

/// Marker file identifying a project root.
pub const PROJECT_MARKER: &str = "package.json";

/// Directory name of the dependency cache a root must not live inside.
pub const DEPENDENCY_CACHE_DIR: &str = "node_modules";

/// Environment variable holding the directory the package manager was invoked from.
pub const INIT_CWD_ENV: &str = "INIT_CWD";

/// Resolve the project root directory.
pub fn find_project_root(workspace: Option<PathBuf>) -> PathBuf {
    if let Some(path) = workspace {
        return dunce::canonicalize(&path).unwrap_or(path);
    }

    if let Ok(init_cwd) = std::env::var(INIT_CWD_ENV) {
        if !init_cwd.is_empty() {
            return PathBuf::from(init_cwd);
        }
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    discover_from(&cwd)
}

/// Marker-file search starting at `cwd`: the directory itself, then each
/// ancestor, falling back to `cwd` when no marker is found.
fn discover_from(cwd: &Path) -> PathBuf {
    if is_project_root(cwd) {
        return cwd.to_path_buf();
    }

    for ancestor in cwd.ancestors().skip(1) {
        if is_project_root(ancestor) {
            return ancestor.to_path_buf();
        }
    }

    cwd.to_path_buf()
}

/// A directory qualifies as project root when it carries the marker file and
/// is not nested inside the dependency cache.
fn is_project_root(dir: &Path) -> bool {
    dir.join(PROJECT_MARKER).exists() && !in_dependency_cache(dir)
}

fn in_dependency_cache(dir: &Path) -> bool {
    dir.components()
        .any(|c| c.as_os_str() == DEPENDENCY_CACHE_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_discover_in_marked_directory() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(PROJECT_MARKER), "{}").unwrap();

        assert_eq!(discover_from(temp.path()), temp.path());
    }

    #[test]
    fn test_discover_walks_up_to_marker() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(PROJECT_MARKER), "{}").unwrap();
        let nested = temp.path().join("deep/nested/dir");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(discover_from(&nested), temp.path());
    }

    #[test]
    fn test_discover_falls_back_to_start() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("no/marker/anywhere");
        std::fs::create_dir_all(&nested).unwrap();

        // Ancestors outside the temp dir may or may not carry a marker; only
        // assert the fallback when the whole chain is unmarked.
        let result = discover_from(&nested);
        assert!(result == nested || result.join(PROJECT_MARKER).exists());
    }

    #[test]
    fn test_dependency_cache_is_skipped() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(PROJECT_MARKER), "{}").unwrap();
        let vendored = temp.path().join("node_modules/some-package");
        std::fs::create_dir_all(&vendored).unwrap();
        std::fs::write(vendored.join(PROJECT_MARKER), "{}").unwrap();

        // The marker inside node_modules must not win over the real root.
        assert_eq!(discover_from(&vendored), temp.path());
    }

    #[test]
    fn test_explicit_workspace_wins() {
        let temp = TempDir::new().unwrap();
        let root = find_project_root(Some(temp.path().to_path_buf()));
        assert_eq!(
            dunce::canonicalize(&root).unwrap(),
            dunce::canonicalize(temp.path()).unwrap()
        );
    }

    #[test]
    fn test_in_dependency_cache() {
        assert!(in_dependency_cache(Path::new(
            "/proj/node_modules/pkg/skills"
        )));
        assert!(!in_dependency_cache(Path::new("/proj/src")));
    }
}
