//! Skill source reader
//!
//! Enumerates the skill bundles shipped with this package and parses the
//! metadata header out of each bundle's `SKILL.md`.
//!
//! The header format is deliberately relaxed rather than full YAML: a block
//! between two `---` lines at the very start of the document, holding
//! `name:` and `description:` lines. A `description:` whose value is a bare
//! `|` (or empty) starts a multi-line block where every subsequent indented
//! line is trimmed and joined with single spaces. `|-`/`|+` are treated as
//! plain scalars; matching the long-standing installer behavior matters more
//! than YAML compliance here.

use std::path::{Path, PathBuf};

use crate::error::{Result, SkillpackError};

/// Description document expected inside every bundle directory.
pub const SKILL_DOC: &str = "SKILL.md";

/// Placeholder used when a bundle has no description field at all.
pub const DEFAULT_DESCRIPTION: &str = "No description available";

/// Display name and description parsed from a bundle's `SKILL.md` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillMetadata {
    pub name: String,
    pub description: String,
}

/// The directory of skill bundles distributed by this package.
#[derive(Debug, Clone)]
pub struct SkillSource {
    root: PathBuf,
}

impl SkillSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Locate the skill source: an explicit override, or the `skills/`
    /// directory shipped next to the running binary.
    pub fn locate(explicit: Option<PathBuf>) -> Self {
        if let Some(dir) = explicit {
            return Self::new(dir);
        }

        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));

        match exe_dir {
            Some(dir) => Self::new(dir.join("skills")),
            None => Self::new("skills"),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn bundle_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Names of all bundle directories in the source, in filesystem order.
    /// An absent source directory yields an empty list, not an error.
    pub fn bundle_names(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(&self.root).map_err(|e| SkillpackError::ListFailed {
            path: self.root.display().to_string(),
            reason: e.to_string(),
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SkillpackError::ListFailed {
                path: self.root.display().to_string(),
                reason: e.to_string(),
            })?;
            if entry.path().is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }

    /// Parse a bundle's metadata header. Returns `Ok(None)` when the bundle
    /// has no `SKILL.md`; a missing or malformed header degrades to defaults.
    pub fn bundle_metadata(&self, name: &str) -> Result<Option<SkillMetadata>> {
        let doc_path = self.bundle_path(name).join(SKILL_DOC);
        if !doc_path.exists() {
            return Ok(None);
        }

        let content =
            std::fs::read_to_string(&doc_path).map_err(|e| SkillpackError::FileReadFailed {
                path: doc_path.display().to_string(),
                reason: e.to_string(),
            })?;

        Ok(Some(parse_metadata(&content, name)))
    }
}

/// Extract name and description from a `---`-delimited header at the start of
/// `content`, defaulting both fields when the header or field is absent.
pub fn parse_metadata(content: &str, fallback_name: &str) -> SkillMetadata {
    let mut metadata = SkillMetadata {
        name: fallback_name.to_string(),
        description: DEFAULT_DESCRIPTION.to_string(),
    };

    let Some(header) = header_lines(content) else {
        return metadata;
    };

    if let Some(value) = field_value(&header, "name:") {
        if !value.is_empty() {
            metadata.name = value;
        }
    }

    if let Some(description) = parse_description(&header) {
        metadata.description = description;
    }

    metadata
}

/// Lines between the opening `---` and the next `---`, or `None` when the
/// document does not start with a header block.
fn header_lines(content: &str) -> Option<Vec<&str>> {
    let mut lines = content.lines();
    if lines.next()?.trim() != "---" {
        return None;
    }

    let mut header = Vec::new();
    for line in lines {
        if line.trim() == "---" {
            return Some(header);
        }
        header.push(line);
    }
    None
}

fn field_value(header: &[&str], field: &str) -> Option<String> {
    header
        .iter()
        .find_map(|line| line.strip_prefix(field))
        .map(|rest| rest.trim().to_string())
}

fn parse_description(header: &[&str]) -> Option<String> {
    let index = header
        .iter()
        .position(|line| line.starts_with("description:"))?;
    let value = header[index]["description:".len()..].trim();

    // Only a bare `|` (or nothing) switches to block mode.
    if value != "|" && !value.is_empty() {
        return Some(value.to_string());
    }

    let continuation: Vec<&str> = header[index + 1..]
        .iter()
        .take_while(|line| line.starts_with([' ', '\t']))
        .map(|line| line.trim())
        .collect();

    if continuation.is_empty() {
        None
    } else {
        Some(continuation.join(" "))
    }
}
