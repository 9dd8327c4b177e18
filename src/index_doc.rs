//! Shared skill index document patching
//!
//! The index file mixes free-form human content with exactly one
//! machine-owned region delimited by marker comments. Install regenerates the
//! region wholesale; uninstall strips it and normalizes the blank lines left
//! behind. Content outside the markers is never touched.

use std::path::Path;

use crate::error::{Result, SkillpackError};
use crate::source::SkillMetadata;

pub const MARKER_START: &str = "<!-- SKILLPACK:START -->";
pub const MARKER_END: &str = "<!-- SKILLPACK:END -->";

/// File name of the shared index document inside the rules directory.
pub const INDEX_FILE: &str = "skills.md";

/// One row of the generated skill table.
#[derive(Debug, Clone)]
pub struct IndexEntry {
    pub metadata: SkillMetadata,
    /// Link to the bundle's SKILL.md, relative to the index document.
    pub link: String,
}

/// Render the full managed region, markers inclusive.
pub fn render_managed_block(entries: &[IndexEntry]) -> String {
    let mut block = String::new();
    block.push_str(MARKER_START);
    block.push_str("\n\n## Installed skills\n\n");
    block.push_str("| Skill | Description |\n");
    block.push_str("| ----- | ----------- |\n");
    for entry in entries {
        block.push_str(&format!(
            "| [{}]({}) | {} |\n",
            entry.metadata.name, entry.link, entry.metadata.description
        ));
    }
    block.push('\n');
    block.push_str(MARKER_END);
    block
}

fn read_error(path: &Path, e: std::io::Error) -> SkillpackError {
    SkillpackError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

fn write_error(path: &Path, e: std::io::Error) -> SkillpackError {
    SkillpackError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

fn write_index(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;
    }
    std::fs::write(path, content).map_err(|e| write_error(path, e))
}

/// Byte range of the managed region (markers inclusive), when present exactly
/// in start-before-end order.
fn managed_region(content: &str) -> Option<std::ops::Range<usize>> {
    let start = content.find(MARKER_START)?;
    let end = content[start..].find(MARKER_END)? + start + MARKER_END.len();
    Some(start..end)
}

/// Replace the managed region of the index document with `block`, appending
/// it after existing content when no region exists, or creating the file.
pub fn upsert_managed_section(index_path: &Path, block: &str) -> Result<()> {
    if !index_path.exists() {
        let content = format!(
            "---\ndescription: Index of skills installed in this project\n---\n\n# Skills\n\n{block}\n"
        );
        return write_index(index_path, &content);
    }

    let existing = std::fs::read_to_string(index_path).map_err(|e| read_error(index_path, e))?;

    let content = match managed_region(&existing) {
        Some(region) => {
            let mut updated = String::with_capacity(existing.len());
            updated.push_str(&existing[..region.start]);
            updated.push_str(block);
            updated.push_str(&existing[region.end..]);
            updated
        }
        None => format!("{}\n\n{block}\n", existing.trim_end()),
    };

    write_index(index_path, &content)
}

/// Strip the managed region (markers and adjacent blank lines) from the index
/// document. No-op when the file or the region is absent.
pub fn remove_managed_section(index_path: &Path) -> Result<()> {
    if !index_path.exists() {
        return Ok(());
    }

    let existing = std::fs::read_to_string(index_path).map_err(|e| read_error(index_path, e))?;

    let Some(region) = managed_region(&existing) else {
        return Ok(());
    };

    let mut content = String::with_capacity(existing.len());
    content.push_str(&existing[..region.start]);
    content.push('\n');
    content.push_str(&existing[region.end..]);

    let content = collapse_blank_runs(&content);
    write_index(index_path, &format!("{}\n", content.trim()))
}

/// Collapse runs of 3+ consecutive newlines down to exactly one blank line.
fn collapse_blank_runs(content: &str) -> String {
    let mut collapsed = content.to_string();
    while collapsed.contains("\n\n\n") {
        collapsed = collapsed.replace("\n\n\n", "\n\n");
    }
    collapsed
}
