//! Agent target definitions and directory resolution
//!
//! This module provides:
//! - The fixed table of supported agent integrations
//! - Lookup by case-insensitive agent name
//! - Resolution of the single merged agent directory

use std::path::{Path, PathBuf};

/// One supported agent integration: where its skills live relative to the
/// project root, and where its rules/context documents live (when it has any).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentTarget {
    pub name: &'static str,
    pub skills_dir: &'static str,
    pub rules_dir: Option<&'static str>,
}

/// All agent directories skills are installed to, in install order.
pub const AGENT_TARGETS: &[AgentTarget] = &[
    AgentTarget {
        name: "Antigravity",
        skills_dir: ".agent/skills",
        rules_dir: Some(".agent/rules"),
    },
    AgentTarget {
        name: "OpenCode",
        skills_dir: ".opencode/skill",
        rules_dir: None,
    },
    AgentTarget {
        name: "Windsurf",
        skills_dir: ".windsurf/skills",
        rules_dir: None,
    },
    AgentTarget {
        name: "Claude Code",
        skills_dir: ".claude/skills",
        rules_dir: None,
    },
];

/// Candidate names for the merged agent directory, in preference order.
pub const MERGED_DIR_CANDIDATES: &[&str] = &[".agent", ".claude"];

/// Look up an agent target by name, case-insensitively.
pub fn find_by_name(name: &str) -> Option<&'static AgentTarget> {
    AGENT_TARGETS
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
}

/// Find the merged agent directory under `root`.
///
/// Returns the first candidate that exists, or `None` when no agent directory
/// has been created at all.
pub fn find_merged_dir(root: &Path) -> Option<PathBuf> {
    MERGED_DIR_CANDIDATES
        .iter()
        .map(|candidate| root.join(candidate))
        .find(|path| path.exists())
}

/// The merged agent directory to use when none exists yet (first candidate).
pub fn default_merged_dir(root: &Path) -> PathBuf {
    root.join(MERGED_DIR_CANDIDATES[0])
}
