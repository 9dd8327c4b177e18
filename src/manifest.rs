//! Per-target install manifest
//!
//! Each agent skills directory gets a sidecar JSON file recording the package
//! version, the install timestamp, and the bundle names that were installed.
//! Existence is informational only; the uninstaller keys off bundle names,
//! not this file.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SkillpackError};

/// Sidecar file written into every agent skills directory.
pub const SIDECAR_FILE: &str = ".skillpack-version";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallManifest {
    pub version: String,
    pub installed_at: DateTime<Utc>,
    pub skills: Vec<String>,
}

impl InstallManifest {
    /// Manifest for the current package version, stamped now.
    pub fn current(skills: Vec<String>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            installed_at: Utc::now(),
            skills,
        }
    }

    /// Write (or refresh) the sidecar inside `skills_dir`.
    pub fn write(&self, skills_dir: &Path) -> Result<()> {
        let path = skills_dir.join(SIDECAR_FILE);
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json).map_err(|e| SkillpackError::FileWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Read the sidecar from `skills_dir`, `None` when absent or unreadable.
    pub fn read(skills_dir: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(skills_dir.join(SIDECAR_FILE)).ok()?;
        serde_json::from_str(&content).ok()
    }
}

/// Delete the sidecar from `skills_dir`, tolerating its absence.
pub fn remove_sidecar(skills_dir: &Path) -> Result<()> {
    let path = skills_dir.join(SIDECAR_FILE);
    if !path.exists() {
        return Ok(());
    }
    std::fs::remove_file(&path).map_err(|e| SkillpackError::RemoveFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
