//! Install command implementation
//!
//! Copies every bundled skill into every agent target (delete-then-copy, so
//! reinstall converges rather than merging), refreshes the per-target install
//! manifests, regenerates the shared skill index, and seeds CLAUDE.md from
//! AGENTS.md when only the former is missing.

use std::path::{Path, PathBuf};

use console::Style;

use crate::agents::{self, AgentTarget};
use crate::error::{Result, SkillpackError};
use crate::fsops;
use crate::index_doc::{self, INDEX_FILE, IndexEntry};
use crate::manifest::InstallManifest;
use crate::project;
use crate::source::{SKILL_DOC, SkillSource};

/// Run install command
pub fn run(workspace: Option<PathBuf>, skills_dir: Option<PathBuf>, verbose: bool) -> Result<()> {
    let root = project::find_project_root(workspace);
    let source = SkillSource::locate(skills_dir);
    let names = source.bundle_names()?;

    if names.is_empty() {
        println!(
            "{} No skills found in package",
            Style::new().yellow().apply_to("warning:")
        );
        return Ok(());
    }

    println!(
        "{} {}",
        Style::new().bold().apply_to("Installing skills to"),
        root.display()
    );
    println!();

    let mut total_installed = 0;
    let mut total_updated = 0;
    for target in agents::AGENT_TARGETS {
        let (installed, updated) = install_to_target(&root, target, &source, &names, verbose)?;
        println!(
            "  {} ({}): {} skills",
            Style::new().bold().apply_to(target.name),
            target.skills_dir,
            installed + updated
        );
        total_installed += installed;
        total_updated += updated;
    }

    refresh_index(&root, &source, &names)?;

    if seed_secondary_context(&root)? {
        println!("  Created CLAUDE.md (copy of AGENTS.md)");
    }

    println!();
    println!(
        "{} {} installed, {} updated across {} agent directories",
        Style::new().green().apply_to("Done:"),
        total_installed,
        total_updated,
        agents::AGENT_TARGETS.len()
    );

    Ok(())
}

/// Install all bundles into one agent target, returning (installed, updated)
/// counts. An existing bundle is fully removed before the fresh copy.
fn install_to_target(
    root: &Path,
    target: &AgentTarget,
    source: &SkillSource,
    names: &[String],
    verbose: bool,
) -> Result<(usize, usize)> {
    let skills_dir = root.join(target.skills_dir);
    std::fs::create_dir_all(&skills_dir).map_err(|e| SkillpackError::FileWriteFailed {
        path: skills_dir.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut installed = 0;
    let mut updated = 0;
    for name in names {
        let dest = skills_dir.join(name);
        if dest.exists() {
            fsops::remove_tree(&dest)?;
            updated += 1;
        } else {
            installed += 1;
        }
        fsops::copy_tree(&source.bundle_path(name), &dest)?;
        if verbose {
            println!("    copied {name}");
        }
    }

    InstallManifest::current(names.to_vec()).write(&skills_dir)?;

    Ok((installed, updated))
}

/// Regenerate the managed region of the shared index document inside the
/// merged agent directory's rules/.
fn refresh_index(root: &Path, source: &SkillSource, names: &[String]) -> Result<()> {
    let merged = agents::find_merged_dir(root).unwrap_or_else(|| agents::default_merged_dir(root));

    let mut entries = Vec::new();
    for name in names {
        if let Some(metadata) = source.bundle_metadata(name)? {
            entries.push(IndexEntry {
                metadata,
                link: format!("../skills/{name}/{SKILL_DOC}"),
            });
        }
    }

    let block = index_doc::render_managed_block(&entries);
    index_doc::upsert_managed_section(&merged.join("rules").join(INDEX_FILE), &block)
}

/// Copy AGENTS.md to CLAUDE.md when only the former exists. Never overwrites.
fn seed_secondary_context(root: &Path) -> Result<bool> {
    let agents_md = root.join("AGENTS.md");
    let claude_md = root.join("CLAUDE.md");

    if agents_md.exists() && !claude_md.exists() {
        std::fs::copy(&agents_md, &claude_md).map_err(|e| SkillpackError::FileWriteFailed {
            path: claude_md.display().to_string(),
            reason: e.to_string(),
        })?;
        return Ok(true);
    }
    Ok(false)
}
