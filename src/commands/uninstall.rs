//! Uninstall command implementation
//!
//! Removes only the bundles whose names are present in the current skill
//! source; user-authored skill directories are left untouched. Exits as a
//! no-op when no agent directory exists at all, and finishes by stripping the
//! managed region from the shared skill index.

use std::path::PathBuf;

use console::Style;

use crate::agents;
use crate::error::Result;
use crate::fsops;
use crate::index_doc::{self, INDEX_FILE};
use crate::manifest;
use crate::project;
use crate::source::SkillSource;

/// Run uninstall command
pub fn run(workspace: Option<PathBuf>, skills_dir: Option<PathBuf>, verbose: bool) -> Result<()> {
    let root = project::find_project_root(workspace);
    let source = SkillSource::locate(skills_dir);

    let Some(merged) = agents::find_merged_dir(&root) else {
        println!("No agent directory found, nothing to uninstall");
        return Ok(());
    };

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
        Style::new().bold().apply_to("Uninstalling skills from"),
        root.display()
    );

    let mut removed = 0;
    for target in agents::AGENT_TARGETS {
        let skills_dir = root.join(target.skills_dir);
        if !skills_dir.exists() {
            continue;
        }

        for name in &names {
            let installed = skills_dir.join(name);
            if installed.exists() {
                if verbose {
                    println!("  removing {name} from {}", target.skills_dir);
                }
                fsops::remove_tree(&installed)?;
                removed += 1;
            }
        }

        manifest::remove_sidecar(&skills_dir)?;
    }

    index_doc::remove_managed_section(&merged.join("rules").join(INDEX_FILE))?;

    println!(
        "{} {} skill copies removed",
        Style::new().green().apply_to("Done:"),
        removed
    );

    Ok(())
}
