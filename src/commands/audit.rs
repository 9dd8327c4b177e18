//! Audit command CLI wrapper
//!
//! Thin wrapper over `audit::run_audit` that picks the output format:
//! a styled console summary, or the serialized report with `--json`.

use std::path::{Path, PathBuf};

use console::Style;

use crate::audit::{self, AuditIssue, AuditOptions, AuditReport};
use crate::cli::AuditArgs;
use crate::error::Result;
use crate::project;

/// Run audit command
pub fn run(workspace: Option<PathBuf>, args: AuditArgs) -> Result<()> {
    let root = project::find_project_root(workspace);
    let options = AuditOptions {
        fix: args.fix,
        only: args.only,
    };

    let report = audit::run_audit(&root, &options)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_summary(&root, &report);
    Ok(())
}

fn print_summary(root: &Path, report: &AuditReport) {
    println!(
        "{} {}",
        Style::new().bold().apply_to("Skill audit for"),
        root.display()
    );
    println!();

    for agent in &report.agents {
        if agent.configured {
            println!(
                "  {} {} ({}): {} skills",
                Style::new().green().apply_to("ok"),
                Style::new().bold().apply_to(&agent.name),
                agent.skills_dir,
                agent.skills.len()
            );
        } else {
            println!(
                "  {} {} ({}): not configured",
                Style::new().yellow().apply_to("--"),
                Style::new().bold().apply_to(&agent.name),
                agent.skills_dir
            );
        }
    }
    println!();

    if report.referenced.is_empty() {
        println!(
            "  {}",
            Style::new()
                .dim()
                .apply_to("No skills referenced in context files")
        );
    } else {
        println!(
            "  Referenced in context files: {}",
            report.referenced.join(", ")
        );
    }
    println!();

    if report.issues.is_empty() {
        println!("{}", Style::new().green().apply_to("No issues found"));
    } else {
        println!("{}", Style::new().bold().apply_to("Issues:"));
        for issue in &report.issues {
            match issue {
                AuditIssue::UnreferencedSkill { skill } => {
                    println!("  - skill '{skill}' is not referenced in any context file");
                }
                AuditIssue::MissingAgent { agent } => {
                    println!("  - {agent} has no skills directory");
                }
            }
        }
    }

    if !report.fixes.is_empty() {
        println!();
        println!("{}", Style::new().bold().apply_to("Fixes applied:"));
        for fix in &report.fixes {
            println!("  - {fix}");
        }
    }
}
