//! Configuration audit
//!
//! Cross-checks the agent skills directories against each other and against
//! the project context files: every discovered skill should be referenced in
//! at least one context document, and every agent should have a configured
//! directory once any of them does. With `fix`, missing agents are seeded
//! from the first configured one and a missing secondary context file is
//! copied from the primary.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Serialize;

use crate::agents::{self, AgentTarget};
use crate::error::{Result, SkillpackError};
use crate::fsops;
use crate::source::SKILL_DOC;

/// Context documents scanned for `skills/<name>` references. The first entry
/// is the primary file the secondary is seeded from in fix mode.
pub const CONTEXT_FILES: &[&str] = &["AGENTS.md", "CLAUDE.md"];

#[derive(Debug, Clone, Default)]
pub struct AuditOptions {
    pub fix: bool,
    pub only: Option<String>,
}

/// Probe result for one agent.
#[derive(Debug, Clone, Serialize)]
pub struct AgentStatus {
    pub name: String,
    pub skills_dir: String,
    pub configured: bool,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuditIssue {
    /// A skill exists in some agent directory but no context file mentions it.
    UnreferencedSkill { skill: String },
    /// An agent has no skills directory while at least one other agent does.
    MissingAgent { agent: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub agents: Vec<AgentStatus>,
    pub referenced: Vec<String>,
    pub issues: Vec<AuditIssue>,
    pub fixes: Vec<String>,
}

/// Run the audit against `root`.
pub fn run_audit(root: &Path, options: &AuditOptions) -> Result<AuditReport> {
    let targets = selected_targets(options.only.as_deref())?;

    let mut statuses = Vec::new();
    for target in &targets {
        statuses.push(probe_agent(root, target)?);
    }

    let all_skills: BTreeSet<String> = statuses
        .iter()
        .flat_map(|s| s.skills.iter().cloned())
        .collect();
    let referenced = referenced_skills(root, &all_skills)?;

    let mut issues = Vec::new();
    for skill in all_skills.difference(&referenced) {
        issues.push(AuditIssue::UnreferencedSkill {
            skill: skill.clone(),
        });
    }

    // A missing directory is only a finding once some agent is configured;
    // a project with no agent directories at all is simply not using skills.
    let any_configured = statuses.iter().any(|s| s.configured);
    if any_configured {
        for status in statuses.iter().filter(|s| !s.configured) {
            issues.push(AuditIssue::MissingAgent {
                agent: status.name.clone(),
            });
        }
    }

    let fixes = if options.fix {
        apply_fixes(root, &targets, &statuses)?
    } else {
        Vec::new()
    };

    Ok(AuditReport {
        agents: statuses,
        referenced: referenced.into_iter().collect(),
        issues,
        fixes,
    })
}

fn selected_targets(only: Option<&str>) -> Result<Vec<&'static AgentTarget>> {
    match only {
        Some(name) => {
            let target = agents::find_by_name(name).ok_or_else(|| SkillpackError::UnknownAgent {
                name: name.to_string(),
            })?;
            Ok(vec![target])
        }
        None => Ok(agents::AGENT_TARGETS.iter().collect()),
    }
}

/// An agent is configured when its skills directory exists; its skill set is
/// the immediate subdirectories that carry a SKILL.md.
fn probe_agent(root: &Path, target: &AgentTarget) -> Result<AgentStatus> {
    let dir = root.join(target.skills_dir);
    if !dir.exists() {
        return Ok(AgentStatus {
            name: target.name.to_string(),
            skills_dir: target.skills_dir.to_string(),
            configured: false,
            skills: Vec::new(),
        });
    }

    let entries = std::fs::read_dir(&dir).map_err(|e| SkillpackError::ListFailed {
        path: dir.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut skills = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SkillpackError::ListFailed {
            path: dir.display().to_string(),
            reason: e.to_string(),
        })?;
        let path = entry.path();
        if path.is_dir() && path.join(SKILL_DOC).exists() {
            skills.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    skills.sort();

    Ok(AgentStatus {
        name: target.name.to_string(),
        skills_dir: target.skills_dir.to_string(),
        configured: true,
        skills,
    })
}

/// Skills mentioned as `skills/<name>` in any context file.
fn referenced_skills(root: &Path, all_skills: &BTreeSet<String>) -> Result<BTreeSet<String>> {
    let mut referenced = BTreeSet::new();

    for file in CONTEXT_FILES {
        let path = root.join(file);
        if !path.exists() {
            continue;
        }
        let content =
            std::fs::read_to_string(&path).map_err(|e| SkillpackError::FileReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        for skill in all_skills {
            if content.contains(&format!("skills/{skill}")) {
                referenced.insert(skill.clone());
            }
        }
    }

    Ok(referenced)
}

/// Seed every unconfigured agent from the first configured one, skipping
/// skills already present, then seed the secondary context file.
fn apply_fixes(
    root: &Path,
    targets: &[&'static AgentTarget],
    statuses: &[AgentStatus],
) -> Result<Vec<String>> {
    let mut fixes = Vec::new();

    if let Some(primary) = statuses.iter().find(|s| s.configured) {
        let primary_dir = root.join(&primary.skills_dir);

        for (target, status) in targets.iter().zip(statuses) {
            if status.configured {
                continue;
            }
            let dest_dir = root.join(target.skills_dir);
            for skill in &primary.skills {
                let dest = dest_dir.join(skill);
                if dest.exists() {
                    continue;
                }
                fsops::copy_tree(&primary_dir.join(skill), &dest)?;
                fixes.push(format!("seeded {} into {}", skill, target.skills_dir));
            }
        }
    }

    let primary_context = root.join(CONTEXT_FILES[0]);
    let secondary_context = root.join(CONTEXT_FILES[1]);
    if primary_context.exists() && !secondary_context.exists() {
        std::fs::copy(&primary_context, &secondary_context).map_err(|e| {
            SkillpackError::FileWriteFailed {
                path: secondary_context.display().to_string(),
                reason: e.to_string(),
            }
        })?;
        fixes.push(format!(
            "created {} from {}",
            CONTEXT_FILES[1], CONTEXT_FILES[0]
        ));
    }

    Ok(fixes)
}
