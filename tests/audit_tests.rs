//! Audit command tests

mod common;

use predicates::prelude::*;

#[test]
fn test_audit_reports_missing_agents_as_json() {
    let project = common::TestProject::new();
    project.write_file(".agent/skills/x/SKILL.md", "---\nname: x\n---\n");
    project.write_file("AGENTS.md", "Use skills/x for this.\n");

    let output = common::skillpack_cmd(&project)
        .args(["audit", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["referenced"], serde_json::json!(["x"]));

    let issues = report["issues"].as_array().unwrap();
    assert!(
        issues
            .iter()
            .all(|issue| issue["kind"] == "missing_agent"),
        "expected only missing_agent issues, got: {issues:?}"
    );
    assert_eq!(issues.len(), 3);
}

#[test]
fn test_audit_flags_unreferenced_skills() {
    let project = common::TestProject::new();
    project.write_file(".claude/skills/orphan/SKILL.md", "---\nname: orphan\n---\n");

    common::skillpack_cmd(&project)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "skill 'orphan' is not referenced in any context file",
        ));
}

#[test]
fn test_audit_console_summary_lists_agents() {
    let project = common::TestProject::new();
    project.write_file(".agent/skills/x/SKILL.md", "---\nname: x\n---\n");

    common::skillpack_cmd(&project)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("Antigravity"))
        .stdout(predicate::str::contains("not configured"));
}

#[test]
fn test_audit_only_filter() {
    let project = common::TestProject::new();
    project.write_file(".agent/skills/x/SKILL.md", "---\nname: x\n---\n");

    let output = common::skillpack_cmd(&project)
        .args(["audit", "--json", "--only", "opencode"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let agents = report["agents"].as_array().unwrap();
    assert_eq!(agents.len(), 1);
    assert_eq!(agents[0]["name"], "OpenCode");
}

#[test]
fn test_audit_unknown_agent_logs_but_exits_zero() {
    let project = common::TestProject::new();

    common::skillpack_cmd(&project)
        .args(["audit", "--only", "emacs"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown agent: emacs"));
}

#[test]
fn test_audit_fix_seeds_missing_agents() {
    let project = common::TestProject::new();
    project.write_file(".agent/skills/x/SKILL.md", "---\nname: x\n---\n");

    common::skillpack_cmd(&project)
        .args(["audit", "--fix"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fixes applied:"));

    assert!(project.file_exists(".opencode/skill/x/SKILL.md"));
    assert!(project.file_exists(".windsurf/skills/x/SKILL.md"));
    assert!(project.file_exists(".claude/skills/x/SKILL.md"));
}

#[test]
fn test_audit_fix_seeds_context_file() {
    let project = common::TestProject::new();
    project.write_file("AGENTS.md", "# Context\n");

    common::skillpack_cmd(&project)
        .args(["audit", "--fix"])
        .assert()
        .success();

    assert_eq!(project.read_file("CLAUDE.md"), "# Context\n");
}

#[test]
fn test_audit_empty_project_reports_no_issues() {
    let project = common::TestProject::new();

    common::skillpack_cmd(&project)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}
