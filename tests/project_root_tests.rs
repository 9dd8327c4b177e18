//! Project root discovery tests
//!
//! Discovery order is exercised through the child process environment, so no
//! test mutates this process's environment.

mod common;

use assert_cmd::Command;

fn skillpack_bin() -> Command {
    Command::cargo_bin("skillpack").expect("Failed to find skillpack binary")
}

#[test]
fn test_init_cwd_is_authoritative() {
    let project = common::TestProject::new();
    project.create_source_skill("writing-tests", "How to write tests");

    // No -w flag: the INIT_CWD environment variable decides the target.
    skillpack_bin()
        .env("INIT_CWD", &project.path)
        .args([
            "-s",
            project.skills_source().to_str().unwrap(),
            "install",
        ])
        .assert()
        .success();

    assert!(project.file_exists(".claude/skills/writing-tests/SKILL.md"));
}

#[test]
fn test_marker_discovery_walks_up_from_cwd() {
    let project = common::TestProject::new();
    project.create_source_skill("writing-tests", "How to write tests");
    let nested = project.path.join("packages/app/src");
    std::fs::create_dir_all(&nested).unwrap();

    skillpack_bin()
        .env_remove("INIT_CWD")
        .current_dir(&nested)
        .args([
            "-s",
            project.skills_source().to_str().unwrap(),
            "install",
        ])
        .assert()
        .success();

    // package.json lives at the project root, so skills land there rather
    // than in the nested working directory.
    assert!(project.file_exists(".claude/skills/writing-tests/SKILL.md"));
    assert!(!nested.join(".claude").exists());
}

#[test]
fn test_workspace_flag_overrides_init_cwd() {
    let project = common::TestProject::new();
    let other = common::TestProject::new();
    project.create_source_skill("writing-tests", "How to write tests");

    skillpack_bin()
        .env("INIT_CWD", &other.path)
        .args([
            "-w",
            project.path.to_str().unwrap(),
            "-s",
            project.skills_source().to_str().unwrap(),
            "install",
        ])
        .assert()
        .success();

    assert!(project.file_exists(".claude/skills/writing-tests/SKILL.md"));
    assert!(!other.file_exists(".claude/skills/writing-tests/SKILL.md"));
}
