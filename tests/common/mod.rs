//! Common test utilities for Skillpack integration tests
//!
//! Not every test binary uses every helper.
#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A test project for integration tests: a temp directory playing the role of
/// the consuming project, with a package skill source under `pkg/skills`.
pub struct TestProject {
    #[allow(dead_code)]
    pub temp: TempDir,
    pub path: PathBuf,
}

impl TestProject {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::write(path.join("package.json"), "{}").expect("Failed to write marker");
        Self { temp, path }
    }

    /// Skill source directory shipped "inside the package".
    pub fn skills_source(&self) -> PathBuf {
        self.path.join("pkg/skills")
    }

    /// Create a bundle in the skill source with a standard metadata header.
    pub fn create_source_skill(&self, name: &str, description: &str) {
        let dir = self.skills_source().join(name);
        std::fs::create_dir_all(&dir).expect("Failed to create skill directory");
        std::fs::write(
            dir.join("SKILL.md"),
            format!("---\nname: {name}\ndescription: {description}\n---\n\n# {name}\n"),
        )
        .expect("Failed to write SKILL.md");
    }

    /// Write a file in the project, creating parent directories.
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project.
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the project.
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

/// A skillpack command targeting the test project, isolated from the caller's
/// environment.
pub fn skillpack_cmd(project: &TestProject) -> Command {
    let mut cmd = Command::cargo_bin("skillpack").expect("Failed to find skillpack binary");
    cmd.env_remove("INIT_CWD");
    cmd.args([
        "-w",
        project.path.to_str().expect("non-utf8 temp path"),
        "-s",
        project
            .skills_source()
            .to_str()
            .expect("non-utf8 temp path"),
    ]);
    cmd
}
