//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Skillpack - agent skill distributor
///
/// Install the skill bundles shipped with this package into the configuration
/// directories of supported AI coding agents, keep the shared skill index in
/// sync, and remove only what was installed.
#[derive(Parser, Debug)]
#[command(
    name = "skillpack",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Distribute bundled agent skills across AI coding tool directories",
    long_about = "Skillpack copies the skill bundles shipped with this package into every \
                  supported agent configuration directory (.agent, .opencode, .windsurf, \
                  .claude), regenerates the shared skill index, and can later remove \
                  exactly what it installed.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  skillpack install\n    \
                  skillpack uninstall\n    \
                  skillpack audit --fix\n    \
                  skillpack audit --json --only opencode"
)]
pub struct Cli {
    /// Project root directory (defaults to INIT_CWD or marker-file discovery)
    #[arg(long, short = 'w', global = true)]
    pub workspace: Option<PathBuf>,

    /// Skill source directory (defaults to the skills/ directory next to the binary)
    #[arg(long, short = 's', global = true, value_name = "DIR")]
    pub skills_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install bundled skills into every agent directory
    Install,

    /// Remove skills installed by this package
    Uninstall,

    /// Cross-check agent directories against context files
    Audit(AuditArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the audit command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Report configuration drift:\n    skillpack audit\n\n\
                  Repair missing agent directories:\n    skillpack audit --fix\n\n\
                  Machine-readable report:\n    skillpack audit --json\n\n\
                  Restrict to one agent:\n    skillpack audit --only windsurf")]
pub struct AuditArgs {
    /// Apply repairs: seed missing agent directories and context files
    #[arg(long)]
    pub fix: bool,

    /// Emit the report as JSON instead of a console summary
    #[arg(long)]
    pub json: bool,

    /// Restrict the audit to one agent (case-insensitive name match)
    #[arg(long, value_name = "AGENT")]
    pub only: Option<String>,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    skillpack completions --shell bash > ~/.bash_completion.d/skillpack\n\n\
                  Generate zsh completions:\n    skillpack completions --shell zsh > ~/.zfunc/_skillpack")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
