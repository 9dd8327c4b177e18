//! Skillpack - agent skill distributor
//!
//! Distributes the skill bundles shipped with this package into the
//! configuration directories of supported AI coding agents (.agent,
//! .opencode, .windsurf, .claude), keeps the shared skill index in sync, and
//! can later remove only what it installed.

use clap::Parser;

mod agents;
mod audit;
mod cli;
mod commands;
mod error;
mod fsops;
mod index_doc;
mod manifest;
mod project;
mod source;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Uninstall must never block package removal, and audit reports findings
    // rather than failing; only install propagates errors as a non-zero exit.
    let tolerates_failure = matches!(cli.command, Commands::Uninstall | Commands::Audit(_));

    let result = match cli.command {
        Commands::Install => commands::install::run(cli.workspace, cli.skills_dir, cli.verbose),
        Commands::Uninstall => commands::uninstall::run(cli.workspace, cli.skills_dir, cli.verbose),
        Commands::Audit(args) => commands::audit::run(cli.workspace, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if !tolerates_failure {
            std::process::exit(1);
        }
    }
}
