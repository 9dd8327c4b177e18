//! Command implementations for the Skillpack CLI

pub mod audit;
pub mod completions;
pub mod install;
pub mod uninstall;
pub mod version;
