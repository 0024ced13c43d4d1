//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - `--global` and `--local` are mutually exclusive; `--config-dir` only
//!   makes sense for a global install
//! - Neither scope flag means "ask" on a terminal and "global" otherwise
//!   (decided in `main`, not here)

use std::path::PathBuf;

use clap::Parser;

use crate::domain::value_objects::InstallScope;

const AFTER_HELP: &str = "\
Examples:
  mindsystem-install --global                          Install to ~/.claude
  mindsystem-install --global --config-dir ~/.claude-b Install to a custom config dir
  CLAUDE_CONFIG_DIR=~/.claude-b mindsystem-install -g  Same, via the environment
  mindsystem-install --local                           Install to ./.claude

Locally modified files are detected on re-install. On a terminal you are
asked per file: o = overwrite, k = keep, O = overwrite all, K = keep all.
Any other answer (including an empty line) overwrites.";

/// Mindsystem installer - installs commands, agents and scripts for Claude
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "mindsystem-install")]
#[command(author, version, about, long_about = None)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Install globally (to the Claude config directory)
    #[arg(short, long, conflicts_with = "local")]
    pub global: bool,

    /// Install locally (to ./.claude in the current directory)
    #[arg(short, long)]
    pub local: bool,

    /// Custom Claude config directory (overrides CLAUDE_CONFIG_DIR)
    #[arg(short = 'c', long = "config-dir", value_name = "PATH", conflicts_with = "local")]
    pub config_dir: Option<PathBuf>,

    /// Overwrite locally modified files without asking
    #[arg(short, long)]
    pub force: bool,

    /// Package root to install from (default: the installer's own package)
    #[arg(short, long, value_name = "PATH")]
    pub source: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Scope chosen on the command line, if any.
    pub fn scope(&self) -> Option<InstallScope> {
        if self.global {
            Some(InstallScope::Global)
        } else if self.local {
            Some(InstallScope::Local)
        } else {
            None
        }
    }

    /// Log filter directive for the `-v` count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
