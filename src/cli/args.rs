// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{ErrorAction, ValidationOptions};

/// prtitle - Pull request title validator
///
/// Checks that a pull request title follows `type(scope): subject`.
#[derive(Parser, Debug)]
#[command(name = "prtitle")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Validate pull request titles against Conventional Commits", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate a pull request title
    Check(CheckArgs),

    /// List the default types
    Types,

    /// Print version information
    Version,

    /// Initialize prtitle configuration
    Init(InitArgs),
}

/// Arguments for the check command.
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Title to validate
    #[arg(env = "PR_TITLE")]
    pub title: String,

    /// Allowed types, replacing the defaults
    #[arg(short, long, value_delimiter = ',')]
    pub types: Option<Vec<String>>,

    /// Allowed scopes
    #[arg(short, long, value_delimiter = ',')]
    pub scopes: Option<Vec<String>>,

    /// Regular expression the subject must match in full
    #[arg(long)]
    pub subject_pattern: Option<String>,

    /// Message used when the subject does not match ({subject}, {title}, {subjectPattern})
    #[arg(long)]
    pub subject_pattern_error: Option<String>,

    /// What to do with an invalid title
    #[arg(long, value_enum)]
    pub action: Option<ErrorAction>,
}

impl CheckArgs {
    /// Options given on the command line, to be merged over the config file.
    pub fn overrides(&self) -> ValidationOptions {
        ValidationOptions {
            types: self.types.clone(),
            scopes: self.scopes.clone(),
            subject_pattern: self.subject_pattern.clone(),
            subject_pattern_error: self.subject_pattern_error.clone(),
            action: self.action,
        }
    }
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}
