// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::config::{merge_options, DefaultType, ErrorAction, ValidationOptions};
use crate::error::{ConfigError, PrTitleError, Result};
use crate::rules::TitleValidator;

use super::args::{CheckArgs, Cli, Commands, InitArgs, OutputFormat};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command.clone() {
        Commands::Check(args) => run_check(&cli, args),
        Commands::Types => run_types(&cli),
        Commands::Version => run_version(),
        Commands::Init(args) => run_init(args),
    }
}

/// Load configuration from `--config` or the default locations.
fn load_options(cli: &Cli) -> Result<ValidationOptions> {
    match &cli.config {
        Some(config_path) => ValidationOptions::load_from(config_path),
        None => ValidationOptions::load(),
    }
}

/// Run the check command.
fn run_check(cli: &Cli, args: CheckArgs) -> Result<()> {
    tracing::debug!("Running check command with args: {:?}", args);

    let options = merge_options(load_options(cli)?, args.overrides());
    let action = options.action.unwrap_or_default();
    let report = TitleValidator::new(options).validate(&args.title);

    if report.is_valid() {
        report.print(cli.format);
        return Ok(());
    }

    match action {
        ErrorAction::Error => {
            report.print(cli.format);
            Err(PrTitleError::InvalidTitle {
                count: report.errors.len(),
            })
        }
        ErrorAction::Warning => {
            report.print(cli.format);
            Ok(())
        }
        ErrorAction::Ignore => {
            tracing::debug!("Ignoring {} error(s): {}", report.errors.len(), report.summary());
            Ok(())
        }
    }
}

/// Run the types command.
fn run_types(cli: &Cli) -> Result<()> {
    match cli.format {
        Some(OutputFormat::Json) => {
            let types: Vec<_> = DefaultType::all()
                .iter()
                .map(|t| serde_json::json!({ "type": t.as_str(), "description": t.description() }))
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&types).unwrap_or_default()
            );
        }
        _ => {
            for t in DefaultType::all() {
                println!("{:<10} {}", t.as_str(), t.description());
            }
        }
    }

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("prtitle {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    use crate::config::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = std::path::Path::new("prtitle.toml");

    if config_path.exists() && !args.force {
        return Err(PrTitleError::Config(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }));
    }

    std::fs::write(config_path, example_config())?;

    println!("✓ Created prtitle.toml");

    Ok(())
}
