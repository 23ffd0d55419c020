// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::io::Read;

use console::style;

use crate::config::ClintConfig;
use crate::error::{ClintError, CommitError, ConfigError, Result, ResultExt, ValidationError};
use crate::rules::{RuleEngine, ValidationResult};

use super::args::{CheckArgs, Cli, Commands, HooksAction, HooksArgs, InitArgs, OutputFormat};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    let command = cli.effective_command();

    // Commands that do not need a policy table
    match command {
        Commands::Version => return run_version(),
        Commands::Init(args) => return run_init(args),
        Commands::Hooks(args) => return run_hooks(args),
        _ => {}
    }

    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        ClintConfig::load_from(config_path)?
    } else {
        ClintConfig::load()?
    };

    if !config.ui.color {
        console::set_colors_enabled(false);
    }

    match command {
        Commands::Check(args) => run_check(&cli, &config, args),
        Commands::Rules => run_rules(&cli, &config),
        Commands::Hooks(_) | Commands::Init(_) | Commands::Version => Ok(()),
    }
}

/// Run the check command.
fn run_check(cli: &Cli, config: &ClintConfig, args: CheckArgs) -> Result<()> {
    tracing::debug!("Running check command with args: {:?}", args);

    let engine = RuleEngine::new(config)?;

    let results = if let Some(message) = args.message.as_deref() {
        vec![engine.validate(message)]
    } else if args.stdin {
        vec![engine.validate(&read_stdin()?)]
    } else if let Some(edit) = args.edit.as_ref() {
        let path = match edit {
            Some(path) => path.clone(),
            None => crate::git::edit_message_path()?,
        };
        let result = engine.check_file(&path)?;
        ensure_not_empty(&result)?;
        vec![result]
    } else if args.range || args.target.contains("..") {
        engine.check_range(&args.target)?
    } else {
        vec![engine.check_commit(&args.target)?]
    };

    report(cli, config, &results, args.strict)
}

/// Print results and turn failures into an error for the exit status.
fn report(
    cli: &Cli,
    config: &ClintConfig,
    results: &[ValidationResult],
    strict: bool,
) -> Result<()> {
    let errors: usize = results.iter().map(|r| r.errors.len()).sum();
    let warnings: usize = results.iter().map(|r| r.warnings.len()).sum();

    for result in results {
        result.print(cli.format, config.ui.hints);
    }

    if cli.format != Some(OutputFormat::Json) && (errors > 0 || warnings > 0) {
        println!();
        println!(
            "{} found {} problem(s), {} warning(s)",
            style("✗").red().bold(),
            errors,
            warnings
        );
        if let Some(ref url) = config.help_url {
            println!("{} Get help: {}", style("ⓘ").blue(), url);
        }
    }

    // Determine exit status
    if errors > 0 {
        Err(ClintError::Validation(ValidationError::RuleViolations {
            count: errors,
        }))
    } else if strict && warnings > 0 {
        Err(ClintError::Validation(ValidationError::StrictWarnings {
            count: warnings,
        }))
    } else {
        Ok(())
    }
}

fn ensure_not_empty(result: &ValidationResult) -> Result<()> {
    if crate::commit::CommitMessage::parse(&result.message).is_empty() {
        return Err(ClintError::Commit(CommitError::EmptyMessage));
    }
    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut message = String::new();
    std::io::stdin().read_to_string(&mut message).map_err(|e| {
        ClintError::Commit(CommitError::ReadFailed {
            source_name: "stdin".to_string(),
            message: e.to_string(),
        })
    })?;

    if message.trim().is_empty() {
        return Err(ClintError::Commit(CommitError::EmptyMessage));
    }

    Ok(message)
}

/// Run the rules command.
fn run_rules(cli: &Cli, config: &ClintConfig) -> Result<()> {
    tracing::debug!("Running rules command");

    let engine = RuleEngine::new(config)?;

    if cli.format == Some(OutputFormat::Json) {
        let rules: serde_json::Map<String, serde_json::Value> = engine
            .rules()
            .iter()
            .map(|(name, rule)| {
                (
                    name.clone(),
                    serde_json::to_value(rule).unwrap_or(serde_json::Value::Null),
                )
            })
            .collect();
        let json = serde_json::json!({
            "extends": config.extends,
            "rules": rules,
            "ignores": engine.ignores().names(),
            "default_ignores": engine.ignores().uses_defaults(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
        return Ok(());
    }

    println!("extends: {}", config.extends.join(", "));
    println!();
    for (name, rule) in engine.rules() {
        let line = format!("{:<24} {}", name, rule);
        if rule.is_enabled() {
            println!("  {}", line);
        } else {
            println!("  {}", style(line).dim());
        }
    }

    println!();
    println!("ignores:");
    for name in engine.ignores().names() {
        println!("  {}", name);
    }
    if engine.ignores().uses_defaults() {
        let note = "(plus built-in merge, revert, autosquash and release ignores)";
        println!("  {}", style(note).dim());
    }

    Ok(())
}

/// Run the hooks command.
fn run_hooks(args: HooksArgs) -> Result<()> {
    use crate::hooks::HookManager;

    tracing::debug!("Running hooks command");

    let manager = HookManager::new()?;

    match args.action {
        HooksAction::Install { hook, force } => {
            if let Some(hook_name) = hook {
                manager.install_hook(&hook_name, force)?;
                println!("✓ Installed {} hook", hook_name);
            } else {
                manager.install_all(force)?;
                println!("✓ Installed all hooks");
            }
        }
        HooksAction::Uninstall { hook } => {
            if let Some(hook_name) = hook {
                manager.uninstall_hook(&hook_name)?;
                println!("✓ Uninstalled {} hook", hook_name);
            } else {
                manager.uninstall_all()?;
                println!("✓ Uninstalled all hooks");
            }
        }
        HooksAction::Status => {
            let status = manager.status()?;
            for (hook, installed) in status {
                let icon = if installed { "✓" } else { "✗" };
                println!("{} {}", icon, hook);
            }
        }
    }

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("clint {}", crate::version::version_string());

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
    use crate::config::default::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = std::path::Path::new("clint.toml");

    if config_path.exists() && !args.force {
        return Err(ClintError::Config(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }));
    }

    std::fs::write(config_path, example_config()).context("Failed to write clint.toml")?;

    println!("✓ Created clint.toml");

    Ok(())
}
