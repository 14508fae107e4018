//! `check` and `get` commands

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use envboot_core::EnvironmentResolver;

#[derive(Args)]
pub struct GetArgs {
    /// Key to resolve
    pub key: String,
}

/// Lines printed by `check`, plus how many media credentials are unusable
pub(crate) struct CheckReport {
    pub lines: Vec<String>,
    pub missing: usize,
}

impl CheckReport {
    pub fn exit_code(&self) -> ExitCode {
        if self.missing > 0 {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }
}

pub(crate) fn check_report(resolver: &EnvironmentResolver) -> CheckReport {
    let settings = resolver.settings();
    let keys = [
        &settings.media.cloud_name_key,
        &settings.media.api_key_key,
        &settings.media.api_secret_key,
    ];

    let mut lines = vec![
        format!("mode:          {}", resolver.mode().as_str()),
        format!("override file: {}", settings.override_file.display()),
        format!("overrides:     {}", resolver.override_count()),
        String::new(),
    ];

    let mut missing = 0;
    for key in keys {
        let line = match resolver.resolve(key) {
            Some(entry) if !entry.value.is_empty() => {
                format!("{:<14} {:<14} {}", key, entry.source.as_str(), mask(&entry.value))
            }
            Some(entry) => {
                missing += 1;
                format!("{:<14} {:<14} (empty)", key, entry.source.as_str())
            }
            None => {
                missing += 1;
                format!("{:<14} {:<14} (not set)", key, "-")
            }
        };
        lines.push(line);
    }

    CheckReport { lines, missing }
}

pub fn run_check(resolver: &EnvironmentResolver) -> Result<ExitCode> {
    let report = check_report(resolver);
    for line in &report.lines {
        println!("{}", line);
    }

    if report.missing > 0 {
        tracing::warn!("{} media credential(s) not set", report.missing);
    }
    Ok(report.exit_code())
}

pub fn run_get(resolver: &EnvironmentResolver, args: GetArgs) -> Result<ExitCode> {
    match resolver.get(&args.key) {
        Some(value) => {
            println!("{}", value);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            tracing::debug!("{} is not set", args.key);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Show just enough of a value to recognise it
pub(crate) fn mask(value: &str) -> String {
    let visible: String = value.chars().take(2).collect();
    if value.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("{}****", visible)
    }
}
