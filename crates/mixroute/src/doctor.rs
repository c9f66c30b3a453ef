// SPDX-FileCopyrightText: 2026 Mixroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `mixroute doctor` command implementation.
//!
//! Runs diagnostic checks against the mixroute environment to identify
//! configuration issues and routing service connectivity problems.

use std::io::IsTerminal;
use std::time::{Duration, Instant};

use mixroute_client::RouterClient;
use mixroute_config::MixrouteConfig;
use mixroute_core::{HealthStatus, MixrouteError, ServiceAdapter};

/// Status of a diagnostic check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed successfully.
    Pass,
    /// Check passed with a warning.
    Warn,
    /// Check failed.
    Fail,
}

/// Result of a single diagnostic check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the check.
    pub name: String,
    /// Check status.
    pub status: CheckStatus,
    /// Human-readable message.
    pub message: String,
    /// Duration the check took.
    pub duration: Duration,
}

/// Run the `mixroute doctor` command.
///
/// With `--plain`, disables colored output.
pub async fn run_doctor(config: &MixrouteConfig, plain: bool) -> Result<(), MixrouteError> {
    let use_color = !plain && std::io::stdout().is_terminal();
    let mut results = Vec::new();

    results.push(check_config().await);
    results.push(check_service(config).await);

    println!();
    println!("  mixroute doctor");
    println!("  {}", "-".repeat(50));

    let mut fail_count = 0;
    let mut warn_count = 0;

    for result in &results {
        let duration_ms = result.duration.as_millis();
        let line;

        match result.status {
            CheckStatus::Pass => {
                if use_color {
                    use colored::Colorize;
                    let symbol = "✓".green().to_string();
                    line = format!(
                        "    {symbol} {:<20} {} ({duration_ms}ms)",
                        result.name, result.message
                    );
                } else {
                    line = format!(
                        "    [OK]   {:<20} {} ({duration_ms}ms)",
                        result.name, result.message
                    );
                }
            }
            CheckStatus::Warn => {
                warn_count += 1;
                if use_color {
                    use colored::Colorize;
                    let symbol = "!".yellow().to_string();
                    line = format!(
                        "    {symbol} {:<20} {} ({duration_ms}ms)",
                        result.name,
                        result.message.yellow()
                    );
                } else {
                    line = format!(
                        "    [WARN] {:<20} {} ({duration_ms}ms)",
                        result.name, result.message
                    );
                }
            }
            CheckStatus::Fail => {
                fail_count += 1;
                if use_color {
                    use colored::Colorize;
                    let symbol = "✗".red().to_string();
                    line = format!(
                        "    {symbol} {:<20} {} ({duration_ms}ms)",
                        result.name,
                        result.message.red()
                    );
                } else {
                    line = format!(
                        "    [FAIL] {:<20} {} ({duration_ms}ms)",
                        result.name, result.message
                    );
                }
            }
        }

        println!("{line}");
    }

    println!();

    if fail_count > 0 || warn_count > 0 {
        let issues = fail_count + warn_count;
        let issue_word = if issues == 1 { "issue" } else { "issues" };
        println!("  {issues} {issue_word} found.");
    } else {
        println!("  All checks passed.");
    }

    println!();

    Ok(())
}

/// Check configuration loads without errors.
async fn check_config() -> CheckResult {
    let start = Instant::now();
    match mixroute_config::load_and_validate() {
        Ok(config) => CheckResult {
            name: "Configuration".to_string(),
            status: CheckStatus::Pass,
            message: format!("valid (service {})", config.service.base_url),
            duration: start.elapsed(),
        },
        Err(errors) => CheckResult {
            name: "Configuration".to_string(),
            status: CheckStatus::Fail,
            message: format!("{} error(s)", errors.len()),
            duration: start.elapsed(),
        },
    }
}

/// Check the routing service answers its health endpoint.
async fn check_service(config: &MixrouteConfig) -> CheckResult {
    let start = Instant::now();

    let client = match RouterClient::new(&config.service) {
        Ok(client) => client,
        Err(e) => {
            return CheckResult {
                name: "Routing service".to_string(),
                status: CheckStatus::Fail,
                message: format!("client init failed: {e}"),
                duration: start.elapsed(),
            };
        }
    };

    match client.health_check().await {
        Ok(HealthStatus::Healthy) => CheckResult {
            name: "Routing service".to_string(),
            status: CheckStatus::Pass,
            message: "reachable".to_string(),
            duration: start.elapsed(),
        },
        Ok(HealthStatus::Degraded(detail)) => CheckResult {
            name: "Routing service".to_string(),
            status: CheckStatus::Warn,
            message: detail,
            duration: start.elapsed(),
        },
        Ok(HealthStatus::Unhealthy(detail)) => CheckResult {
            name: "Routing service".to_string(),
            status: CheckStatus::Fail,
            message: detail,
            duration: start.elapsed(),
        },
        Err(e) => CheckResult {
            name: "Routing service".to_string(),
            status: CheckStatus::Fail,
            message: format!("probe failed: {e}"),
            duration: start.elapsed(),
        },
    }
}
