// SPDX-FileCopyrightText: 2026 Mixroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `mixroute shell` command implementation.
//!
//! Launches an interactive REPL with colored prompt and readline history.
//! Each line is submitted to the routing service with the current weights;
//! the decision card prints after every accepted submission. One session
//! controller lives for the whole run, so `/history` shows the bounded
//! session history the controller maintains.

use std::sync::Arc;

use colored::Colorize;
use mixroute_client::RouterClient;
use mixroute_config::MixrouteConfig;
use mixroute_core::{MixrouteError, RouteRequest};
use mixroute_session::SessionController;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{debug, info};

use crate::render;

/// The three weights applied to each submission from the prompt.
#[derive(Debug, Clone, Copy)]
struct Weights {
    precision: f64,
    latency: f64,
    cost: f64,
}

/// Runs the `mixroute shell` interactive REPL.
pub async fn run_shell(config: &MixrouteConfig) -> Result<(), MixrouteError> {
    let client = RouterClient::new(&config.service)?;
    let controller = Arc::new(SessionController::new(Arc::new(client)));

    let session_id = uuid::Uuid::new_v4().to_string();
    info!(session_id = %session_id, "shell session started");

    let mut weights = Weights {
        precision: config.defaults.weight_precision,
        latency: config.defaults.weight_latency,
        cost: config.defaults.weight_cost,
    };

    let mut rl = DefaultEditor::new()
        .map_err(|e| MixrouteError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", "mixroute shell".bold().green());
    println!(
        "routing service: {}",
        config.service.base_url.trim_end_matches('/')
    );
    println!(
        "Type a prompt to route it. {} adjusts weights, {} shows the session table, {} exits.\n",
        "/weights".yellow(),
        "/history".yellow(),
        "/quit".yellow()
    );

    let prompt = format!("{}> ", "mixroute".green());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "/quit" || trimmed == "/exit" {
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                if trimmed == "/history" {
                    let state = controller.snapshot().await;
                    print!("{}", render::history_table(&state.history));
                    continue;
                }

                if let Some(rest) = trimmed.strip_prefix("/weights") {
                    match parse_weights(rest) {
                        Ok(next) => {
                            weights = next;
                            println!(
                                "weights set: precision {:.2}, latency {:.2}, cost {:.2}",
                                weights.precision, weights.latency, weights.cost
                            );
                        }
                        Err(msg) => eprintln!("{}: {msg}", "error".red()),
                    }
                    continue;
                }

                submit_line(&controller, trimmed, weights).await;
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C
                break;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D
                break;
            }
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    // Session summary on exit.
    let state = controller.snapshot().await;
    if let (Some(latency), Some(cost)) =
        (state.history.mean_latency_ms(), state.history.mean_cost_usd())
    {
        println!(
            "{}",
            format!(
                "session: {} decisions, mean {latency:.0} ms, mean ${cost:.4}",
                state.history.len()
            )
            .dimmed()
        );
    }

    println!("{}", "goodbye".dimmed());
    Ok(())
}

/// Submits one prompt line and prints the outcome from the refreshed state.
async fn submit_line(controller: &SessionController, query: &str, weights: Weights) {
    debug!(
        precision = weights.precision,
        latency = weights.latency,
        cost = weights.cost,
        "submitting prompt"
    );

    controller
        .submit(RouteRequest::new(
            query,
            weights.precision,
            weights.latency,
            weights.cost,
        ))
        .await;

    let state = controller.snapshot().await;
    if let Some(message) = &state.last_error {
        eprintln!("{}: {message}", "error".red());
    } else if let Some(result) = &state.last_result {
        print!("{}", render::decision_card(result));
    }
}

/// Parses `/weights <precision> <latency> <cost>` arguments.
fn parse_weights(args: &str) -> Result<Weights, String> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    if parts.len() != 3 {
        return Err("usage: /weights <precision> <latency> <cost>".to_string());
    }

    let mut values = [0.0f64; 3];
    for (slot, part) in values.iter_mut().zip(&parts) {
        let value: f64 = part
            .parse()
            .map_err(|_| format!("`{part}` is not a number"))?;
        if !(0.0..=1.0).contains(&value) {
            return Err(format!("weights must be within [0, 1], got {value}"));
        }
        *slot = value;
    }

    Ok(Weights {
        precision: values[0],
        latency: values[1],
        cost: values[2],
    })
}
