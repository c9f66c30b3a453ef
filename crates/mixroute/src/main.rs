// SPDX-FileCopyrightText: 2026 Mixroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! mixroute - CLI client for a mixture-of-experts prompt routing service.
//!
//! This is the binary entry point for the mixroute client.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use colored::Colorize;
use mixroute_client::RouterClient;
use mixroute_config::MixrouteConfig;
use mixroute_core::{MixrouteError, RouteRequest};
use mixroute_session::SessionController;

mod doctor;
mod render;
mod shell;

/// mixroute - balance precision, latency, and cost per prompt.
#[derive(Parser, Debug)]
#[command(name = "mixroute", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Submit one prompt to the routing service and print the decision.
    Route {
        /// The prompt to route.
        query: String,
        /// Weight given to answer precision, in [0, 1].
        #[arg(long)]
        precision: Option<f64>,
        /// Weight given to low latency, in [0, 1].
        #[arg(long)]
        latency: Option<f64>,
        /// Weight given to low cost, in [0, 1].
        #[arg(long)]
        cost: Option<f64>,
    },
    /// Launch an interactive routing session.
    Shell,
    /// Run diagnostic checks against config and the routing service.
    Doctor {
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match mixroute_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            mixroute_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.client.log_level);

    let outcome = match cli.command {
        Some(Commands::Route {
            query,
            precision,
            latency,
            cost,
        }) => run_route(&config, query, precision, latency, cost).await,
        Some(Commands::Shell) => shell::run_shell(&config).await,
        Some(Commands::Doctor { plain }) => doctor::run_doctor(&config, plain).await,
        None => {
            println!("mixroute: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = outcome {
        eprintln!("{}: {e}", "error".red());
        std::process::exit(1);
    }
}

/// Initialize the tracing subscriber; RUST_LOG overrides the configured level.
fn init_tracing(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// One-shot submission: route a single prompt and print the decision card.
async fn run_route(
    config: &MixrouteConfig,
    query: String,
    precision: Option<f64>,
    latency: Option<f64>,
    cost: Option<f64>,
) -> Result<(), MixrouteError> {
    let request = RouteRequest::new(
        query,
        precision.unwrap_or(config.defaults.weight_precision),
        latency.unwrap_or(config.defaults.weight_latency),
        cost.unwrap_or(config.defaults.weight_cost),
    );
    request.validate()?;

    if !request.has_query() {
        return Err(MixrouteError::Config(
            "query must not be empty".to_string(),
        ));
    }

    let client = RouterClient::new(&config.service)?;
    let controller = SessionController::new(Arc::new(client));

    controller.submit(request).await;

    let state = controller.snapshot().await;
    if let Some(message) = state.last_error {
        return Err(MixrouteError::Transport {
            message,
            source: None,
        });
    }
    if let Some(result) = &state.last_result {
        print!("{}", render::decision_card(result));
    }

    Ok(())
}
