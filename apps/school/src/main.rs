//! # School
//!
//! Prints school records and motorcycles.
//!
//! ## Usage
//!
//! ```bash
//! # Print the demonstration record
//! school
//!
//! # Print a custom record as JSON
//! school --json-mode record --course "9th Grade" --student Ann --teacher Bob --subject Art
//!
//! # Validate a motorcycle
//! school moto -p AB-123 -c red -b Ducati
//! ```
//!
//! `RUST_LOG` sets the log filter; `SCHOOL_LOG_FORMAT=json` switches the
//! log formatter. Logs always go to stderr.

use clap::Parser;
use school::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    init_tracing(cli.verbose);

    // Execute command
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing on stderr; stdout carries command output only.
fn init_tracing(verbose: bool) {
    let log_format = std::env::var("SCHOOL_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if verbose { "school=debug" } else { "school=info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
