//! CLI command definitions and dispatch for the `sfront` binary.
//!
//! Uses clap derive macros for argument parsing. Session provisioning lives
//! here as a verb-noun subcommand (`sfront session set ...`); the badge
//! count and shell are read-only queries.

pub mod count;
pub mod nav;
pub mod session;
pub mod status;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Storefront navigation shell and cart badge service.
#[derive(Parser)]
#[command(name = "sfront", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the cart badge count for the current (or given) session.
    Count {
        /// Externally provisioned session token; defaults to the stored
        /// session (or the configured default when none is stored).
        #[arg(long)]
        session: Option<String>,
    },

    /// Print the assembled navigation shell.
    Nav,

    /// Manage the stored cart session token.
    Session {
        #[command(subcommand)]
        action: session::SessionCommand,
    },

    /// Show data directory, database health, and the current badge count.
    Status,

    /// Start the REST API server.
    Serve {
        /// Port to bind.
        #[arg(long, default_value_t = 8787)]
        port: u16,

        /// Host to bind.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Export spans via OpenTelemetry (stdout exporter).
        #[arg(long)]
        otel: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
