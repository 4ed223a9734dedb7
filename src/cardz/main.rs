//! # Cardz CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file only
//! invokes `cli::run()` and handles process termination.
//!
//! - `cli/setup.rs`: clap argument parsing and grouped help
//! - `cli/commands.rs`: logging setup, context wiring, per-command handlers
//! - `cli/render.rs`: terminal rendering (tree, card, search hits, messages)

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
