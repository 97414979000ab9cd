//! # Cognition CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/cognition/cli/)                             │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring and dispatch (commands.rs)                │
//! │  - Terminal output (print.rs)                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) and everything below it                 │
//! │  - UI agnostic, returns structured `CmdResult` values       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors bubble up as `CognitionError`, are printed as `Error: <message>` on
//! stderr, and end the process with exit code 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
