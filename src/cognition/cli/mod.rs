//! # CLI Layer
//!
//! This module is **one possible UI client** for cognition; it is not the
//! application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs a tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `setup.rs`: clap definitions and the version string
//! - `commands.rs`: `run()`, context wiring and per-command handlers
//! - `print.rs`: terminal output for `CmdResult` contents
//!
//! Handlers stay thin: call the API, print what comes back. Anything that
//! needs a test beyond argument parsing belongs in the library.

mod commands;
mod print;
mod setup;

pub use commands::run;
