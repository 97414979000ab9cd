//! # Cognition Architecture
//!
//! Cognition is a flashcard study tool: users own quizzes, quizzes own
//! flashcards, and everything is kept in one JSON document. The library is
//! UI-agnostic; the bundled CLI is one client among possible others (a REST
//! router, a desktop app).
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, builds validated values from raw input      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Uniqueness rules, lookups by quiz id across users        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - UserStore trait: whole-collection CRUD by username       │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The domain model ([`model`]) is shared by every layer and guarantees that
//! no invalid `User`, `Quiz` or `Flashcard` can exist.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never prints, never exits the process and
//! never installs a log subscriber. Diagnostics go through `tracing`; the
//! host decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Cross-record rules (uniqueness, lookups by id)
//! - [`store`]: Storage trait, JSON file store, in-memory store
//! - [`model`]: `User`, `Quiz`, `Flashcard`, `CompactQuiz` and validation
//! - [`config`]: Storage location and test mode
//! - [`tools`]: Identifier generation and small string helpers
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod tools;
