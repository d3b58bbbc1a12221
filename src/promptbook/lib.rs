//! # Promptbook Architecture
//!
//! Promptbook is a **UI-agnostic prompt library** with a small command line client.
//! A prompt is a titled piece of text that a user keeps around to paste into other
//! tools. The library owns the collection, its persistence and the list view; every
//! front end (the CLI, the interactive shell, anything else) only feeds it events.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - One method per user action                               │
//! │  - Keeps the current filter text between events             │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (store/, projector.rs, persistence.rs)                │
//! │  - PromptStore: ordered prompts + weak selection            │
//! │  - render(): pure filter + format of the list               │
//! │  - persist()/load(): JSON blob under one fixed key          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Event Model
//!
//! Every user action is one synchronous event: mutate the store, let the store
//! persist itself, re-render the list from the store and the current filter.
//! Nothing suspends, nothing runs concurrently, so there is no locking anywhere.
//!
//! ## Failure Policy
//!
//! Nothing in the core is fatal. Invalid input is rejected before any mutation.
//! A failed write is logged and reported as a warning while the in-memory state
//! stays authoritative. A missing or corrupt blob loads as an empty collection.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module of business logic per user action
//! - [`store`]: The prompt store and the key-value slot abstraction
//! - [`persistence`]: Encoding of the collection into the durable slot
//! - [`projector`]: The list projection (filtering + list entries)
//! - [`model`]: Core data types (`Prompt`, `PromptId`)
//! - [`markup`]: Visible-text extraction for markup-capable content
//! - [`config`]: Configuration management
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod markup;
pub mod model;
pub mod persistence;
pub mod projector;
pub mod store;
