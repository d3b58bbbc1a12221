//! # CLI Behavior
//!
//! This is **one possible UI client** for promptbook, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, the
//! clipboard and output formatting.
//!
//! ## Naked Execution
//!
//! Running `promptbook` with no arguments defaults to `promptbook list`.
//!
//! ## One-Shot vs. Session
//!
//! Every subcommand is a single event against a freshly loaded store, so the
//! selection never outlives the command. `edit` therefore takes the id
//! explicitly. `promptbook shell` keeps one store open across many events, with
//! a live selection and filter, like a single editor screen.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `render`: Output formatting (list rows, full prompts, messages)
//! - `setup`: Argument parsing via clap
//! - `shell`: The interactive session

mod commands;
mod render;
pub mod setup;
mod shell;

pub use commands::run;
