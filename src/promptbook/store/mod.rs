//! # Storage Layer
//!
//! Two pieces live here:
//!
//! - [`KeyValueSlot`]: the durable key-value facility. It knows nothing about
//!   prompts, it only stores strings under string keys.
//! - [`PromptStore`]: the authoritative in-memory collection plus the current
//!   selection. It mirrors itself into a slot after every mutation.
//!
//! ## Implementations
//!
//! - [`fs::FileSlot`]: production storage, one `<key>.json` file per key in the
//!   data directory, written atomically.
//! - [`memory::MemorySlot`]: in-memory storage for tests, with switches to
//!   simulate failing reads and writes.
//!
//! ## Storage Format
//!
//! ```text
//! <data_dir>/
//! └── prompts-storage.json   # JSON array of {id, title, content}, newest first
//! ```

use crate::error::Result;
use std::path::PathBuf;

pub mod fs;
pub mod memory;
pub mod prompt_store;

pub use prompt_store::{DeleteOutcome, PromptStore, SaveOutcome};

/// Abstract interface for the durable key-value slot.
///
/// Methods take `&self`; implementations needing mutation use interior
/// mutability since promptbook is single-threaded.
pub trait KeyValueSlot {
    /// Read the value stored under `key`. `Ok(None)` when nothing was ever written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any prior value entirely.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Where `key` lives. A real path for file slots, a virtual one otherwise.
    fn location(&self, key: &str) -> PathBuf;
}
