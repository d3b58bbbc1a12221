//! # Configuration
//!
//! Promptbook configuration is loaded with [`confique`], layering environment
//! variables over an optional TOML file over compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Command line**: `--data-dir` (applied by the CLI on top of this struct).
//! 2. **Environment variables**: `PROMPTBOOK_DATA_DIR`, `PROMPTBOOK_PREVIEW_WIDTH`.
//! 3. **Config file**: `promptbook.toml` in the OS config directory.
//! 4. **Compiled Defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | OS data directory | Where `prompts-storage.json` lives |
//! | `preview_width` | `60` | Columns of content preview in `list` output |

use crate::error::{PromptError, Result};
use confique::Config;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "promptbook.toml";

#[derive(Config, Debug, Clone, PartialEq, Eq)]
pub struct PromptbookConfig {
    /// Directory holding the prompt collection
    #[config(env = "PROMPTBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Columns of content preview shown next to each title in the list
    #[config(env = "PROMPTBOOK_PREVIEW_WIDTH", default = 60)]
    pub preview_width: usize,
}

impl Default for PromptbookConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            preview_width: 60,
        }
    }
}

impl PromptbookConfig {
    /// Load from the environment and the default config file.
    pub fn load() -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = default_config_file() {
            builder = builder.file(path);
        }
        builder
            .load()
            .map_err(|e| PromptError::Config(e.to_string()))
    }

    /// Load from one TOML file only, ignoring the environment.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder()
            .file(path.as_ref())
            .load()
            .map_err(|e| PromptError::Config(e.to_string()))
    }

    /// The configured data directory, or the OS default for this user.
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| PromptError::Config("Could not determine data directory".to_string()))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "promptbook", "promptbook")
}

pub fn default_config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}
