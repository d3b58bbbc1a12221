use crate::model::PromptId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("{0}")]
    Validation(String),

    #[error("Prompt not found: {0}")]
    NotFound(PromptId),

    #[error("Could not persist prompts: {0}")]
    Persist(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, PromptError>;
