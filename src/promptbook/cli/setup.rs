use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "promptbook", bin_name = "promptbook", version)]
#[command(about = "Keep, search and copy your prompts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the prompt collection
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List prompts, optionally filtered by title
    #[command(alias = "ls")]
    List {
        /// Only show prompts whose title contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search prompt titles
    Search { term: String },

    /// Create a new prompt
    #[command(alias = "n")]
    Create { title: String, content: String },

    /// Replace the title and content of a prompt
    #[command(alias = "e")]
    Edit {
        id: String,
        title: String,
        content: String,
    },

    /// Show a prompt in full
    #[command(alias = "v")]
    View { id: String },

    /// Delete one or more prompts
    #[command(alias = "rm")]
    Delete {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Copy a prompt's content to the clipboard
    #[command(alias = "c")]
    Copy { id: String },

    /// Print the path of the prompt collection file
    Path,

    /// Start an interactive session
    Shell,
}
