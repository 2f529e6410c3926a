use std::path::PathBuf;
use thiserror::Error;

use crate::record::Field;

/// Errors produced while loading, validating, querying and rendering.
///
/// Only `Load` and `Parse` are fatal, and only at startup. Everything else is
/// reported at the dispatcher boundary and the loop carries on.
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// A known command was given the wrong number of arguments.
    #[error("Usage: {usage}")]
    Usage { usage: &'static str },

    /// A count argument could not be parsed as a non-negative integer.
    #[error("Error: Please provide a valid number for {command}.")]
    InvalidNumber { command: &'static str },

    #[error("Unknown command. Type 'help' to see available commands.")]
    UnknownCommand(String),

    /// A record lacks the field a query groups or searches by.
    #[error("record {index} has no {field}")]
    DataFieldMissing { field: Field, index: usize },

    #[error("failed to read {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to render {path}: {source}")]
    Render {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
