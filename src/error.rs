//! Error type shared by every stage of post preparation.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop (or, for collaborators, are reported during) a run.
#[derive(Error, Debug)]
pub enum NuevoError {
    #[error("This doesn't appear to be a Hugo directory: no archetypes folder in '{0}'")]
    NotSiteRoot(PathBuf),

    #[error("Unable to read input markdown file '{path}': {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No post body found")]
    EmptyBody,

    /// Remote image fetch failed, either in transport or with an error status.
    #[error("Failed to download '{url}': {source}")]
    Download {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to set up HTTP client: {0}")]
    HttpClient(String),

    #[error("Failed to copy '{from}' to '{to}': {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An external collaborator (stub generator, editor) failed to run or exited non-zero.
    #[error("Command `{command}` failed: {reason}")]
    Command { command: String, reason: String },
}

pub type Result<T> = std::result::Result<T, NuevoError>;
