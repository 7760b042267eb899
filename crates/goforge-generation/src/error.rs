//! Error types for project generation

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while materializing a template tree
///
/// Every I/O variant carries the path it failed on. All of them abort the
/// current run; files written before the failure are left in place.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Template entry does not exist in the tree
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Reading a template entry (or walking the template tree) failed
    #[error("Failed to read template file {path}: {source}")]
    ReadTemplate {
        /// Template path, relative to the tree root's parent
        path: String,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Creating a directory in the target tree failed
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Writing an output file failed
    #[error("Failed to write file {}: {source}", path.display())]
    WriteFile {
        /// File that could not be written
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Two template entries map to the same output path
    #[error("Template paths {first} and {second} both materialize to {}", output.display())]
    PathCollision {
        /// Template path that claimed the output first
        first: String,
        /// Template path that collided with it
        second: String,
        /// Output path, relative to the target root
        output: PathBuf,
    },
}

/// Result alias used throughout the generation crate
pub type Result<T> = std::result::Result<T, GenerationError>;
