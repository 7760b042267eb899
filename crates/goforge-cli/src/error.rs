// CLI error types and user-facing messages

use std::path::PathBuf;

use goforge_generation::GenerationError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Directory already exists: {}", path.display())]
    ProjectExists { path: PathBuf },

    #[error("Unknown shell: {0}")]
    UnknownShell(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),
}

impl CliError {
    /// Shorthand for [`CliError::InvalidArgument`]
    pub fn invalid(message: impl Into<String>) -> Self {
        CliError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::InvalidArgument { message } => {
                format!(
                    "Invalid argument: {}\n\nRun 'goforge new --help' for usage information.",
                    message
                )
            }
            CliError::ProjectExists { path } => {
                format!(
                    "Directory '{}' already exists.\n\nChoose another project name or remove the directory.",
                    path.display()
                )
            }
            CliError::UnknownShell(shell) => {
                format!(
                    "Unknown shell: {}\n\nSupported shells: bash, zsh, fish, powershell, elvish.",
                    shell
                )
            }
            CliError::Io(e) => {
                format!("File operation failed: {}", e)
            }
            CliError::Config(msg) => {
                format!(
                    "Configuration error: {}\n\nCheck ~/.config/goforge/config.toml and GOFORGE_* environment variables.",
                    msg
                )
            }
            CliError::Generation(e) => {
                format!("Project generation failed: {}", e)
            }
        }
    }

    /// Get technical details for verbose mode
    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}

pub type CliResult<T> = Result<T, CliError>;
