// Command handlers for the goforge CLI

pub mod completions;
pub mod new;

pub use completions::{generate_completions, CompletionsCommand};
pub use new::{validate_module_path, validate_project_name, NewCommand};

use crate::error::CliResult;

/// Trait for command handlers
pub trait Command {
    /// Execute the command
    fn execute(&self) -> CliResult<()>;
}
