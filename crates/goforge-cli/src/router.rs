// Command routing and dispatch

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{Command, CompletionsCommand, NewCommand};
use crate::config::{ConfigLoader, GoforgeConfig};
use crate::error::CliResult;

/// goforge - scaffold Go web applications
#[derive(Parser, Debug)]
#[command(name = "goforge")]
#[command(bin_name = "goforge")]
#[command(about = "Scaffold Go web applications")]
#[command(
    long_about = "goforge: generate a ready-to-run Go web application.\n\nThe scaffold wires Chi, Templ, HTMX and Tailwind CSS together, with an optional PostgreSQL layer.\n\n🚀 Quick Start:\n  • goforge new                                Answer a few questions\n  • goforge new demo github.com/you/demo       Use the defaults\n  • goforge completions bash                   Shell completions"
)]
#[command(version)]
#[command(author = "GoForge Contributors")]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Show what would be generated without writing anything
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Configuration file (default: ~/.config/goforge/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create a new project
    #[command(about = "Create a new Go web project")]
    New {
        /// Project directory name
        #[arg(value_name = "PROJECT")]
        project: Option<String>,

        /// Go module path, e.g. github.com/username/project
        #[arg(value_name = "MODULE")]
        module: Option<String>,

        /// Frontend library (htmx, htmx-hyperscript, htmx-alpine)
        #[arg(short, long, value_name = "NAME")]
        frontend: Option<String>,

        /// CSS framework (daisyui, templui, basecoat)
        #[arg(short, long, value_name = "NAME")]
        css: Option<String>,

        /// Include the PostgreSQL database layer
        #[arg(long, value_name = "BOOL")]
        db: Option<bool>,

        /// Use templates from a directory instead of the built-in scaffold
        #[arg(long, value_name = "DIR")]
        templates: Option<PathBuf>,
    },

    /// Generate shell completions
    #[command(about = "Generate shell completion scripts")]
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_name = "SHELL")]
        shell: String,
    },
}

/// Command router
pub struct CommandRouter;

impl CommandRouter {
    /// Parse CLI arguments and route to appropriate handler
    pub fn route() -> CliResult<()> {
        let cli = Cli::parse();

        crate::logging::init_logging(cli.verbose, cli.quiet);

        Self::execute(&cli)
    }

    /// Load the configuration selected by `--config`, or the per-user default
    pub fn load_config(cli: &Cli) -> CliResult<GoforgeConfig> {
        let loader = match &cli.config {
            Some(path) => ConfigLoader::with_path(path),
            None => ConfigLoader::new(),
        };
        loader.load()
    }

    /// Execute a command
    pub fn execute(cli: &Cli) -> CliResult<()> {
        match &cli.command {
            Commands::New {
                project,
                module,
                frontend,
                css,
                db,
                templates,
            } => {
                let config = Self::load_config(cli)?;
                let cmd = NewCommand::new(project.clone(), module.clone())
                    .with_frontend(frontend.clone())
                    .with_css_framework(css.clone())
                    .with_db(*db)
                    .with_templates_dir(templates.clone())
                    .with_dry_run(cli.dry_run)
                    .with_interactive(atty::is(atty::Stream::Stdin))
                    .with_config(config);
                cmd.execute()
            }
            Commands::Completions { shell } => CompletionsCommand::new(shell.clone()).execute(),
        }
    }
}
