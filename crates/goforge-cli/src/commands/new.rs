// Scaffold a new Go web project

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use goforge_generation::{
    CssFramework, DirectoryTree, Frontend, GenerationManager, GenerationManagerConfig,
    MaterializeReport, Options,
};
use tracing::debug;

use super::Command;
use crate::config::GoforgeConfig;
use crate::error::{CliError, CliResult};
use crate::output::{print_line, print_success, OutputStyle};
use crate::prompt::Prompter;

/// Prompter type used when stdin is not a terminal and nothing may be asked
type NoPrompt = Prompter<io::Empty, io::Sink>;

/// Generate a project from command-line choices, prompts and configuration
pub struct NewCommand {
    pub project_name: Option<String>,
    pub module_path: Option<String>,
    pub frontend: Option<String>,
    pub css_framework: Option<String>,
    pub include_db: Option<bool>,
    pub templates_dir: Option<PathBuf>,
    pub dry_run: bool,
    pub interactive: bool,
    pub base_dir: PathBuf,
    pub config: GoforgeConfig,
}

impl NewCommand {
    pub fn new(project_name: Option<String>, module_path: Option<String>) -> Self {
        Self {
            project_name,
            module_path,
            frontend: None,
            css_framework: None,
            include_db: None,
            templates_dir: None,
            dry_run: false,
            interactive: false,
            base_dir: PathBuf::from("."),
            config: GoforgeConfig::default(),
        }
    }

    pub fn with_frontend(mut self, frontend: Option<String>) -> Self {
        self.frontend = frontend;
        self
    }

    pub fn with_css_framework(mut self, css_framework: Option<String>) -> Self {
        self.css_framework = css_framework;
        self
    }

    pub fn with_db(mut self, include_db: Option<bool>) -> Self {
        self.include_db = include_db;
        self
    }

    pub fn with_templates_dir(mut self, templates_dir: Option<PathBuf>) -> Self {
        self.templates_dir = templates_dir;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Directory the project directory is created in
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    pub fn with_config(mut self, config: GoforgeConfig) -> Self {
        self.config = config;
        self
    }

    /// Build validated options without asking anything
    pub fn resolve_options(&self) -> CliResult<Options> {
        self.resolve_options_with(None::<&mut NoPrompt>)
    }

    /// Build validated options, asking for whatever flags left open
    ///
    /// Flags win over answers, answers over configuration. Without a prompter
    /// project name and module path must come from flags.
    pub fn resolve_options_with<R, W>(
        &self,
        mut prompter: Option<&mut Prompter<R, W>>,
    ) -> CliResult<Options>
    where
        R: BufRead,
        W: Write,
    {
        let project_name = match (&self.project_name, prompter.as_deref_mut()) {
            (Some(name), _) => name.clone(),
            (None, Some(p)) => p.ask("Project name:", validate_project_name)?,
            (None, None) => return Err(CliError::invalid("project name is required")),
        };
        validate_project_name(&project_name)?;

        let module_path = match (&self.module_path, prompter.as_deref_mut()) {
            (Some(path), _) => path.clone(),
            (None, Some(p)) => p.ask(
                &format!("Go module path (e.g. github.com/username/{}):", project_name),
                validate_module_path,
            )?,
            (None, None) => return Err(CliError::invalid("module path is required")),
        };
        validate_module_path(&module_path)?;

        let configured_frontend = Frontend::from_name_or_default(&self.config.frontend);
        let frontend = match (&self.frontend, prompter.as_deref_mut()) {
            (Some(name), _) => Frontend::from_name_or_default(name),
            (None, Some(p)) => {
                let choices = Frontend::ALL.map(|f| (f, f.name(), f.label()));
                p.choose("Frontend library", &choices, configured_frontend)?
            }
            (None, None) => configured_frontend,
        };

        let configured_css = CssFramework::from_name_or_default(&self.config.css_framework);
        let css_framework = match (&self.css_framework, prompter.as_deref_mut()) {
            (Some(name), _) => CssFramework::from_name_or_default(name),
            (None, Some(p)) => {
                let choices = CssFramework::ALL.map(|c| (c, c.name(), c.label()));
                p.choose("CSS framework", &choices, configured_css)?
            }
            (None, None) => configured_css,
        };

        let include_db = match (self.include_db, prompter.as_deref_mut()) {
            (Some(include_db), _) => include_db,
            (None, Some(p)) => p.confirm("Include PostgreSQL database?", self.config.include_db)?,
            (None, None) => self.config.include_db,
        };

        Ok(Options::new(project_name, module_path)
            .with_frontend(frontend)
            .with_css_framework(css_framework)
            .with_db(include_db))
    }

    /// Template directory from the flag, else from configuration
    fn templates_dir(&self) -> Option<&Path> {
        self.templates_dir
            .as_deref()
            .or(self.config.templates_dir.as_deref())
    }

    fn manager(&self) -> CliResult<GenerationManager> {
        let manager = match self.templates_dir() {
            Some(dir) => {
                if !dir.is_dir() {
                    return Err(CliError::invalid(format!(
                        "template directory not found: {}",
                        dir.display()
                    )));
                }
                debug!(dir = %dir.display(), "using custom templates");
                GenerationManager::with_tree(Box::new(DirectoryTree::new(dir)))
            }
            None => GenerationManager::new(),
        };
        Ok(manager.with_config(GenerationManagerConfig {
            dry_run: self.dry_run,
        }))
    }

    /// Generate the project described by `options`
    pub fn generate(&self, options: &Options) -> CliResult<MaterializeReport> {
        let target = self.base_dir.join(&options.project_name);
        if target.exists() {
            return Err(CliError::ProjectExists { path: target });
        }
        let manager = self.manager()?;

        let style = OutputStyle::default();
        self.show_summary(&style, options);

        let report = manager.generate_into(&target, options, |path| {
            print_line(&style.file_created(&path.display().to_string()));
        })?;

        self.show_next_steps(&style, options, &report);
        Ok(report)
    }

    fn show_summary(&self, style: &OutputStyle, options: &Options) {
        print_line("");
        print_line(&style.header(&format!("🚀 Creating {}", options.project_name)));
        print_line(&style.key_value("Module", &options.module_path));
        print_line(&style.key_value("Frontend", options.frontend.label()));
        print_line(&style.key_value("CSS", options.css_framework.label()));
        print_line(&style.key_value(
            "Database",
            if options.include_db { "PostgreSQL" } else { "none" },
        ));
        print_line("");
    }

    fn show_next_steps(&self, style: &OutputStyle, options: &Options, report: &MaterializeReport) {
        print_line("");
        if report.dry_run {
            print_success(&format!(
                "Dry run: {} files would be created in {}",
                report.files.len(),
                options.project_name
            ));
            return;
        }
        print_success(&format!(
            "Created {} files in {}",
            report.files.len(),
            options.project_name
        ));

        print_line("");
        print_line(&style.header("Next steps:"));
        let mut steps = vec![format!("cd {}", options.project_name), "make setup".to_string()];
        if options.include_db {
            steps.push("docker compose up -d db".to_string());
        }
        steps.push("make dev".to_string());
        for (i, step) in steps.iter().enumerate() {
            print_line(&style.numbered_item(i + 1, &style.code(step)));
        }
    }
}

impl Command for NewCommand {
    fn execute(&self) -> CliResult<()> {
        let options = if self.interactive {
            let mut prompter = Prompter::stdio();
            self.resolve_options_with(Some(&mut prompter))?
        } else {
            self.resolve_options()?
        };
        self.generate(&options)?;
        Ok(())
    }
}

/// Project names become directory names: non-empty, no spaces or slashes
pub fn validate_project_name(name: &str) -> CliResult<()> {
    if name.is_empty() {
        return Err(CliError::invalid("project name is required"));
    }
    if name.contains([' ', '/', '\\']) {
        return Err(CliError::invalid(
            "project name cannot contain spaces or slashes",
        ));
    }
    Ok(())
}

/// Module paths need at least one `/`, e.g. `github.com/user/project`
pub fn validate_module_path(path: &str) -> CliResult<()> {
    if path.is_empty() {
        return Err(CliError::invalid("module path is required"));
    }
    if !path.contains('/') {
        return Err(CliError::invalid(
            "module path should look like github.com/username/project",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scripted(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new()).plain()
    }

    #[test]
    fn test_project_name_rules() {
        assert!(validate_project_name("demo").is_ok());
        assert!(validate_project_name("my-app_2").is_ok());
        assert!(validate_project_name("").is_err());
        assert!(validate_project_name("my app").is_err());
        assert!(validate_project_name("a/b").is_err());
        assert!(validate_project_name("a\\b").is_err());
    }

    #[test]
    fn test_module_path_rules() {
        assert!(validate_module_path("github.com/x/demo").is_ok());
        assert!(validate_module_path("example.com/demo").is_ok());
        assert!(validate_module_path("").is_err());
        assert!(validate_module_path("demo").is_err());
    }

    #[test]
    fn test_flags_resolve_without_prompting() {
        let options = NewCommand::new(Some("demo".into()), Some("github.com/x/demo".into()))
            .with_frontend(Some("htmx-alpine".into()))
            .with_css_framework(Some("basecoat".into()))
            .with_db(Some(false))
            .resolve_options()
            .unwrap();

        assert_eq!(options.project_name, "demo");
        assert_eq!(options.frontend, Frontend::HtmxAlpine);
        assert_eq!(options.css_framework, CssFramework::Basecoat);
        assert!(!options.include_db);
    }

    #[test]
    fn test_configuration_fills_missing_flags() {
        let config = GoforgeConfig {
            frontend: "htmx-hyperscript".into(),
            css_framework: "templui".into(),
            include_db: false,
            templates_dir: None,
        };
        let options = NewCommand::new(Some("demo".into()), Some("github.com/x/demo".into()))
            .with_config(config)
            .with_css_framework(Some("daisyui".into()))
            .resolve_options()
            .unwrap();

        assert_eq!(options.frontend, Frontend::HtmxHyperscript);
        assert_eq!(options.css_framework, CssFramework::DaisyUi);
        assert!(!options.include_db);
    }

    #[test]
    fn test_unknown_names_fall_back_to_defaults() {
        let options = NewCommand::new(Some("demo".into()), Some("github.com/x/demo".into()))
            .with_frontend(Some("react".into()))
            .with_css_framework(Some("bootstrap".into()))
            .resolve_options()
            .unwrap();
        assert_eq!(options.frontend, Frontend::Htmx);
        assert_eq!(options.css_framework, CssFramework::DaisyUi);
    }

    #[test]
    fn test_missing_names_without_terminal_fail() {
        let missing_project = NewCommand::new(None, Some("github.com/x/demo".into()));
        assert!(matches!(
            missing_project.resolve_options(),
            Err(CliError::InvalidArgument { .. })
        ));

        let missing_module = NewCommand::new(Some("demo".into()), None);
        assert!(missing_module.resolve_options().is_err());
    }

    #[test]
    fn test_invalid_flag_values_are_rejected() {
        let command = NewCommand::new(Some("my app".into()), Some("github.com/x/demo".into()));
        assert!(command.resolve_options().is_err());

        let command = NewCommand::new(Some("demo".into()), Some("demo".into()));
        assert!(command.resolve_options().is_err());
    }

    #[test]
    fn test_prompts_fill_every_open_choice() {
        let mut prompter = scripted("bad name\nshop\ngithub.com/acme/shop\n3\nbasecoat\nn\n");
        let options = NewCommand::new(None, None)
            .resolve_options_with(Some(&mut prompter))
            .unwrap();

        assert_eq!(options.project_name, "shop");
        assert_eq!(options.module_path, "github.com/acme/shop");
        assert_eq!(options.frontend, Frontend::HtmxAlpine);
        assert_eq!(options.css_framework, CssFramework::Basecoat);
        assert!(!options.include_db);
    }

    #[test]
    fn test_prompt_defaults_come_from_configuration() {
        let config = GoforgeConfig {
            frontend: "htmx-alpine".into(),
            ..GoforgeConfig::default()
        };
        let mut prompter = scripted("\n\n\n");
        let options = NewCommand::new(Some("demo".into()), Some("github.com/x/demo".into()))
            .with_config(config)
            .resolve_options_with(Some(&mut prompter))
            .unwrap();

        assert_eq!(options.frontend, Frontend::HtmxAlpine);
        assert_eq!(options.css_framework, CssFramework::DaisyUi);
        assert!(options.include_db);
    }

    #[test]
    fn test_existing_directory_is_refused() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::create_dir(temp.path().join("demo")).unwrap();

        let command = NewCommand::new(Some("demo".into()), Some("github.com/x/demo".into()))
            .with_base_dir(temp.path());
        let options = command.resolve_options().unwrap();
        assert!(matches!(
            command.generate(&options),
            Err(CliError::ProjectExists { .. })
        ));
    }

    #[test]
    fn test_missing_template_directory_is_refused() {
        let temp = tempfile::tempdir().unwrap();
        let command = NewCommand::new(Some("demo".into()), Some("github.com/x/demo".into()))
            .with_base_dir(temp.path())
            .with_templates_dir(Some(temp.path().join("nope")));
        let options = command.resolve_options().unwrap();
        assert!(matches!(
            command.generate(&options),
            Err(CliError::InvalidArgument { .. })
        ));
        assert!(!temp.path().join("demo").exists());
    }

    #[test]
    fn test_generate_writes_project() {
        let temp = tempfile::tempdir().unwrap();
        let command = NewCommand::new(Some("demo".into()), Some("github.com/x/demo".into()))
            .with_base_dir(temp.path());
        let options = command.resolve_options().unwrap();
        let report = command.generate(&options).unwrap();

        assert!(!report.files.is_empty());
        let go_mod = std::fs::read_to_string(temp.path().join("demo/go.mod")).unwrap();
        assert!(go_mod.starts_with("module github.com/x/demo"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = tempfile::tempdir().unwrap();
        let command = NewCommand::new(Some("demo".into()), Some("github.com/x/demo".into()))
            .with_base_dir(temp.path())
            .with_dry_run(true);
        let options = command.resolve_options().unwrap();
        let report = command.generate(&options).unwrap();

        assert!(report.dry_run);
        assert!(!temp.path().join("demo").exists());
    }
}
