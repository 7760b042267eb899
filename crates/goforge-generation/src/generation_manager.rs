//! Generation manager: resolve options, then materialize a template tree

use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::materializer::TreeMaterializer;
use crate::models::{MaterializeReport, Options};
use crate::templates::{EmbeddedTree, OptionResolver, TemplateTree};

/// Configuration for a generation manager
#[derive(Debug, Clone, Default)]
pub struct GenerationManagerConfig {
    /// Render everything but write nothing
    pub dry_run: bool,
}

/// Runs the generation pipeline over one template tree
pub struct GenerationManager {
    tree: Box<dyn TemplateTree>,
    resolver: OptionResolver,
    config: GenerationManagerConfig,
}

impl GenerationManager {
    /// Manager over the embedded scaffold
    pub fn new() -> Self {
        Self::with_tree(Box::new(EmbeddedTree::new()))
    }

    /// Manager over a custom template tree
    pub fn with_tree(tree: Box<dyn TemplateTree>) -> Self {
        Self {
            tree,
            resolver: OptionResolver::new(),
            config: GenerationManagerConfig::default(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: GenerationManagerConfig) -> Self {
        self.config = config;
        self
    }

    /// Generate into `options.project_name`
    pub fn generate(&self, options: &Options) -> Result<MaterializeReport> {
        self.generate_into(Path::new(&options.project_name), options, |_| {})
    }

    /// Generate into an explicit target root, reporting each written file
    pub fn generate_into<F>(
        &self,
        target_root: &Path,
        options: &Options,
        progress: F,
    ) -> Result<MaterializeReport>
    where
        F: FnMut(&Path),
    {
        info!(
            project = %options.project_name,
            module = %options.module_path,
            frontend = %options.frontend,
            css = %options.css_framework,
            include_db = options.include_db,
            "generating project"
        );

        let substitutions = self.resolver.resolve(options);
        let report = TreeMaterializer::new(self.tree.as_ref())
            .with_dry_run(self.config.dry_run)
            .materialize_with_progress(target_root, options, &substitutions, progress)?;

        info!(
            files = report.files.len(),
            skipped = report.skipped.len(),
            "generation finished"
        );
        Ok(report)
    }
}

impl Default for GenerationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a project with the default stack (HTMX, DaisyUI, database)
pub fn generate(project_name: &str, module_path: &str) -> Result<MaterializeReport> {
    GenerationManager::new().generate(&Options::new(project_name, module_path))
}
