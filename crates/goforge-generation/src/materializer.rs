//! Tree materializer
//!
//! Walks a template tree once, depth-first, and writes the rendered tree under
//! a target root:
//! - directories are created (existing ones are fine)
//! - the database subtree is skipped entirely when the database is disabled
//! - binary files are copied byte for byte
//! - text files are pruned and substituted by the [`TemplateEngine`]
//! - a trailing `.tmpl` is dropped from output file names
//!
//! The first I/O error aborts the run. Files written before it stay on disk.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{GenerationError, Result};
use crate::models::{MaterializeReport, Options, SubstitutionMap};
use crate::templates::{TemplateEngine, TemplateTree};

/// Suffix marking a file as a template; stripped from output names
pub const TEMPLATE_SUFFIX: &str = ".tmpl";

/// Root-relative template path holding the database layer
pub const DATABASE_SUBTREE: &str = "internal/database";

/// Extensions copied without transformation
const BINARY_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "ico", "webp", "woff", "woff2", "ttf", "eot", "zip", "tar",
    "gz", "mjs",
];

/// Whether a template path is copied verbatim, judged by extension
pub fn is_binary_path(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .is_some_and(|ext| BINARY_EXTENSIONS.contains(&ext.as_str()))
}

/// Whether a root-relative template path belongs to the database layer
pub fn is_database_path(relative: &str) -> bool {
    relative
        .strip_prefix(DATABASE_SUBTREE)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Output path, relative to the target root, for a root-relative file path
pub fn output_path(relative: &str) -> PathBuf {
    let name = match relative.strip_suffix(TEMPLATE_SUFFIX) {
        Some(stem) if !stem.is_empty() && !stem.ends_with('/') => stem,
        _ => relative,
    };
    name.split('/').collect()
}

/// Writes a rendered template tree to disk
pub struct TreeMaterializer<'t, T: TemplateTree + ?Sized> {
    tree: &'t T,
    dry_run: bool,
}

impl<'t, T: TemplateTree + ?Sized> TreeMaterializer<'t, T> {
    /// Create a materializer over `tree`
    pub fn new(tree: &'t T) -> Self {
        Self {
            tree,
            dry_run: false,
        }
    }

    /// Walk and render without touching the filesystem
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Materialize the tree under `target_root`
    pub fn materialize(
        &self,
        target_root: &Path,
        options: &Options,
        substitutions: &SubstitutionMap,
    ) -> Result<MaterializeReport> {
        self.materialize_with_progress(target_root, options, substitutions, |_| {})
    }

    /// Materialize the tree, calling `progress` with each output path once it
    /// is written
    pub fn materialize_with_progress<F>(
        &self,
        target_root: &Path,
        options: &Options,
        substitutions: &SubstitutionMap,
        mut progress: F,
    ) -> Result<MaterializeReport>
    where
        F: FnMut(&Path),
    {
        let engine = TemplateEngine::for_options(options, substitutions);
        let mut report = MaterializeReport {
            dry_run: self.dry_run,
            ..MaterializeReport::default()
        };
        // Output path -> template path that produced it
        let mut claimed: HashMap<PathBuf, String> = HashMap::new();

        self.create_dir(target_root)?;

        for entry in self.tree.entries()? {
            let Some(relative) = self.tree.relative_path(&entry.path) else {
                continue;
            };

            if !options.include_db && is_database_path(relative) {
                debug!(path = %entry.path, "database disabled, skipping");
                report.skipped.push(entry.path.clone());
                continue;
            }

            if entry.is_dir() {
                let dir: PathBuf = relative.split('/').collect();
                self.create_dir(&target_root.join(dir))?;
                report.directories += 1;
                continue;
            }

            let output = output_path(relative);
            if let Some(first) = claimed.get(&output) {
                return Err(GenerationError::PathCollision {
                    first: first.clone(),
                    second: entry.path,
                    output,
                });
            }

            let raw = self.tree.read(&entry.path)?;
            let content = self.transform(&entry.path, &raw, &engine);
            self.write_file(&target_root.join(&output), &content)?;

            info!(path = %output.display(), dry_run = self.dry_run, "wrote file");
            progress(&output);
            claimed.insert(output.clone(), entry.path);
            report.files.push(output);
        }

        Ok(report)
    }

    /// Render a text template; binaries pass through
    fn transform<'r>(
        &self,
        path: &str,
        raw: &'r [u8],
        engine: &TemplateEngine<'_>,
    ) -> Cow<'r, [u8]> {
        if is_binary_path(path) {
            debug!(path, "copying binary file");
            return Cow::Borrowed(raw);
        }
        Cow::Owned(engine.render_bytes(raw))
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        if self.dry_run {
            return Ok(());
        }
        fs::create_dir_all(path).map_err(|source| GenerationError::CreateDir {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> Result<()> {
        if self.dry_run {
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            self.create_dir(parent)?;
        }
        fs::write(path, content).map_err(|source| GenerationError::WriteFile {
            path: path.to_path_buf(),
            source,
        })
    }
}
