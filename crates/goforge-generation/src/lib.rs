#![warn(missing_docs)]

//! Project generation for goforge
//!
//! Materializes the embedded Go web scaffold (or any template tree) into a
//! target directory. User selections are resolved into placeholder values,
//! then every template is walked once: text files go through conditional
//! block pruning and placeholder substitution, binary files are copied as-is.

pub mod error;
pub mod fragments;
pub mod generation_manager;
pub mod materializer;
pub mod models;
pub mod templates;

// Re-export public API
pub use error::{GenerationError, Result};
pub use fragments::{AxisFragments, CssFragments};
pub use generation_manager::{generate, GenerationManager, GenerationManagerConfig};
pub use materializer::{
    is_binary_path, is_database_path, output_path, TreeMaterializer, DATABASE_SUBTREE,
    TEMPLATE_SUFFIX,
};
pub use models::{
    CssFramework, Frontend, MaterializeReport, Options, SubstitutionMap, UnknownOption,
};
pub use templates::{
    prune_blocks, prune_bytes, DirectoryTree, EmbeddedTree, EntryKind, Gate, OptionResolver,
    TemplateEngine, TemplateEntry, TemplateTree, MODULE_PLACEHOLDER, TEMPLATE_ROOT,
};
