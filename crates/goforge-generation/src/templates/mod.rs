//! Template handling for project generation
//!
//! Provides template trees, conditional block pruning, placeholder resolution
//! and rendering.

pub mod conditional;
pub mod engine;
pub mod resolver;
pub mod tree;

// Re-export public API
pub use conditional::{prune_blocks, prune_bytes, Gate};
pub use engine::TemplateEngine;
pub use resolver::{OptionResolver, MODULE_PLACEHOLDER};
pub use tree::{
    DirectoryTree, EmbeddedTree, EntryKind, TemplateEntry, TemplateTree, TEMPLATE_ROOT,
};

/// Text view of rendered bytes
///
/// Rendering splices only at ASCII marker and token boundaries, so valid
/// UTF-8 input stays valid.
pub(crate) fn into_text(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}
