//! Read-only template trees
//!
//! A tree is a set of slash-separated paths below a single root directory
//! (`templates/...`). Two sources are supported: the scaffold compiled into
//! the binary, and a template directory on disk.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use include_dir::{include_dir, Dir, DirEntry};
use walkdir::WalkDir;

use crate::error::{GenerationError, Result};

/// The scaffold shipped with goforge
static EMBEDDED_TEMPLATES: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Root directory name of the embedded scaffold
pub const TEMPLATE_ROOT: &str = "templates";

/// Kind of a template entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Directory
    Directory,
    /// File
    File,
}

/// One path in a template tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    /// Slash-separated path starting with the tree root
    pub path: String,
    /// Directory or file
    pub kind: EntryKind,
}

impl TemplateEntry {
    /// Whether this entry is a directory
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Immutable hierarchical store of template files
pub trait TemplateTree {
    /// Name of the root directory every entry path starts with
    fn root(&self) -> &str;

    /// Every entry below the root, depth-first, parents before children
    fn entries(&self) -> Result<Vec<TemplateEntry>>;

    /// Raw bytes of a file entry
    fn read(&self, path: &str) -> Result<Cow<'_, [u8]>>;

    /// Path of an entry relative to the root, `None` for the root itself
    fn relative_path<'p>(&self, path: &'p str) -> Option<&'p str> {
        path.strip_prefix(self.root())
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|rest| !rest.is_empty())
    }
}

/// Templates compiled into the binary
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedTree {
    dir: &'static Dir<'static>,
}

impl EmbeddedTree {
    /// The bundled goforge scaffold
    pub fn new() -> Self {
        Self {
            dir: &EMBEDDED_TEMPLATES,
        }
    }

    fn collect(&self, dir: &Dir<'static>, entries: &mut Vec<TemplateEntry>) {
        let mut children: Vec<&DirEntry<'static>> = dir.entries().iter().collect();
        children.sort_by(|a, b| a.path().cmp(b.path()));

        for child in children {
            let path = format!("{}/{}", TEMPLATE_ROOT, slash_path(child.path()));
            match child {
                DirEntry::Dir(sub) => {
                    entries.push(TemplateEntry {
                        path,
                        kind: EntryKind::Directory,
                    });
                    self.collect(sub, entries);
                }
                DirEntry::File(_) => entries.push(TemplateEntry {
                    path,
                    kind: EntryKind::File,
                }),
            }
        }
    }
}

impl Default for EmbeddedTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateTree for EmbeddedTree {
    fn root(&self) -> &str {
        TEMPLATE_ROOT
    }

    fn entries(&self) -> Result<Vec<TemplateEntry>> {
        let mut entries = Vec::new();
        self.collect(self.dir, &mut entries);
        Ok(entries)
    }

    fn read(&self, path: &str) -> Result<Cow<'_, [u8]>> {
        self.relative_path(path)
            .and_then(|relative| self.dir.get_file(relative))
            .map(|file| Cow::Borrowed(file.contents()))
            .ok_or_else(|| GenerationError::TemplateNotFound(path.to_string()))
    }
}

/// Templates read from a directory on disk
///
/// The directory's own name becomes the tree root.
#[derive(Debug, Clone)]
pub struct DirectoryTree {
    base: PathBuf,
    root: String,
}

impl DirectoryTree {
    /// Use `base` as the template root directory
    pub fn new(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        let root = base
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| TEMPLATE_ROOT.to_string());
        Self { base, root }
    }
}

impl TemplateTree for DirectoryTree {
    fn root(&self) -> &str {
        &self.root
    }

    fn entries(&self) -> Result<Vec<TemplateEntry>> {
        let mut entries = Vec::new();
        for entry in WalkDir::new(&self.base).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| GenerationError::ReadTemplate {
                path: e
                    .path()
                    .unwrap_or(self.base.as_path())
                    .display()
                    .to_string(),
                source: e.into(),
            })?;
            let relative = entry
                .path()
                .strip_prefix(&self.base)
                .unwrap_or(entry.path());
            entries.push(TemplateEntry {
                path: format!("{}/{}", self.root, slash_path(relative)),
                kind: if entry.file_type().is_dir() {
                    EntryKind::Directory
                } else {
                    EntryKind::File
                },
            });
        }
        Ok(entries)
    }

    fn read(&self, path: &str) -> Result<Cow<'_, [u8]>> {
        let relative = self
            .relative_path(path)
            .ok_or_else(|| GenerationError::TemplateNotFound(path.to_string()))?;
        fs::read(self.base.join(relative))
            .map(Cow::Owned)
            .map_err(|source| GenerationError::ReadTemplate {
                path: path.to_string(),
                source,
            })
    }
}

/// Join path components with `/` regardless of platform
fn slash_path(path: &Path) -> String {
    path.components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_tree_lists_parents_first() {
        let tree = EmbeddedTree::new();
        let entries = tree.entries().unwrap();

        let dir = entries
            .iter()
            .position(|e| e.path == "templates/cmd/server" && e.is_dir())
            .unwrap();
        let file = entries
            .iter()
            .position(|e| e.path == "templates/cmd/server/main.go.tmpl")
            .unwrap();
        assert!(dir < file);
    }

    #[test]
    fn test_embedded_tree_reads_files() {
        let tree = EmbeddedTree::new();
        let content = tree.read("templates/go.mod.tmpl").unwrap();
        assert!(String::from_utf8_lossy(&content).contains("module github.com/goforge/scaffold"));
    }

    #[test]
    fn test_embedded_tree_missing_file() {
        let tree = EmbeddedTree::new();
        assert!(matches!(
            tree.read("templates/does/not/exist"),
            Err(GenerationError::TemplateNotFound(_))
        ));
        assert!(matches!(
            tree.read("elsewhere/go.mod.tmpl"),
            Err(GenerationError::TemplateNotFound(_))
        ));
    }

    #[test]
    fn test_relative_path_strips_root() {
        let tree = EmbeddedTree::new();
        assert_eq!(tree.relative_path("templates/a/b.go"), Some("a/b.go"));
        assert_eq!(tree.relative_path("templates"), None);
        assert_eq!(tree.relative_path("templates/"), None);
        assert_eq!(tree.relative_path("templatesx/a"), None);
    }

    #[test]
    fn test_directory_tree_walks_depth_first() {
        let temp = tempfile::tempdir().unwrap();
        let base = temp.path().join("templates");
        fs::create_dir_all(base.join("b/c")).unwrap();
        fs::write(base.join("a.txt"), "a").unwrap();
        fs::write(base.join("b/c/d.txt"), "d").unwrap();
        fs::write(base.join("b/e.txt"), "e").unwrap();

        let tree = DirectoryTree::new(&base);
        let paths: Vec<_> = tree
            .entries()
            .unwrap()
            .into_iter()
            .map(|e| e.path)
            .collect();
        assert_eq!(
            paths,
            vec![
                "templates/a.txt",
                "templates/b",
                "templates/b/c",
                "templates/b/c/d.txt",
                "templates/b/e.txt",
            ]
        );
        assert_eq!(&*tree.read("templates/b/e.txt").unwrap(), b"e");
    }

    #[test]
    fn test_directory_tree_read_failure_carries_path() {
        let temp = tempfile::tempdir().unwrap();
        let tree = DirectoryTree::new(temp.path().join("templates"));
        match tree.read("templates/missing.txt") {
            Err(GenerationError::ReadTemplate { path, .. }) => {
                assert_eq!(path, "templates/missing.txt")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_missing_directory_fails_to_walk() {
        let temp = tempfile::tempdir().unwrap();
        let tree = DirectoryTree::new(temp.path().join("nope"));
        assert!(matches!(
            tree.entries(),
            Err(GenerationError::ReadTemplate { .. })
        ));
    }
}
