//! Core data models for project generation

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::warn;

/// Frontend enhancement library bundled into the generated page shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Frontend {
    /// HTMX only
    #[default]
    Htmx,
    /// HTMX plus _hyperscript
    HtmxHyperscript,
    /// HTMX plus Alpine.js
    HtmxAlpine,
}

impl Frontend {
    /// Every selectable frontend, in menu order
    pub const ALL: [Frontend; 3] = [
        Frontend::Htmx,
        Frontend::HtmxHyperscript,
        Frontend::HtmxAlpine,
    ];

    /// Identifier used on the command line and in configuration
    pub fn name(self) -> &'static str {
        match self {
            Frontend::Htmx => "htmx",
            Frontend::HtmxHyperscript => "htmx-hyperscript",
            Frontend::HtmxAlpine => "htmx-alpine",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Frontend::Htmx => "HTMX",
            Frontend::HtmxHyperscript => "HTMX + Hyperscript",
            Frontend::HtmxAlpine => "HTMX + Alpine.js",
        }
    }

    /// Parse a frontend name, falling back to [`Frontend::Htmx`] for unknown input
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!(frontend = name, "unknown frontend, using {}", Frontend::default());
            Frontend::default()
        })
    }
}

impl fmt::Display for Frontend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Frontend {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Frontend::ALL
            .into_iter()
            .find(|frontend| frontend.name() == s.trim())
            .ok_or_else(|| UnknownOption::new("frontend", s))
    }
}

/// CSS component framework layered on top of Tailwind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CssFramework {
    /// DaisyUI component library with themes
    #[default]
    DaisyUi,
    /// TemplUI Go/Templ components
    TemplUi,
    /// Basecoat shadcn/ui-style components
    Basecoat,
}

impl CssFramework {
    /// Every selectable CSS framework, in menu order
    pub const ALL: [CssFramework; 3] = [
        CssFramework::DaisyUi,
        CssFramework::TemplUi,
        CssFramework::Basecoat,
    ];

    /// Identifier used on the command line and in configuration
    pub fn name(self) -> &'static str {
        match self {
            CssFramework::DaisyUi => "daisyui",
            CssFramework::TemplUi => "templui",
            CssFramework::Basecoat => "basecoat",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            CssFramework::DaisyUi => "DaisyUI",
            CssFramework::TemplUi => "TemplUI",
            CssFramework::Basecoat => "Basecoat",
        }
    }

    /// Parse a framework name, falling back to [`CssFramework::DaisyUi`] for unknown input
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!(css = name, "unknown CSS framework, using {}", CssFramework::default());
            CssFramework::default()
        })
    }
}

impl fmt::Display for CssFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CssFramework {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CssFramework::ALL
            .into_iter()
            .find(|framework| framework.name() == s.trim())
            .ok_or_else(|| UnknownOption::new("CSS framework", s))
    }
}

/// Strict parse failure for [`Frontend`] or [`CssFramework`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownOption {
    kind: &'static str,
    value: String,
}

impl UnknownOption {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// User selections driving one generation run
///
/// `project_name` and `module_path` are trusted as-is; callers validate them
/// before building the options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Target directory name
    pub project_name: String,
    /// Go module path the scaffold imports from
    pub module_path: String,
    /// Frontend enhancement library
    pub frontend: Frontend,
    /// CSS component framework
    pub css_framework: CssFramework,
    /// Whether the database layer is generated
    pub include_db: bool,
}

impl Options {
    /// Options with the default stack (HTMX, DaisyUI, database included)
    pub fn new(project_name: impl Into<String>, module_path: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            module_path: module_path.into(),
            frontend: Frontend::default(),
            css_framework: CssFramework::default(),
            include_db: true,
        }
    }

    /// Set the frontend
    pub fn with_frontend(mut self, frontend: Frontend) -> Self {
        self.frontend = frontend;
        self
    }

    /// Set the frontend by name; unknown names fall back to the default
    pub fn with_frontend_name(self, name: &str) -> Self {
        self.with_frontend(Frontend::from_name_or_default(name))
    }

    /// Set the CSS framework
    pub fn with_css_framework(mut self, css_framework: CssFramework) -> Self {
        self.css_framework = css_framework;
        self
    }

    /// Set the CSS framework by name; unknown names fall back to the default
    pub fn with_css_framework_name(self, name: &str) -> Self {
        self.with_css_framework(CssFramework::from_name_or_default(name))
    }

    /// Toggle the database layer
    pub fn with_db(mut self, include_db: bool) -> Self {
        self.include_db = include_db;
        self
    }
}

/// Placeholder token to replacement text, iterated in token order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionMap {
    entries: BTreeMap<String, String>,
}

impl SubstitutionMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the value for a token
    pub fn insert(&mut self, token: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(token.into(), value.into());
    }

    /// Replacement text for a token
    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no tokens
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tokens and values, ordered by token
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a SubstitutionMap {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// What a materialization run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    /// Written files, relative to the target root, in walk order
    pub files: Vec<PathBuf>,
    /// Directories created (or already present) under the target root
    pub directories: usize,
    /// Template paths left out by feature pruning
    pub skipped: Vec<String>,
    /// Whether nothing was actually written
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_round_trips_names() {
        for frontend in Frontend::ALL {
            assert_eq!(frontend.name().parse::<Frontend>(), Ok(frontend));
        }
    }

    #[test]
    fn test_unknown_frontend_defaults_to_htmx() {
        assert_eq!(Frontend::from_name_or_default("react"), Frontend::Htmx);
        assert_eq!(Frontend::from_name_or_default(""), Frontend::Htmx);
        assert!("react".parse::<Frontend>().is_err());
    }

    #[test]
    fn test_unknown_css_defaults_to_daisyui() {
        assert_eq!(CssFramework::from_name_or_default("bootstrap"), CssFramework::DaisyUi);
        assert_eq!(
            CssFramework::from_name_or_default("basecoat"),
            CssFramework::Basecoat
        );
    }

    #[test]
    fn test_unknown_option_message() {
        let err = "bulma".parse::<CssFramework>().unwrap_err();
        assert_eq!(err.to_string(), "unknown CSS framework: bulma");
    }

    #[test]
    fn test_options_builder() {
        let options = Options::new("demo", "github.com/x/demo")
            .with_frontend_name("htmx-alpine")
            .with_css_framework_name("templui")
            .with_db(false);

        assert_eq!(options.frontend, Frontend::HtmxAlpine);
        assert_eq!(options.css_framework, CssFramework::TemplUi);
        assert!(!options.include_db);
    }

    #[test]
    fn test_substitution_map_is_ordered() {
        let mut map = SubstitutionMap::new();
        map.insert("b", "2");
        map.insert("a", "1");
        map.insert("a", "3");

        let tokens: Vec<_> = map.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(tokens, vec!["a", "b"]);
        assert_eq!(map.get("a"), Some("3"));
        assert_eq!(map.len(), 2);
    }
}
