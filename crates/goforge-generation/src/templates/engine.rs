//! Template engine for rendering text templates
//!
//! Rendering is two stages, always in this order:
//! - conditional block pruning, so block markers never reach substitution
//! - literal placeholder substitution, module path first

use memchr::memmem;

use crate::{
    models::{Options, SubstitutionMap},
    templates::{
        conditional::{prune_bytes, Gate},
        into_text,
        resolver::MODULE_PLACEHOLDER,
    },
};

/// Renders text templates for one set of options
pub struct TemplateEngine<'a> {
    /// Gates applied by the pruning stage
    gates: Vec<Gate>,
    /// Replacement for [`MODULE_PLACEHOLDER`]
    module_path: &'a str,
    /// Remaining placeholder values
    substitutions: &'a SubstitutionMap,
}

impl<'a> TemplateEngine<'a> {
    /// Create an engine from explicit parts
    pub fn new(gates: Vec<Gate>, module_path: &'a str, substitutions: &'a SubstitutionMap) -> Self {
        Self {
            gates,
            module_path,
            substitutions,
        }
    }

    /// Create an engine for the given options
    pub fn for_options(options: &'a Options, substitutions: &'a SubstitutionMap) -> Self {
        Self::new(
            vec![Gate::database(options.include_db)],
            &options.module_path,
            substitutions,
        )
    }

    /// Render a template
    pub fn render(&self, template_content: &str) -> String {
        into_text(self.render_bytes(template_content.as_bytes()))
    }

    /// Render raw template bytes
    ///
    /// Markers and tokens are ASCII, so text in any ASCII-compatible encoding
    /// renders the same as UTF-8.
    pub fn render_bytes(&self, template_content: &[u8]) -> Vec<u8> {
        let pruned = prune_bytes(template_content, &self.gates);
        self.substitute_bytes(&pruned)
    }

    /// Replace every placeholder occurrence
    pub fn substitute(&self, content: &str) -> String {
        into_text(self.substitute_bytes(content.as_bytes()))
    }

    /// Replace every placeholder occurrence in raw bytes
    ///
    /// Single pass: no replacement value contains the module placeholder, so
    /// replacing it first cannot leave one behind.
    pub fn substitute_bytes(&self, content: &[u8]) -> Vec<u8> {
        let mut rendered = replace_all(
            content,
            MODULE_PLACEHOLDER.as_bytes(),
            self.module_path.as_bytes(),
        );
        for (token, value) in self.substitutions {
            if memmem::find(&rendered, token.as_bytes()).is_some() {
                rendered = replace_all(&rendered, token.as_bytes(), value.as_bytes());
            }
        }
        rendered
    }
}

/// Literal, non-overlapping, left-to-right replacement
fn replace_all(haystack: &[u8], needle: &[u8], replacement: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(haystack.len());
    let mut last = 0;
    for at in memmem::find_iter(haystack, needle) {
        output.extend_from_slice(&haystack[last..at]);
        output.extend_from_slice(replacement);
        last = at + needle.len();
    }
    output.extend_from_slice(&haystack[last..]);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::resolver::{OptionResolver, FRONTEND_SCRIPTS, PROJECT_NAME};

    #[test]
    fn test_module_path_is_replaced_everywhere() {
        let map = SubstitutionMap::new();
        let engine = TemplateEngine::new(Vec::new(), "github.com/x/demo", &map);
        let output = engine.render(
            "module github.com/goforge/scaffold\n\nimport \"github.com/goforge/scaffold/internal/server\"\n",
        );
        assert_eq!(
            output,
            "module github.com/x/demo\n\nimport \"github.com/x/demo/internal/server\"\n"
        );
    }

    #[test]
    fn test_tokens_are_replaced_literally() {
        let mut map = SubstitutionMap::new();
        map.insert(PROJECT_NAME, "$1 \\d+ .*");
        let engine = TemplateEngine::new(Vec::new(), "m/x", &map);
        assert_eq!(
            engine.render("<!-- PROJECT_NAME -->/<!-- PROJECT_NAME -->"),
            "$1 \\d+ .*/$1 \\d+ .*"
        );
    }

    #[test]
    fn test_replacement_is_not_rescanned() {
        let mut map = SubstitutionMap::new();
        map.insert("<!-- A -->", "<!-- A -->!");
        let engine = TemplateEngine::new(Vec::new(), "m/x", &map);
        assert_eq!(engine.render("<!-- A --><!-- A -->"), "<!-- A -->!<!-- A -->!");
    }

    #[test]
    fn test_pruning_runs_before_substitution() {
        let options = Options::new("demo", "github.com/x/demo").with_db(false);
        let map = OptionResolver::new().resolve(&options);
        let engine = TemplateEngine::for_options(&options, &map);

        let output = engine.render(
            "<head>\n\t\t<!-- FRONTEND_SCRIPTS -->\n</head>\n<!-- BEGIN DB -->\nimport \"github.com/goforge/scaffold/internal/database\"\n<!-- END DB -->\n",
        );
        assert!(output.contains("htmx.org"));
        assert!(!output.contains("database"));
        assert!(!output.contains(FRONTEND_SCRIPTS));
        assert!(!output.contains("<!-- BEGIN"));
    }

    #[test]
    fn test_latin1_bytes_are_rendered() {
        let mut map = SubstitutionMap::new();
        map.insert(PROJECT_NAME, "demo");
        let engine = TemplateEngine::new(vec![Gate::database(false)], "github.com/x/demo", &map);

        let output = engine.render_bytes(
            b"caf\xe9 github.com/goforge/scaffold <!-- PROJECT_NAME -->\n<!-- BEGIN DB -->\n\xff\n<!-- END DB -->\n",
        );
        assert_eq!(output, b"caf\xe9 github.com/x/demo demo\n".to_vec());
    }

    #[test]
    fn test_adjacent_tokens_are_all_replaced() {
        assert_eq!(replace_all(b"aaaa", b"aa", b"b"), b"bb".to_vec());
        assert_eq!(replace_all(b"xax", b"a", b""), b"xx".to_vec());
        assert_eq!(replace_all(b"none", b"a", b"b"), b"none".to_vec());
    }
}
