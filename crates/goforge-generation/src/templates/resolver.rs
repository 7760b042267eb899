//! Option resolution: user selections to placeholder values

use crate::models::{Options, SubstitutionMap};

/// Module path the golden templates import from
pub const MODULE_PLACEHOLDER: &str = "github.com/goforge/scaffold";

/// Project directory name
pub const PROJECT_NAME: &str = "<!-- PROJECT_NAME -->";
/// Script tags in the base layout
pub const FRONTEND_SCRIPTS: &str = "<!-- FRONTEND_SCRIPTS -->";
/// Asset download recipe lines in the Makefile `setup` target
pub const SETUP_COMMAND: &str = "<!-- SETUP_COMMAND -->";
/// Asset build steps in the Dockerfile
pub const CONTAINER_ASSETS: &str = "<!-- CONTAINER_ASSETS -->";
/// Tailwind one-shot build recipe
pub const CSS_BUILD_COMMAND: &str = "<!-- CSS_BUILD_COMMAND -->";
/// Tailwind watch recipe
pub const CSS_WATCH_COMMAND: &str = "<!-- CSS_WATCH_COMMAND -->";
/// Header of `input.css`
pub const CSS_INPUT_IMPORT: &str = "<!-- CSS_INPUT_IMPORT -->";
/// `//go:embed` patterns for the assets package
pub const CSS_EMBED_PATH: &str = "<!-- CSS_EMBED_PATH -->";
/// Plugin entry in `tailwind.config.js`
pub const TAILWIND_PLUGIN: &str = "<!-- TAILWIND_PLUGIN -->";
/// DaisyUI block in `tailwind.config.js`
pub const DAISYUI_CONFIG: &str = "<!-- DAISYUI_CONFIG -->";

/// Separator between script tags; matches the `<head>` indentation of the base layout
const SCRIPT_SEPARATOR: &str = "\n\t\t\t";
/// Separator between Makefile recipe lines
const RECIPE_SEPARATOR: &str = "\n\t";

/// Turns [`Options`] into the placeholder values for one run
///
/// Pure and deterministic: the same options always produce the same map.
/// The module path is deliberately absent from the map; the engine applies it
/// before every other token.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionResolver;

impl OptionResolver {
    /// Create a resolver
    pub fn new() -> Self {
        Self
    }

    /// Compose the substitution map for the given options
    pub fn resolve(&self, options: &Options) -> SubstitutionMap {
        let frontend = options.frontend.fragments();
        let css = options.css_framework.fragments();
        let axes = [frontend, &css.axis];

        let scripts: Vec<&str> = axes.iter().flat_map(|axis| axis.scripts.iter().copied()).collect();
        let downloads: Vec<&str> = axes
            .iter()
            .flat_map(|axis| axis.asset_downloads.iter().copied())
            .collect();
        let container: Vec<&str> = axes
            .iter()
            .flat_map(|axis| axis.container_steps.iter().copied())
            .collect();

        let mut map = SubstitutionMap::new();
        map.insert(PROJECT_NAME, options.project_name.as_str());
        map.insert(FRONTEND_SCRIPTS, scripts.join(SCRIPT_SEPARATOR));
        map.insert(SETUP_COMMAND, downloads.join(RECIPE_SEPARATOR));
        map.insert(CONTAINER_ASSETS, container.join("\n"));
        map.insert(CSS_BUILD_COMMAND, css.build_command);
        map.insert(CSS_WATCH_COMMAND, css.watch_command);
        map.insert(CSS_INPUT_IMPORT, css.input_import);
        map.insert(CSS_EMBED_PATH, css.embed_path);
        map.insert(TAILWIND_PLUGIN, css.tailwind_plugin);
        map.insert(DAISYUI_CONFIG, css.daisyui_config);

        debug_assert!(
            map.iter().all(|(_, value)| !value.contains(MODULE_PLACEHOLDER)),
            "replacement values must not reintroduce the module placeholder"
        );
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CssFramework, Frontend};

    fn options() -> Options {
        Options::new("demo", "github.com/x/demo")
    }

    #[test]
    fn test_default_stack_resolves_htmx_and_daisyui() {
        let map = OptionResolver::new().resolve(&options());

        let scripts = map.get(FRONTEND_SCRIPTS).unwrap();
        assert!(scripts.contains("htmx.org@2.0.4"));
        assert!(!scripts.contains("alpinejs"));
        assert!(map.get(SETUP_COMMAND).unwrap().contains("daisyui.com/fast"));
        assert_eq!(map.get(PROJECT_NAME), Some("demo"));
        assert!(map.get(MODULE_PLACEHOLDER).is_none());
    }

    #[test]
    fn test_axes_compose_additively() {
        let options = options()
            .with_frontend(Frontend::HtmxAlpine)
            .with_css_framework(CssFramework::Basecoat);
        let map = OptionResolver::new().resolve(&options);

        let scripts = map.get(FRONTEND_SCRIPTS).unwrap();
        assert!(scripts.contains("alpinejs@3.14.8"));
        assert!(scripts.contains("basecoat-css"));

        let setup = map.get(SETUP_COMMAND).unwrap();
        assert!(setup.contains("assets/js/alpine.min.js"));
        assert!(setup.contains("npm install basecoat-css"));

        let container = map.get(CONTAINER_ASSETS).unwrap();
        assert!(container.contains("alpinejs"));
        assert!(container.contains("basecoat-css"));
    }

    #[test]
    fn test_frontend_fragments_come_first() {
        let map = OptionResolver::new().resolve(
            &options()
                .with_frontend(Frontend::HtmxHyperscript)
                .with_css_framework(CssFramework::Basecoat),
        );
        let scripts = map.get(FRONTEND_SCRIPTS).unwrap();
        let hyperscript = scripts.find("hyperscript.org").unwrap();
        let basecoat = scripts.find("basecoat-css").unwrap();
        assert!(hyperscript < basecoat);
    }

    #[test]
    fn test_recipe_lines_are_tab_indented() {
        let map = OptionResolver::new().resolve(&options().with_css_framework(CssFramework::TemplUi));
        for line in map.get(SETUP_COMMAND).unwrap().lines().skip(1) {
            assert!(line.starts_with("\t@"), "unexpected recipe line: {line:?}");
        }
    }

    #[test]
    fn test_templui_has_no_plugin() {
        let map = OptionResolver::new().resolve(&options().with_css_framework(CssFramework::TemplUi));
        assert_eq!(map.get(TAILWIND_PLUGIN), Some(""));
        assert_eq!(map.get(DAISYUI_CONFIG), Some(""));
        assert!(map.get(CSS_INPUT_IMPORT).unwrap().contains("TemplUI Base Styles"));
    }
}
