//! Per-axis template fragments
//!
//! Each frontend and CSS framework maps to an immutable bundle of strings.
//! The resolver concatenates the bundles of all axes, so adding a variant only
//! means adding a table entry.

use crate::models::{CssFramework, Frontend};

/// Fragments one feature axis contributes to the scaffold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisFragments {
    /// Tags injected into the `<head>` of the base layout
    pub scripts: &'static [&'static str],
    /// Makefile recipe lines that vendor the axis's client-side assets
    pub asset_downloads: &'static [&'static str],
    /// Dockerfile instructions for the asset stage of the image build
    pub container_steps: &'static [&'static str],
}

/// CSS framework fragments on top of the shared axis fragments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CssFragments {
    /// Composable fragments
    pub axis: AxisFragments,
    /// Header of `assets/css/input.css`
    pub input_import: &'static str,
    /// Patterns for the `//go:embed` directive in `assets/efs.go`
    pub embed_path: &'static str,
    /// Plugin entry for `tailwind.config.js`
    pub tailwind_plugin: &'static str,
    /// DaisyUI block for `tailwind.config.js`
    pub daisyui_config: &'static str,
    /// One-shot Tailwind build recipe
    pub build_command: &'static str,
    /// Tailwind watch recipe
    pub watch_command: &'static str,
}

const HTMX_SCRIPT: &str = r#"<script src="https://unpkg.com/htmx.org@2.0.4" integrity="sha384-HGfztofotfshcF7+8n44JQL2oJmowVChPTg48S+jvZoztPfvwD79OC/LTtG6dMp+" crossorigin="anonymous"></script>"#;
const HTMX_DOWNLOAD: &str =
    "@curl -sL https://unpkg.com/htmx.org@2.0.4/dist/htmx.min.js -o assets/js/htmx.min.js";
const HTMX_CONTAINER: &str = "RUN mkdir -p assets/js && curl -sL https://unpkg.com/htmx.org@2.0.4/dist/htmx.min.js -o assets/js/htmx.min.js";

const HTMX: AxisFragments = AxisFragments {
    scripts: &[HTMX_SCRIPT],
    asset_downloads: &[HTMX_DOWNLOAD],
    container_steps: &[HTMX_CONTAINER],
};

const HTMX_HYPERSCRIPT: AxisFragments = AxisFragments {
    scripts: &[
        HTMX_SCRIPT,
        "<!-- Hyperscript - _hyperscript -->",
        r#"<script src="https://unpkg.com/hyperscript.org@0.9.14"></script>"#,
    ],
    asset_downloads: &[
        HTMX_DOWNLOAD,
        "@curl -sL https://unpkg.com/hyperscript.org@0.9.14/dist/_hyperscript.min.js -o assets/js/_hyperscript.min.js",
    ],
    container_steps: &[
        HTMX_CONTAINER,
        "RUN curl -sL https://unpkg.com/hyperscript.org@0.9.14/dist/_hyperscript.min.js -o assets/js/_hyperscript.min.js",
    ],
};

const HTMX_ALPINE: AxisFragments = AxisFragments {
    scripts: &[
        HTMX_SCRIPT,
        "<!-- Alpine.js -->",
        r#"<script defer src="https://unpkg.com/alpinejs@3.14.8/dist/cdn.min.js"></script>"#,
    ],
    asset_downloads: &[
        HTMX_DOWNLOAD,
        "@curl -sL https://unpkg.com/alpinejs@3.14.8/dist/cdn.min.js -o assets/js/alpine.min.js",
    ],
    container_steps: &[
        HTMX_CONTAINER,
        "RUN curl -sL https://unpkg.com/alpinejs@3.14.8/dist/cdn.min.js -o assets/js/alpine.min.js",
    ],
};

const TAILWIND_DOWNLOAD: &str = "@cd assets && curl -sL https://github.com/tailwindlabs/tailwindcss/releases/latest/download/tailwindcss-$$(uname -s | tr '[:upper:]' '[:lower:]')-$$(uname -m | sed 's/x86_64/x64/;s/aarch64/arm64/') -Lo tailwindcss && chmod +x tailwindcss";
const TAILWIND_CONTAINER: &str = "RUN cd assets && curl -sL https://github.com/tailwindlabs/tailwindcss/releases/latest/download/tailwindcss-linux-x64-musl -o tailwindcss && chmod +x tailwindcss";
const TAILWIND_BUILD_CONTAINER: &str =
    "RUN cd assets && ./tailwindcss -i css/input.css -o css/output.css --minify";
const TAILWIND_BUILD: &str = "@cd assets && ./tailwindcss -i css/input.css -o css/output.css";
const TAILWIND_WATCH: &str =
    "@cd assets && ./tailwindcss -i css/input.css -o css/output.css --watch";

const DAISYUI: CssFragments = CssFragments {
    axis: AxisFragments {
        scripts: &[],
        asset_downloads: &[
            "@echo \"📥 Installing Tailwind CSS + DaisyUI...\"",
            "@cd assets && curl -sL daisyui.com/fast | bash",
        ],
        container_steps: &[
            "RUN cd assets && curl -sL daisyui.com/fast | bash",
            TAILWIND_BUILD_CONTAINER,
        ],
    },
    input_import: r#"@import "tailwindcss";

@source not "./tailwindcss";
@source not "./daisyui{,*}.mjs";

@plugin "../js/daisyui.mjs";"#,
    embed_path: "css/output.css js/*.mjs static/*",
    tailwind_plugin: "require('./assets/js/daisyui.mjs')",
    daisyui_config: r#",
	daisyui: {
		themes: ["light", "dark"],
		darkTheme: "dark",
		base: true,
		styled: true,
		utils: true,
	}"#,
    build_command: TAILWIND_BUILD,
    watch_command: TAILWIND_WATCH,
};

const TEMPLUI: CssFragments = CssFragments {
    axis: AxisFragments {
        scripts: &[],
        asset_downloads: &[
            "@echo \"📥 Installing Tailwind CSS...\"",
            TAILWIND_DOWNLOAD,
            "@echo \"📦 Installing TemplUI...\"",
            "@go install github.com/templui/templui/cmd/templui@latest",
        ],
        container_steps: &[TAILWIND_CONTAINER, TAILWIND_BUILD_CONTAINER],
    },
    input_import: r#"@import "tailwindcss";

/* TemplUI Base Styles */
@theme {
	--color-background: oklch(100% 0 0);
	--color-foreground: oklch(10% 0 0);
	--color-primary: oklch(50% 0.2 250);
	--color-secondary: oklch(70% 0.15 200);
}

@theme dark {
	--color-background: oklch(10% 0 0);
	--color-foreground: oklch(95% 0 0);
}"#,
    embed_path: "css/output.css static/*",
    tailwind_plugin: "",
    daisyui_config: "",
    build_command: TAILWIND_BUILD,
    watch_command: TAILWIND_WATCH,
};

const BASECOAT: CssFragments = CssFragments {
    axis: AxisFragments {
        scripts: &[
            "<!-- Basecoat -->",
            r#"<script src="https://cdn.jsdelivr.net/npm/basecoat-css@0.3.2/dist/js/all.min.js" defer></script>"#,
        ],
        asset_downloads: &[
            "@echo \"📥 Installing Tailwind CSS...\"",
            TAILWIND_DOWNLOAD,
            "@echo \"📦 Installing Basecoat...\"",
            "@npm install basecoat-css",
            "@curl -sL https://cdn.jsdelivr.net/npm/basecoat-css@0.3.2/dist/js/all.min.js -o assets/js/basecoat.min.js",
        ],
        container_steps: &[
            "RUN apk add --no-cache nodejs npm && npm install basecoat-css",
            TAILWIND_CONTAINER,
            TAILWIND_BUILD_CONTAINER,
        ],
    },
    input_import: r#"@import "tailwindcss";
@import "basecoat-css";"#,
    embed_path: "css/output.css js/*.js static/*",
    tailwind_plugin: "",
    daisyui_config: "",
    build_command: TAILWIND_BUILD,
    watch_command: TAILWIND_WATCH,
};

impl Frontend {
    /// Fragments this frontend contributes
    pub fn fragments(self) -> &'static AxisFragments {
        match self {
            Frontend::Htmx => &HTMX,
            Frontend::HtmxHyperscript => &HTMX_HYPERSCRIPT,
            Frontend::HtmxAlpine => &HTMX_ALPINE,
        }
    }
}

impl CssFramework {
    /// Fragments this CSS framework contributes
    pub fn fragments(self) -> &'static CssFragments {
        match self {
            CssFramework::DaisyUi => &DAISYUI,
            CssFramework::TemplUi => &TEMPLUI,
            CssFramework::Basecoat => &BASECOAT,
        }
    }
}
