// Output formatting and styling

use colored::Colorize;

use crate::logging::VerbosityLevel;

/// Output styling configuration
pub struct OutputStyle {
    pub use_colors: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl OutputStyle {
    /// Format success message
    pub fn success(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✓".green().bold(), msg)
        } else {
            format!("✓ {}", msg)
        }
    }

    /// Format error message
    pub fn error(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✗".red().bold(), msg)
        } else {
            format!("✗ {}", msg)
        }
    }

    /// Format warning message
    pub fn warning(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "⚠".yellow(), msg)
        } else {
            format!("⚠ {}", msg)
        }
    }

    /// Format a shell command
    pub fn code(&self, code: &str) -> String {
        if self.use_colors {
            code.cyan().to_string()
        } else {
            code.to_string()
        }
    }

    /// Format prompt
    pub fn prompt(&self, prompt: &str) -> String {
        if self.use_colors {
            format!("{} ", prompt.magenta().bold())
        } else {
            format!("{} ", prompt)
        }
    }

    /// Format header
    pub fn header(&self, title: &str) -> String {
        if self.use_colors {
            title.bold().to_string()
        } else {
            title.to_string()
        }
    }

    /// Format a key-value pair
    pub fn key_value(&self, key: &str, value: &str) -> String {
        if self.use_colors {
            format!("  {}: {}", key.bold(), value)
        } else {
            format!("  {}: {}", key, value)
        }
    }

    /// Format a generated file line
    pub fn file_created(&self, path: &str) -> String {
        format!("  {}", self.success(path))
    }

    /// Format a numbered list item
    pub fn numbered_item(&self, number: usize, item: &str) -> String {
        format!("  {}. {}", number, item)
    }
}

/// Print to stdout unless running quietly
pub fn print_line(line: &str) {
    if VerbosityLevel::Normal.should_output() {
        println!("{}", line);
    }
}

pub fn print_success(msg: &str) {
    let style = OutputStyle::default();
    print_line(&style.success(msg));
}

pub fn print_error(msg: &str) {
    let style = OutputStyle {
        use_colors: atty::is(atty::Stream::Stderr),
    };
    eprintln!("{}", style.error(msg));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_style_without_colors() {
        let style = OutputStyle { use_colors: false };
        assert_eq!(style.success("test"), "✓ test");
        assert_eq!(style.error("test"), "✗ test");
        assert_eq!(style.warning("test"), "⚠ test");
    }

    #[test]
    fn test_file_created_line() {
        let style = OutputStyle { use_colors: false };
        assert_eq!(style.file_created("cmd/server/main.go"), "  ✓ cmd/server/main.go");
    }

    #[test]
    fn test_key_value_formatting() {
        let style = OutputStyle { use_colors: false };
        assert_eq!(style.key_value("Frontend", "HTMX"), "  Frontend: HTMX");
    }

    #[test]
    fn test_numbered_item_formatting() {
        let style = OutputStyle { use_colors: false };
        assert_eq!(style.numbered_item(2, "make dev"), "  2. make dev");
    }

    #[test]
    fn test_colored_output_keeps_text() {
        let style = OutputStyle { use_colors: true };
        assert!(style.success("done").contains("done"));
        assert!(style.prompt("Name?").contains("Name?"));
    }
}
