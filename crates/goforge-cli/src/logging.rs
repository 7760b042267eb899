// Logging and verbosity control

use std::sync::atomic::{AtomicU8, Ordering};

use tracing::level_filters::LevelFilter;

/// Global verbosity level
static VERBOSITY: AtomicU8 = AtomicU8::new(1);

/// Verbosity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerbosityLevel {
    /// Quiet mode - errors only
    Quiet = 0,
    /// Normal mode - summary and progress
    Normal = 1,
    /// Verbose mode - engine diagnostics
    Verbose = 2,
}

impl VerbosityLevel {
    /// Get the current verbosity level
    pub fn current() -> Self {
        match VERBOSITY.load(Ordering::Relaxed) {
            0 => VerbosityLevel::Quiet,
            1 => VerbosityLevel::Normal,
            _ => VerbosityLevel::Verbose,
        }
    }

    /// Set the verbosity level
    pub fn set(level: Self) {
        VERBOSITY.store(level as u8, Ordering::Relaxed);
    }

    /// Check if we should output at this level
    pub fn should_output(&self) -> bool {
        self <= &Self::current()
    }

    /// Maximum `tracing` level shown at this verbosity
    pub fn tracing_filter(self) -> LevelFilter {
        match self {
            VerbosityLevel::Quiet => LevelFilter::ERROR,
            VerbosityLevel::Normal => LevelFilter::WARN,
            VerbosityLevel::Verbose => LevelFilter::DEBUG,
        }
    }

    /// Level selected by the `--verbose` / `--quiet` flags; quiet wins
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            VerbosityLevel::Quiet
        } else if verbose {
            VerbosityLevel::Verbose
        } else {
            VerbosityLevel::Normal
        }
    }
}

/// Initialize logging based on CLI flags
///
/// Diagnostics go to stderr so generated-file output on stdout stays clean.
/// Installing the subscriber twice is a no-op.
pub fn init_logging(verbose: bool, quiet: bool) {
    let level = VerbosityLevel::from_flags(verbose, quiet);
    VerbosityLevel::set(level);

    let _ = tracing_subscriber::fmt()
        .with_max_level(level.tracing_filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_map_to_levels() {
        assert_eq!(VerbosityLevel::from_flags(false, false), VerbosityLevel::Normal);
        assert_eq!(VerbosityLevel::from_flags(true, false), VerbosityLevel::Verbose);
        assert_eq!(VerbosityLevel::from_flags(false, true), VerbosityLevel::Quiet);
        assert_eq!(VerbosityLevel::from_flags(true, true), VerbosityLevel::Quiet);
    }

    #[test]
    fn test_tracing_filters() {
        assert_eq!(VerbosityLevel::Quiet.tracing_filter(), LevelFilter::ERROR);
        assert_eq!(VerbosityLevel::Normal.tracing_filter(), LevelFilter::WARN);
        assert_eq!(VerbosityLevel::Verbose.tracing_filter(), LevelFilter::DEBUG);
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(VerbosityLevel::Quiet < VerbosityLevel::Normal);
        assert!(VerbosityLevel::Normal < VerbosityLevel::Verbose);
    }
}
