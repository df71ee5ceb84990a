//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::output::OutputOptions;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Day to run (None = every registered day)
    pub day: Option<u32>,
    /// Part filter (None = all parts)
    pub part: Option<u8>,
    /// Directory holding `day{N}.txt`
    pub input_dir: PathBuf,
    /// Whether to print timings
    pub timing: bool,
    /// Quiet mode
    pub quiet: bool,
    /// Log level used when RUST_LOG is unset
    pub log_level: LevelFilter,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Self {
        Config {
            day: args.day,
            part: args.part,
            input_dir: expand_tilde(&args.input_dir),
            timing: !args.no_timing,
            quiet: args.quiet,
            log_level: log_level(args.verbose),
        }
    }

    pub fn output_options(&self) -> OutputOptions {
        OutputOptions {
            quiet: self.quiet,
            timing: self.timing,
            part: self.part,
        }
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(rest) = path_str.strip_prefix('~')
        && (rest.is_empty() || rest.starts_with('/'))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest.trim_start_matches('/'));
    }
    path.to_path_buf()
}

/// Map the number of `-v` flags to a log level
fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn tilde_expands_to_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_tilde(Path::new("~/aoc/inputs")), home.join("aoc/inputs"));
        assert_eq!(expand_tilde(Path::new("~")), home);
        assert_eq!(expand_tilde(Path::new("inputs")), PathBuf::from("inputs"));
        assert_eq!(expand_tilde(Path::new("~other/x")), PathBuf::from("~other/x"));
    }

    #[test]
    fn verbosity_raises_log_level() {
        assert_eq!(log_level(0), LevelFilter::WARN);
        assert_eq!(log_level(1), LevelFilter::INFO);
        assert_eq!(log_level(2), LevelFilter::DEBUG);
        assert_eq!(log_level(9), LevelFilter::TRACE);
    }

    #[test]
    fn flags_resolve_into_output_options() {
        let args = Args::try_parse_from(["aoc", "3", "--no-timing", "-q", "-p", "1"]).unwrap();
        let config = Config::from_args(args);
        assert_eq!(config.day, Some(3));
        let options = config.output_options();
        assert!(options.quiet);
        assert!(!options.timing);
        assert_eq!(options.part, Some(1));
    }
}
