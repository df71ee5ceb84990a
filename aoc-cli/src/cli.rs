//! CLI argument parsing using clap

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Advent of Code 2023 solution runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code 2023 solutions", version)]
pub struct Args {
    /// Day to run (runs every registered day if omitted)
    pub day: Option<u32>,

    /// Only print the answer to this part
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Directory holding the `day{N}.txt` puzzle inputs
    #[arg(long, env = "AOC_INPUT_DIR", default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Omit parse, solve and elapsed times
    #[arg(long)]
    pub no_timing: bool,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn day_is_optional() {
        let args = Args::try_parse_from(["aoc"]).unwrap();
        assert_eq!(args.day, None);
        assert_eq!(args.part, None);
        assert!(!args.quiet && !args.no_timing);
        assert_eq!(args.verbose, 0);

        let args = Args::try_parse_from(["aoc", "7", "--part", "2", "-vv"]).unwrap();
        assert_eq!(args.day, Some(7));
        assert_eq!(args.part, Some(2));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn non_integer_day_is_a_usage_error() {
        let err = Args::try_parse_from(["aoc", "seven"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn part_must_be_one_or_two() {
        assert!(Args::try_parse_from(["aoc", "--part", "3"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--part", "0"]).is_err());
    }

    #[test]
    fn days_past_the_calendar_still_parse() {
        let args = Args::try_parse_from(["aoc", "300"]).unwrap();
        assert_eq!(args.day, Some(300));
    }
}
