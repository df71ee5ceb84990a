//! Output formatting for solver results

use aoc_solver::RunResult;
use chrono::TimeDelta;
use std::io::{self, Write};
use std::time::Duration;

/// What the formatter prints besides the answers
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    /// Answers only: no banner, no timing
    pub quiet: bool,
    /// Print parse, solve and elapsed times
    pub timing: bool,
    /// Only print this part
    pub part: Option<u8>,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            quiet: false,
            timing: true,
            part: None,
        }
    }
}

/// Writes the runner's console output to `W`
pub struct OutputFormatter<W> {
    out: W,
    options: OutputOptions,
}

impl<W: Write> OutputFormatter<W> {
    /// Create a new output formatter
    pub fn new(out: W, options: OutputOptions) -> Self {
        Self { out, options }
    }

    /// Bordered title printed before a day runs
    ///
    /// ```text
    /// +------+--------------------------------+
    /// | RUST | Day [3] Solution - Gear Ratios |
    /// +------+--------------------------------+
    /// ```
    pub fn banner(&mut self, day: u8, name: &str) -> io::Result<()> {
        if self.options.quiet {
            return Ok(());
        }
        let text = format!(" Day [{day}] Solution - {name} ");
        let border = format!("+------+{}+", "-".repeat(text.chars().count()));
        writeln!(self.out, "{border}")?;
        writeln!(self.out, "| RUST |{text}|")?;
        writeln!(self.out, "{border}")
    }

    /// Print the answers of one run, honouring the part filter
    pub fn answers(&mut self, result: &RunResult) -> io::Result<()> {
        let OutputOptions {
            quiet,
            timing,
            part,
        } = self.options;

        if timing && !quiet {
            writeln!(self.out, "Parse: {}", format_duration(result.parse_duration()))?;
        }
        for solved in result
            .parts
            .iter()
            .filter(|s| part.is_none_or(|p| p == s.part))
        {
            if quiet {
                writeln!(self.out, "{}", solved.answer)?;
            } else if timing {
                writeln!(
                    self.out,
                    "Part {}: {} (solve: {})",
                    solved.part,
                    solved.answer,
                    format_duration(solved.duration())
                )?;
            } else {
                writeln!(self.out, "Part {}: {}", solved.part, solved.answer)?;
            }
        }
        Ok(())
    }

    /// Wall-clock time of one day
    pub fn elapsed(&mut self, elapsed: Duration) -> io::Result<()> {
        if self.options.quiet || !self.options.timing {
            return Ok(());
        }
        writeln!(self.out, "Elapsed: {}", format_millis(elapsed))?;
        writeln!(self.out)
    }

    /// Wall-clock time of a whole batch
    pub fn total(&mut self, elapsed: Duration) -> io::Result<()> {
        if self.options.quiet || !self.options.timing {
            return Ok(());
        }
        writeln!(self.out, "Total elapsed: {}", format_millis(elapsed))
    }

    /// Printed instead of a banner when no solution exists for `day`
    pub fn missing(&mut self, day: u32) -> io::Result<()> {
        writeln!(self.out, "Solution does not exist yet for day {day}")
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration in milliseconds (used for wall-clock time)
fn format_millis(d: Duration) -> String {
    format!("{:.3}ms", d.as_secs_f64() * 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::SolveResult;
    use chrono::Utc;

    fn run_result(answers: &[i64]) -> RunResult {
        let now = Utc::now();
        RunResult {
            parse_start: now,
            parse_end: now,
            parts: answers
                .iter()
                .zip(1..)
                .map(|(&answer, part)| SolveResult {
                    part,
                    answer,
                    solve_start: now,
                    solve_end: now,
                })
                .collect(),
        }
    }

    fn printed(options: OutputOptions, f: impl FnOnce(&mut OutputFormatter<Vec<u8>>)) -> String {
        let mut formatter = OutputFormatter::new(Vec::new(), options);
        f(&mut formatter);
        String::from_utf8(formatter.into_inner()).unwrap()
    }

    #[test]
    fn banner_is_as_wide_as_the_title() {
        let out = printed(OutputOptions::default(), |f| f.banner(3, "Gear Ratios").unwrap());
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "| RUST | Day [3] Solution - Gear Ratios |");
        assert_eq!(lines[0], "+------+--------------------------------+");
        assert_eq!(lines[0], lines[2]);
        assert_eq!(lines[0].len(), lines[1].len());
    }

    #[test]
    fn answers_with_and_without_timing() {
        let result = run_result(&[532428, 84051670]);
        let out = printed(OutputOptions::default(), |f| f.answers(&result).unwrap());
        assert!(out.starts_with("Parse: 0µs\n"));
        assert!(out.contains("Part 1: 532428 (solve: 0µs)\n"));
        assert!(out.contains("Part 2: 84051670 (solve: 0µs)\n"));

        let options = OutputOptions {
            timing: false,
            ..OutputOptions::default()
        };
        let out = printed(options, |f| {
            f.answers(&result).unwrap();
            f.elapsed(Duration::from_millis(5)).unwrap();
            f.total(Duration::from_millis(5)).unwrap();
        });
        assert_eq!(out, "Part 1: 532428\nPart 2: 84051670\n");
    }

    #[test]
    fn quiet_prints_answers_only() {
        let result = run_result(&[1, 2]);
        let options = OutputOptions {
            quiet: true,
            ..OutputOptions::default()
        };
        let out = printed(options, |f| {
            f.banner(1, "Trebuchet?!").unwrap();
            f.answers(&result).unwrap();
            f.elapsed(Duration::from_millis(1)).unwrap();
        });
        assert_eq!(out, "1\n2\n");
    }

    #[test]
    fn part_filter() {
        let result = run_result(&[10, 20]);
        let options = OutputOptions {
            quiet: true,
            part: Some(2),
            ..OutputOptions::default()
        };
        let out = printed(options, |f| f.answers(&result).unwrap());
        assert_eq!(out, "20\n");
    }

    #[test]
    fn missing_day_message() {
        let out = printed(OutputOptions::default(), |f| f.missing(4).unwrap());
        assert_eq!(out, "Solution does not exist yet for day 4\n");
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::seconds(2)), "2.00s");
        assert_eq!(format_millis(Duration::from_micros(1234)), "1.234ms");
    }
}
