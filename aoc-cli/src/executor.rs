//! Sequential executor for running one day or the whole calendar

use crate::error::CliError;
use crate::input::InputLoader;
use crate::output::OutputFormatter;
use aoc_solver::{RunResult, Solution, SolverError, SolverRegistry};
use std::io::Write;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// What happened when a day was requested
#[derive(Debug)]
pub enum DayOutcome {
    /// No solution is registered for this day
    Missing(u32),
    /// The day ran to completion
    Solved(DayReport),
}

impl DayOutcome {
    pub fn report(&self) -> Option<&DayReport> {
        match self {
            DayOutcome::Missing(_) => None,
            DayOutcome::Solved(report) => Some(report),
        }
    }
}

/// Answers and wall-clock span of a single day
#[derive(Debug)]
pub struct DayReport {
    pub day: u8,
    pub name: &'static str,
    pub result: RunResult,
    /// Taken before the input is read
    pub started: Instant,
    /// Taken after the last part is solved
    pub finished: Instant,
}

impl DayReport {
    pub fn elapsed(&self) -> Duration {
        self.finished.duration_since(self.started)
    }
}

/// Every day of a batch, in the order they ran
#[derive(Debug)]
pub struct BatchReport {
    pub outcomes: Vec<DayOutcome>,
    pub started: Instant,
    pub finished: Instant,
}

impl BatchReport {
    pub fn elapsed(&self) -> Duration {
        self.finished.duration_since(self.started)
    }

    pub fn reports(&self) -> impl Iterator<Item = &DayReport> {
        self.outcomes.iter().filter_map(DayOutcome::report)
    }
}

/// Runs solutions from a registry against inputs from a loader
pub struct Executor<'r, S, W> {
    registry: &'r SolverRegistry<S>,
    loader: InputLoader,
    output: OutputFormatter<W>,
}

impl<'r, S: Solution, W: Write> Executor<'r, S, W> {
    pub fn new(registry: &'r SolverRegistry<S>, loader: InputLoader, output: OutputFormatter<W>) -> Self {
        Self {
            registry,
            loader,
            output,
        }
    }

    /// Run a single day: banner, input, answers, timing
    ///
    /// A day without a solution prints the missing-solution message and is
    /// not an error. Its input is never read.
    pub fn run_day(&mut self, day: u32) -> Result<DayOutcome, CliError> {
        let Some(solution) = self.lookup(day)? else {
            info!(day, "no solution registered");
            self.output.missing(day)?;
            return Ok(DayOutcome::Missing(day));
        };

        let day = solution.day();
        let name = solution.name();
        self.output.banner(day, name)?;

        let started = Instant::now();
        let input = self.loader.load(day)?;
        let result = solution.run(&input)?;
        let finished = Instant::now();

        let report = DayReport {
            day,
            name,
            result,
            started,
            finished,
        };
        debug!(day, name, elapsed = ?report.elapsed(), "day finished");

        self.output.answers(&report.result)?;
        self.output.elapsed(report.elapsed())?;
        Ok(DayOutcome::Solved(report))
    }

    /// Run every registered day in ascending order, then print the total
    ///
    /// The first failing day aborts the batch.
    pub fn run_all(&mut self) -> Result<BatchReport, CliError> {
        let missing: Vec<u8> = self
            .registry
            .days()
            .filter(|&day| !self.loader.contains(day))
            .collect();
        if !missing.is_empty() {
            warn!(
                ?missing,
                dir = %self.loader.dir().display(),
                "missing {} input file(s)",
                missing.len()
            );
        }

        info!(days = self.registry.len(), "running batch");
        let started = Instant::now();
        let mut outcomes = Vec::with_capacity(self.registry.len());
        for day in self.registry.days() {
            outcomes.push(self.run_day(day.into())?);
        }
        let finished = Instant::now();

        let batch = BatchReport {
            outcomes,
            started,
            finished,
        };
        self.output.total(batch.elapsed())?;
        Ok(batch)
    }

    pub fn into_output(self) -> OutputFormatter<W> {
        self.output
    }

    /// `None` when the day has no solution, including days past `u8`
    fn lookup(&self, day: u32) -> Result<Option<S>, SolverError> {
        let Ok(day) = u8::try_from(day) else {
            return Ok(None);
        };
        match self.registry.lookup(day) {
            Ok(solution) => Ok(Some(solution)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputError;
    use crate::output::OutputOptions;
    use aoc_solver::{ParseError, RegistryBuilder, SolveResult};
    use chrono::Utc;
    use proptest::prelude::*;
    use std::fs;
    use tempfile::TempDir;

    /// Answers `n` and `n * day` for an input holding the number `n`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Echo(u8);

    impl Echo {
        fn answer(&self, input: &str, part: u8) -> Result<SolveResult, SolverError> {
            let n: i64 = input
                .trim()
                .parse()
                .map_err(|_| ParseError::InvalidFormat(format!("not a number: {input:?}")))?;
            let now = Utc::now();
            Ok(SolveResult {
                part,
                answer: if part == 1 { n } else { n * i64::from(self.0) },
                solve_start: now,
                solve_end: now,
            })
        }
    }

    impl Solution for Echo {
        fn day(&self) -> u8 {
            self.0
        }

        fn name(&self) -> &'static str {
            "Echo"
        }

        fn parts(&self) -> u8 {
            2
        }

        fn solve(&self, input: &str, part: u8) -> Result<SolveResult, SolverError> {
            self.answer(input, part)
        }

        fn run(&self, input: &str) -> Result<RunResult, SolverError> {
            let parse_start = Utc::now();
            let parts = vec![self.answer(input, 1)?, self.answer(input, 2)?];
            Ok(RunResult {
                parse_start,
                parse_end: parse_start,
                parts,
            })
        }
    }

    fn three_days() -> SolverRegistry<Echo> {
        RegistryBuilder::new()
            .register(1, || Echo(1))
            .and_then(|b| b.register(2, || Echo(2)))
            .and_then(|b| b.register(3, || Echo(3)))
            .and_then(RegistryBuilder::build)
            .unwrap()
    }

    fn inputs(days: &[(u8, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for (day, input) in days {
            fs::write(temp.path().join(format!("day{day}.txt")), input).unwrap();
        }
        temp
    }

    fn executor<'r, S: Solution>(
        registry: &'r SolverRegistry<S>,
        dir: &TempDir,
        options: OutputOptions,
    ) -> Executor<'r, S, Vec<u8>> {
        Executor::new(
            registry,
            InputLoader::new(dir.path().to_path_buf()),
            OutputFormatter::new(Vec::new(), options),
        )
    }

    fn printed<S: Solution>(executor: Executor<'_, S, Vec<u8>>) -> String {
        String::from_utf8(executor.into_output().into_inner()).unwrap()
    }

    #[test]
    fn day_past_the_registry_is_missing_and_reads_nothing() {
        let registry = three_days();
        // No inputs at all: a missing day must not try to load one
        let dir = TempDir::new().unwrap();
        let mut executor = executor(&registry, &dir, OutputOptions::default());

        let outcome = executor.run_day(4).unwrap();
        assert!(matches!(outcome, DayOutcome::Missing(4)));
        assert_eq!(printed(executor), "Solution does not exist yet for day 4\n");
    }

    #[test]
    fn zero_and_huge_days_are_missing() {
        let registry = three_days();
        let dir = TempDir::new().unwrap();
        let mut executor = executor(&registry, &dir, OutputOptions::default());

        for day in [0, 255, 256, u32::MAX] {
            assert!(matches!(executor.run_day(day).unwrap(), DayOutcome::Missing(d) if d == day));
        }
    }

    proptest! {
        #[test]
        fn unregistered_days_never_fail(day in 4u32..) {
            let registry = three_days();
            let dir = TempDir::new().unwrap();
            let mut executor = executor(&registry, &dir, OutputOptions::default());

            let outcome = executor.run_day(day).unwrap();
            prop_assert!(matches!(outcome, DayOutcome::Missing(d) if d == day));
            prop_assert_eq!(printed(executor), format!("Solution does not exist yet for day {day}\n"));
        }
    }

    #[test]
    fn run_day_selects_the_registered_solution() {
        let registry = three_days();
        let dir = inputs(&[(1, "5"), (2, "5"), (3, "5\n")]);
        let mut executor = executor(&registry, &dir, OutputOptions::default());

        for day in 1..=3u8 {
            let outcome = executor.run_day(day.into()).unwrap();
            let report = outcome.report().unwrap();
            assert_eq!(report.day, day);
            assert_eq!(report.result.answer(1), Some(5));
            assert_eq!(report.result.answer(2), Some(5 * i64::from(day)));
            assert!(report.finished >= report.started);
        }
    }

    #[test]
    fn run_day_prints_banner_then_answers() {
        let registry = three_days();
        let dir = inputs(&[(2, "21")]);
        let options = OutputOptions {
            timing: false,
            ..OutputOptions::default()
        };
        let mut executor = executor(&registry, &dir, options);

        executor.run_day(2).unwrap();
        let out = printed(executor);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[1], "| RUST | Day [2] Solution - Echo |");
        assert_eq!(&lines[3..], ["Part 1: 21", "Part 2: 42"]);
    }

    #[test]
    fn run_all_visits_days_in_order() {
        let registry = three_days();
        let dir = inputs(&[(1, "1"), (2, "2"), (3, "3")]);
        let options = OutputOptions {
            quiet: true,
            part: Some(1),
            ..OutputOptions::default()
        };
        let mut executor = executor(&registry, &dir, options);

        let batch = executor.run_all().unwrap();
        let days: Vec<u8> = batch.reports().map(|r| r.day).collect();
        assert_eq!(days, [1, 2, 3]);
        assert_eq!(printed(executor), "1\n2\n3\n");
    }

    #[test]
    fn batch_timing_is_consistent() {
        let registry = three_days();
        let dir = inputs(&[(1, "1"), (2, "2"), (3, "3")]);
        let mut executor = executor(&registry, &dir, OutputOptions::default());

        let batch = executor.run_all().unwrap();
        let reports: Vec<_> = batch.reports().collect();
        assert_eq!(reports.len(), 3);

        let sum: Duration = reports.iter().map(|r| r.elapsed()).sum();
        assert!(sum <= batch.elapsed());
        for pair in reports.windows(2) {
            assert!(pair[1].started >= pair[0].finished);
        }
        assert!(reports[0].started >= batch.started);
        assert!(reports[2].finished <= batch.finished);

        let out = printed(executor);
        assert_eq!(out.matches("Elapsed: ").count(), 3);
        assert!(out.trim_end().lines().last().unwrap().starts_with("Total elapsed: "));
    }

    #[test]
    fn missing_input_aborts_the_batch() {
        let registry = three_days();
        let dir = inputs(&[(1, "1"), (3, "3")]);
        let options = OutputOptions {
            quiet: true,
            ..OutputOptions::default()
        };
        let mut executor = executor(&registry, &dir, options);

        let err = executor.run_all().unwrap_err();
        assert!(matches!(err, CliError::Input(InputError::Read { day: 2, .. })));
        // Day 1 ran, day 3 never did
        assert_eq!(printed(executor), "1\n1\n");
    }

    #[test]
    fn malformed_input_is_an_error() {
        let registry = three_days();
        let dir = inputs(&[(1, "one")]);
        let mut executor = executor(&registry, &dir, OutputOptions::default());

        let err = executor.run_day(1).unwrap_err();
        assert!(matches!(err, CliError::Solver(SolverError::ParseError(_))));
    }

    #[test]
    fn runs_the_real_trebuchet_solution() {
        let registry = aoc_solutions::registry().unwrap();
        let dir = inputs(&[(1, "1abc2\npqr3stu8vwx\na1b2c3d4e5f\ntreb7uchet\n")]);
        let options = OutputOptions {
            timing: false,
            ..OutputOptions::default()
        };
        let mut executor = executor(&registry, &dir, options);

        let outcome = executor.run_day(1).unwrap();
        let report = outcome.report().unwrap();
        assert_eq!(report.name, "Trebuchet?!");
        assert_eq!(report.result.answer(1), Some(142));

        let out = printed(executor);
        assert!(out.contains("| RUST | Day [1] Solution - Trebuchet?! |"));
        assert!(out.contains("Part 1: 142\n"));
    }
}
