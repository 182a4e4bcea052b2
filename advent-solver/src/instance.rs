//! Solver instances with parse/solve timing and type erasure

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Result of solving a puzzle part, with timing information
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The answer string
    pub answer: String,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Time spent solving
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A solver bound to one puzzle's parsed input.
///
/// Created by parsing the raw input once; the instance records the parse
/// timestamps and hands the parsed data to each part it is asked to solve.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    parsed: S::Parsed<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` and create an instance for `year`/`day`.
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let parsed = S::parse(input)?;
        let parse_end = Utc::now();

        Ok(Self {
            year,
            day,
            parsed,
            parse_start,
            parse_end,
        })
    }
}

/// Object-safe interface over any [`SolverInstance`].
///
/// The registry hands out `Box<dyn DynSolver>` so callers can drive solvers
/// for different days uniformly.
pub trait DynSolver {
    /// Solve the given part, rejecting part numbers outside `1..=parts()`.
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// The puzzle year
    fn year(&self) -> u16;

    /// The puzzle day
    fn day(&self) -> u8;

    /// Number of parts the underlying solver declares
    fn parts(&self) -> u8;

    /// When parsing started (UTC)
    fn parse_start(&self) -> DateTime<Utc>;

    /// When parsing completed (UTC)
    fn parse_end(&self) -> DateTime<Utc>;

    /// Time spent parsing
    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<'a, S: Solver> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked(&mut self.parsed, part)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }
}
