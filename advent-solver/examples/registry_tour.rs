//! Tour of the registry: plugin submission, filtered registration, and
//! driving solvers through the type-erased interface.
//!
//! Run with: cargo run --example registry_tour

use advent_solver::{
    DynSolver, NOT_IMPLEMENTED, ParseError, Parser, PartSolver, RegistryBuilder, SolveError,
    impl_solver, submit_solver,
};

/// Sums the numbers in the input; part 2 is still a stub.
pub struct Totals;

impl Parser for Totals {
    type Parsed<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::Parsed<'_>, ParseError> {
        input
            .trim()
            .lines()
            .map(|line| {
                line.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("expected integer: {line}")))
            })
            .collect()
    }
}

impl PartSolver<1> for Totals {
    fn solve(parsed: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        Ok(parsed.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Totals {
    fn solve(_parsed: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        Ok(NOT_IMPLEMENTED.to_string())
    }
}

impl_solver!(Totals, parts = [1, 2]);

submit_solver!(Totals, year = 2025, day = 20, tags = ["example", "easy"]);

/// Longest line length; registered by hand instead of through the plugin
/// collection.
pub struct LongestLine;

impl Parser for LongestLine {
    type Parsed<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::Parsed<'_>, ParseError> {
        Ok(input.lines().collect())
    }
}

impl PartSolver<1> for LongestLine {
    fn solve(parsed: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        Ok(parsed
            .iter()
            .map(|line| line.len())
            .max()
            .unwrap_or(0)
            .to_string())
    }
}

impl_solver!(LongestLine, parts = [1]);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = RegistryBuilder::new()
        .register_plugins(|plugin| plugin.tags.contains(&"example"))?
        .register_solver::<LongestLine>(2025, 21)?
        .build();

    for info in registry.iter_info() {
        println!(
            "registered {}/{:02} ({} part{})",
            info.year,
            info.day,
            info.parts,
            if info.parts == 1 { "" } else { "s" }
        );
    }

    let mut totals = registry.create_solver(2025, 20, "3\n4\n5")?;
    for part in 1..=totals.parts() {
        let result = totals.solve(part)?;
        println!(
            "2025/20 part {part}: {} ({} us)",
            result.answer,
            result.duration().num_microseconds().unwrap_or(0)
        );
    }

    let mut longest = registry.create_solver(2025, 21, "ab\nabcd\nabc")?;
    println!("2025/21 part 1: {}", longest.solve(1)?.answer);

    Ok(())
}
