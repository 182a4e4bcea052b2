//! 2025 day 1: a circular dial, one hundred positions, starting at 50.
//!
//! Each input line rotates the dial left or right; the answer is how many
//! times the dial reads zero when an instruction comes up for processing.

use advent_solver::{
    NOT_IMPLEMENTED, ParseError, Parser, PartSolver, SolveError, impl_solver, submit_solver,
};
use anyhow::anyhow;

use crate::utils::mod_int::{ModInt, ModIntError};

const DIAL_MODULUS: i64 = 100;
const DIAL_START: i64 = 50;

pub struct Solver;

impl_solver!(Solver, parts = [1, 2]);

submit_solver!(Solver, year = 2025, day = 1, tags = ["2025", "dial"]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct Instruction {
    direction: Direction,
    distance: i64,
}

impl Parser for Solver {
    type Parsed<'a> = Vec<Instruction>;

    fn parse(input: &str) -> Result<Self::Parsed<'_>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(idx, line)| {
                parse_instruction(line)
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", idx + 1, e)))
            })
            .collect()
    }
}

// Lines match `^[LR][0-9]+$`; anything else is fatal.
fn parse_instruction(line: &str) -> Result<Instruction, anyhow::Error> {
    let direction = match line.as_bytes().first() {
        Some(b'L') => Direction::Left,
        Some(b'R') => Direction::Right,
        _ => return Err(anyhow!("instruction must start with 'L' or 'R'")),
    };

    let digits = &line[1..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(anyhow!("distance must be one or more decimal digits"));
    }
    let distance = digits.parse()?;

    Ok(Instruction {
        direction,
        distance,
    })
}

impl PartSolver<1> for Solver {
    fn solve(parsed: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        count_zero_sightings(parsed)
            .map(|count| count.to_string())
            .map_err(|e| SolveError::SolveFailed(Box::new(e)))
    }
}

impl PartSolver<2> for Solver {
    fn solve(_parsed: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        Ok(NOT_IMPLEMENTED.to_string())
    }
}

/// Replays the rotations, counting how often the dial reads zero when an
/// instruction comes up. The dial is checked before the rotation is applied,
/// so a zero reached by the final instruction goes uncounted.
fn count_zero_sightings(instructions: &[Instruction]) -> Result<u32, ModIntError> {
    let mut dial = ModInt::new(DIAL_START, DIAL_MODULUS)?;
    let mut count = 0;

    for instruction in instructions {
        if dial.value() == 0 {
            count += 1;
        }
        let step = ModInt::new(instruction.distance, DIAL_MODULUS)?;
        dial = match instruction.direction {
            Direction::Left => dial.checked_sub(step)?,
            Direction::Right => dial.checked_add(step)?,
        };
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Solver as _;

    fn solve_part(input: &str, part: u8) -> String {
        let mut parsed = Solver::parse(input).unwrap();
        Solver::solve_part(&mut parsed, part).unwrap()
    }

    #[test]
    fn dial_never_reaching_zero_counts_nothing() {
        // 50 -> 40 -> 60 -> 50
        assert_eq!(solve_part("L10\nR20\nL10", 1), "0");
    }

    #[test]
    fn zero_is_checked_before_each_instruction() {
        // 50 -> 0, seen before R1 is applied
        assert_eq!(solve_part("L50\nR1", 1), "1");
    }

    #[test]
    fn zero_reached_by_the_last_instruction_is_not_counted() {
        assert_eq!(solve_part("L50", 1), "0");
    }

    #[test]
    fn full_revolution_stays_on_zero() {
        // 50 -> 0 (seen), R100 keeps it there (seen again)
        assert_eq!(solve_part("R50\nR100\nR1", 1), "2");
    }

    #[test]
    fn wraps_in_both_directions() {
        // 50 -> 82 -> 52 -> 100=0 -> 95 -> 52 -> 24 -> 21 -> 3; zero seen once
        let input = "L68\nL30\nR48\nL5\nR57\nL28\nL103\nR82";
        assert_eq!(solve_part(input, 1), "1");
    }

    #[test]
    fn empty_input_counts_nothing() {
        assert_eq!(solve_part("", 1), "0");
    }

    #[test]
    fn part_2_is_a_stub() {
        assert_eq!(solve_part("L10", 2), NOT_IMPLEMENTED);
    }

    #[test]
    fn malformed_lines_are_fatal() {
        for input in ["X10", "L", "L1a", "R+5", "R-5", "10", "L10 \nR5"] {
            let err = Solver::parse(input).unwrap_err();
            assert!(
                matches!(err, ParseError::InvalidFormat(_)),
                "expected InvalidFormat for {input:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn parse_errors_carry_the_line_number() {
        let err = Solver::parse("L10\nbogus").unwrap_err();
        match err {
            ParseError::InvalidFormat(msg) => assert!(msg.contains("(line 2)"), "{msg}"),
            other => panic!("expected InvalidFormat, got {other:?}"),
        }
    }
}
