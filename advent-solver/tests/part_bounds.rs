//! Property-based tests for part-number validation and dispatch

use advent_solver::{ParseError, Parser, SolveError, Solver, SolverExt};
use proptest::prelude::*;

/// Test solver with a configurable part count
struct TestSolver<const N: u8>;

impl<const N: u8> Parser for TestSolver<N> {
    type Parsed<'a> = ();

    fn parse(_input: &str) -> Result<Self::Parsed<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for TestSolver<N> {
    const PARTS: u8 = N;

    fn solve_part(_parsed: &mut Self::Parsed<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{part}"))
    }
}

fn checked(max_parts: u8, part: u8) -> Result<String, SolveError> {
    let mut parsed = ();
    match max_parts {
        1 => TestSolver::<1>::solve_part_checked(&mut parsed, part),
        2 => TestSolver::<2>::solve_part_checked(&mut parsed, part),
        3 => TestSolver::<3>::solve_part_checked(&mut parsed, part),
        _ => unreachable!("test range is 1..=3"),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Part numbers outside `1..=PARTS` are always rejected with
    /// `PartOutOfRange`, carrying the offending part number.
    #[test]
    fn out_of_range_parts_are_rejected(max_parts in 1u8..=3, part in 0u8..=255) {
        let result = checked(max_parts, part);

        if part == 0 || part > max_parts {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert!(result.is_ok());
        }
    }

    /// Part numbers inside `1..=PARTS` delegate to `solve_part` unchanged.
    #[test]
    fn in_range_parts_delegate(part in 1u8..=3) {
        let mut parsed = ();
        let checked = TestSolver::<3>::solve_part_checked(&mut parsed, part).unwrap();
        let direct = TestSolver::<3>::solve_part(&mut parsed, part).unwrap();

        prop_assert_eq!(checked, direct);
    }
}
