//! 2025 day 2: invalid product ids.
//!
//! The input is a comma-separated list of inclusive id ranges. An id is
//! invalid when its decimal digits are a shorter block repeated two or more
//! times (`1212` is `12` twice, `777` is `7` three times). Part 1 sums the
//! ids built from exactly two copies of a block; part 2 sums the ids built
//! from any number of copies, counting each id once.
//!
//! Candidates are generated, not tested: within a digit length `L` divisible
//! by the repeat count `r`, every invalid id is a block of `L / r` digits
//! times the constant `1 + 10^(L/r) + ... + 10^(L/r)(r-1)`, so walking block
//! values between the bound prefixes visits each candidate directly.

use std::collections::HashSet;

use advent_solver::{ParseError, Parser, PartSolver, SolveError, impl_solver, submit_solver};
use anyhow::{Context, anyhow};

pub struct Solver;

impl_solver!(Solver, parts = [1, 2]);

submit_solver!(Solver, year = 2025, day = 2, tags = ["2025", "ids"]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    first: u64,
    last: u64,
}

impl Parser for Solver {
    type Parsed<'a> = Vec<IdRange>;

    fn parse(input: &str) -> Result<Self::Parsed<'_>, ParseError> {
        input
            .trim()
            .split(',')
            .map(|token| {
                parse_range(token)
                    .map_err(|e| ParseError::InvalidFormat(format!("range {token:?}: {e}")))
            })
            .collect()
    }
}

fn parse_range(token: &str) -> Result<IdRange, anyhow::Error> {
    let (first, last) = token
        .split_once('-')
        .ok_or_else(|| anyhow!("expected \"first-last\""))?;
    let first: u64 = first.parse().context("lower bound")?;
    let last: u64 = last.parse().context("upper bound")?;
    if first > last {
        return Err(anyhow!("lower bound {first} exceeds upper bound {last}"));
    }
    Ok(IdRange { first, last })
}

impl PartSolver<1> for Solver {
    fn solve(parsed: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        let total: u64 = parsed
            .iter()
            .map(|range| {
                let mut seen = HashSet::new();
                repeated_ids_in(range, 2, &mut seen)
            })
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(parsed: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        let total: u64 = parsed.iter().map(sum_over_all_repeats).sum();
        Ok(total.to_string())
    }
}

/// Sums the invalid ids in `range` across every repeat count the upper
/// bound's digit length admits. The seen set spans repeat counts, so an id
/// expressible under several of them (`1111` as `11` twice or `1` four
/// times) is summed once per range.
fn sum_over_all_repeats(range: &IdRange) -> u64 {
    let mut seen = HashSet::new();
    (2..=digit_count(range.last))
        .map(|repeat| repeated_ids_in(range, repeat, &mut seen))
        .sum()
}

/// Sums the ids in `range` whose digits are a block repeated exactly
/// `repeat` times, skipping ids already recorded in `seen`.
///
/// The range is walked one digit length at a time; lengths not divisible by
/// `repeat` cannot hold a whole number of blocks and contribute nothing.
/// Walking per length also pins down the prefix arithmetic below: within one
/// span both bounds have the same digit count, whereas a range like
/// `11-2222` mixes lengths and would otherwise be sliced wrong.
fn repeated_ids_in(range: &IdRange, repeat: u32, seen: &mut HashSet<u64>) -> u64 {
    let mut total = 0;

    for len in digit_count(range.first)..=digit_count(range.last) {
        if len % repeat != 0 {
            continue;
        }
        // Clamp the span of len-digit numbers to the range. 10^20 overflows
        // u64, but every u64 fits in 20 digits, so the top span needs no cap.
        let lo = range.first.max(pow10(len - 1));
        let hi = if len >= 20 {
            range.last
        } else {
            range.last.min(pow10(len) - 1)
        };
        if lo > hi {
            continue;
        }
        total += scan_span(lo, hi, len, repeat, seen);
    }

    total
}

/// Sums the block-repeat ids inside `[lo, hi]`, where both bounds have
/// exactly `len` digits and `len` is divisible by `repeat`.
fn scan_span(lo: u64, hi: u64, len: u32, repeat: u32, seen: &mut HashSet<u64>) -> u64 {
    let len_sub = len / repeat;

    // The leading len_sub digits of the bounds delimit the block values,
    // and scale stamps a block into the full id: block * (1 + 10^len_sub +
    // ... ) is the block written `repeat` times.
    let prefix_shift = pow10(len - len_sub);
    let min_block = lo / prefix_shift;
    let max_block = hi / prefix_shift;
    let scale: u64 = (0..repeat).map(|k| pow10(len_sub * k)).sum();

    let mut total = 0;
    for block in min_block..=max_block {
        // Candidates grow with the block value, so overflow also means past
        // the span.
        let Some(candidate) = block.checked_mul(scale) else {
            break;
        };
        if candidate < lo {
            continue;
        }
        if candidate > hi {
            break;
        }
        if seen.insert(candidate) {
            total += candidate;
        }
    }

    total
}

fn digit_count(n: u64) -> u32 {
    n.checked_ilog10().map_or(1, |log| log + 1)
}

fn pow10(exp: u32) -> u64 {
    10u64.pow(exp)
}
