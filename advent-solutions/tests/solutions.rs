//! End-to-end runs through the plugin registry

use advent_solver::{
    DynSolver, NOT_IMPLEMENTED, RegistryBuilder, SolveError, SolverError, SolverRegistry,
};

// Linking the solutions crate is what submits its plugins.
use advent_solutions as _;

const DIAL_EXAMPLE: &str = "L68\nL30\nR48\nL5\nR57\nL28\nL103\nR82";

const ID_EXAMPLE: &str = "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,\
                          1698522-1698528,446443-446449,38593856-38593862,565653-565659,\
                          824824821-824824827,2121212118-2121212124";

fn registry() -> SolverRegistry {
    RegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build()
}

#[test]
fn both_days_are_registered() {
    let registry = registry();

    let day_1 = registry.get_info(2025, 1).expect("2025 day 1");
    assert_eq!(day_1.parts, 2);
    let day_2 = registry.get_info(2025, 2).expect("2025 day 2");
    assert_eq!(day_2.parts, 2);

    assert_eq!(registry.iter_info().count(), 2);
}

#[test]
fn day_1_through_the_registry() {
    let registry = registry();
    let mut solver = registry.create_solver(2025, 1, DIAL_EXAMPLE).unwrap();

    assert_eq!(solver.solve(1).unwrap().answer, "1");
    assert_eq!(solver.solve(2).unwrap().answer, NOT_IMPLEMENTED);
}

#[test]
fn day_2_through_the_registry() {
    let registry = registry();
    let mut solver = registry.create_solver(2025, 2, ID_EXAMPLE).unwrap();

    assert_eq!(solver.solve(1).unwrap().answer, "1227775554");
    assert_eq!(solver.solve(2).unwrap().answer, "4174379265");
}

#[test]
fn part_numbers_are_bounded() {
    let registry = registry();
    let mut solver = registry.create_solver(2025, 1, "L10").unwrap();

    match solver.solve(3) {
        Err(SolveError::PartOutOfRange(3)) => {}
        other => panic!("expected PartOutOfRange, got {:?}", other.err()),
    }
}

#[test]
fn unknown_day_is_not_found() {
    let registry = registry();

    match registry.create_solver(2025, 9, "") {
        Err(SolverError::NotFound(2025, 9)) => {}
        other => panic!("expected NotFound, got {:?}", other.err()),
    }
}

#[test]
fn bad_input_fails_at_creation() {
    let registry = registry();

    assert!(registry.create_solver(2025, 1, "Q7").is_err());
    assert!(registry.create_solver(2025, 2, "17").is_err());
}
