//! Daily-puzzle solver framework
//!
//! A small trait-based framework for daily coding puzzles: each puzzle is a
//! type that parses its input once and answers one or more parts as strings.
//! Solvers register themselves through an `inventory`-backed plugin system,
//! and an external harness drives them through the type-erased [`DynSolver`]
//! interface handed out by the [`SolverRegistry`].
//!
//! # Quick example
//!
//! ```
//! use advent_solver::{
//!     DynSolver, ParseError, Parser, PartSolver, RegistryBuilder, SolveError, impl_solver,
//! };
//!
//! struct Doubler;
//!
//! impl Parser for Doubler {
//!     type Parsed<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::Parsed<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| {
//!                 line.trim()
//!                     .parse()
//!                     .map_err(|_| ParseError::InvalidFormat(line.to_string()))
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Doubler {
//!     fn solve(parsed: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
//!         Ok(parsed.iter().map(|n| n * 2).sum::<i64>().to_string())
//!     }
//! }
//!
//! impl_solver!(Doubler, parts = [1]);
//!
//! let registry = RegistryBuilder::new()
//!     .register_solver::<Doubler>(2025, 3)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2025, 3, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "12");
//! ```
//!
//! # Plugin registration
//!
//! Solution crates submit their solvers with
//! [`submit_solver!`], and a harness collects everything it can run with
//! [`RegistryBuilder::register_all_plugins`] (or a tag/year filter via
//! [`RegistryBuilder::register_plugins`]).

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    RegisterableSolver, RegistryBuilder, SolverFactory, SolverInfo, SolverPlugin, SolverRegistry,
};
pub use solver::{NOT_IMPLEMENTED, Parser, PartSolver, Solver, SolverExt};

// Re-exported for the submit_solver! macro expansion
pub use inventory;
