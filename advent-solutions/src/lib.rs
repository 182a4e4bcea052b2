//! Daily puzzle solutions organized by year
//!
//! Each solution implements the `advent-solver` traits and submits itself to
//! the plugin collection, so a harness can pick everything up with
//! `RegistryBuilder::register_all_plugins()` and drive any day through the
//! `DynSolver` interface.

#[cfg(feature = "solutions")]
pub mod solutions;

pub mod utils;
