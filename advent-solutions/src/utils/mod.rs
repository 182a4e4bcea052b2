//! Shared helpers for solutions

pub mod mod_int;

pub use mod_int::{ModInt, ModIntError};
