//! Solutions by year

pub mod year_2025;
