//! Command implementations for the sports data seeder

pub mod seed;


pub use seed::{fetch_tables, handle_seed, run_seed, seed_database, SeedReport, Step, StepFailure};
