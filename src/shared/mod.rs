// Shared kernel: persistence context, errors, pagination, small utilities.

pub mod application;
pub mod database;
pub mod domain;
pub mod errors;
pub mod utils;

// Re-exports for convenience
pub use database::{Database, TableSet};
