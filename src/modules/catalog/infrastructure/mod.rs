pub mod mapper;
pub mod models;
pub mod persistence;
pub mod queries;

pub use queries::{MovieQuery, PersonQuery};
