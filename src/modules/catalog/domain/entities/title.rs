use serde::{Deserialize, Serialize};

use super::NAME_MAX_LEN;
use crate::shared::utils::truncate_chars;

/// Alternate title owned by exactly one movie.
///
/// Kept as an in-memory value object on the movie; titles are not persisted
/// as a queryable table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub name: String,
    pub movie_id: i32,
}

impl Title {
    pub fn new(name: &str, movie_id: i32) -> Self {
        Self {
            name: truncate_chars(name, NAME_MAX_LEN),
            movie_id,
        }
    }
}
