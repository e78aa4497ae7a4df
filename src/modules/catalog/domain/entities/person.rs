use serde::{Deserialize, Serialize};

use super::{Movie, NAME_MAX_LEN};
use crate::shared::domain::WithNumericalId;
use crate::shared::utils::truncate_chars;

/// An actor or director. The same person may appear in both roles; the role
/// lives on the link tables, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub person_id: i32,
    pub numerical_id: i32,
    pub primary_name: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub movies: Vec<Movie>,
}

impl Person {
    pub fn new(person_id: i32, numerical_id: i32, primary_name: &str) -> Self {
        Self {
            person_id,
            numerical_id,
            primary_name: truncate_chars(primary_name, NAME_MAX_LEN),
            movies: Vec::new(),
        }
    }

    /// Shallow copy with the movies collection dropped.
    pub fn with_no_links(&self) -> Self {
        Person::new(self.person_id, self.numerical_id, &self.primary_name)
    }
}

impl WithNumericalId for Person {
    fn numerical_id(&self) -> i32 {
        self.numerical_id
    }
}
