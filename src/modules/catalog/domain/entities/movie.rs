use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Person, Tag, Title};
use crate::shared::domain::WithNumericalId;

/// A catalog movie.
///
/// `movie_id` is the stable id (may be sparse when imported from an external
/// dataset); `numerical_id` is the dense zero-based id used for range
/// pagination. Relationship collections are hydrated on demand by the query
/// helpers and stay empty otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub movie_id: i32,
    pub numerical_id: i32,
    pub primary_title: String,
    pub rating: f32,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub titles: Vec<Title>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub actors: Vec<Person>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub directors: Vec<Person>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<Tag>,
}

impl Movie {
    pub fn new(movie_id: i32, numerical_id: i32, primary_title: &str, rating: f32) -> Self {
        // The titles set always holds at least the primary title.
        let titles = vec![Title::new(primary_title, movie_id)];
        Self {
            movie_id,
            numerical_id,
            primary_title: primary_title.to_string(),
            rating,
            titles,
            actors: Vec::new(),
            directors: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Add an alternate title. Set semantics: adding an existing name is a
    /// no-op.
    pub fn add_title(&mut self, name: &str) {
        let title = Title::new(name, self.movie_id);
        if !self.titles.contains(&title) {
            self.titles.push(title);
        }
    }

    /// Shallow copy with only scalar fields; relationship collections are
    /// empty and the titles set is re-seeded with just the primary title.
    /// Used when a summary is serialized and traversing the join graph would
    /// be wasted work.
    pub fn with_no_links(&self) -> Self {
        Movie::new(
            self.movie_id,
            self.numerical_id,
            &self.primary_title,
            self.rating,
        )
    }
}

impl WithNumericalId for Movie {
    fn numerical_id(&self) -> i32 {
        self.numerical_id
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.movie_id, self.primary_title)
    }
}
