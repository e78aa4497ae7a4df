use serde::{Deserialize, Serialize};

use super::{Movie, NAME_MAX_LEN};
use crate::shared::utils::truncate_chars;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub tag_id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub movies: Vec<Movie>,
}

impl Tag {
    pub fn new(tag_id: i32, name: &str) -> Self {
        Self {
            tag_id,
            name: truncate_chars(name, NAME_MAX_LEN),
            movies: Vec::new(),
        }
    }

    /// Shallow copy with the movies collection dropped.
    pub fn with_no_links(&self) -> Self {
        Tag::new(self.tag_id, &self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_longer_than_64_chars_is_silently_truncated() {
        let tag = Tag::new(1, &"t".repeat(70));
        assert_eq!(tag.name, "t".repeat(64));
    }

    #[test]
    fn with_no_links_drops_movies() {
        let mut tag = Tag::new(1, "noir");
        tag.movies.push(Movie::new(3, 0, "The Third Man", 8.1));

        let copy = tag.with_no_links();
        assert_eq!(copy.tag_id, 1);
        assert_eq!(copy.name, "noir");
        assert!(copy.movies.is_empty());
    }
}
