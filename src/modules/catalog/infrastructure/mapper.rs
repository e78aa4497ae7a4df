/// Conversions from database rows to domain entities.
///
/// Rows never carry relationship collections, so every mapped entity comes
/// back with empty ones (and, for movies, a titles set seeded with the
/// primary title).
use super::models::{MovieRow, PersonRow, TagRow};
use crate::modules::catalog::domain::entities::{Movie, Person, Tag};

pub fn movie_row_to_entity(row: MovieRow) -> Movie {
    Movie::new(row.movie_id, row.numerical_id, &row.primary_title, row.rating)
}

pub fn person_row_to_entity(row: PersonRow) -> Person {
    Person::new(row.person_id, row.numerical_id, &row.primary_name)
}

pub fn tag_row_to_entity(row: TagRow) -> Tag {
    Tag::new(row.tag_id, &row.name)
}
