use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::entities::{Movie, Person, Tag};
use crate::schema::{actors_movies, directors_movies, movies, people, tags, tags_movies};

// ================== ENTITY ROWS ==================

// Rows carry scalar columns only; relationship collections live on the
// domain entities and are hydrated through the link tables.

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = movies)]
#[diesel(primary_key(movie_id))]
pub struct MovieRow {
    pub movie_id: i32,
    pub numerical_id: i32,
    pub primary_title: String,
    pub rating: f32,
}

/// Insert payload. `None` primary key lets the store generate one;
/// `Some(id)` stores an explicitly supplied (possibly sparse) id.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = movies)]
pub struct NewMovie {
    pub movie_id: Option<i32>,
    pub numerical_id: i32,
    pub primary_title: String,
    pub rating: f32,
}

impl NewMovie {
    pub fn from_entity(movie: &Movie) -> Self {
        Self {
            movie_id: (movie.movie_id > 0).then_some(movie.movie_id),
            numerical_id: movie.numerical_id,
            primary_title: movie.primary_title.clone(),
            rating: movie.rating,
        }
    }
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = people)]
#[diesel(primary_key(person_id))]
pub struct PersonRow {
    pub person_id: i32,
    pub numerical_id: i32,
    pub primary_name: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = people)]
pub struct NewPerson {
    pub person_id: Option<i32>,
    pub numerical_id: i32,
    pub primary_name: String,
}

impl NewPerson {
    pub fn from_entity(person: &Person) -> Self {
        Self {
            person_id: (person.person_id > 0).then_some(person.person_id),
            numerical_id: person.numerical_id,
            primary_name: person.primary_name.clone(),
        }
    }
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = tags)]
#[diesel(primary_key(tag_id))]
pub struct TagRow {
    pub tag_id: i32,
    pub name: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = tags)]
pub struct NewTag {
    pub tag_id: Option<i32>,
    pub name: String,
}

impl NewTag {
    pub fn from_entity(tag: &Tag) -> Self {
        Self {
            tag_id: (tag.tag_id > 0).then_some(tag.tag_id),
            name: tag.name.clone(),
        }
    }
}

// ================== LINK ROWS (explicit join tables) ==================

// Each link is a first-class row with its own generated surrogate key and
// two foreign keys. Nothing here de-duplicates a (role, movie) pair.

#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone, Serialize, Deserialize)]
#[diesel(belongs_to(MovieRow, foreign_key = movie_id))]
#[diesel(belongs_to(PersonRow, foreign_key = actor_id))]
#[diesel(table_name = actors_movies)]
#[diesel(primary_key(actors_movies_link_id))]
pub struct ActorsMoviesLink {
    pub actors_movies_link_id: i32,
    pub actor_id: i32,
    pub movie_id: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = actors_movies)]
pub struct NewActorsMoviesLink {
    pub actor_id: i32,
    pub movie_id: i32,
}

#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone, Serialize, Deserialize)]
#[diesel(belongs_to(MovieRow, foreign_key = movie_id))]
#[diesel(belongs_to(PersonRow, foreign_key = director_id))]
#[diesel(table_name = directors_movies)]
#[diesel(primary_key(directors_movies_link_id))]
pub struct DirectorsMoviesLink {
    pub directors_movies_link_id: i32,
    pub director_id: i32,
    pub movie_id: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = directors_movies)]
pub struct NewDirectorsMoviesLink {
    pub director_id: i32,
    pub movie_id: i32,
}

#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone, Serialize, Deserialize)]
#[diesel(belongs_to(MovieRow, foreign_key = movie_id))]
#[diesel(belongs_to(TagRow, foreign_key = tag_id))]
#[diesel(table_name = tags_movies)]
#[diesel(primary_key(tags_movies_id))]
pub struct TagsMoviesLink {
    pub tags_movies_id: i32,
    pub tag_id: i32,
    pub movie_id: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = tags_movies)]
pub struct NewTagsMoviesLink {
    pub tag_id: i32,
    pub movie_id: i32,
}
