/// Deferred query descriptions for the catalog.
///
/// Composing one of these performs no I/O; the store is hit only when the
/// descriptor is counted or loaded, which is what lets callers stack
/// pagination on top before anything executes. Every materialization is
/// ordered by the target entity's stable primary id, and the union variants
/// de-duplicate by that id.
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use super::mapper;
use super::models::{MovieRow, PersonRow, TagRow};
use crate::modules::catalog::domain::entities::{Movie, Person, Tag};
use crate::schema::{actors_movies, directors_movies, movies, people, tags, tags_movies};
use crate::shared::application::pagination::PageQuery;
use crate::shared::errors::AppResult;

/// Which movies: everything, one side of a link table, or both person roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieQuery {
    All,
    ByActor(i32),
    ByDirector(i32),
    /// Either role; the filmography union.
    ByPerson(i32),
    WithTag(i32),
}

impl PageQuery for MovieQuery {
    type Item = Movie;

    fn count(&self, conn: &mut SqliteConnection) -> AppResult<i64> {
        let count = match *self {
            MovieQuery::All => movies::table.count().get_result(conn)?,
            MovieQuery::ByActor(person_id) => actors_movies::table
                .inner_join(movies::table)
                .filter(actors_movies::actor_id.eq(person_id))
                .count()
                .get_result(conn)?,
            MovieQuery::ByDirector(person_id) => directors_movies::table
                .inner_join(movies::table)
                .filter(directors_movies::director_id.eq(person_id))
                .count()
                .get_result(conn)?,
            MovieQuery::ByPerson(person_id) => {
                movie_ids_for_person(conn, person_id)?.len() as i64
            }
            MovieQuery::WithTag(tag_id) => tags_movies::table
                .inner_join(movies::table)
                .filter(tags_movies::tag_id.eq(tag_id))
                .count()
                .get_result(conn)?,
        };
        Ok(count)
    }

    fn load(&self, conn: &mut SqliteConnection) -> AppResult<Vec<Movie>> {
        let rows: Vec<MovieRow> = match *self {
            MovieQuery::All => movies::table
                .select(MovieRow::as_select())
                .order(movies::movie_id.asc())
                .load(conn)?,
            MovieQuery::ByActor(person_id) => actors_movies::table
                .inner_join(movies::table)
                .filter(actors_movies::actor_id.eq(person_id))
                .select(MovieRow::as_select())
                .order(movies::movie_id.asc())
                .load(conn)?,
            MovieQuery::ByDirector(person_id) => directors_movies::table
                .inner_join(movies::table)
                .filter(directors_movies::director_id.eq(person_id))
                .select(MovieRow::as_select())
                .order(movies::movie_id.asc())
                .load(conn)?,
            MovieQuery::ByPerson(person_id) => {
                let ids = movie_ids_for_person(conn, person_id)?;
                movies::table
                    .filter(movies::movie_id.eq_any(ids))
                    .select(MovieRow::as_select())
                    .order(movies::movie_id.asc())
                    .load(conn)?
            }
            MovieQuery::WithTag(tag_id) => tags_movies::table
                .inner_join(movies::table)
                .filter(tags_movies::tag_id.eq(tag_id))
                .select(MovieRow::as_select())
                .order(movies::movie_id.asc())
                .load(conn)?,
        };
        Ok(rows.into_iter().map(mapper::movie_row_to_entity).collect())
    }

    fn load_numerical_range(
        &self,
        conn: &mut SqliteConnection,
        lo: i32,
        hi: i32,
    ) -> AppResult<Vec<Movie>> {
        let in_range = movies::numerical_id.ge(lo).and(movies::numerical_id.lt(hi));
        let rows: Vec<MovieRow> = match *self {
            MovieQuery::All => movies::table
                .filter(in_range)
                .select(MovieRow::as_select())
                .order(movies::movie_id.asc())
                .load(conn)?,
            MovieQuery::ByActor(person_id) => actors_movies::table
                .inner_join(movies::table)
                .filter(actors_movies::actor_id.eq(person_id))
                .filter(in_range)
                .select(MovieRow::as_select())
                .order(movies::movie_id.asc())
                .load(conn)?,
            MovieQuery::ByDirector(person_id) => directors_movies::table
                .inner_join(movies::table)
                .filter(directors_movies::director_id.eq(person_id))
                .filter(in_range)
                .select(MovieRow::as_select())
                .order(movies::movie_id.asc())
                .load(conn)?,
            MovieQuery::ByPerson(person_id) => {
                let ids = movie_ids_for_person(conn, person_id)?;
                movies::table
                    .filter(movies::movie_id.eq_any(ids))
                    .filter(in_range)
                    .select(MovieRow::as_select())
                    .order(movies::movie_id.asc())
                    .load(conn)?
            }
            MovieQuery::WithTag(tag_id) => tags_movies::table
                .inner_join(movies::table)
                .filter(tags_movies::tag_id.eq(tag_id))
                .filter(in_range)
                .select(MovieRow::as_select())
                .order(movies::movie_id.asc())
                .load(conn)?,
        };
        Ok(rows.into_iter().map(mapper::movie_row_to_entity).collect())
    }
}

/// Which people: everything, one credited role on a movie, or the combined
/// cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonQuery {
    All,
    ActorsOf(i32),
    DirectorsOf(i32),
    /// Actors and directors combined.
    CastOf(i32),
}

impl PageQuery for PersonQuery {
    type Item = Person;

    fn count(&self, conn: &mut SqliteConnection) -> AppResult<i64> {
        let count = match *self {
            PersonQuery::All => people::table.count().get_result(conn)?,
            PersonQuery::ActorsOf(movie_id) => actors_movies::table
                .inner_join(people::table)
                .filter(actors_movies::movie_id.eq(movie_id))
                .count()
                .get_result(conn)?,
            PersonQuery::DirectorsOf(movie_id) => directors_movies::table
                .inner_join(people::table)
                .filter(directors_movies::movie_id.eq(movie_id))
                .count()
                .get_result(conn)?,
            PersonQuery::CastOf(movie_id) => person_ids_for_movie(conn, movie_id)?.len() as i64,
        };
        Ok(count)
    }

    fn load(&self, conn: &mut SqliteConnection) -> AppResult<Vec<Person>> {
        let rows: Vec<PersonRow> = match *self {
            PersonQuery::All => people::table
                .select(PersonRow::as_select())
                .order(people::person_id.asc())
                .load(conn)?,
            PersonQuery::ActorsOf(movie_id) => actors_movies::table
                .inner_join(people::table)
                .filter(actors_movies::movie_id.eq(movie_id))
                .select(PersonRow::as_select())
                .order(people::person_id.asc())
                .load(conn)?,
            PersonQuery::DirectorsOf(movie_id) => directors_movies::table
                .inner_join(people::table)
                .filter(directors_movies::movie_id.eq(movie_id))
                .select(PersonRow::as_select())
                .order(people::person_id.asc())
                .load(conn)?,
            PersonQuery::CastOf(movie_id) => {
                let ids = person_ids_for_movie(conn, movie_id)?;
                people::table
                    .filter(people::person_id.eq_any(ids))
                    .select(PersonRow::as_select())
                    .order(people::person_id.asc())
                    .load(conn)?
            }
        };
        Ok(rows.into_iter().map(mapper::person_row_to_entity).collect())
    }

    fn load_numerical_range(
        &self,
        conn: &mut SqliteConnection,
        lo: i32,
        hi: i32,
    ) -> AppResult<Vec<Person>> {
        let in_range = people::numerical_id.ge(lo).and(people::numerical_id.lt(hi));
        let rows: Vec<PersonRow> = match *self {
            PersonQuery::All => people::table
                .filter(in_range)
                .select(PersonRow::as_select())
                .order(people::person_id.asc())
                .load(conn)?,
            PersonQuery::ActorsOf(movie_id) => actors_movies::table
                .inner_join(people::table)
                .filter(actors_movies::movie_id.eq(movie_id))
                .filter(in_range)
                .select(PersonRow::as_select())
                .order(people::person_id.asc())
                .load(conn)?,
            PersonQuery::DirectorsOf(movie_id) => directors_movies::table
                .inner_join(people::table)
                .filter(directors_movies::movie_id.eq(movie_id))
                .filter(in_range)
                .select(PersonRow::as_select())
                .order(people::person_id.asc())
                .load(conn)?,
            PersonQuery::CastOf(movie_id) => {
                let ids = person_ids_for_movie(conn, movie_id)?;
                people::table
                    .filter(people::person_id.eq_any(ids))
                    .filter(in_range)
                    .select(PersonRow::as_select())
                    .order(people::person_id.asc())
                    .load(conn)?
            }
        };
        Ok(rows.into_iter().map(mapper::person_row_to_entity).collect())
    }
}

/// Tags of one movie. Tags carry no numerical id, so this is not pageable;
/// callers get the full (small) set.
pub fn tags_of_movie(conn: &mut SqliteConnection, movie_id: i32) -> AppResult<Vec<Tag>> {
    let rows: Vec<TagRow> = tags_movies::table
        .inner_join(tags::table)
        .filter(tags_movies::movie_id.eq(movie_id))
        .select(TagRow::as_select())
        .order(tags::tag_id.asc())
        .load(conn)?;
    Ok(rows.into_iter().map(mapper::tag_row_to_entity).collect())
}

/// Distinct ids of movies the person appears in, in either role.
fn movie_ids_for_person(conn: &mut SqliteConnection, person_id: i32) -> AppResult<Vec<i32>> {
    let mut ids: Vec<i32> = actors_movies::table
        .filter(actors_movies::actor_id.eq(person_id))
        .select(actors_movies::movie_id)
        .load(conn)?;
    let directed: Vec<i32> = directors_movies::table
        .filter(directors_movies::director_id.eq(person_id))
        .select(directors_movies::movie_id)
        .load(conn)?;
    ids.extend(directed);
    ids.sort_unstable();
    ids.dedup();
    Ok(ids)
}

/// Distinct ids of people credited on the movie, in either role.
fn person_ids_for_movie(conn: &mut SqliteConnection, movie_id: i32) -> AppResult<Vec<i32>> {
    let mut ids: Vec<i32> = actors_movies::table
        .filter(actors_movies::movie_id.eq(movie_id))
        .select(actors_movies::actor_id)
        .load(conn)?;
    let directing: Vec<i32> = directors_movies::table
        .filter(directors_movies::movie_id.eq(movie_id))
        .select(directors_movies::director_id)
        .load(conn)?;
    ids.extend(directing);
    ids.sort_unstable();
    ids.dedup();
    Ok(ids)
}
