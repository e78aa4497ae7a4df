use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use super::load_query;
use crate::modules::catalog::domain::entities::{Movie, Person, Tag};
use crate::modules::catalog::domain::repositories::MovieRepository;
use crate::modules::catalog::infrastructure::mapper;
use crate::modules::catalog::infrastructure::models::{
    MovieRow, NewActorsMoviesLink, NewDirectorsMoviesLink, NewMovie, NewTagsMoviesLink,
};
use crate::modules::catalog::infrastructure::queries::{self, PersonQuery};
use crate::schema::{actors_movies, directors_movies, movies, tags_movies};
use crate::shared::database::Database;
use crate::shared::errors::AppResult;

pub struct MovieRepositoryImpl {
    db: Arc<Database>,
}

impl MovieRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MovieRepository for MovieRepositoryImpl {
    async fn insert(&self, movie: &Movie) -> AppResult<Movie> {
        let db = Arc::clone(&self.db);
        let new_movie = NewMovie::from_entity(movie);

        let row = task::spawn_blocking(move || -> AppResult<MovieRow> {
            let mut conn = db.get_connection()?;
            let row = diesel::insert_into(movies::table)
                .values(&new_movie)
                .returning(MovieRow::as_returning())
                .get_result(&mut conn)?;
            Ok(row)
        })
        .await??;

        Ok(mapper::movie_row_to_entity(row))
    }

    async fn find_by_id(&self, movie_id: i32) -> AppResult<Option<Movie>> {
        let db = Arc::clone(&self.db);

        let row = task::spawn_blocking(move || -> AppResult<Option<MovieRow>> {
            let mut conn = db.get_connection()?;
            let row = movies::table
                .find(movie_id)
                .select(MovieRow::as_select())
                .first(&mut conn)
                .optional()?;
            Ok(row)
        })
        .await??;

        Ok(row.map(mapper::movie_row_to_entity))
    }

    async fn add_actor(&self, movie_id: i32, person_id: i32) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            diesel::insert_into(actors_movies::table)
                .values(&NewActorsMoviesLink {
                    actor_id: person_id,
                    movie_id,
                })
                .execute(&mut conn)?;
            Ok(())
        })
        .await?
    }

    async fn add_director(&self, movie_id: i32, person_id: i32) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            diesel::insert_into(directors_movies::table)
                .values(&NewDirectorsMoviesLink {
                    director_id: person_id,
                    movie_id,
                })
                .execute(&mut conn)?;
            Ok(())
        })
        .await?
    }

    async fn add_tag(&self, movie_id: i32, tag_id: i32) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            diesel::insert_into(tags_movies::table)
                .values(&NewTagsMoviesLink { tag_id, movie_id })
                .execute(&mut conn)?;
            Ok(())
        })
        .await?
    }

    async fn actors(&self, movie_id: i32) -> AppResult<Vec<Person>> {
        load_query(&self.db, PersonQuery::ActorsOf(movie_id)).await
    }

    async fn directors(&self, movie_id: i32) -> AppResult<Vec<Person>> {
        load_query(&self.db, PersonQuery::DirectorsOf(movie_id)).await
    }

    async fn cast(&self, movie_id: i32) -> AppResult<Vec<Person>> {
        load_query(&self.db, PersonQuery::CastOf(movie_id)).await
    }

    async fn tags(&self, movie_id: i32) -> AppResult<Vec<Tag>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || {
            let mut conn = db.get_connection()?;
            queries::tags_of_movie(&mut conn, movie_id)
        })
        .await?
    }
}
