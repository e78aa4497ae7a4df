use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use super::load_query;
use crate::modules::catalog::domain::entities::{Movie, Person};
use crate::modules::catalog::domain::repositories::PersonRepository;
use crate::modules::catalog::infrastructure::mapper;
use crate::modules::catalog::infrastructure::models::{NewPerson, PersonRow};
use crate::modules::catalog::infrastructure::queries::MovieQuery;
use crate::schema::people;
use crate::shared::database::Database;
use crate::shared::errors::AppResult;

pub struct PersonRepositoryImpl {
    db: Arc<Database>,
}

impl PersonRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PersonRepository for PersonRepositoryImpl {
    async fn insert(&self, person: &Person) -> AppResult<Person> {
        let db = Arc::clone(&self.db);
        let new_person = NewPerson::from_entity(person);

        let row = task::spawn_blocking(move || -> AppResult<PersonRow> {
            let mut conn = db.get_connection()?;
            let row = diesel::insert_into(people::table)
                .values(&new_person)
                .returning(PersonRow::as_returning())
                .get_result(&mut conn)?;
            Ok(row)
        })
        .await??;

        Ok(mapper::person_row_to_entity(row))
    }

    async fn find_by_id(&self, person_id: i32) -> AppResult<Option<Person>> {
        let db = Arc::clone(&self.db);

        let row = task::spawn_blocking(move || -> AppResult<Option<PersonRow>> {
            let mut conn = db.get_connection()?;
            let row = people::table
                .find(person_id)
                .select(PersonRow::as_select())
                .first(&mut conn)
                .optional()?;
            Ok(row)
        })
        .await??;

        Ok(row.map(mapper::person_row_to_entity))
    }

    async fn movies_as_actor(&self, person_id: i32) -> AppResult<Vec<Movie>> {
        load_query(&self.db, MovieQuery::ByActor(person_id)).await
    }

    async fn movies_as_director(&self, person_id: i32) -> AppResult<Vec<Movie>> {
        load_query(&self.db, MovieQuery::ByDirector(person_id)).await
    }

    async fn filmography(&self, person_id: i32) -> AppResult<Vec<Movie>> {
        load_query(&self.db, MovieQuery::ByPerson(person_id)).await
    }
}
