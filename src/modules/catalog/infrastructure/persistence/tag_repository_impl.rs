use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use super::load_query;
use crate::modules::catalog::domain::entities::{Movie, Tag};
use crate::modules::catalog::domain::repositories::TagRepository;
use crate::modules::catalog::infrastructure::mapper;
use crate::modules::catalog::infrastructure::models::{NewTag, TagRow};
use crate::modules::catalog::infrastructure::queries::MovieQuery;
use crate::schema::tags;
use crate::shared::application::pagination::PageQuery;
use crate::shared::database::Database;
use crate::shared::errors::AppResult;

pub struct TagRepositoryImpl {
    db: Arc<Database>,
}

impl TagRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TagRepository for TagRepositoryImpl {
    async fn insert(&self, tag: &Tag) -> AppResult<Tag> {
        let db = Arc::clone(&self.db);
        let new_tag = NewTag::from_entity(tag);

        let row = task::spawn_blocking(move || -> AppResult<TagRow> {
            let mut conn = db.get_connection()?;
            let row = diesel::insert_into(tags::table)
                .values(&new_tag)
                .returning(TagRow::as_returning())
                .get_result(&mut conn)?;
            Ok(row)
        })
        .await??;

        Ok(mapper::tag_row_to_entity(row))
    }

    async fn find_by_id(&self, tag_id: i32) -> AppResult<Option<Tag>> {
        let db = Arc::clone(&self.db);

        let row = task::spawn_blocking(move || -> AppResult<Option<TagRow>> {
            let mut conn = db.get_connection()?;
            let row = tags::table
                .find(tag_id)
                .select(TagRow::as_select())
                .first(&mut conn)
                .optional()?;
            Ok(row)
        })
        .await??;

        Ok(row.map(mapper::tag_row_to_entity))
    }

    async fn movies(&self, tag_id: i32) -> AppResult<Vec<Movie>> {
        load_query(&self.db, MovieQuery::WithTag(tag_id)).await
    }

    async fn movie_count(&self, tag_id: i32) -> AppResult<i64> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || {
            let mut conn = db.get_connection()?;
            MovieQuery::WithTag(tag_id).count(&mut conn)
        })
        .await?
    }
}
