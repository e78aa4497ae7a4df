use async_trait::async_trait;

use crate::modules::catalog::domain::entities::{Movie, Tag};
use crate::shared::errors::AppResult;

#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Insert a tag. A non-positive `tag_id` requests an auto-generated key.
    async fn insert(&self, tag: &Tag) -> AppResult<Tag>;

    async fn find_by_id(&self, tag_id: i32) -> AppResult<Option<Tag>>;

    async fn movies(&self, tag_id: i32) -> AppResult<Vec<Movie>>;

    /// Number of movies linked to the tag, without materializing them.
    async fn movie_count(&self, tag_id: i32) -> AppResult<i64>;
}
