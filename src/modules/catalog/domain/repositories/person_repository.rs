use async_trait::async_trait;

use crate::modules::catalog::domain::entities::{Movie, Person};
use crate::shared::errors::AppResult;

#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Insert a person. A non-positive `person_id` requests an
    /// auto-generated key.
    async fn insert(&self, person: &Person) -> AppResult<Person>;

    async fn find_by_id(&self, person_id: i32) -> AppResult<Option<Person>>;

    async fn movies_as_actor(&self, person_id: i32) -> AppResult<Vec<Movie>>;

    async fn movies_as_director(&self, person_id: i32) -> AppResult<Vec<Movie>>;

    /// Movies in either role, de-duplicated by movie id.
    async fn filmography(&self, person_id: i32) -> AppResult<Vec<Movie>>;
}
