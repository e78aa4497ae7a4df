use async_trait::async_trait;

use crate::modules::catalog::domain::entities::{Movie, Person, Tag};
use crate::shared::errors::AppResult;

/// Movie persistence plus the query helpers that answer "who relates to
/// this movie". Read operations compose an equi-join between the relevant
/// link table and the target set, filtered by this movie's id, and
/// materialize it ordered by the target's stable primary id.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Insert a movie. A non-positive `movie_id` requests an auto-generated
    /// key; an explicit positive id is stored verbatim. Returns the stored
    /// entity.
    async fn insert(&self, movie: &Movie) -> AppResult<Movie>;

    async fn find_by_id(&self, movie_id: i32) -> AppResult<Option<Movie>>;

    /// Create an actor link. The surrogate key is auto-generated and
    /// duplicate (person, movie) pairs are not prevented.
    async fn add_actor(&self, movie_id: i32, person_id: i32) -> AppResult<()>;

    async fn add_director(&self, movie_id: i32, person_id: i32) -> AppResult<()>;

    async fn add_tag(&self, movie_id: i32, tag_id: i32) -> AppResult<()>;

    async fn actors(&self, movie_id: i32) -> AppResult<Vec<Person>>;

    async fn directors(&self, movie_id: i32) -> AppResult<Vec<Person>>;

    /// Actors and directors combined, de-duplicated by person id.
    async fn cast(&self, movie_id: i32) -> AppResult<Vec<Person>>;

    async fn tags(&self, movie_id: i32) -> AppResult<Vec<Tag>>;
}
