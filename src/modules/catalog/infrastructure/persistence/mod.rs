pub mod movie_repository_impl;
pub mod person_repository_impl;
pub mod tag_repository_impl;

pub use movie_repository_impl::MovieRepositoryImpl;
pub use person_repository_impl::PersonRepositoryImpl;
pub use tag_repository_impl::TagRepositoryImpl;

use std::sync::Arc;

use tokio::task;

use crate::shared::application::pagination::PageQuery;
use crate::shared::database::Database;
use crate::shared::errors::AppResult;

/// Materialize a deferred query on the blocking pool.
pub(crate) async fn load_query<Q: PageQuery>(
    db: &Arc<Database>,
    query: Q,
) -> AppResult<Vec<Q::Item>> {
    let db = Arc::clone(db);
    task::spawn_blocking(move || {
        let mut conn = db.get_connection()?;
        query.load(&mut conn)
    })
    .await?
}
