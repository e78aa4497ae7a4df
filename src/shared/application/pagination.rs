/// Pagination support for queries
///
/// Converts any deferred catalog query whose entities carry a dense
/// numerical id into one bounded page of a fixed size.
use std::sync::Arc;

use diesel::sqlite::SqliteConnection;
use tokio::task;

use crate::shared::database::Database;
use crate::shared::domain::WithNumericalId;
use crate::shared::errors::{AppError, AppResult};

pub const PAGE_SIZE: i64 = 20;

/// A composed, not-yet-executed query. Building one performs no I/O;
/// the store is hit only when the query is counted or loaded.
pub trait PageQuery: Clone + Send + 'static {
    type Item: WithNumericalId + Send + 'static;

    /// Cardinality of the full result set.
    fn count(&self, conn: &mut SqliteConnection) -> AppResult<i64>;

    /// Materialize the entire result set, ordered by stable primary id.
    fn load(&self, conn: &mut SqliteConnection) -> AppResult<Vec<Self::Item>>;

    /// Materialize only entities with numerical id in `[lo, hi)`.
    fn load_numerical_range(
        &self,
        conn: &mut SqliteConnection,
        lo: i32,
        hi: i32,
    ) -> AppResult<Vec<Self::Item>>;
}

/// One-page view over a deferred query. Stateless across calls: every
/// `select_page` re-evaluates the source cardinality, so a stale max page
/// under concurrent mutation is possible and accepted.
pub struct Pagination<Q: PageQuery> {
    db: Arc<Database>,
    query: Q,
}

impl<Q: PageQuery> Pagination<Q> {
    pub fn new(db: Arc<Database>, query: Q) -> Self {
        Self { db, query }
    }

    /// `ceil(count / PAGE_SIZE)`; 0 for an empty source.
    pub async fn max_page(&self) -> AppResult<i64> {
        let db = Arc::clone(&self.db);
        let query = self.query.clone();

        task::spawn_blocking(move || {
            let mut conn = db.get_connection()?;
            Ok(max_page_for(query.count(&mut conn)?))
        })
        .await?
    }

    /// Select the `page`-th page of the source.
    ///
    /// Any `page` outside `[0, max_page)` is a range error, including every
    /// page of an empty source: an out-of-range request never yields an
    /// empty page.
    ///
    /// With `use_numerical_id` the range predicate is pushed down to the
    /// store (an index-friendly scan; the last page may come back short if
    /// numerical ids have a gap). Without it the ENTIRE source is
    /// materialized and sliced: correct for sources whose ordering cannot be
    /// expressed as a numerical-id range (e.g. a join that does not preserve
    /// numerical ids), but loads everything regardless of the page asked
    /// for. Known performance liability on large sources.
    pub async fn select_page(&self, page: i64, use_numerical_id: bool) -> AppResult<Vec<Q::Item>> {
        let db = Arc::clone(&self.db);
        let query = self.query.clone();

        task::spawn_blocking(move || {
            let mut conn = db.get_connection()?;

            // Count and fetch are two round-trips, not transactionally linked.
            let max_page = max_page_for(query.count(&mut conn)?);
            if page < 0 || page >= max_page {
                return Err(AppError::PageOutOfRange { page, max_page });
            }

            if use_numerical_id {
                let lo = (page * PAGE_SIZE) as i32;
                let hi = ((page + 1) * PAGE_SIZE) as i32;
                return query.load_numerical_range(&mut conn, lo, hi);
            }

            let all = query.load(&mut conn)?;
            let start = (page * PAGE_SIZE) as usize;
            Ok(all
                .into_iter()
                .skip(start)
                .take(PAGE_SIZE as usize)
                .collect())
        })
        .await?
    }
}

fn max_page_for(count: i64) -> i64 {
    (count + PAGE_SIZE - 1) / PAGE_SIZE
}
