use std::env;
use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;

use crate::schema::{actors_movies, directors_movies, movies, people, tags, tags_movies};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use crate::{log_debug, log_info};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = r2d2::PooledConnection<ConnectionManager<SqliteConnection>>;

/// Default location of the backing store, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "movies.db";

/// Schema is created on first access if absent. Existing tables are left
/// untouched; there is no migration of an existing schema at this layer.
const SCHEMA_DDL: &str = "
CREATE TABLE IF NOT EXISTS movies (
    movie_id INTEGER PRIMARY KEY,
    numerical_id INTEGER NOT NULL UNIQUE,
    primary_title TEXT NOT NULL,
    rating REAL NOT NULL
);

CREATE TABLE IF NOT EXISTS people (
    person_id INTEGER PRIMARY KEY,
    numerical_id INTEGER NOT NULL UNIQUE,
    primary_name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS tags (
    tag_id INTEGER PRIMARY KEY,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS actors_movies (
    actors_movies_link_id INTEGER PRIMARY KEY,
    actor_id INTEGER NOT NULL REFERENCES people (person_id),
    movie_id INTEGER NOT NULL REFERENCES movies (movie_id)
);

CREATE TABLE IF NOT EXISTS directors_movies (
    directors_movies_link_id INTEGER PRIMARY KEY,
    director_id INTEGER NOT NULL REFERENCES people (person_id),
    movie_id INTEGER NOT NULL REFERENCES movies (movie_id)
);

CREATE TABLE IF NOT EXISTS tags_movies (
    tags_movies_id INTEGER PRIMARY KEY,
    tag_id INTEGER NOT NULL REFERENCES tags (tag_id),
    movie_id INTEGER NOT NULL REFERENCES movies (movie_id)
);

CREATE INDEX IF NOT EXISTS idx_actors_movies_movie_id ON actors_movies (movie_id);
CREATE INDEX IF NOT EXISTS idx_directors_movies_movie_id ON directors_movies (movie_id);
CREATE INDEX IF NOT EXISTS idx_tags_movies_movie_id ON tags_movies (movie_id);
";

/// The sets owned by the persistence context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSet {
    Movies,
    People,
    Tags,
    ActorsMovies,
    DirectorsMovies,
    TagsMovies,
}

impl TableSet {
    fn name(&self) -> &'static str {
        match self {
            TableSet::Movies => "movies",
            TableSet::People => "people",
            TableSet::Tags => "tags",
            TableSet::ActorsMovies => "actors_movies",
            TableSet::DirectorsMovies => "directors_movies",
            TableSet::TagsMovies => "tags_movies",
        }
    }
}

/// Persistence context over a single local SQLite file.
///
/// Each logical request obtains its own handle on the underlying pool; the
/// struct itself is not meant to be shared across concurrent operations.
/// Dropping the context releases all pooled connections.
#[derive(Debug)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    /// Open the backing store at the fixed default path, or at the
    /// `MOVIE_CATALOG_DB` override from the environment / `.env`.
    pub fn open_default() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        let path = env::var("MOVIE_CATALOG_DB").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
        Self::open(&path)
    }

    /// Open (creating if absent) the database file at `database_path` and
    /// ensure the schema exists. Schema-creation failure is fatal here.
    pub fn open(database_path: &str) -> AppResult<Self> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_path);

        let pool = r2d2::Pool::builder()
            .max_size(8)
            .connection_timeout(Duration::from_secs(10))
            .build(manager)
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to create connection pool: {}", e))
            })?;

        let db = Self { pool };
        db.ensure_schema()?;

        log_info!(
            "Database opened at '{}' with pool max_size: {}",
            database_path,
            db.pool.max_size()
        );

        Ok(db)
    }

    fn ensure_schema(&self) -> AppResult<()> {
        let mut conn = self.get_connection()?;
        conn.batch_execute(SCHEMA_DDL)
            .map_err(|e| AppError::DatabaseError(format!("Schema creation failed: {}", e)))?;
        log_debug!("Schema ensured (create-if-absent)");
        Ok(())
    }

    pub fn get_connection(&self) -> AppResult<DbConnection> {
        match self.pool.get() {
            Ok(conn) => Ok(conn),
            Err(e) => {
                LogContext::error_with_context(
                    &e,
                    "Failed to acquire database connection from pool",
                );
                Err(AppError::from(e))
            }
        }
    }

    /// Execute an arbitrary data-manipulation statement and return the
    /// number of affected rows.
    ///
    /// Pass-through by contract: no parameterization or validation happens
    /// here, and any failure propagates unmodified. Callers own statement
    /// correctness.
    pub fn execute_sql(&self, statement: &str) -> AppResult<usize> {
        let mut conn = self.get_connection()?;
        LogContext::db_operation("execute_sql", "raw", None);
        let affected = diesel::sql_query(statement).execute(&mut conn)?;
        Ok(affected)
    }

    /// Current cardinality of one of the owned sets.
    pub fn row_count(&self, set: TableSet) -> AppResult<i64> {
        let mut conn = self.get_connection()?;
        let count = match set {
            TableSet::Movies => movies::table.count().get_result(&mut conn)?,
            TableSet::People => people::table.count().get_result(&mut conn)?,
            TableSet::Tags => tags::table.count().get_result(&mut conn)?,
            TableSet::ActorsMovies => actors_movies::table.count().get_result(&mut conn)?,
            TableSet::DirectorsMovies => directors_movies::table.count().get_result(&mut conn)?,
            TableSet::TagsMovies => tags_movies::table.count().get_result(&mut conn)?,
        };
        log_debug!("Row count for {}: {}", set.name(), count);
        Ok(count)
    }

    /// Release the context. Safe to call with no prior operations; dropping
    /// the value has the same effect.
    pub fn close(self) {
        log_debug!("Database closed");
    }

    /// Get the underlying connection pool (useful for testing)
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}
