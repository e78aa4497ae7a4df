/// Database test utilities
///
/// Each test gets its own database file in a temp directory, so tests stay
/// isolated and can run in parallel.
use std::sync::Arc;

use movie_catalog::Database;
use tempfile::TempDir;

pub struct TestDb {
    pub db: Arc<Database>,
    // Kept alive for the duration of the test; the file vanishes on drop.
    _dir: TempDir,
}

pub fn open_test_db() -> TestDb {
    let dir = tempfile::tempdir().expect("failed to create temp dir for test database");
    let path = dir.path().join("movies.db");
    let db = Database::open(path.to_str().expect("temp path is not utf-8"))
        .expect("failed to open test database");

    TestDb {
        db: Arc::new(db),
        _dir: dir,
    }
}
