use std::sync::Arc;

use movie_catalog::{Database, Movie, MovieRepository, MovieRepositoryImpl};

/// Insert `count` movies with dense numerical ids `0..count` and sparse
/// stable ids (`1000 + 7*i`), the way an external-dataset import would.
#[allow(dead_code)]
pub async fn seed_movies(db: &Arc<Database>, count: i32) -> Vec<Movie> {
    let repo = MovieRepositoryImpl::new(Arc::clone(db));
    let mut stored = Vec::with_capacity(count as usize);

    for i in 0..count {
        let movie = Movie::new(1000 + 7 * i, i, &format!("Movie #{}", i), (i % 10) as f32);
        stored.push(repo.insert(&movie).await.expect("seed movie insert"));
    }

    stored
}
