/// Repository tests: link-table round trips, role unions, truncation at the
/// storage boundary and id auto-generation.
mod utils;

use std::sync::Arc;

use diesel::prelude::*;
use movie_catalog::modules::catalog::infrastructure::models::ActorsMoviesLink;
use movie_catalog::schema::actors_movies;
use movie_catalog::{
    Movie, MovieRepository, MovieRepositoryImpl, Person, PersonRepository, PersonRepositoryImpl,
    Tag, TagRepository, TagRepositoryImpl,
};
use utils::db;

#[tokio::test]
async fn actor_movie_link_is_retrievable_from_both_sides() {
    let test_db = db::open_test_db();
    let movies = MovieRepositoryImpl::new(Arc::clone(&test_db.db));
    let people = PersonRepositoryImpl::new(Arc::clone(&test_db.db));

    let movie = movies
        .insert(&Movie::new(101, 0, "Ran", 8.2))
        .await
        .unwrap();
    let actor = people
        .insert(&Person::new(7, 0, "Tatsuya Nakadai"))
        .await
        .unwrap();

    movies.add_actor(movie.movie_id, actor.person_id).await.unwrap();

    let credited = movies.actors(movie.movie_id).await.unwrap();
    assert!(credited.iter().any(|p| p.person_id == actor.person_id));

    let filmography = people.movies_as_actor(actor.person_id).await.unwrap();
    assert!(filmography.iter().any(|m| m.movie_id == movie.movie_id));
}

#[tokio::test]
async fn director_and_tag_links_round_trip() {
    let test_db = db::open_test_db();
    let movies = MovieRepositoryImpl::new(Arc::clone(&test_db.db));
    let people = PersonRepositoryImpl::new(Arc::clone(&test_db.db));
    let tags = TagRepositoryImpl::new(Arc::clone(&test_db.db));

    let movie = movies
        .insert(&Movie::new(101, 0, "Ran", 8.2))
        .await
        .unwrap();
    let director = people
        .insert(&Person::new(3, 0, "Akira Kurosawa"))
        .await
        .unwrap();
    let tag = tags.insert(&Tag::new(1, "jidaigeki")).await.unwrap();

    movies
        .add_director(movie.movie_id, director.person_id)
        .await
        .unwrap();
    movies.add_tag(movie.movie_id, tag.tag_id).await.unwrap();

    let directors = movies.directors(movie.movie_id).await.unwrap();
    assert_eq!(directors.len(), 1);
    assert_eq!(directors[0].primary_name, "Akira Kurosawa");

    let directed = people.movies_as_director(director.person_id).await.unwrap();
    assert_eq!(directed.len(), 1);
    assert_eq!(directed[0].movie_id, movie.movie_id);

    let movie_tags = movies.tags(movie.movie_id).await.unwrap();
    assert_eq!(movie_tags.len(), 1);
    assert_eq!(movie_tags[0].name, "jidaigeki");

    assert_eq!(tags.movie_count(tag.tag_id).await.unwrap(), 1);
    let tagged = tags.movies(tag.tag_id).await.unwrap();
    assert_eq!(tagged.len(), 1);
    assert_eq!(tagged[0].movie_id, movie.movie_id);
}

#[tokio::test]
async fn cast_unions_roles_deduplicated_and_ordered_by_stable_id() {
    let test_db = db::open_test_db();
    let movies = MovieRepositoryImpl::new(Arc::clone(&test_db.db));
    let people = PersonRepositoryImpl::new(Arc::clone(&test_db.db));

    let movie = movies
        .insert(&Movie::new(55, 0, "Unforgiven", 8.2))
        .await
        .unwrap();
    // Stable ids out of insertion order.
    let hackman = people.insert(&Person::new(30, 0, "Gene Hackman")).await.unwrap();
    let eastwood = people.insert(&Person::new(10, 1, "Clint Eastwood")).await.unwrap();
    let freeman = people.insert(&Person::new(20, 2, "Morgan Freeman")).await.unwrap();

    // Eastwood both acts and directs; the union must list him once.
    movies.add_actor(movie.movie_id, eastwood.person_id).await.unwrap();
    movies.add_actor(movie.movie_id, hackman.person_id).await.unwrap();
    movies.add_actor(movie.movie_id, freeman.person_id).await.unwrap();
    movies.add_director(movie.movie_id, eastwood.person_id).await.unwrap();

    let cast = movies.cast(movie.movie_id).await.unwrap();
    let ids: Vec<i32> = cast.iter().map(|p| p.person_id).collect();
    assert_eq!(ids, vec![10, 20, 30]);

    let filmography = people.filmography(eastwood.person_id).await.unwrap();
    assert_eq!(filmography.len(), 1);
    assert_eq!(filmography[0].movie_id, movie.movie_id);
}

#[tokio::test]
async fn stored_names_are_truncated_to_64_chars() {
    let test_db = db::open_test_db();
    let people = PersonRepositoryImpl::new(Arc::clone(&test_db.db));
    let tags = TagRepositoryImpl::new(Arc::clone(&test_db.db));

    let long_name = "n".repeat(70);

    let person = people.insert(&Person::new(1, 0, &long_name)).await.unwrap();
    let reloaded = people.find_by_id(person.person_id).await.unwrap().unwrap();
    assert_eq!(reloaded.primary_name, "n".repeat(64));

    let tag = tags.insert(&Tag::new(1, &long_name)).await.unwrap();
    let reloaded = tags.find_by_id(tag.tag_id).await.unwrap().unwrap();
    assert_eq!(reloaded.name, "n".repeat(64));
}

#[tokio::test]
async fn non_positive_primary_id_is_auto_generated() {
    let test_db = db::open_test_db();
    let movies = MovieRepositoryImpl::new(Arc::clone(&test_db.db));
    let tags = TagRepositoryImpl::new(Arc::clone(&test_db.db));

    let stored = movies.insert(&Movie::new(0, 0, "Untitled", 0.0)).await.unwrap();
    assert!(stored.movie_id > 0);

    let tag = tags.insert(&Tag::new(0, "unsorted")).await.unwrap();
    assert!(tag.tag_id > 0);

    // Explicit sparse ids are stored verbatim.
    let explicit = movies.insert(&Movie::new(9999, 1, "Pinned", 0.0)).await.unwrap();
    assert_eq!(explicit.movie_id, 9999);
    assert_eq!(movies.find_by_id(9999).await.unwrap().unwrap().movie_id, 9999);
}

#[tokio::test]
async fn duplicate_links_are_not_prevented() {
    let test_db = db::open_test_db();
    let movies = MovieRepositoryImpl::new(Arc::clone(&test_db.db));
    let people = PersonRepositoryImpl::new(Arc::clone(&test_db.db));

    let movie = movies.insert(&Movie::new(1, 0, "Ran", 8.2)).await.unwrap();
    let actor = people.insert(&Person::new(7, 0, "Tatsuya Nakadai")).await.unwrap();

    movies.add_actor(movie.movie_id, actor.person_id).await.unwrap();
    movies.add_actor(movie.movie_id, actor.person_id).await.unwrap();

    // Two link rows with distinct generated surrogate keys.
    let mut conn = test_db.db.get_connection().unwrap();
    let links: Vec<ActorsMoviesLink> = actors_movies::table
        .select(ActorsMoviesLink::as_select())
        .load(&mut conn)
        .unwrap();
    assert_eq!(links.len(), 2);
    assert_ne!(
        links[0].actors_movies_link_id,
        links[1].actors_movies_link_id
    );

    // The join reflects both rows; nothing de-duplicates a repeated pair.
    let credited = movies.actors(movie.movie_id).await.unwrap();
    assert_eq!(credited.len(), 2);
}
