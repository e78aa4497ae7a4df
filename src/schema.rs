diesel::table! {
    movies (movie_id) {
        movie_id -> Integer,
        numerical_id -> Integer,
        primary_title -> Text,
        rating -> Float,
    }
}

diesel::table! {
    people (person_id) {
        person_id -> Integer,
        numerical_id -> Integer,
        primary_name -> Text,
    }
}

diesel::table! {
    tags (tag_id) {
        tag_id -> Integer,
        name -> Text,
    }
}

diesel::table! {
    actors_movies (actors_movies_link_id) {
        actors_movies_link_id -> Integer,
        actor_id -> Integer,
        movie_id -> Integer,
    }
}

diesel::table! {
    directors_movies (directors_movies_link_id) {
        directors_movies_link_id -> Integer,
        director_id -> Integer,
        movie_id -> Integer,
    }
}

diesel::table! {
    tags_movies (tags_movies_id) {
        tags_movies_id -> Integer,
        tag_id -> Integer,
        movie_id -> Integer,
    }
}

diesel::joinable!(actors_movies -> movies (movie_id));
diesel::joinable!(actors_movies -> people (actor_id));
diesel::joinable!(directors_movies -> movies (movie_id));
diesel::joinable!(directors_movies -> people (director_id));
diesel::joinable!(tags_movies -> movies (movie_id));
diesel::joinable!(tags_movies -> tags (tag_id));

diesel::allow_tables_to_appear_in_same_query!(
    movies,
    people,
    tags,
    actors_movies,
    directors_movies,
    tags_movies,
);
