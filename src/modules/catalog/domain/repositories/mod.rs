pub mod movie_repository;
pub mod person_repository;
pub mod tag_repository;

pub use movie_repository::MovieRepository;
pub use person_repository::PersonRepository;
pub use tag_repository::TagRepository;
