pub mod modules;
pub mod schema;
pub mod shared;

pub use modules::catalog::domain::entities::{Movie, Person, Tag, Title};
pub use modules::catalog::domain::repositories::{
    MovieRepository, PersonRepository, TagRepository,
};
pub use modules::catalog::infrastructure::persistence::{
    MovieRepositoryImpl, PersonRepositoryImpl, TagRepositoryImpl,
};
pub use modules::catalog::infrastructure::{MovieQuery, PersonQuery};
pub use shared::application::pagination::{PageQuery, Pagination, PAGE_SIZE};
pub use shared::database::{Database, TableSet};
pub use shared::domain::WithNumericalId;
pub use shared::errors::{AppError, AppResult};
