pub mod movie;
pub mod person;
pub mod tag;
pub mod title;

pub use movie::Movie;
pub use person::Person;
pub use tag::Tag;
pub use title::Title;

/// Maximum stored length of names and alternate titles, in characters.
/// Longer input is silently truncated, never rejected.
pub const NAME_MAX_LEN: usize = 64;
