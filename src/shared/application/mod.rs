pub mod pagination;

pub use pagination::{PageQuery, Pagination, PAGE_SIZE};
