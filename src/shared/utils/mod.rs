pub mod logger;
pub mod text;

pub use text::truncate_chars;
