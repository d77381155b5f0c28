//! Translation cache management using `SQLite`.

mod sqlite;

pub use sqlite::CacheManager;
