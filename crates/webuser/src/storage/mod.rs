//! Storage backend implementations of `webuser_core::storage::UserRepository`.

pub mod sqlite;

pub use sqlite::SqliteRepository;
