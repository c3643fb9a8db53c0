//! SQLite Repository Implementations
//!
//! Production persistence backed by a `sqlx` connection pool.

mod blog_repository;
mod connection;

pub use blog_repository::SqliteBlogRepository;
pub use connection::SqliteConnection;
