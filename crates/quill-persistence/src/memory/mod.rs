//! In-Memory Repository Implementations
//!
//! Thread-safe in-memory implementations of domain repository interfaces.
//! Suitable for testing and development.

mod blog_repository;

pub use blog_repository::InMemoryBlogRepository;
