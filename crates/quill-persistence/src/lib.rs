//! Quill Persistence Layer
//!
//! Infrastructure layer providing [`BlogRepository`] implementations.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Infrastructure Layer                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  memory/                    │  sqlite/                           │
//! │  ─────────                  │  ────────                          │
//! │  InMemoryBlogRepository     │  SqliteConnection                  │
//! │                             │  SqliteBlogRepository              │
//! └─────────────────────────────────────────────────────────────────┘
//!                              ▲
//!                              │ implements
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       Domain Layer                               │
//! │                      BlogRepository                              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### In-Memory (Testing/Development)
//!
//! ```ignore
//! use quill_persistence::InMemoryBlogRepository;
//! use quill_domain::BlogRepository;
//! use std::sync::Arc;
//!
//! let repo: Arc<dyn BlogRepository> = Arc::new(InMemoryBlogRepository::new());
//! ```
//!
//! ### SQLite (Production)
//!
//! ```ignore
//! use quill_persistence::sqlite::{SqliteConnection, SqliteBlogRepository};
//!
//! let conn = SqliteConnection::connect("sqlite://quill.db", 5).await?;
//! conn.migrate().await?;
//! let repo: Arc<dyn BlogRepository> = Arc::new(SqliteBlogRepository::new(conn));
//! ```
//!
//! [`BlogRepository`]: quill_domain::BlogRepository

pub mod error;
#[cfg(feature = "memory")]
pub mod memory;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use error::PersistenceError;

#[cfg(feature = "memory")]
pub use memory::InMemoryBlogRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::{SqliteBlogRepository, SqliteConnection};
