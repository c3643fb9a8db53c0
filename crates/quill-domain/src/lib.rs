//! Quill Domain Layer
//!
//! Holds the `Blog` entity, its identifier, the storage constraints on its
//! fields and the repository contract that infrastructure crates implement.
//! The domain layer defines only interfaces for persistence, no concrete
//! storage code.

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod value_objects;

pub use entities::{Blog, NewBlog, AUTHOR_MAX_LENGTH, NAME_MAX_LENGTH};
pub use errors::{DomainError, DomainResult};
pub use repositories::BlogRepository;
pub use value_objects::BlogId;
