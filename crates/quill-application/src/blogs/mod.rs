//! Blog use cases
//!
//! Commands change state, queries read it. Each request type has exactly one
//! handler, which talks to storage only through [`BlogRepository`].
//!
//! [`BlogRepository`]: quill_domain::repositories::BlogRepository

pub mod commands;
pub mod queries;

use std::sync::Arc;

use quill_domain::repositories::BlogRepository;

/// Repository handle shared by every blog handler
pub type SharedBlogRepository = Arc<dyn BlogRepository>;
