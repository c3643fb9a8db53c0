//! Quill Application Layer
//!
//! Implements the blog use cases as CQRS requests. Every command and query is
//! a plain struct implementing [`mediator::Request`]; exactly one
//! [`mediator::RequestHandler`] is registered for it, and the [`Mediator`]
//! runs the validation pipeline before handing the request over.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                       Application Layer                         │
//! ├────────────────────────────────────────────────────────────────┤
//! │  Commands           │ Queries            │ Cross-cutting        │
//! │  ────────           │ ───────            │ ─────────────        │
//! │  CreateBlogCommand  │ GetBlogByIdQuery   │ Mediator             │
//! │  UpdateBlogCommand  │ GetBlogsQuery      │ ValidationPipeline   │
//! │  DeleteBlogCommand  │                    │ BlogVm mapping       │
//! └────────────────────────────────────────────────────────────────┘
//!                              ▲
//!                              │ depends on
//!                              ▼
//! ┌────────────────────────────────────────────────────────────────┐
//! │                          Domain Layer                           │
//! │             Blog, BlogId, BlogRepository, DomainError           │
//! └────────────────────────────────────────────────────────────────┘
//! ```

pub mod blogs;
pub mod di;
pub mod dto;
pub mod errors;
pub mod mediator;
pub mod validation;

pub use blogs::commands::{
    CreateBlogCommand, CreateBlogCommandValidator, CreateBlogHandler, DeleteBlogCommand,
    DeleteBlogHandler, UpdateBlogCommand, UpdateBlogCommandValidator, UpdateBlogHandler,
};
pub use blogs::queries::{GetBlogByIdHandler, GetBlogByIdQuery, GetBlogsHandler, GetBlogsQuery};
pub use di::blog_mediator;
pub use dto::BlogVm;
pub use errors::{ApplicationError, ApplicationResult};
pub use mediator::{Mediator, MediatorBuilder, MediatorError, Request, RequestHandler};
pub use validation::{ValidationErrors, ValidationFailure, Validator};
