//! Application wiring
//!
//! Registers every blog handler and validator with a [`Mediator`] and
//! requires all five request types, so an incomplete registry fails at
//! startup.

use crate::blogs::commands::{
    CreateBlogCommand, CreateBlogCommandValidator, CreateBlogHandler, DeleteBlogCommand,
    DeleteBlogHandler, UpdateBlogCommand, UpdateBlogCommandValidator, UpdateBlogHandler,
};
use crate::blogs::queries::{GetBlogByIdHandler, GetBlogByIdQuery, GetBlogsHandler, GetBlogsQuery};
use crate::blogs::SharedBlogRepository;
use crate::mediator::{Mediator, MediatorBuilder, MediatorError};

/// Add the blog handlers and validators to `builder`
pub fn register_blog_requests(
    builder: MediatorBuilder,
    repository: SharedBlogRepository,
) -> MediatorBuilder {
    builder
        .register_handler::<CreateBlogCommand, _>(CreateBlogHandler::new(repository.clone()))
        .register_handler::<UpdateBlogCommand, _>(UpdateBlogHandler::new(repository.clone()))
        .register_handler::<DeleteBlogCommand, _>(DeleteBlogHandler::new(repository.clone()))
        .register_handler::<GetBlogByIdQuery, _>(GetBlogByIdHandler::new(repository.clone()))
        .register_handler::<GetBlogsQuery, _>(GetBlogsHandler::new(repository))
        .register_validator::<CreateBlogCommand, _>(CreateBlogCommandValidator)
        .register_validator::<UpdateBlogCommand, _>(UpdateBlogCommandValidator)
        .require::<CreateBlogCommand>()
        .require::<UpdateBlogCommand>()
        .require::<DeleteBlogCommand>()
        .require::<GetBlogByIdQuery>()
        .require::<GetBlogsQuery>()
}

/// Mediator with every blog request registered
pub fn blog_mediator(repository: SharedBlogRepository) -> Result<Mediator, MediatorError> {
    register_blog_requests(Mediator::builder(), repository).build()
}
