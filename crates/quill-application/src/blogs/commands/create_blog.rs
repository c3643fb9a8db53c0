use async_trait::async_trait;
use tracing::info;

use quill_domain::entities::NewBlog;

use crate::blogs::SharedBlogRepository;
use crate::dto::BlogVm;
use crate::errors::ApplicationResult;
use crate::mediator::{Request, RequestHandler};
use crate::validation::{ValidationFailure, Validator};

/// Create a blog; storage assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBlogCommand {
    pub name: String,
    pub description: String,
    pub author: String,
}

impl Request for CreateBlogCommand {
    type Response = BlogVm;
}

/// Rules that must pass before [`CreateBlogCommand`] is handled
#[derive(Debug, Default, Clone, Copy)]
pub struct CreateBlogCommandValidator;

impl Validator<CreateBlogCommand> for CreateBlogCommandValidator {
    fn validate(&self, request: &CreateBlogCommand) -> Vec<ValidationFailure> {
        super::blog_field_rules(&request.name, &request.description, &request.author)
    }
}

pub struct CreateBlogHandler {
    repository: SharedBlogRepository,
}

impl CreateBlogHandler {
    pub fn new(repository: SharedBlogRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RequestHandler<CreateBlogCommand> for CreateBlogHandler {
    async fn handle(&self, request: CreateBlogCommand) -> ApplicationResult<BlogVm> {
        let blog = NewBlog::new(request.name, request.description, request.author);
        let created = self.repository.create(blog).await?;

        info!(blog_id = %created.id, "Blog created");
        Ok(BlogVm::from(created))
    }
}
