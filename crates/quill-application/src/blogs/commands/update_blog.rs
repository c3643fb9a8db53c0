use async_trait::async_trait;
use tracing::info;

use quill_domain::entities::Blog;
use quill_domain::value_objects::BlogId;

use crate::blogs::SharedBlogRepository;
use crate::errors::ApplicationResult;
use crate::mediator::{Request, RequestHandler};
use crate::validation::{ValidationFailure, Validator};

/// Replace every field of an existing blog
///
/// Responds with the number of affected rows (0 when the id is unknown).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateBlogCommand {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub author: String,
}

impl Request for UpdateBlogCommand {
    type Response = u64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UpdateBlogCommandValidator;

impl Validator<UpdateBlogCommand> for UpdateBlogCommandValidator {
    fn validate(&self, request: &UpdateBlogCommand) -> Vec<ValidationFailure> {
        super::blog_field_rules(&request.name, &request.description, &request.author)
    }
}

pub struct UpdateBlogHandler {
    repository: SharedBlogRepository,
}

impl UpdateBlogHandler {
    pub fn new(repository: SharedBlogRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RequestHandler<UpdateBlogCommand> for UpdateBlogHandler {
    async fn handle(&self, request: UpdateBlogCommand) -> ApplicationResult<u64> {
        let id = BlogId::new(request.id);
        let replacement = Blog::new(id, request.name, request.description, request.author);

        let affected = self.repository.update(id, &replacement).await?;
        info!(blog_id = %id, affected, "Blog updated");
        Ok(affected)
    }
}
