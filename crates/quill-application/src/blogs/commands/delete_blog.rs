use async_trait::async_trait;
use tracing::info;

use quill_domain::value_objects::BlogId;

use crate::blogs::SharedBlogRepository;
use crate::errors::ApplicationResult;
use crate::mediator::{Request, RequestHandler};

/// Remove a blog; responds with the number of affected rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteBlogCommand {
    pub id: i64,
}

impl Request for DeleteBlogCommand {
    type Response = u64;
}

pub struct DeleteBlogHandler {
    repository: SharedBlogRepository,
}

impl DeleteBlogHandler {
    pub fn new(repository: SharedBlogRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RequestHandler<DeleteBlogCommand> for DeleteBlogHandler {
    async fn handle(&self, request: DeleteBlogCommand) -> ApplicationResult<u64> {
        let id = BlogId::new(request.id);
        let affected = self.repository.delete(id).await?;

        info!(blog_id = %id, affected, "Blog deleted");
        Ok(affected)
    }
}
