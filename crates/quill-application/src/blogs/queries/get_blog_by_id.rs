use async_trait::async_trait;

use quill_domain::value_objects::BlogId;

use crate::blogs::SharedBlogRepository;
use crate::dto::BlogVm;
use crate::errors::{ApplicationError, ApplicationResult};
use crate::mediator::{Request, RequestHandler};

/// Fetch one blog; fails with `NotFound` when the id is unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetBlogByIdQuery {
    pub blog_id: i64,
}

impl Request for GetBlogByIdQuery {
    type Response = BlogVm;
}

pub struct GetBlogByIdHandler {
    repository: SharedBlogRepository,
}

impl GetBlogByIdHandler {
    pub fn new(repository: SharedBlogRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RequestHandler<GetBlogByIdQuery> for GetBlogByIdHandler {
    async fn handle(&self, request: GetBlogByIdQuery) -> ApplicationResult<BlogVm> {
        let blog = self
            .repository
            .get_by_id(BlogId::new(request.blog_id))
            .await?
            .ok_or_else(|| ApplicationError::blog_not_found(request.blog_id))?;

        Ok(BlogVm::from(blog))
    }
}
