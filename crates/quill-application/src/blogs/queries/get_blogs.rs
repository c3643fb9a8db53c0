use async_trait::async_trait;

use crate::blogs::SharedBlogRepository;
use crate::dto::BlogVm;
use crate::errors::ApplicationResult;
use crate::mediator::{Request, RequestHandler};

/// List every blog in storage order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetBlogsQuery;

impl Request for GetBlogsQuery {
    type Response = Vec<BlogVm>;
}

pub struct GetBlogsHandler {
    repository: SharedBlogRepository,
}

impl GetBlogsHandler {
    pub fn new(repository: SharedBlogRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RequestHandler<GetBlogsQuery> for GetBlogsHandler {
    async fn handle(&self, _request: GetBlogsQuery) -> ApplicationResult<Vec<BlogVm>> {
        let blogs = self.repository.get_all().await?;
        Ok(blogs.into_iter().map(BlogVm::from).collect())
    }
}
