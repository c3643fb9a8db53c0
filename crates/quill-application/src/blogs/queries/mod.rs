//! Read-only blog requests

mod get_blog_by_id;
mod get_blogs;

pub use get_blog_by_id::{GetBlogByIdHandler, GetBlogByIdQuery};
pub use get_blogs::{GetBlogsHandler, GetBlogsQuery};
