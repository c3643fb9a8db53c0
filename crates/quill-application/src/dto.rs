//! Data Transfer Objects (DTOs) for layer boundary crossing
//!
//! View models keep the domain entity out of API responses.

use serde::{Deserialize, Serialize};

use quill_domain::entities::Blog;

/// Read-only projection of a blog for API responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogVm {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub author: String,
}

impl BlogVm {
    /// Create from domain entity
    pub fn from_domain(blog: &Blog) -> Self {
        Self {
            id: blog.id.value(),
            name: blog.name.clone(),
            description: blog.description.clone(),
            author: blog.author.clone(),
        }
    }
}

impl From<Blog> for BlogVm {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id.value(),
            name: blog.name,
            description: blog.description,
            author: blog.author,
        }
    }
}
