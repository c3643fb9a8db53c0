//! Blog entity

use serde::{Deserialize, Serialize};

use crate::value_objects::BlogId;

/// Maximum number of characters in a blog name
pub const NAME_MAX_LENGTH: usize = 200;

/// Maximum number of characters in a blog author
pub const AUTHOR_MAX_LENGTH: usize = 20;

/// A persisted blog row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub id: BlogId,
    pub name: String,
    pub description: String,
    pub author: String,
}

impl Blog {
    /// Build a blog with a known identity
    pub fn new(
        id: BlogId,
        name: impl Into<String>,
        description: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            author: author.into(),
        }
    }

    /// Attach a storage-assigned id to unsaved fields
    pub fn from_new(id: BlogId, blog: NewBlog) -> Self {
        Self {
            id,
            name: blog.name,
            description: blog.description,
            author: blog.author,
        }
    }
}

/// Blog fields prior to insertion; storage assigns the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBlog {
    pub name: String,
    pub description: String,
    pub author: String,
}

impl NewBlog {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            author: author.into(),
        }
    }
}
