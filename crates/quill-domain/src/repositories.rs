//! Repository interfaces for data persistence
//!
//! Infrastructure crates implement these traits; the domain layer only
//! defines the contract.

use async_trait::async_trait;

use crate::{
    entities::{Blog, NewBlog},
    errors::DomainResult,
    value_objects::BlogId,
};

/// CRUD access to stored blogs
///
/// Every method is a single atomic statement against storage. Returned
/// entities are detached copies; mutating them has no effect on storage.
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Insert a new row and return it with its storage-assigned id
    async fn create(&self, blog: NewBlog) -> DomainResult<Blog>;

    /// Find the row with the given id
    async fn get_by_id(&self, id: BlogId) -> DomainResult<Option<Blog>>;

    /// All rows in storage order
    async fn get_all(&self) -> DomainResult<Vec<Blog>>;

    /// Replace every field of the row matching `id`; returns affected rows (0 or 1)
    async fn update(&self, id: BlogId, blog: &Blog) -> DomainResult<u64>;

    /// Remove the row matching `id`; returns affected rows (0 or 1)
    async fn delete(&self, id: BlogId) -> DomainResult<u64>;
}
