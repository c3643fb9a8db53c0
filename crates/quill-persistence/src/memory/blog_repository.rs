//! In-Memory Blog Repository Implementation

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use quill_domain::{
    entities::{Blog, NewBlog},
    errors::DomainResult,
    repositories::BlogRepository,
    value_objects::BlogId,
};

#[derive(Debug, Default)]
struct Store {
    blogs: BTreeMap<BlogId, Blog>,
    last_id: i64,
}

/// Thread-safe in-memory implementation of BlogRepository
///
/// Ids are assigned from a counter that never goes backwards, so an id is
/// not reused after its blog is deleted. `get_all` returns blogs in
/// ascending id order.
///
/// # Example
///
/// ```ignore
/// use quill_persistence::memory::InMemoryBlogRepository;
/// use std::sync::Arc;
///
/// let repo = Arc::new(InMemoryBlogRepository::new());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryBlogRepository {
    store: RwLock<Store>,
}

impl InMemoryBlogRepository {
    /// Create a new empty in-memory blog repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count of blogs (for testing)
    pub fn count(&self) -> usize {
        self.store.read().blogs.len()
    }

    /// Remove all blogs; the id counter keeps its value
    pub fn clear(&self) {
        self.store.write().blogs.clear();
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn create(&self, blog: NewBlog) -> DomainResult<Blog> {
        let mut store = self.store.write();
        store.last_id += 1;
        let created = Blog::from_new(BlogId::new(store.last_id), blog);
        store.blogs.insert(created.id, created.clone());

        debug!(blog_id = %created.id, "Inserted blog into memory store");
        Ok(created)
    }

    async fn get_by_id(&self, id: BlogId) -> DomainResult<Option<Blog>> {
        Ok(self.store.read().blogs.get(&id).cloned())
    }

    async fn get_all(&self) -> DomainResult<Vec<Blog>> {
        Ok(self.store.read().blogs.values().cloned().collect())
    }

    async fn update(&self, id: BlogId, blog: &Blog) -> DomainResult<u64> {
        let mut store = self.store.write();
        let Some(existing) = store.blogs.get_mut(&id) else {
            return Ok(0);
        };

        existing.name.clone_from(&blog.name);
        existing.description.clone_from(&blog.description);
        existing.author.clone_from(&blog.author);
        Ok(1)
    }

    async fn delete(&self, id: BlogId) -> DomainResult<u64> {
        let removed = self.store.write().blogs.remove(&id);
        Ok(u64::from(removed.is_some()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_blog(name: &str) -> NewBlog {
        NewBlog::new(name, "description", "author")
    }

    #[tokio::test]
    async fn test_create_and_get_by_id() {
        let repo = InMemoryBlogRepository::new();
        let created = repo.create(new_blog("first")).await.unwrap();

        let found = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let repo = InMemoryBlogRepository::new();
        assert!(repo.get_by_id(BlogId::new(9999)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryBlogRepository::new();
        let first = repo.create(new_blog("a")).await.unwrap();
        repo.delete(first.id).await.unwrap();

        let second = repo.create(new_blog("b")).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_update_keeps_identity() {
        let repo = InMemoryBlogRepository::new();
        let created = repo.create(new_blog("before")).await.unwrap();
        let replacement = Blog::new(created.id, "after", "d2", "a2");

        assert_eq!(repo.update(created.id, &replacement).await.unwrap(), 1);
        assert_eq!(repo.get_by_id(created.id).await.unwrap(), Some(replacement));
    }

    #[tokio::test]
    async fn test_returned_copies_are_detached() {
        let repo = InMemoryBlogRepository::new();
        let created = repo.create(new_blog("original")).await.unwrap();

        let mut copy = repo.get_by_id(created.id).await.unwrap().unwrap();
        copy.name = "mutated".into();

        let stored = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "original");
    }

    #[tokio::test]
    async fn test_count_and_clear() {
        let repo = InMemoryBlogRepository::new();
        repo.create(new_blog("p1")).await.unwrap();
        repo.create(new_blog("p2")).await.unwrap();
        assert_eq!(repo.count(), 2);

        repo.clear();
        assert_eq!(repo.count(), 0);
    }
}
