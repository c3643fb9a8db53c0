//! SQLite Blog Repository Implementation

use async_trait::async_trait;
use tracing::{debug, error};

use quill_domain::{
    entities::{Blog, NewBlog},
    errors::{DomainError, DomainResult},
    repositories::BlogRepository,
    value_objects::BlogId,
};

use super::connection::SqliteConnection;
use crate::error::PersistenceError;

const INSERT_BLOG: &str = "INSERT INTO Blog (Name, Description, Author) VALUES (?, ?, ?)";
const SELECT_BLOG_BY_ID: &str =
    "SELECT Id AS id, Name AS name, Description AS description, Author AS author FROM Blog WHERE Id = ?";
const SELECT_ALL_BLOGS: &str =
    "SELECT Id AS id, Name AS name, Description AS description, Author AS author FROM Blog ORDER BY Id";
const UPDATE_BLOG: &str = "UPDATE Blog SET Name = ?, Description = ?, Author = ? WHERE Id = ?";
const DELETE_BLOG: &str = "DELETE FROM Blog WHERE Id = ?";

/// Row shape of the `Blog` table
#[derive(Debug, sqlx::FromRow)]
struct BlogRecord {
    id: i64,
    name: String,
    description: String,
    author: String,
}

impl From<BlogRecord> for Blog {
    fn from(record: BlogRecord) -> Self {
        Blog::new(
            BlogId::new(record.id),
            record.name,
            record.description,
            record.author,
        )
    }
}

/// Helper to convert sqlx errors to DomainError
fn to_domain_error(e: sqlx::Error) -> DomainError {
    error!("SQLite operation failed: {}", e);
    PersistenceError::from(e).into()
}

/// SQLite implementation of BlogRepository
///
/// Each method is one statement; SQLite's statement atomicity is the only
/// consistency mechanism.
#[derive(Debug, Clone)]
pub struct SqliteBlogRepository {
    connection: SqliteConnection,
}

impl SqliteBlogRepository {
    pub fn new(connection: SqliteConnection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl BlogRepository for SqliteBlogRepository {
    async fn create(&self, blog: NewBlog) -> DomainResult<Blog> {
        let result = sqlx::query(INSERT_BLOG)
            .bind(blog.name.as_str())
            .bind(blog.description.as_str())
            .bind(blog.author.as_str())
            .execute(self.connection.pool())
            .await
            .map_err(to_domain_error)?;

        let id = BlogId::new(result.last_insert_rowid());
        debug!(blog_id = %id, "Inserted blog");
        Ok(Blog::from_new(id, blog))
    }

    async fn get_by_id(&self, id: BlogId) -> DomainResult<Option<Blog>> {
        debug!(blog_id = %id, "Finding blog by id");

        let record: Option<BlogRecord> = sqlx::query_as(SELECT_BLOG_BY_ID)
            .bind(id.value())
            .fetch_optional(self.connection.pool())
            .await
            .map_err(to_domain_error)?;

        Ok(record.map(Blog::from))
    }

    async fn get_all(&self) -> DomainResult<Vec<Blog>> {
        let records: Vec<BlogRecord> = sqlx::query_as(SELECT_ALL_BLOGS)
            .fetch_all(self.connection.pool())
            .await
            .map_err(to_domain_error)?;

        Ok(records.into_iter().map(Blog::from).collect())
    }

    async fn update(&self, id: BlogId, blog: &Blog) -> DomainResult<u64> {
        let result = sqlx::query(UPDATE_BLOG)
            .bind(blog.name.as_str())
            .bind(blog.description.as_str())
            .bind(blog.author.as_str())
            .bind(id.value())
            .execute(self.connection.pool())
            .await
            .map_err(to_domain_error)?;

        debug!(blog_id = %id, rows = result.rows_affected(), "Updated blog");
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: BlogId) -> DomainResult<u64> {
        let result = sqlx::query(DELETE_BLOG)
            .bind(id.value())
            .execute(self.connection.pool())
            .await
            .map_err(to_domain_error)?;

        debug!(blog_id = %id, rows = result.rows_affected(), "Deleted blog");
        Ok(result.rows_affected())
    }
}
