//! API request and response models

use quill_application::{BlogVm, CreateBlogCommand, UpdateBlogCommand};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Blog creation request
///
/// Missing or `null` fields deserialize as empty strings and are reported by
/// validation together with every other violated rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateBlogRequest {
    /// Blog name, at most 200 characters
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Blog description
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Author, at most 20 characters
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
}

impl From<CreateBlogRequest> for CreateBlogCommand {
    fn from(request: CreateBlogRequest) -> Self {
        CreateBlogCommand {
            name: request.name,
            description: request.description,
            author: request.author,
        }
    }
}

/// Blog replacement request
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateBlogRequest {
    /// Must equal the id in the path
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    /// Blog name, at most 200 characters
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Blog description
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Author, at most 20 characters
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
}

impl From<UpdateBlogRequest> for UpdateBlogCommand {
    fn from(request: UpdateBlogRequest) -> Self {
        UpdateBlogCommand {
            id: request.id,
            name: request.name,
            description: request.description,
            author: request.author,
        }
    }
}

/// Blog response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BlogResponse {
    /// Blog ID
    pub id: i64,
    /// Blog name
    pub name: String,
    /// Blog description
    pub description: String,
    /// Author
    pub author: String,
}

impl From<BlogVm> for BlogResponse {
    fn from(vm: BlogVm) -> Self {
        Self {
            id: vm.id,
            name: vm.name,
            description: vm.description,
            author: vm.author,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Version
    pub version: String,
    /// Uptime in seconds
    pub uptime: u64,
}

/// Error envelope returned by every failing endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorDetail,
}

/// Error details
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// One of `validation_error`, `bad_request`, `not_found`, `internal_error`
    #[serde(rename = "type")]
    pub error_type: String,
    /// Human-readable description
    pub message: String,
    /// Violated field rules, present only for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldError>>,
}

/// One violated field rule
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Rule message
    pub message: String,
}
