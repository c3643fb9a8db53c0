//! Blog API handlers

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use quill_application::{
    CreateBlogCommand, DeleteBlogCommand, GetBlogByIdQuery, GetBlogsQuery, UpdateBlogCommand,
};
use tracing::warn;

use crate::{
    error::{ApiError, ApiResult},
    extract::{ApiJson, ApiPath},
    models::{BlogResponse, CreateBlogRequest, ErrorResponse, UpdateBlogRequest},
    state::AppState,
};

/// Base path of the blog resource
pub const BLOG_PATH: &str = "/api/blog";

fn blog_not_found(id: i64) -> ApiError {
    ApiError::NotFound(format!("Blog with id {id} not found"))
}

/// List every blog
#[utoipa::path(
    get,
    path = "/api/blog",
    tag = "blog",
    responses(
        (status = 200, description = "All blogs", body = [BlogResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_blogs(State(state): State<AppState>) -> ApiResult<Json<Vec<BlogResponse>>> {
    let blogs = state.mediator.send(GetBlogsQuery).await?;
    Ok(Json(blogs.into_iter().map(BlogResponse::from).collect()))
}

/// Get one blog
#[utoipa::path(
    get,
    path = "/api/blog/{id}",
    tag = "blog",
    params(("id" = i64, Path, description = "Blog ID")),
    responses(
        (status = 200, description = "The blog", body = BlogResponse),
        (status = 400, description = "Id is not an integer", body = ErrorResponse),
        (status = 404, description = "Blog not found", body = ErrorResponse)
    )
)]
pub async fn get_blog(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<BlogResponse>> {
    let blog = state.mediator.send(GetBlogByIdQuery { blog_id: id }).await?;
    Ok(Json(blog.into()))
}

/// Create a blog
#[utoipa::path(
    post,
    path = "/api/blog",
    tag = "blog",
    request_body = CreateBlogRequest,
    responses(
        (status = 201, description = "Blog created", body = BlogResponse,
            headers(("Location" = String, description = "URL of the new blog"))),
        (status = 400, description = "Validation failed or malformed body", body = ErrorResponse)
    )
)]
pub async fn create_blog(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateBlogRequest>,
) -> ApiResult<impl IntoResponse> {
    let blog = state.mediator.send(CreateBlogCommand::from(request)).await?;
    let location = format!("{BLOG_PATH}/{}", blog.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(BlogResponse::from(blog)),
    ))
}

/// Replace a blog
#[utoipa::path(
    put,
    path = "/api/blog/{id}",
    tag = "blog",
    params(("id" = i64, Path, description = "Blog ID, must match the body id")),
    request_body = UpdateBlogRequest,
    responses(
        (status = 204, description = "Blog updated"),
        (status = 400, description = "Id mismatch, validation failure or malformed body", body = ErrorResponse),
        (status = 404, description = "Blog not found", body = ErrorResponse)
    )
)]
pub async fn update_blog(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(request): ApiJson<UpdateBlogRequest>,
) -> ApiResult<StatusCode> {
    if id != request.id {
        warn!(path_id = id, body_id = request.id, "Rejected update with mismatched ids");
        return Err(ApiError::BadRequest(format!(
            "Path id {id} does not match body id {}",
            request.id
        )));
    }

    let affected = state.mediator.send(UpdateBlogCommand::from(request)).await?;
    if affected == 0 {
        return Err(blog_not_found(id));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a blog
#[utoipa::path(
    delete,
    path = "/api/blog/{id}",
    tag = "blog",
    params(("id" = i64, Path, description = "Blog ID")),
    responses(
        (status = 204, description = "Blog deleted"),
        (status = 400, description = "Id is not an integer", body = ErrorResponse),
        (status = 404, description = "Blog not found", body = ErrorResponse)
    )
)]
pub async fn delete_blog(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<StatusCode> {
    let affected = state.mediator.send(DeleteBlogCommand { id }).await?;
    if affected == 0 {
        return Err(blog_not_found(id));
    }

    Ok(StatusCode::NO_CONTENT)
}
