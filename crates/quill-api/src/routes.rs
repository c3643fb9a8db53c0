//! API route definitions

use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    handlers::{blog, health},
    middleware::logging_middleware,
    state::AppState,
};

/// API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Blogs
        .route("/api/blog", get(blog::get_blogs).post(blog::create_blog))
        .route(
            "/api/blog/{id}",
            get(blog::get_blog)
                .put(blog::update_blog)
                .delete(blog::delete_blog),
        )
}

/// Swagger UI routes
pub fn swagger_routes() -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

/// Complete application router with middleware and state applied
pub fn create_router(state: AppState) -> Router {
    api_routes()
        .merge(swagger_routes())
        .layer(middleware::from_fn(logging_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// OpenAPI document for the blog API
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        blog::get_blogs,
        blog::get_blog,
        blog::create_blog,
        blog::update_blog,
        blog::delete_blog,
    ),
    components(schemas(
        crate::models::CreateBlogRequest,
        crate::models::UpdateBlogRequest,
        crate::models::BlogResponse,
        crate::models::HealthResponse,
        crate::models::ErrorResponse,
        crate::models::ErrorDetail,
        crate::models::FieldError,
    )),
    info(
        title = "Quill API",
        version = "1.0.0",
        description = "CRUD API for blogs"
    )
)]
pub struct ApiDoc;
