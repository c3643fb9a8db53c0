#![warn(missing_docs)]

//! Quill RESTful API
//!
//! Exposes the blog commands and queries over HTTP. Every endpoint builds a
//! request object, dispatches it through the shared
//! [`Mediator`](quill_application::Mediator) and maps the outcome onto a
//! status code and JSON body.

pub mod bootstrap;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;

pub use routes::create_router;
pub use server::ApiServer;
pub use state::AppState;
