//! API route handlers

pub mod blog;
pub mod health;
