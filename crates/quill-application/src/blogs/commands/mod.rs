//! State-changing blog requests

mod create_blog;
mod delete_blog;
mod update_blog;

pub use create_blog::{CreateBlogCommand, CreateBlogCommandValidator, CreateBlogHandler};
pub use delete_blog::{DeleteBlogCommand, DeleteBlogHandler};
pub use update_blog::{UpdateBlogCommand, UpdateBlogCommandValidator, UpdateBlogHandler};

use quill_domain::entities::{AUTHOR_MAX_LENGTH, NAME_MAX_LENGTH};

use crate::validation::{ValidationContext, ValidationFailure};

/// Field rules shared by create and update
fn blog_field_rules(name: &str, description: &str, author: &str) -> Vec<ValidationFailure> {
    let name_too_long = format!("Name must not exceed {NAME_MAX_LENGTH} characters");
    let author_too_long = format!("Author must not exceed {AUTHOR_MAX_LENGTH} characters");

    let mut ctx = ValidationContext::new();
    ctx.rule_for("name", name)
        .not_empty("Name is required")
        .max_length(NAME_MAX_LENGTH, &name_too_long);
    ctx.rule_for("description", description)
        .not_empty("Description is required");
    ctx.rule_for("author", author)
        .not_empty("Author is required")
        .max_length(AUTHOR_MAX_LENGTH, &author_too_long);
    ctx.finish()
}
