//! Validation pipeline run by the mediator before each handler

use std::sync::Arc;

use tracing::debug;

use super::{ValidationErrors, Validator};

/// All validators registered for request type `R`
pub struct ValidationPipeline<R> {
    validators: Vec<Arc<dyn Validator<R>>>,
}

impl<R> ValidationPipeline<R> {
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    pub fn push(&mut self, validator: Arc<dyn Validator<R>>) {
        self.validators.push(validator);
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Run every validator; fail with the aggregate of all violations
    pub fn run(&self, request: &R) -> Result<(), ValidationErrors> {
        let failures: Vec<_> = self
            .validators
            .iter()
            .flat_map(|validator| validator.validate(request))
            .collect();

        if failures.is_empty() {
            return Ok(());
        }

        debug!(
            request = std::any::type_name::<R>(),
            violations = failures.len(),
            "Request rejected by validation pipeline"
        );
        Err(ValidationErrors::new(failures))
    }
}

impl<R> Default for ValidationPipeline<R> {
    fn default() -> Self {
        Self::new()
    }
}
