//! Request validation
//!
//! Validators declare field rules for one request type. The [`pipeline`]
//! runs every validator registered for a request and aggregates all
//! failures before the handler is allowed to run.

pub mod pipeline;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use pipeline::ValidationPipeline;

/// A single violated rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    pub field: String,
    pub message: String,
}

impl ValidationFailure {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every rule violated by one request, in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationErrors {
    failures: Vec<ValidationFailure>,
}

impl ValidationErrors {
    pub fn new(failures: Vec<ValidationFailure>) -> Self {
        Self { failures }
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(vec![ValidationFailure::new(field, message)])
    }

    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Whether any failure concerns `field`
    pub fn has_field(&self, field: &str) -> bool {
        self.failures.iter().any(|f| f.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .failures
            .iter()
            .map(ValidationFailure::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

/// Field rules for one request type
pub trait Validator<R>: Send + Sync {
    /// Evaluate every rule and return all failures (empty when valid)
    fn validate(&self, request: &R) -> Vec<ValidationFailure>;
}

/// Collects failures while rules are declared
#[derive(Debug, Default)]
pub struct ValidationContext {
    failures: Vec<ValidationFailure>,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a rule chain for a string field
    pub fn rule_for<'a>(&'a mut self, field: &'static str, value: &'a str) -> FieldRules<'a> {
        FieldRules {
            context: self,
            field,
            value,
        }
    }

    pub fn finish(self) -> Vec<ValidationFailure> {
        self.failures
    }
}

/// Rule chain for one field; every rule in the chain is evaluated
pub struct FieldRules<'a> {
    context: &'a mut ValidationContext,
    field: &'static str,
    value: &'a str,
}

impl<'a> FieldRules<'a> {
    /// Fails on empty or whitespace-only values
    pub fn not_empty(self, message: &str) -> Self {
        if self.value.trim().is_empty() {
            self.fail(message)
        } else {
            self
        }
    }

    /// Fails when the value has more than `max` characters
    pub fn max_length(self, max: usize, message: &str) -> Self {
        if self.value.chars().count() > max {
            self.fail(message)
        } else {
            self
        }
    }

    fn fail(self, message: &str) -> Self {
        self.context
            .failures
            .push(ValidationFailure::new(self.field, message));
        self
    }
}
