//! Request dispatch
//!
//! The [`Mediator`] maps each request type to exactly one handler. The map is
//! filled through [`MediatorBuilder`] at process start; missing or duplicate
//! registrations fail in [`MediatorBuilder::build`], never at request time.
//!
//! # Example
//!
//! ```ignore
//! let mediator = Mediator::builder()
//!     .register_handler::<GetBlogsQuery, _>(GetBlogsHandler::new(repository))
//!     .require::<GetBlogsQuery>()
//!     .build()?;
//!
//! let blogs = mediator.send(GetBlogsQuery).await?;
//! ```

mod error;

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::errors::ApplicationResult;
use crate::validation::{ValidationPipeline, Validator};

pub use error::MediatorError;

/// A command or query with a single response type
pub trait Request: Send + 'static {
    type Response: Send + 'static;
}

/// The single piece of logic bound to one request type
#[async_trait]
pub trait RequestHandler<R: Request>: Send + Sync {
    async fn handle(&self, request: R) -> ApplicationResult<R::Response>;
}

type Entry = Box<dyn Any + Send + Sync>;

/// Collects handler and validator registrations
#[derive(Default)]
pub struct MediatorBuilder {
    /// `Arc<dyn RequestHandler<R>>` keyed by `TypeId::of::<R>()`
    handlers: HashMap<TypeId, Entry>,
    /// `ValidationPipeline<R>` keyed by `TypeId::of::<R>()`
    pipelines: HashMap<TypeId, Entry>,
    required: Vec<(TypeId, &'static str)>,
    errors: Vec<MediatorError>,
}

impl MediatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `handler` to request type `R`
    ///
    /// A second handler for the same type is recorded as an error and
    /// reported by [`build`](Self::build).
    pub fn register_handler<R, H>(mut self, handler: H) -> Self
    where
        R: Request,
        H: RequestHandler<R> + 'static,
    {
        let key = TypeId::of::<R>();
        if self.handlers.contains_key(&key) {
            self.errors
                .push(MediatorError::DuplicateHandler(type_name::<R>()));
            return self;
        }

        let handler: Arc<dyn RequestHandler<R>> = Arc::new(handler);
        self.handlers.insert(key, Box::new(handler));
        self
    }

    /// Add a validator to the pipeline of request type `R`
    pub fn register_validator<R, V>(mut self, validator: V) -> Self
    where
        R: Request,
        V: Validator<R> + 'static,
    {
        let entry = self
            .pipelines
            .entry(TypeId::of::<R>())
            .or_insert_with(|| Box::new(ValidationPipeline::<R>::new()));

        match entry.downcast_mut::<ValidationPipeline<R>>() {
            Some(pipeline) => pipeline.push(Arc::new(validator)),
            None => self.errors.push(MediatorError::TypeMismatch(type_name::<R>())),
        }
        self
    }

    /// Declare that request type `R` must have a handler
    pub fn require<R: Request>(mut self) -> Self {
        self.required.push((TypeId::of::<R>(), type_name::<R>()));
        self
    }

    /// Validate the registrations and freeze them into a [`Mediator`]
    pub fn build(self) -> Result<Mediator, MediatorError> {
        if let Some(err) = self.errors.into_iter().next() {
            return Err(err);
        }

        for (key, name) in &self.required {
            if !self.handlers.contains_key(key) {
                return Err(MediatorError::HandlerNotRegistered(name));
            }
        }

        debug!(
            handlers = self.handlers.len(),
            pipelines = self.pipelines.len(),
            "Mediator registry built"
        );

        Ok(Mediator {
            handlers: self.handlers,
            pipelines: self.pipelines,
        })
    }
}

/// Routes a typed request through its validation pipeline to its handler
pub struct Mediator {
    handlers: HashMap<TypeId, Entry>,
    pipelines: HashMap<TypeId, Entry>,
}

impl Mediator {
    pub fn builder() -> MediatorBuilder {
        MediatorBuilder::new()
    }

    /// Validate `request` and hand it to its handler
    pub async fn send<R: Request>(&self, request: R) -> ApplicationResult<R::Response> {
        let handler = self.handler::<R>()?;

        if let Some(pipeline) = self.pipeline::<R>()? {
            pipeline.run(&request)?;
        }

        debug!(request = type_name::<R>(), "Dispatching request");
        handler.handle(request).await
    }

    /// Whether a handler is registered for `R`
    pub fn has_handler<R: Request>(&self) -> bool {
        self.handlers.contains_key(&TypeId::of::<R>())
    }

    /// Number of validators registered for `R`
    pub fn validator_count<R: Request>(&self) -> usize {
        self.pipeline::<R>()
            .ok()
            .flatten()
            .map_or(0, ValidationPipeline::len)
    }

    fn handler<R: Request>(&self) -> Result<Arc<dyn RequestHandler<R>>, MediatorError> {
        self.handlers
            .get(&TypeId::of::<R>())
            .ok_or(MediatorError::HandlerNotRegistered(type_name::<R>()))?
            .downcast_ref::<Arc<dyn RequestHandler<R>>>()
            .cloned()
            .ok_or(MediatorError::TypeMismatch(type_name::<R>()))
    }

    fn pipeline<R: Request>(&self) -> Result<Option<&ValidationPipeline<R>>, MediatorError> {
        match self.pipelines.get(&TypeId::of::<R>()) {
            None => Ok(None),
            Some(entry) => entry
                .downcast_ref::<ValidationPipeline<R>>()
                .map(Some)
                .ok_or(MediatorError::TypeMismatch(type_name::<R>())),
        }
    }
}
