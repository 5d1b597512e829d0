//! User-supplied handlers
//!
//! A handler is the callback a caller passes into a use-case for one call
//! (`on_click`, `on_change`, ...). It may complete synchronously or
//! asynchronously, and it may fail. Use-cases await it exactly once and never
//! store it.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use thiserror::Error;

/// Failure reported by a user handler
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallbackError {
    /// The handler failed with a message
    #[error("{0}")]
    Failed(String),

    /// The handler failed without anything usable as a message
    #[error("handler failed without a message")]
    Opaque,
}

impl CallbackError {
    /// Build from any error value, keeping its display text
    pub fn from_error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        CallbackError::Failed(err.to_string())
    }

    /// The message to surface, with `fallback` standing in for opaque failures
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            CallbackError::Failed(message) => message.clone(),
            CallbackError::Opaque => fallback.to_string(),
        }
    }
}

impl From<&str> for CallbackError {
    fn from(message: &str) -> Self {
        CallbackError::Failed(message.to_string())
    }
}

impl From<String> for CallbackError {
    fn from(message: String) -> Self {
        CallbackError::Failed(message)
    }
}

/// Future returned by a handler invocation
pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<(), CallbackError>> + Send + 'static>>;

/// A shareable user callback taking an argument of type `A`
pub struct Handler<A> {
    inner: Arc<dyn Fn(A) -> HandlerFuture + Send + Sync>,
}

impl<A> Handler<A> {
    /// Start the handler; the returned future completes once
    pub fn call(&self, arg: A) -> HandlerFuture {
        (self.inner)(arg)
    }
}

impl<A> Clone for Handler<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A> fmt::Debug for Handler<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

/// Create a handler from an async closure
///
/// # Example
///
/// ```rust
/// use plinth_core::{handler, CallbackError};
///
/// let on_change = handler(|value: String| async move {
///     if value.is_empty() {
///         return Err(CallbackError::from("empty"));
///     }
///     Ok(())
/// });
/// assert!(pollster::block_on(on_change.call("hi".into())).is_ok());
/// ```
pub fn handler<A, F, Fut>(f: F) -> Handler<A>
where
    A: 'static,
    F: Fn(A) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), CallbackError>> + Send + 'static,
{
    Handler {
        inner: Arc::new(move |arg| Box::pin(f(arg)) as HandlerFuture),
    }
}

/// Create a handler from a synchronous closure
pub fn handler_fn<A, F>(f: F) -> Handler<A>
where
    A: 'static,
    F: Fn(A) -> Result<(), CallbackError> + Send + Sync + 'static,
{
    Handler {
        inner: Arc::new(move |arg| Box::pin(std::future::ready(f(arg))) as HandlerFuture),
    }
}

/// Await an optional handler; a missing handler succeeds immediately
pub async fn invoke<A>(handler: Option<&Handler<A>>, arg: A) -> Result<(), CallbackError> {
    match handler {
        Some(handler) => handler.call(arg).await,
        None => Ok(()),
    }
}
