//! Plinth Core
//!
//! Foundational primitives shared by the Plinth component layers:
//!
//! - **Color**: RGBA color with resolution to CSS hex strings for view-models
//! - **Handlers**: user-supplied callbacks, sync or async, that may fail
//! - **Outcomes**: the result object returned by every use-case
//!
//! # Example
//!
//! ```rust
//! use plinth_core::{handler_fn, CallbackError, Outcome};
//!
//! let on_click = handler_fn(|()| Err(CallbackError::from("network down")));
//! let result = pollster::block_on(on_click.call(()));
//! assert_eq!(result.unwrap_err().message_or("Unknown error"), "network down");
//!
//! let outcome: Outcome<u32> = Outcome::success(7);
//! assert!(outcome.is_success());
//! ```

pub mod color;
pub mod handler;
pub mod outcome;

pub use color::Color;
pub use handler::{handler, handler_fn, invoke, CallbackError, Handler, HandlerFuture};
pub use outcome::Outcome;
