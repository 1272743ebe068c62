//! Middleware layer.
//!
//! A middleware is a plain function from handler to handler: it receives the
//! next link of the chain and returns a new handler that does something
//! before and/or after calling it.
//!
//! [`chain`] folds an ordered list of them around a terminal handler, once,
//! at startup. The list is written **outermost first**:
//!
//! ```text
//! chain(hello, &[request_id, logging, timing])
//!
//! request_id ─▶ logging ─▶ timing ─▶ hello
//!                                      │
//! request_id ◀─ logging ◀─ timing ◀────┘
//! ```
//!
//! Built in:
//! - [`request_id`]: attaches a fresh [`CorrelationId`](crate::CorrelationId)
//! - [`logging`]: logs the request URI
//! - [`timing`]: logs how long the rest of the chain took, in microseconds
//!
//! There is no recovery layer: a panic anywhere in the chain unwinds through
//! every link.

mod logging;
mod request_id;
mod timing;

pub use logging::logging;
pub use request_id::request_id;
pub use timing::timing;

use crate::handler::{BoxedHandler, Handler};

/// A handler-to-handler transformation.
pub type Middleware = fn(BoxedHandler) -> BoxedHandler;

/// Wraps `handler` in `middleware`, first entry outermost.
///
/// Composition itself has no side effects and cannot fail; everything the
/// middleware do happens when the returned handler is called.
pub fn chain(handler: impl Handler, middleware: &[Middleware]) -> BoxedHandler {
    middleware
        .iter()
        .rev()
        .fold(BoxedHandler::new(handler), |next, wrap| wrap(next))
}
