//! Handler trait and type erasure.
//!
//! # How handlers are stored and wrapped
//!
//! Middleware needs a single handler type it can take in and hand back, no
//! matter what concrete function sits at the centre of the chain. That type
//! is [`BoxedHandler`]: a cheaply clonable, type-erased handler.
//!
//! ```text
//! async fn hello(req: Request) -> Response { … }   ← user writes this
//!        ↓ BoxedHandler::new(hello)
//! hello.into_boxed_handler()                       ← Handler blanket impl
//!        ↓
//! BoxedHandler(Arc::new(FnHandler(hello)))         ← heap-allocated wrapper
//!        ↓ middleware wraps it in a closure, boxes that again
//! handler.call(req)  at request time               ← one vtable dispatch per link
//! ```
//!
//! `BoxedHandler` itself implements [`Handler`], so a composed chain can be
//! registered anywhere a plain `async fn` can.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

// ── Internal types ────────────────────────────────────────────────────────────

/// A heap-allocated, type-erased future that resolves to a [`Response`].
///
/// `Send + 'static` let tokio move the future across threads safely.
pub type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// Internal dispatch interface.
trait ErasedHandler {
    fn call(&self, req: Request) -> BoxFuture;
}

/// A type-erased handler shared across concurrent requests.
///
/// Cloning is one atomic reference-count increment.
#[derive(Clone)]
pub struct BoxedHandler(Arc<dyn ErasedHandler + Send + Sync + 'static>);

impl BoxedHandler {
    pub fn new(handler: impl Handler) -> Self {
        handler.into_boxed_handler()
    }

    /// Invokes the handler.
    ///
    /// Any synchronous pre-logic of the wrapped middleware runs inside this
    /// call; the returned future runs the rest.
    pub fn call(&self, req: Request) -> BoxFuture {
        self.0.call(req)
    }
}

impl fmt::Debug for BoxedHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BoxedHandler")
    }
}

// ── Public Handler trait ──────────────────────────────────────────────────────

/// Implemented for every valid handler.
///
/// You never implement this yourself. It is satisfied by any `async fn` (or
/// closure) with the signature
///
/// ```text
/// async fn name(req: Request) -> impl IntoResponse
/// ```
///
/// and by [`BoxedHandler`]. The trait is sealed.
pub trait Handler: private::Sealed + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_handler(self) -> BoxedHandler;
}

mod private {
    pub trait Sealed {}
}

// ── Implementations ───────────────────────────────────────────────────────────

impl<F, Fut, R> private::Sealed for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
}

impl<F, Fut, R> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn into_boxed_handler(self) -> BoxedHandler {
        BoxedHandler(Arc::new(FnHandler(self)))
    }
}

impl private::Sealed for BoxedHandler {}

impl Handler for BoxedHandler {
    fn into_boxed_handler(self) -> BoxedHandler {
        self
    }
}

/// Newtype wrapper bridging a concrete handler `F` to [`ErasedHandler`].
struct FnHandler<F>(F);

impl<F, Fut, R> ErasedHandler for FnHandler<F>
where
    F: Fn(Request) -> Fut + Send + Sync,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn call(&self, req: Request) -> BoxFuture {
        let fut = (self.0)(req);
        Box::pin(async move { fut.await.into_response() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn echo_path(req: Request) -> String {
        req.path().to_owned()
    }

    fn request(path: &str) -> Request {
        http::Request::get(path).body(bytes::Bytes::new()).unwrap().into()
    }

    #[tokio::test]
    async fn async_fn_is_a_handler() {
        let handler = BoxedHandler::new(echo_path);
        let res = handler.call(request("/echo")).await;
        assert_eq!(res.body(), b"/echo");
    }

    #[tokio::test]
    async fn boxed_handler_boxes_to_itself() {
        let handler = BoxedHandler::new(echo_path);
        let again = BoxedHandler::new(handler.clone());
        assert!(Arc::ptr_eq(&handler.0, &again.0));
        assert_eq!(again.call(request("/x")).await.body(), b"/x");
    }
}
