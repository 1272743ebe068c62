//! Path router.
//!
//! Method-agnostic: a path maps to one handler and every method reaches it.
//! Lookups that match nothing get a plain-text 404.

use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};
use crate::request::Request;
use crate::response::Response;

/// Body of the fallback response, byte-compatible with Go's `net/http`.
pub const NOT_FOUND_BODY: &str = "404 page not found\n";

/// The application router.
///
/// Build it once at startup and pass it to [`Server::serve`](crate::Server::serve).
/// [`Router::route`] returns `self` so registrations chain.
pub struct Router {
    routes: MatchitRouter<BoxedHandler>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: MatchitRouter::new() }
    }

    /// Register `handler` for every method on `path`.
    ///
    /// # Panics
    ///
    /// Panics if `path` is malformed or already registered; routes are fixed
    /// at startup, so this is a programming error.
    pub fn route(mut self, path: &str, handler: impl Handler) -> Self {
        self.routes
            .insert(path, BoxedHandler::new(handler))
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub(crate) fn lookup(&self, path: &str) -> Option<BoxedHandler> {
        self.routes.at(path).ok().map(|matched| matched.value.clone())
    }

    /// Routes `req` and runs the matching handler, or answers 404.
    pub async fn handle(&self, req: Request) -> Response {
        let Some(handler) = self.lookup(req.path()) else {
            return not_found();
        };
        handler.call(req).await
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}

fn not_found() -> Response {
    Response::builder()
        .status(http::StatusCode::NOT_FOUND)
        .header("x-content-type-options", "nosniff")
        .text(NOT_FOUND_BODY)
}
