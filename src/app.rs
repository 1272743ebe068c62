//! The application: one path, three middleware, one handler.

use crate::hello::hello;
use crate::middleware::{Middleware, chain, logging, request_id, timing};
use crate::router::Router;

/// Listening address.
pub const ADDR: &str = "0.0.0.0:8080";

/// The only routed path.
pub const PATH: &str = "/test";

/// Registered middleware, outermost first.
pub const MIDDLEWARE: &[Middleware] = &[request_id, logging, timing];

/// Builds the router. Call once at startup; the composed chain is shared by
/// every request after that.
pub fn app() -> Router {
    Router::new().route(PATH, chain(hello, MIDDLEWARE))
}
