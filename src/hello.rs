//! The terminal handler.

use tracing::info;

use crate::correlation::correlation_id;
use crate::request::Request;
use crate::response::Response;

/// Body of every successful response.
pub const GREETING: &str = "Hello world\n";

/// Answers with [`GREETING`] and logs the request's correlation id.
///
/// Works without the middleware chain too: a request with no id logs an
/// empty one.
pub async fn hello(req: Request) -> Response {
    let res = Response::text(GREETING);
    let id = correlation_id(&req);
    info!("Request with id {id}");
    res
}
