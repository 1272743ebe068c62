//! # hitch
//!
//! One HTTP endpoint behind three middleware. Nothing more.
//!
//! ```text
//! ANY /test
//!   request_id   attach a fresh UUID v4 to the request context
//!   logging      "Incoming request: /test"
//!   timing       "Request took in microseconds: 42"
//!   hello        "Hello world\n" + "Request with id <uuid>"
//! ```
//!
//! Middleware are plain `fn(BoxedHandler) -> BoxedHandler` values folded
//! around the handler once at startup by [`middleware::chain`]. The
//! per-request [`Context`] only grows by wrapping, so whatever an outer layer
//! attaches stays fixed for that request and is invisible to every other one.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use hitch::{Request, Response, Router, Server, middleware};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), hitch::Error> {
//!     let handler = middleware::chain(
//!         greet,
//!         &[middleware::request_id, middleware::logging, middleware::timing],
//!     );
//!     let app = Router::new().route("/greet", handler);
//!
//!     Server::bind("0.0.0.0:3000").await?.serve(app).await
//! }
//!
//! async fn greet(req: Request) -> Response {
//!     Response::text(format!("hi, {}\n", hitch::correlation_id(&req)))
//! }
//! ```

mod context;
mod correlation;
mod error;
mod handler;
mod hello;
mod request;
mod response;
mod router;
mod server;

pub mod app;
pub mod log;
pub mod middleware;

pub use context::Context;
pub use correlation::{CORRELATION_ID_KEY, CorrelationId, correlation_id};
pub use error::Error;
pub use handler::{BoxFuture, BoxedHandler, Handler};
pub use hello::{GREETING, hello};
pub use http::StatusCode;
pub use request::{Body, BoxError, Request};
pub use response::{IntoResponse, Response, ResponseBuilder};
pub use router::{NOT_FOUND_BODY, Router};
pub use server::Server;
