//! Incoming HTTP request type.

use std::any::Any;
use std::fmt;

use bytes::Bytes;
use http::{HeaderMap, Method, Uri};
use http_body_util::BodyExt;
use http_body_util::combinators::UnsyncBoxBody;

use crate::context::Context;

/// Error type carried by request bodies.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A request body, streamed and never read unless a handler asks for it.
pub type Body = UnsyncBoxBody<Bytes, BoxError>;

/// An incoming HTTP request.
///
/// The body is left on the wire: the server dispatches as soon as the head
/// has arrived, and nothing in the chain waits for an upload to finish.
///
/// The [`Context`] is the only part that changes on the way down the chain,
/// and only by wrapping: [`Request::with_value`] consumes the request and
/// returns one with a richer context.
pub struct Request {
    pub(crate) method: Method,
    pub(crate) uri: Uri,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Body,
    pub(crate) context: Context,
}

impl Request {
    pub(crate) fn new(method: Method, uri: Uri, headers: HeaderMap, body: Body) -> Self {
        Self { method, uri, headers, body, context: Context::new() }
    }

    /// Wraps a hyper request without touching its body.
    pub(crate) fn from_incoming(req: hyper::Request<hyper::body::Incoming>) -> Self {
        let (parts, body) = req.into_parts();
        Self::new(parts.method, parts.uri, parts.headers, body.map_err(BoxError::from).boxed_unsync())
    }

    pub fn method(&self) -> &Method { &self.method }
    pub fn uri(&self) -> &Uri { &self.uri }
    pub fn path(&self) -> &str { self.uri.path() }
    pub fn headers(&self) -> &HeaderMap { &self.headers }
    pub fn context(&self) -> &Context { &self.context }

    /// Path and query as sent by the client, e.g. `/test?x=1`.
    ///
    /// HTTP/2 requests carry scheme and authority in the URI; they are left
    /// out here so both protocols read the same.
    pub fn target(&self) -> &str {
        self.uri.path_and_query().map_or_else(|| self.uri.path(), |pq| pq.as_str())
    }

    /// Case-insensitive header lookup. Non-UTF-8 values read as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Takes the body stream.
    pub fn into_body(self) -> Body {
        self.body
    }

    /// Typed context lookup; see [`Context::value`].
    pub fn value<T: Any>(&self, key: &str) -> Option<&T> {
        self.context.value(key)
    }

    /// Returns the request with `value` attached to its context under `key`.
    pub fn with_value<T>(mut self, key: &'static str, value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        self.context = self.context.with_value(key, value);
        self
    }
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("uri", &self.uri)
            .field("headers", &self.headers)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

/// Builds a request around an in-memory body.
impl From<http::Request<Bytes>> for Request {
    fn from(req: http::Request<Bytes>) -> Self {
        let (parts, body) = req.into_parts();
        let body = http_body_util::Full::new(body)
            .map_err(|never| match never {})
            .boxed_unsync();
        Self::new(parts.method, parts.uri, parts.headers, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn converts_from_http_request() {
        let req: Request = http::Request::post("/test?x=1")
            .header("X-Trace", "abc")
            .body(Bytes::from_static(b"payload"))
            .unwrap()
            .into();

        assert_eq!(req.method(), Method::POST);
        assert_eq!(req.path(), "/test");
        assert_eq!(req.target(), "/test?x=1");
        assert_eq!(req.header("x-trace"), Some("abc"));
        assert!(req.context().is_empty());

        let body = req.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body, "payload");
    }

    #[test]
    fn target_drops_scheme_and_authority() {
        let req: Request = http::Request::get("http://127.0.0.1:8080/test?x=1")
            .body(Bytes::new())
            .unwrap()
            .into();

        assert_eq!(req.uri().to_string(), "http://127.0.0.1:8080/test?x=1");
        assert_eq!(req.target(), "/test?x=1");
    }

    #[test]
    fn target_without_query_is_the_path() {
        let req: Request = http::Request::get("/test").body(Bytes::new()).unwrap().into();
        assert_eq!(req.target(), "/test");
    }

    #[test]
    fn with_value_extends_the_context() {
        let req: Request = http::Request::get("/").body(Bytes::new()).unwrap().into();
        let req = req.with_value("tenant", String::from("acme"));
        assert_eq!(req.value::<String>("tenant").map(String::as_str), Some("acme"));
    }
}
