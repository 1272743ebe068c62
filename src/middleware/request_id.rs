//! Correlation-id injection.

use crate::correlation::{CORRELATION_ID_KEY, CorrelationId};
use crate::handler::BoxedHandler;
use crate::request::Request;

/// Attaches a fresh [`CorrelationId`] to every request under
/// [`CORRELATION_ID_KEY`] before handing it to `next`.
///
/// Incoming headers are not consulted: each request gets its own id.
pub fn request_id(next: BoxedHandler) -> BoxedHandler {
    BoxedHandler::new(move |req: Request| {
        next.call(req.with_value(CORRELATION_ID_KEY, CorrelationId::generate()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correlation::correlation_id;
    use crate::middleware::chain;

    async fn echo_id(req: Request) -> String {
        correlation_id(&req)
    }

    fn request() -> Request {
        http::Request::get("/test").body(bytes::Bytes::new()).unwrap().into()
    }

    #[tokio::test]
    async fn downstream_sees_a_uuid() {
        let handler = chain(echo_id, &[request_id]);
        let res = handler.call(request()).await;

        let id = std::str::from_utf8(res.body()).unwrap();
        assert!(uuid::Uuid::parse_str(id).is_ok(), "not a uuid: {id:?}");
    }

    #[tokio::test]
    async fn every_request_gets_its_own_id() {
        let handler = chain(echo_id, &[request_id]);
        let a = handler.call(request()).await;
        let b = handler.call(request()).await;
        assert_ne!(a.body(), b.body());
    }

    #[tokio::test]
    async fn every_downstream_layer_sees_the_same_id() {
        fn peek(next: BoxedHandler) -> BoxedHandler {
            BoxedHandler::new(move |req: Request| {
                tracing::info!("{}", correlation_id(&req));
                next.call(req)
            })
        }

        let (logs, _guard) = crate::log::capture::Captured::install();
        let res = chain(echo_id, &[request_id, peek, peek]).call(request()).await;

        let id = std::str::from_utf8(res.body()).unwrap();
        assert_eq!(logs.lines(), [id, id]);
    }
}
