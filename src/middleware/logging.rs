//! Request logging.

use tracing::info;

use crate::handler::BoxedHandler;
use crate::request::Request;

/// Logs the request target (path and query, as received) before calling
/// `next`. HTTP/1.1 and HTTP/2 requests log the same line.
pub fn logging(next: BoxedHandler) -> BoxedHandler {
    BoxedHandler::new(move |req: Request| {
        info!("Incoming request: {}", req.target());
        next.call(req)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Response;
    use crate::log::capture::Captured;
    use crate::middleware::chain;

    #[tokio::test]
    async fn logs_path_and_query_before_the_handler_runs() {
        async fn handler(_req: Request) -> Response {
            info!("handler");
            Response::text("ok")
        }

        let (logs, _guard) = Captured::install();
        let req: Request = http::Request::get("/test?page=2").body(bytes::Bytes::new()).unwrap().into();

        chain(handler, &[logging]).call(req).await;

        assert_eq!(logs.lines(), ["Incoming request: /test?page=2", "handler"]);
    }

    #[tokio::test]
    async fn absolute_form_uris_log_only_path_and_query() {
        let (logs, _guard) = Captured::install();
        let req: Request = http::Request::get("http://127.0.0.1:8080/test?x=1")
            .body(bytes::Bytes::new())
            .unwrap()
            .into();

        chain(|_req: Request| async { "ok" }, &[logging]).call(req).await;

        assert_eq!(logs.lines(), ["Incoming request: /test?x=1"]);
    }
}
