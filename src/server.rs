//! HTTP server.
//!
//! One tokio task per accepted connection; hyper drives the requests on it.
//! Connections share nothing but the router, which is read-only after
//! startup. There is no shutdown path: the accept loop runs until the process
//! is killed.
//!
//! A panic in a handler unwinds that connection's task only. tokio catches
//! it at the task boundary, the socket is dropped, and every other connection
//! carries on.

use std::net::SocketAddr;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::Full;
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use tokio::net::{TcpListener, ToSocketAddrs};
use tracing::{error, info};

use crate::error::Error;
use crate::request::Request;
use crate::router::Router;

/// The HTTP server: a bound listener waiting for a router.
pub struct Server {
    listener: TcpListener,
}

impl Server {
    /// Binds the listening socket.
    ///
    /// # Errors
    ///
    /// [`Error::Bind`] if the address cannot be resolved or bound.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # async fn run() -> Result<(), hitch::Error> {
    /// let server = hitch::Server::bind("0.0.0.0:8080").await?;
    /// # Ok(()) }
    /// ```
    pub async fn bind(addr: impl ToSocketAddrs) -> Result<Self, Error> {
        let listener = TcpListener::bind(addr).await.map_err(Error::Bind)?;
        Ok(Self { listener })
    }

    /// The address actually bound, useful after binding port `0`.
    pub fn local_addr(&self) -> Result<SocketAddr, Error> {
        Ok(self.listener.local_addr()?)
    }

    /// Accepts connections and dispatches them through `router`. Never
    /// returns; accept errors are logged and the loop carries on.
    pub async fn serve(self, router: Router) -> Result<(), Error> {
        // Shared by every connection task without copying the route table.
        let router = Arc::new(router);

        info!("listening on {}", self.local_addr()?);

        loop {
            let (stream, remote_addr) = match self.listener.accept().await {
                Ok(v) => v,
                Err(e) => {
                    error!("accept error: {e}");
                    continue;
                }
            };

            let router = Arc::clone(&router);
            let io = TokioIo::new(stream);

            tokio::spawn(async move {
                // Called once per request on the connection.
                let svc = service_fn(move |req| {
                    let router = Arc::clone(&router);
                    async move { dispatch(&router, req).await }
                });

                // HTTP/1.1 or HTTP/2, whichever the client speaks.
                if let Err(e) = ConnBuilder::new(TokioExecutor::new())
                    .serve_connection(io, svc)
                    .await
                {
                    error!("connection error from {remote_addr}: {e}");
                }
            });
        }
    }
}

// ── Request dispatch ──────────────────────────────────────────────────────────

/// Routes one request and produces one response.
///
/// Runs as soon as the request head has arrived; the body stays unread on
/// the connection unless a handler takes it. Failures become responses, so
/// hyper never sees an error.
async fn dispatch(
    router: &Router,
    req: hyper::Request<hyper::body::Incoming>,
) -> Result<http::Response<Full<Bytes>>, std::convert::Infallible> {
    Ok(router.handle(Request::from_incoming(req)).await.into_inner())
}
