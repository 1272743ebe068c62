//! Request timing.

use std::time::Instant;

use tracing::info;

use crate::handler::BoxedHandler;
use crate::request::Request;

/// Logs how long `next` took, in whole microseconds.
///
/// The clock starts right before `next` is invoked and stops when its
/// response is ready, so only the layers inside this one are measured.
pub fn timing(next: BoxedHandler) -> BoxedHandler {
    BoxedHandler::new(move |req: Request| {
        let started = Instant::now();
        let fut = next.call(req);
        async move {
            let res = fut.await;
            info!("Request took in microseconds: {}", started.elapsed().as_micros());
            res
        }
    })
}
