//! Correlation ids.
//!
//! Every request passing through [`middleware::request_id`](crate::middleware::request_id)
//! gets a fresh [`CorrelationId`] attached to its [`Context`](crate::Context)
//! under [`CORRELATION_ID_KEY`]. Downstream code reads it back with
//! [`correlation_id`].

use std::fmt;

use uuid::Uuid;

use crate::request::Request;

/// Context key the correlation id is stored under.
pub const CORRELATION_ID_KEY: &str = "correlation_id";

/// A per-request UUID v4. Never persisted; dropped with the request.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CorrelationId(Uuid);

impl CorrelationId {
    /// A fresh random id; every call yields a different one.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Hyphenated lowercase, e.g. `67e55044-10b1-426f-9247-bb680e5fe0c8`.
        fmt::Display::fmt(&self.0, f)
    }
}

/// Returns the request's correlation id as a string.
///
/// Yields an empty string when no id was attached (the handler was called
/// without the chain) or when something other than a [`CorrelationId`] sits
/// under the key. Never fails.
pub fn correlation_id(req: &Request) -> String {
    req.value::<CorrelationId>(CORRELATION_ID_KEY)
        .map(ToString::to_string)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> Request {
        http::Request::get("/test").body(bytes::Bytes::new()).unwrap().into()
    }

    #[test]
    fn ids_are_distinct_and_well_formed() {
        let a = CorrelationId::generate();
        let b = CorrelationId::generate();
        assert_ne!(a, b);
        assert!(!a.as_uuid().is_nil());

        let parsed = Uuid::parse_str(&a.to_string()).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn missing_id_is_empty() {
        assert_eq!(correlation_id(&request()), "");
    }

    #[test]
    fn attached_id_round_trips_through_the_request() {
        let id = CorrelationId::generate();
        let req = request().with_value(CORRELATION_ID_KEY, id);
        assert_eq!(correlation_id(&req), id.to_string());
    }

    #[test]
    fn wrong_type_under_the_key_is_empty() {
        let req = request().with_value(CORRELATION_ID_KEY, 42u64);
        assert_eq!(correlation_id(&req), "");
    }
}
