// ABOUTME: HTTP middleware for CORS, request tracing, and panic recovery
// ABOUTME: Provides request ID propagation, span creation, and allow-all CORS headers

/// CORS header layer and preflight responder
pub mod cors;
/// Request IDs, spans, and panic conversion
pub mod tracing;

pub use cors::{allow_any_origin_layer, preflight};
pub use self::tracing::{create_request_span, handle_panic, REQUEST_ID_HEADER};
