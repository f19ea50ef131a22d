//! Cross-cutting request middleware: CORS, request ids and logging, and the
//! terminal error handler.

mod cors;
mod errors;
mod request;

pub use cors::cors_layer;
pub use errors::{error_envelope_middleware, panic_response, payload_limit_middleware};
pub use request::{request_id_middleware, request_logger_middleware, RequestId, REQUEST_ID_HEADER};
