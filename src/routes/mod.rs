pub mod health;
mod router;
pub mod spa;
pub mod types;

pub use router::{create_router, ApiRoutes};

// Re-export AppState for convenience
pub use crate::state::AppState;

use axum::http::StatusCode;

/// Bare 404 for paths no route or static file claims
async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
