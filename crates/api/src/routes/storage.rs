//! Route definitions for the `/storage` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::storage;
use crate::state::AppState;

/// Routes mounted at `/storage`.
///
/// ```text
/// POST /sign            -> sign_url (requires auth)
/// GET  /object/{*path}  -> serve_object (signature-gated)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sign", post(storage::sign_url))
        .route("/object/{*path}", get(storage::serve_object))
}
