//! Route definitions for the `/wardrobe` resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::wardrobe;
use crate::state::AppState;

/// Multipart bodies carry a 5 MiB image plus metadata fields.
const UPLOAD_BODY_LIMIT: usize = 6 * 1024 * 1024;

/// Routes mounted at `/wardrobe`.
///
/// ```text
/// GET    /items       -> list_items
/// POST   /items       -> create_item (multipart)
/// DELETE /items/{id}  -> delete_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/items",
            get(wardrobe::list_items).post(wardrobe::create_item),
        )
        .route("/items/{id}", delete(wardrobe::delete_item))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
}
