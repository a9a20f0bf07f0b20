//! Route definitions for the `/outfits` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::{outfits, suggest};
use crate::state::AppState;

/// Routes mounted at `/outfits`.
///
/// ```text
/// POST   /suggest        -> suggest (public, stateless)
/// POST   /               -> create_outfit
/// GET    /               -> list_outfits
/// GET    /scheduled      -> list_scheduled
/// PUT    /{id}/schedule  -> schedule_outfit
/// DELETE /{id}           -> delete_outfit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/suggest", post(suggest::suggest))
        .route("/", get(outfits::list_outfits).post(outfits::create_outfit))
        .route("/scheduled", get(outfits::list_scheduled))
        .route("/{id}/schedule", put(outfits::schedule_outfit))
        .route("/{id}", delete(outfits::delete_outfit))
}
