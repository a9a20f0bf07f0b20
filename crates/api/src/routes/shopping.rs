//! Route definitions for the `/shopping` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::shopping;
use crate::state::AppState;

/// Routes mounted at `/shopping`.
///
/// ```text
/// GET /suggestions -> list_suggestions (mock data)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/suggestions", get(shopping::list_suggestions))
}
