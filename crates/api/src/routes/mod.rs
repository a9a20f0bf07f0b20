pub mod auth;
pub mod health;
pub mod outfits;
pub mod shopping;
pub mod storage;
pub mod wardrobe;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                 register account (public)
/// /auth/login                  login (public, lockout after repeated failures)
/// /auth/refresh                rotate refresh token (public)
/// /auth/logout                 revoke session (public)
/// /auth/forgot-password        request reset code (public)
/// /auth/verify-otp             check reset code (public)
/// /auth/reset-password         set new password (public)
///
/// /wardrobe/items              list, create (multipart; requires auth)
/// /wardrobe/items/{id}         delete (requires auth)
///
/// /storage/sign                issue signed URL (requires auth)
/// /storage/object/{*path}      serve object (signature-gated, no session)
///
/// /outfits/suggest             AI outfit suggestion (public, stateless)
/// /outfits                     list, create (requires auth)
/// /outfits/scheduled           calendar view (requires auth)
/// /outfits/{id}/schedule       set/clear date (PUT, requires auth)
/// /outfits/{id}                delete (requires auth)
///
/// /shopping/suggestions        mock recommendations (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Account lifecycle and password reset.
        .nest("/auth", auth::router())
        // Wardrobe item CRUD.
        .nest("/wardrobe", wardrobe::router())
        // Signed-URL object store.
        .nest("/storage", storage::router())
        // Suggestion endpoint plus saved outfits and calendar.
        .nest("/outfits", outfits::router())
        // Mock shopping recommendations.
        .nest("/shopping", shopping::router())
}
