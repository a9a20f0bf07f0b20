use std::sync::Arc;

use vestra_stylist::SuggestionService;

use crate::config::ServerConfig;
use crate::mailer::Mailer;
use crate::storage::ObjectStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: vestra_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Outfit suggestion service (model gateway client).
    pub stylist: Arc<SuggestionService>,
    /// Private object store with signed-URL access.
    pub store: Arc<ObjectStore>,
    /// Outbound email (password-reset codes).
    pub mailer: Arc<Mailer>,
}
