//! Shared response envelope types for API handlers.

use serde::Serialize;

/// Standard `{ "message": ... }` response for operations that return no data.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
