//! Domain logic for the Vestra wardrobe platform.
//!
//! This crate is pure: no I/O, no database, no HTTP. It holds the shared
//! types, the error taxonomy, wardrobe item rules, upload constraints, and
//! the full outfit-suggestion pipeline logic (validation, sanitization,
//! prompt construction, model-reply parsing, fallback synthesis).

pub mod error;
pub mod suggestion;
pub mod types;
pub mod upload;
pub mod wardrobe;
