//! Client for the external text-generation gateway and the outfit
//! suggestion service built on top of it.
//!
//! The pipeline is: validate -> sanitize -> build prompt -> single
//! chat-completions call -> parse the free-text reply (or synthesize the
//! deterministic fallback). The service is stateless; concurrent calls share
//! nothing mutable.

pub mod client;
pub mod config;
pub mod service;

pub use client::{GatewayClient, GatewayError};
pub use config::StylistConfig;
pub use service::{SuggestionError, SuggestionService};
