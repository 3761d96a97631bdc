//! Shared types for the Moon Restaurant booking platform
//!
//! Common types used by the booking server and any API client:
//! wire-facing data models and the unified response envelope.

pub mod models;
pub mod response;

// Re-exports
pub use response::ApiResponse;
pub use serde::{Deserialize, Serialize};
