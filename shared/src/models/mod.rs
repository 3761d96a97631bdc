//! Data models
//!
//! Shared between booking-server and the web frontend (via API).
//! Wire models use camelCase field names to match the public API.

pub mod booking;
pub mod report;
pub mod review;
pub mod slot;

// Re-exports
pub use booking::*;
pub use report::*;
pub use review::*;
pub use slot::*;
