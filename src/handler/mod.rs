//! Request handler module
//!
//! Routing dispatch for the two application endpoints.

pub mod router;

// Re-export main entry point
pub use router::handle_request;
