//! Request handler module
//!
//! Dispatches incoming requests to the scripted QA scenarios.

pub mod router;
pub mod scenarios;

// Re-export main entry point
pub use router::handle_request;
