//! Request handler module
//!
//! Responsible for request routing dispatch: home document, asset area,
//! catch-all 404.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
