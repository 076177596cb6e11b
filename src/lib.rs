//! staticd - a minimal static-content HTTP server.
//!
//! Maps request paths to files on disk: the home document for `/` and
//! `/index.html`, files under a configured asset prefix with an inferred
//! content type, and a fixed 404 for everything else.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
