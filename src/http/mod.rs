//! HTTP protocol layer module
//!
//! Content-type inference and response building, decoupled from routing.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_500_response, build_asset_response, build_html_response,
    build_page_not_found_response,
};
