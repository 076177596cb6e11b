//! MIME type detection module
//!
//! Returns the corresponding Content-Type based on file extension.

/// Get MIME Content-Type based on file extension
///
/// The table is fixed and matching is case-sensitive: `JPG` does not match
/// `jpg` and falls through to the default like any unknown extension.
///
/// # Examples
/// ```
/// use staticd::http::mime::content_type_for;
/// assert_eq!(content_type_for(Some("css")), "text/css");
/// assert_eq!(content_type_for(Some("svg")), "image/svg+xml");
/// assert_eq!(content_type_for(None), "application/octet-stream");
/// ```
pub fn content_type_for(extension: Option<&str>) -> &'static str {
    match extension {
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",

        // Default
        _ => "application/octet-stream",
    }
}
