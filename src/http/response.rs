//! HTTP response building module
//!
//! One builder per terminal outcome of the dispatcher. The two 404 bodies
//! differ on purpose: a missing asset answers `Not Found`, an unmatched
//! route answers `Page Not Found`.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build 200 response carrying the home document
pub fn build_html_response(content: Vec<u8>) -> Response<Full<Bytes>> {
    let content_length = content.len();
    Response::builder()
        .status(200)
        .header("Content-Type", "text/html")
        .header("Content-Length", content_length)
        .body(Full::new(Bytes::from(content)))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 200 response for an asset with its inferred content type
pub fn build_asset_response(content: Vec<u8>, content_type: &str) -> Response<Full<Bytes>> {
    let content_length = content.len();
    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(Bytes::from(content)))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response (missing asset)
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .header("Content-Length", "Not Found".len())
        .body(Full::new(Bytes::from("Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("Not Found")))
        })
}

/// Build 404 response for a path no route matches
pub fn build_page_not_found_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .header("Content-Length", "Page Not Found".len())
        .body(Full::new(Bytes::from("Page Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("Page Not Found")))
        })
}

/// Build 500 response for an unreadable home document
pub fn build_500_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain")
        .header("Content-Length", "Internal Server Error".len())
        .body(Full::new(Bytes::from("Internal Server Error")))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::from("Internal Server Error")))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_type(response: &Response<Full<Bytes>>) -> &str {
        response
            .headers()
            .get("Content-Type")
            .and_then(|v| v.to_str().ok())
            .unwrap()
    }

    #[test]
    fn test_error_responses_are_plain_text() {
        assert_eq!(build_404_response().status(), 404);
        assert_eq!(content_type(&build_404_response()), "text/plain");
        assert_eq!(build_page_not_found_response().status(), 404);
        assert_eq!(content_type(&build_page_not_found_response()), "text/plain");
        assert_eq!(build_500_response().status(), 500);
        assert_eq!(content_type(&build_500_response()), "text/plain");
    }

    #[test]
    fn test_html_response() {
        let response = build_html_response(b"<title>X</title>".to_vec());
        assert_eq!(response.status(), 200);
        assert_eq!(content_type(&response), "text/html");
    }

    #[test]
    fn test_asset_response_carries_given_type() {
        let response = build_asset_response(b"body{}".to_vec(), "text/css");
        assert_eq!(response.status(), 200);
        assert_eq!(content_type(&response), "text/css");
    }
}
