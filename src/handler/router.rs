//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. Every request produces exactly
//! one response; routing looks only at the URI path.

use crate::config::{AppState, ContentConfig};
use crate::handler::static_files;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body as _, Bytes, Incoming};
use hyper::{Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Main entry point for HTTP request handling
///
/// The method is deliberately never inspected: a POST to `/` behaves
/// exactly like a GET.
pub async fn handle_request(
    req: Request<Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    let response = route_request(&path, &state.config.content).await;

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(peer_addr.to_string(), method, path);
        entry.status = response.status().as_u16();
        entry.body_bytes = body_size(&response);
        logger::log_access(&entry, &state.config.logging.format);
    }

    Ok(response)
}

/// Route a request path to its terminal response, evaluated in order:
/// 1. `/` or `/index.html`: the home document (500 if unreadable)
/// 2. asset prefix: file under the asset directory (404 `Not Found` if unreadable)
/// 3. anything else: 404 `Page Not Found`
async fn route_request(path: &str, content: &ContentConfig) -> Response<Full<Bytes>> {
    if path == "/" || path == "/index.html" {
        return static_files::serve_home(content).await;
    }

    if let Some(remainder) = path.strip_prefix(content.asset_prefix.as_str()) {
        return static_files::serve_asset(content, remainder).await;
    }

    http::build_page_not_found_response()
}

fn body_size(response: &Response<Full<Bytes>>) -> usize {
    usize::try_from(response.body().size_hint().exact().unwrap_or(0)).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use tempfile::TempDir;

    fn content_config(root: &TempDir) -> ContentConfig {
        ContentConfig {
            static_root: root.path().to_string_lossy().into_owned(),
            asset_prefix: "/assets/".to_string(),
            asset_dir: root.path().join("assets").to_string_lossy().into_owned(),
        }
    }

    fn write_asset(root: &TempDir, name: &str, contents: &[u8]) {
        let dir = root.path().join("assets");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(name), contents).unwrap();
    }

    fn content_type(response: &Response<Full<Bytes>>) -> String {
        response
            .headers()
            .get("Content-Type")
            .and_then(|v| v.to_str().ok())
            .unwrap()
            .to_string()
    }

    async fn body_bytes(response: Response<Full<Bytes>>) -> Bytes {
        response.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn unmatched_paths_answer_page_not_found() {
        let root = TempDir::new().unwrap();
        let content = content_config(&root);

        for path in ["/about", "/assets", "/static/app.css", "/index.htm"] {
            let response = route_request(path, &content).await;
            assert_eq!(response.status(), 404, "path {path}");
            assert_eq!(content_type(&response), "text/plain");
            assert_eq!(body_bytes(response).await, "Page Not Found");
        }
    }

    #[tokio::test]
    async fn root_and_index_html_are_identical() {
        let root = TempDir::new().unwrap();
        std::fs::write(
            root.path().join("index.html"),
            "<html><head><title>Welcome</title></head></html>",
        )
        .unwrap();
        let content = content_config(&root);

        let from_root = route_request("/", &content).await;
        let from_index = route_request("/index.html", &content).await;

        assert_eq!(from_root.status(), 200);
        assert_eq!(from_index.status(), 200);
        assert_eq!(content_type(&from_root), "text/html");
        assert_eq!(content_type(&from_index), "text/html");

        let body_root = body_bytes(from_root).await;
        let body_index = body_bytes(from_index).await;
        assert_eq!(body_root, body_index);
        assert!(String::from_utf8_lossy(&body_root).contains("<title>Welcome</title>"));
    }

    #[tokio::test]
    async fn unreadable_home_document_answers_500() {
        let root = TempDir::new().unwrap();
        let content = content_config(&root);

        let response = route_request("/", &content).await;
        assert_eq!(response.status(), 500);
        assert_eq!(content_type(&response), "text/plain");
        assert_eq!(body_bytes(response).await, "Internal Server Error");
    }

    #[tokio::test]
    async fn css_asset_is_served_as_text_css() {
        let root = TempDir::new().unwrap();
        write_asset(&root, "test.css", b"body { margin: 0; }");
        let content = content_config(&root);

        let response = route_request("/assets/test.css", &content).await;
        assert_eq!(response.status(), 200);
        assert_eq!(content_type(&response), "text/css");
    }

    #[tokio::test]
    async fn svg_asset_is_served_as_svg_xml() {
        let root = TempDir::new().unwrap();
        write_asset(&root, "test.svg", b"<svg xmlns='http://www.w3.org/2000/svg'/>");
        let content = content_config(&root);

        let response = route_request("/assets/test.svg", &content).await;
        assert_eq!(response.status(), 200);
        assert_eq!(content_type(&response), "image/svg+xml");
    }

    #[tokio::test]
    async fn jpg_asset_round_trips_bytes() {
        let root = TempDir::new().unwrap();
        write_asset(&root, "test.jpg", b"mock-image-content");
        let content = content_config(&root);

        let response = route_request("/assets/test.jpg", &content).await;
        assert_eq!(response.status(), 200);
        assert_eq!(content_type(&response), "image/jpeg");
        assert_eq!(body_bytes(response).await, "mock-image-content");
    }

    #[tokio::test]
    async fn unknown_extension_defaults_to_octet_stream() {
        let root = TempDir::new().unwrap();
        write_asset(&root, "data.bin", b"\x00\x01\x02");
        let content = content_config(&root);

        let response = route_request("/assets/data.bin", &content).await;
        assert_eq!(response.status(), 200);
        assert_eq!(content_type(&response), "application/octet-stream");
    }

    #[tokio::test]
    async fn uppercase_extension_is_not_matched() {
        let root = TempDir::new().unwrap();
        write_asset(&root, "photo.JPG", b"jpeg-bytes");
        let content = content_config(&root);

        let response = route_request("/assets/photo.JPG", &content).await;
        assert_eq!(response.status(), 200);
        assert_eq!(content_type(&response), "application/octet-stream");
    }

    #[tokio::test]
    async fn missing_asset_answers_not_found() {
        let root = TempDir::new().unwrap();
        write_asset(&root, "present.css", b"");
        let content = content_config(&root);

        let response = route_request("/assets/nonexistent.xyz", &content).await;
        assert_eq!(response.status(), 404);
        assert_eq!(content_type(&response), "text/plain");
        assert_eq!(body_bytes(response).await, "Not Found");
    }

    #[tokio::test]
    async fn repeated_requests_yield_identical_responses() {
        let root = TempDir::new().unwrap();
        write_asset(&root, "app.js", b"console.log('hi');");
        let content = content_config(&root);

        let first = route_request("/assets/app.js", &content).await;
        let second = route_request("/assets/app.js", &content).await;

        assert_eq!(first.status(), second.status());
        assert_eq!(content_type(&first), content_type(&second));
        assert_eq!(body_bytes(first).await, body_bytes(second).await);
    }
}
