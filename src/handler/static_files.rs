//! Static content loading module
//!
//! Loads the home document and asset files and maps each load failure to
//! its fixed response.

use crate::config::ContentConfig;
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

const HOME_DOCUMENT: &str = "index.html";

/// Serve the home document from the static root
///
/// An unreadable document (missing file, permission error) answers 500.
pub async fn serve_home(content: &ContentConfig) -> Response<Full<Bytes>> {
    match load_home_document(&content.static_root).await {
        Ok(bytes) => http::build_html_response(bytes),
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read home document under '{}': {e}",
                content.static_root
            ));
            http::build_500_response()
        }
    }
}

/// Serve a file from the asset directory
///
/// `remainder` is the request path with the asset prefix already stripped.
/// An absent or unreadable file answers 404.
pub async fn serve_asset(content: &ContentConfig, remainder: &str) -> Response<Full<Bytes>> {
    match load_asset(&content.asset_dir, remainder).await {
        Some((bytes, content_type)) => http::build_asset_response(bytes, content_type),
        None => http::build_404_response(),
    }
}

/// Read the home document (`index.html` under the static root)
pub async fn load_home_document(static_root: &str) -> std::io::Result<Vec<u8>> {
    fs::read(Path::new(static_root).join(HOME_DOCUMENT)).await
}

/// Read an asset and infer its content type from the extension
pub async fn load_asset(asset_dir: &str, remainder: &str) -> Option<(Vec<u8>, &'static str)> {
    let file_path = Path::new(asset_dir).join(remainder);
    let content = fs::read(&file_path).await.ok()?;
    let content_type = mime::content_type_for(file_path.extension().and_then(|e| e.to_str()));
    Some((content, content_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_asset_reads_nested_files() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("icons")).unwrap();
        std::fs::write(dir.path().join("icons/logo.png"), b"png-bytes").unwrap();

        let (bytes, content_type) = load_asset(dir.path().to_str().unwrap(), "icons/logo.png")
            .await
            .unwrap();
        assert_eq!(bytes, b"png-bytes");
        assert_eq!(content_type, "image/png");
    }

    #[tokio::test]
    async fn load_asset_returns_none_for_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(load_asset(dir.path().to_str().unwrap(), "missing.css")
            .await
            .is_none());
    }

    #[tokio::test]
    async fn load_home_document_fails_when_absent() {
        let dir = TempDir::new().unwrap();
        let err = load_home_document(dir.path().to_str().unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
