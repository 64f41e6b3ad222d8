use axum::body::{to_bytes, Body};
use axum::http::{Request, Response};
use std::fs;
use tempfile::TempDir;
use vivo_server::ServiceConfig;

pub const ENTRY_DOCUMENT: &str = "<!doctype html><div id=\"root\"></div>";
pub const APP_SCRIPT: &str = "console.log('vivo')";

/// A built app laid out the way the bundler emits it.
pub struct BuiltApp {
    pub dir: TempDir,
}

impl BuiltApp {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), ENTRY_DOCUMENT).unwrap();
        fs::create_dir(dir.path().join("assets")).unwrap();
        fs::write(dir.path().join("assets/index-4f2a.js"), APP_SCRIPT).unwrap();
        fs::write(dir.path().join("vite.svg"), "<svg/>").unwrap();
        Self { dir }
    }

    pub fn config(&self) -> ServiceConfig {
        ServiceConfig {
            asset_dir: self.dir.path().to_path_buf(),
            ..ServiceConfig::default()
        }
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let body = to_bytes(response.into_body(), 100_000).await.unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}
