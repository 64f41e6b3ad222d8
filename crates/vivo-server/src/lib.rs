use axum::body::Body;
use axum::extract::{MatchedPath, Request};
use axum::http::StatusCode;
use axum::middleware::{from_fn, Next};
use axum::response::{IntoResponse, Response};
use axum::Router;
use metrics::{counter, histogram};
use serde::Deserialize;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Instant;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::classify::StatusInRangeAsFailures;
use tower_http::trace::{DefaultOnFailure, TraceLayer};

pub mod assets;

mod base_path;

pub use base_path::{BasePath, BasePathError, DEFAULT_BASE_PATH};

pub const DEFAULT_PORT: u16 = 5173;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub address: SocketAddr,
    pub base_path: BasePath,
    /// Directory holding the bundler output.
    pub asset_dir: PathBuf,
    /// Document served for every unmatched path under the base path.
    /// Relative paths are resolved against `asset_dir`.
    pub entry_document: PathBuf,
    /// Prometheus scrape listener. No exporter is installed when unset.
    pub metrics_address: Option<SocketAddr>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            address: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            base_path: BasePath::default(),
            asset_dir: PathBuf::from("dist"),
            entry_document: PathBuf::from("index.html"),
            metrics_address: None,
        }
    }
}

impl ServiceConfig {
    pub fn entry_document_path(&self) -> PathBuf {
        self.asset_dir.join(&self.entry_document)
    }

    /// Where the app is reachable once the listener is bound to `addr`.
    pub fn app_url(&self, addr: SocketAddr) -> String {
        format!("http://{addr}{}/", self.base_path)
    }
}

pub fn router(config: &ServiceConfig) -> Router {
    Router::new()
        .nest_service(config.base_path.as_str(), assets::assets_service(config))
        .fallback(handle_global_fallback)
        .layer(CatchPanicLayer::custom(|_| {
            counter!("panics_total").increment(1);

            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }))
        .layer(
            TraceLayer::new(StatusInRangeAsFailures::new(400..=599).into_make_classifier())
                .make_span_with(|request: &Request<Body>| {
                    let method = request.method();
                    let uri = request.uri();

                    tracing::info_span!("http-request", ?method, ?uri)
                })
                .on_failure(DefaultOnFailure::new()),
        )
        .layer(from_fn(metrics_layer))
}

async fn metrics_layer(request: Request, next: Next) -> Response {
    let timer = Instant::now();

    let path = if let Some(path) = request.extensions().get::<MatchedPath>() {
        path.as_str().to_string()
    } else {
        request.uri().path().to_string()
    };

    let response = next.run(request).await;

    let elapsed = timer.elapsed();

    let code = response.status().as_u16().to_string();

    histogram!("request_duration_seconds", "code" => code, "endpoint" => path).record(elapsed);

    response
}

/// Anything outside the base path has no owner in this deployment.
pub async fn handle_global_fallback() -> StatusCode {
    StatusCode::NOT_FOUND
}
