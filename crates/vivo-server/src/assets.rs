use crate::ServiceConfig;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, MethodRouter};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tower_http::services::ServeDir;

pub type AssetResult<T> = Result<T, AssetError>;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Entry document was not found")]
    NotFound,
    #[error("Encountered uncategorized error while reading the entry document")]
    ServiceError(#[source] io::Error),
}

impl From<io::Error> for AssetError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound => Self::NotFound,
            _ => Self::ServiceError(e),
        }
    }
}

impl IntoResponse for AssetError {
    fn into_response(self) -> Response {
        let code = match &self {
            Self::NotFound => {
                tracing::warn!("Entry document is missing, has the app been built?");
                StatusCode::NOT_FOUND
            }
            Self::ServiceError(error) => {
                tracing::error!(?error, "Encountered service error reading entry document");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (code, self.to_string()).into_response()
    }
}

/// Serves literal files from the asset directory and answers everything else with the entry
/// document, so client-side routes can be deep-linked.
///
/// Paths seen by this service are already relative to the base path. Directories are not
/// literal files: they get the entry document too, never a redirect or their own `index.html`.
pub fn assets_service(config: &ServiceConfig) -> ServeDir<MethodRouter> {
    let entry = Arc::new(config.entry_document_path());

    ServeDir::new(&config.asset_dir)
        .append_index_html_on_directories(false)
        .fallback(get(entry_document).with_state(entry))
}

// Nothing about the entry document is checked at startup; a missing build shows up here.
async fn entry_document(State(path): State<Arc<PathBuf>>) -> AssetResult<Html<Vec<u8>>> {
    let body = tokio::fs::read(path.as_path()).await?;

    Ok(Html(body))
}
