//! Server-side pieces that sit next to the Leptos routes.

use axum::{
    body::Body,
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::content::DataAssets;

/// Installs the tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Serves the JSON documents embedded from `public/data`.
pub async fn serve_data(Path(file): Path<String>) -> Response {
    let Some(content) = DataAssets::get(&file) else {
        tracing::debug!("no embedded data file {file}");
        return (StatusCode::NOT_FOUND, "File not found").into_response();
    };

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CACHE_CONTROL, "public, max-age=3600")
        .body(Body::from(content.data.into_owned()))
        .unwrap_or_else(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create response",
            )
                .into_response()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::TESTIMONIALS_FILE;

    #[tokio::test]
    async fn test_serves_testimonials() {
        let res = serve_data(Path(TESTIMONIALS_FILE.to_string())).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers().get(header::CONTENT_TYPE).map(|v| v.as_bytes()),
            Some(b"application/json".as_slice())
        );
    }

    #[tokio::test]
    async fn test_unknown_file_is_404() {
        let res = serve_data(Path("missing.json".to_string())).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
