//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::assets::StaticAssets;

/// Build the top-level axum [`Router`].
///
/// `/health` answers `OK`; every other path is served from the dashboard
/// bundle. Includes a [`TraceLayer`] that logs each HTTP request/response at
/// the `DEBUG` level using the `tracing` ecosystem.
pub fn build(assets: &StaticAssets) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .fallback_service(assets.service())
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use std::path::Path;
    use tower::ServiceExt;

    fn app() -> Router {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/dist");
        build(&StaticAssets::open(dir).unwrap())
    }

    async fn get_body(uri: &str) -> (StatusCode, Option<String>, String) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let (status, _, body) = get_body("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn should_serve_index_at_root() {
        let (status, content_type, body) = get_body("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("text/html"));
        assert!(body.contains("Rick and Morty Characters"));
    }

    #[tokio::test]
    async fn should_serve_stylesheet_with_css_type() {
        let (status, content_type, body) = get_body("/style.css").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("text/css"));
        assert!(body.contains(".character-grid"));
    }

    #[tokio::test]
    async fn should_fall_back_to_index_for_unknown_path() {
        let (status, _, body) = get_body("/characters/42").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Rick and Morty Characters"));
    }
}
