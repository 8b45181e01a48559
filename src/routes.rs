use axum::{Router, routing::get};
use nba_api::client::ScoresApi;
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::handlers::{get_scores, get_status};

/// API routes plus the static landing page; anything that isn't an API path
/// falls through to `public/` (index.html at the root).
pub fn routes() -> Router<ScoresApi> {
    Router::new()
        .route("/api/scores", get(get_scores))
        .route("/api/status", get(get_status))
        .fallback_service(ServeDir::new("public"))
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app(api: ScoresApi) -> Router {
        routes().with_state(api)
    }

    fn mocked_api(server: &mockito::Server, api_key: Option<&str>) -> ScoresApi {
        ScoresApi::new(api_key.map(str::to_owned)).with_endpoints(
            format!("{}/live", server.url()),
            format!("{}/games", server.url()),
        )
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn status_always_succeeds_and_is_idempotent() {
        let app = app(ScoresApi::new(None));
        for _ in 0..2 {
            let (status, body) = get_json(app.clone(), "/api/status").await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["configured"], false);
            assert!(body["date"].is_string());
        }
    }

    #[tokio::test]
    async fn scores_without_key_is_500_when_live_feed_is_down() {
        let mut server = mockito::Server::new_async().await;
        let _live = server.mock("GET", "/live").with_status(500).create_async().await;

        let (status, body) = get_json(app(mocked_api(&server, None)), "/api/scores").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "API key not configured");
    }

    #[tokio::test]
    async fn scores_degrade_to_none_when_both_feeds_are_down() {
        let mut server = mockito::Server::new_async().await;
        let _live = server.mock("GET", "/live").with_status(500).create_async().await;
        let _schedule = server
            .mock("GET", "/games")
            .match_query(mockito::Matcher::Any)
            .with_status(502)
            .create_async()
            .await;

        let (status, body) = get_json(app(mocked_api(&server, Some("k"))), "/api/scores").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "none");
        assert_eq!(body["games"], serde_json::json!([]));
    }
}
