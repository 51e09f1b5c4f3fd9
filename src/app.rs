use axum::Router;
use tower_http::cors::CorsLayer;

use crate::routes::{health, portfolios};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/portfolios", portfolios::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::errors::LlmError;
    use crate::external::llm_provider::CompletionProvider;

    struct StubProvider;

    #[async_trait]
    impl CompletionProvider for StubProvider {
        async fn complete(&self, _api_key: &str, _prompt: &str) -> Result<String, LlmError> {
            Ok(r#"{"portfolio":[{"symbol":"VTI","name":"Vanguard Total Stock Market","allocation":100.0,"justification":"broad equity core"}],"overallJustification":"Single-fund market exposure."}"#.to_string())
        }
    }

    fn test_app() -> Router {
        create_app(AppState { completions: Arc::new(StubProvider) })
    }

    fn generate_request(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/portfolios/generate")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint_responds_ok() {
        let response = test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_generate_endpoint_accepts_a_complete_request() {
        let response = test_app()
            .oneshot(generate_request(serde_json::json!({
                "investment_thesis": "broad market exposure",
                "openai_api_key": "sk-test",
                "fmp_api_key": "fmp-test",
                "timeframe": "1Y"
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_generate_endpoint_rejects_empty_thesis() {
        let response = test_app()
            .oneshot(generate_request(serde_json::json!({
                "investment_thesis": "",
                "openai_api_key": "sk-test",
                "fmp_api_key": "fmp-test",
                "timeframe": "MTD"
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
