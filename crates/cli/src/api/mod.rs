//! HTTP API route registration and shared state

pub mod ask;
pub mod documents;
pub mod error;
pub mod health;

use axum::routing::{get, post};
use axum::Router;
use docqa_knowledge::{AnswerService, DocumentStore};
use docqa_llm::LlmClient;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// State shared by every request handler.
pub struct ApiState {
    pub store: Arc<dyn DocumentStore>,
    pub llm: Arc<dyn LlmClient>,
    pub service: AnswerService,
}

impl ApiState {
    pub fn new(store: Arc<dyn DocumentStore>, llm: Arc<dyn LlmClient>, service: AnswerService) -> Self {
        Self {
            store,
            llm,
            service,
        }
    }
}

/// Build the complete API router
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route(
            "/documents",
            get(documents::list_documents).post(documents::upload_document),
        )
        .route("/ask", post(ask::ask_question))
        .route("/health", get(health::get_health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use docqa_core::{AppError, AppResult, Document, DocumentSummary};
    use docqa_knowledge::{AnswerOptions, MemoryStore};
    use docqa_llm::{LlmRequest, LlmResponse};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    struct CannedLlm {
        reply: Option<&'static str>,
    }

    #[async_trait::async_trait]
    impl LlmClient for CannedLlm {
        fn provider_name(&self) -> &str {
            "canned"
        }

        async fn complete(&self, request: &LlmRequest) -> AppResult<LlmResponse> {
            match self.reply {
                Some(reply) => Ok(LlmResponse::new(reply, request.model.clone())),
                None => Err(AppError::Upstream("connection refused".to_string())),
            }
        }

        async fn health_check(&self) -> AppResult<()> {
            match self.reply {
                Some(_) => Ok(()),
                None => Err(AppError::Upstream("connection refused".to_string())),
            }
        }
    }

    struct DownStore;

    #[async_trait::async_trait]
    impl DocumentStore for DownStore {
        async fn list_documents(&self) -> AppResult<Vec<DocumentSummary>> {
            Err(AppError::StoreUnavailable("down".to_string()))
        }

        async fn insert_document(&self, _name: &str, _content: &str) -> AppResult<Document> {
            Err(AppError::StoreUnavailable("down".to_string()))
        }

        async fn fetch_all_documents(&self) -> AppResult<Vec<Document>> {
            Err(AppError::StoreUnavailable("down".to_string()))
        }

        async fn ping(&self) -> AppResult<()> {
            Err(AppError::StoreUnavailable("down".to_string()))
        }
    }

    fn router_with(store: Arc<dyn DocumentStore>, reply: Option<&'static str>) -> Router {
        let llm: Arc<dyn LlmClient> = Arc::new(CannedLlm { reply });
        let service = AnswerService::new(
            Arc::clone(&store),
            Arc::clone(&llm),
            AnswerOptions::new("test-model"),
        );
        build_router(Arc::new(ApiState::new(store, llm, service)))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_upload_then_list() {
        let router = router_with(Arc::new(MemoryStore::new()), Some("Blue."));

        let (status, body) = send(
            &router,
            post_json("/documents", json!({"name": "A", "content": "The sky is blue."})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Document uploaded successfully");
        assert!(body["id"].is_string());

        let (status, body) = send(&router, get("/documents")).await;
        assert_eq!(status, StatusCode::OK);
        let listed = body.as_array().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0]["name"], "A");
        assert!(listed[0]["createdAt"].is_string());
        assert!(listed[0].get("content").is_none());
    }

    #[tokio::test]
    async fn test_upload_without_content_is_bad_request() {
        let router = router_with(Arc::new(MemoryStore::new()), Some("unused"));

        let (status, body) = send(&router, post_json("/documents", json!({"name": "A"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Name and content required"}));
    }

    #[tokio::test]
    async fn test_ask_answers_from_documents() {
        let store = Arc::new(MemoryStore::new());
        store.insert_document("A", "The sky is blue.").await.unwrap();
        let router = router_with(store, Some("Blue."));

        let (status, body) = send(
            &router,
            post_json("/ask", json!({"question": "What color is the sky?"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"answer": "Blue.", "source": "A", "snippet": "The sky is blue."})
        );
    }

    #[tokio::test]
    async fn test_ask_without_documents_returns_sentinel() {
        let router = router_with(Arc::new(MemoryStore::new()), Some("unused"));

        let (status, body) = send(&router, post_json("/ask", json!({"question": "sky?"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"answer": "No documents available.", "source": "-", "snippet": "-"})
        );
    }

    #[tokio::test]
    async fn test_ask_blank_question_is_bad_request() {
        let router = router_with(Arc::new(MemoryStore::new()), Some("unused"));

        let (status, body) = send(&router, post_json("/ask", json!({"question": "  "}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Question is required"}));
    }

    #[tokio::test]
    async fn test_ask_upstream_failure_is_server_error() {
        let store = Arc::new(MemoryStore::new());
        store.insert_document("A", "The sky is blue.").await.unwrap();
        let router = router_with(store, None);

        let (status, body) = send(&router, post_json("/ask", json!({"question": "sky"}))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Failed to answer question"}));
    }

    #[tokio::test]
    async fn test_health_reports_components() {
        let router = router_with(Arc::new(MemoryStore::new()), None);

        let (status, body) = send(&router, get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"backend": "ok", "database": "connected", "llm": "unreachable"})
        );
    }

    #[tokio::test]
    async fn test_health_fails_when_database_is_down() {
        let router = router_with(Arc::new(DownStore), Some("ok"));

        let (status, body) = send(&router, get("/health")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["database"], "error");
        assert_eq!(body["llm"], "reachable");
    }

    #[tokio::test]
    async fn test_list_failure_hides_details() {
        let router = router_with(Arc::new(DownStore), Some("ok"));

        let (status, body) = send(&router, get("/documents")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Failed to fetch documents"}));
    }
}
