use super::handlers::{download_csv, health, insert_words, process_text};
use super::types::AppState;
use axum::Router;
use axum::http::{Method, header};
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/process", post(process_text))
        .route("/download-csv", get(download_csv))
        .route("/insert-words", post(insert_words))
        .route("/health", get(health))
        .layer(cors())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::vocabulary::testing::MemoryStore;
    use crate::application::{RetryPolicy, WordService};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    fn app(store: &Arc<MemoryStore>) -> (Router, AppState) {
        let service = Arc::new(WordService::new(
            store.clone(),
            Duration::from_secs(30),
            RetryPolicy::default(),
        ));
        (router(service.clone()), service)
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ORIGIN, "http://localhost:5173")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_string(response: Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_process() {
        let store = Arc::new(MemoryStore::with_words(&["the", "like"]));
        let (app, _) = app(&store);

        let response = app
            .oneshot(post_json("/process", r#"{"text": "The cats don't like buses."}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );

        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(
            json["all_words"],
            serde_json::json!(["The", "cats", "don't", "like", "buses"])
        );
        assert_eq!(
            json["uniq_words"],
            serde_json::json!(["the", "cat", "do", "like", "buses"])
        );
        assert_eq!(json["new_words"], serde_json::json!(["cat", "do", "buses"]));
    }

    #[tokio::test]
    async fn test_process_accepts_missing_content_type() {
        let store = Arc::new(MemoryStore::with_words(&[]));
        let (app, _) = app(&store);
        let request = Request::builder()
            .method("POST")
            .uri("/process")
            .body(Body::from(r#"{"text": "cats"}"#))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_process_invalid_json() {
        let store = Arc::new(MemoryStore::with_words(&[]));
        let (app, service) = app(&store);

        let response = app.oneshot(post_json("/process", "{not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_string(response).await, "Invalid JSON");
        assert!(!service.cache().is_loaded());
    }

    #[tokio::test]
    async fn test_download_csv_returns_last_new_words() {
        let store = Arc::new(MemoryStore::with_words(&["dog"]));
        let (app, _) = app(&store);

        let response = app.clone().oneshot(get_request("/download-csv")).await.unwrap();
        assert_eq!(body_string(response).await, "");

        app.clone()
            .oneshot(post_json("/process", r#"{"text": "Dogs chase cats and wolves."}"#))
            .await
            .unwrap();

        let response = app.oneshot(get_request("/download-csv")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"new_vocabulary.csv\""
        );
        assert_eq!(body_string(response).await, "chase\ncat\nand\nwolf\n");
    }

    #[tokio::test]
    async fn test_insert_words_replaces_vocabulary() {
        let store = Arc::new(MemoryStore::with_words(&["old"]));
        let (app, _) = app(&store);

        let response = app
            .clone()
            .oneshot(post_json("/insert-words", r#"["cat", "Dog"]"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "Words added");
        assert_eq!(store.words(), ["cat", "Dog"]);

        let response = app
            .oneshot(post_json("/process", r#"{"text": "cats dogs old"}"#))
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["new_words"], serde_json::json!(["old"]));
    }

    #[tokio::test]
    async fn test_insert_words_errors() {
        let store = Arc::new(MemoryStore::with_words(&["old"]));
        let (app, _) = app(&store);

        let response = app
            .clone()
            .oneshot(post_json("/insert-words", r#"{"words": []}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        store.fail_next(1);
        let response = app
            .clone()
            .oneshot(post_json("/insert-words", r#"["cat"]"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(response).await, "Error writing to DB");
        assert_eq!(store.words(), ["old"]);

        let response = app.oneshot(get_request("/insert-words")).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_preflight() {
        let store = Arc::new(MemoryStore::with_words(&[]));
        let (app, _) = app(&store);
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/insert-words")
            .header(header::ORIGIN, "http://localhost:5173")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

        let methods = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS]
            .to_str()
            .unwrap()
            .to_string();
        for method in ["GET", "POST", "OPTIONS"] {
            assert!(methods.contains(method), "{method} missing from {methods}");
        }
        let allowed = response.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS]
            .to_str()
            .unwrap()
            .to_ascii_lowercase();
        assert!(allowed.contains("content-type"));
    }

    #[tokio::test]
    async fn test_download_csv_sends_cors_origin() {
        let store = Arc::new(MemoryStore::with_words(&[]));
        let (app, _) = app(&store);
        let request = Request::builder()
            .uri("/download-csv")
            .header(header::ORIGIN, "http://localhost:5173")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn test_health() {
        let store = Arc::new(MemoryStore::with_words(&["a", "b"]));
        let (app, service) = app(&store);

        let response = app.clone().oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        service.warm_up().await.unwrap();
        let response = app.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json, serde_json::json!({"status": "ready", "known_words": 2}));
    }
}
