use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use comment_sentiment::{
    analysis::CommentAnalyzer,
    config::Config,
    sentiment::HttpSentimentClient,
    stub,
    web::{self, AppState},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceExt;

async fn spawn_stub() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, stub::build_router("http://localhost:8000"))
            .await
            .unwrap();
    });
    format!("http://{addr}")
}

fn app(base_url: &str) -> Router {
    let config = Config::default();
    let client =
        HttpSentimentClient::new(base_url, config.request_timeout, config.connect_timeout).unwrap();
    let state = Arc::new(AppState {
        analyzer: CommentAnalyzer::new(Arc::new(client)),
    });
    web::build_router(state, &config.static_dir)
}

async fn submit(router: Router, comment: &str) -> (StatusCode, String) {
    let body = format!("comment={}", comment.replace(' ', "+"));
    let response = router
        .oneshot(
            Request::post("/analyze")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn comment_is_scored_by_the_stub() {
    let base = spawn_stub().await;

    let (status, html) = submit(app(&base), "awful and broken").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("NEGATIVE"));
    assert!(html.contains("1.00"));
    assert!(html.contains("awful and broken"));
}

#[tokio::test]
async fn whitespace_comment_never_reaches_the_stub() {
    let base = spawn_stub().await;

    let (status, html) = submit(app(&base), "   ").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(html.contains("The comment field is required."));
    assert!(!html.contains("Invalid comment format"));
}

#[tokio::test]
async fn unreachable_service_renders_connectivity_message() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (status, html) = submit(app(&format!("http://{addr}")), "hello there").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(
        "Unable to connect to the sentiment analysis service. Please try again later."
    ));
    assert!(html.contains("hello there"));
}
