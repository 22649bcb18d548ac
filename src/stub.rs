//! Stand-in for the sentiment analysis microservice.
//!
//! Speaks the same `/analyze-sentiment/` contract the app calls, backed by the
//! keyword lexicon instead of a model. Used for local runs and client tests.

use axum::{
    http::{HeaderValue, StatusCode},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tracing::{debug, warn};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::lexicon;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CommentRequest {
    #[schema(example = "I love this product")]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SentimentResponse {
    #[schema(example = "POSITIVE")]
    pub label: String,
    #[schema(example = 0.98)]
    pub score: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    pub detail: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(analyze_sentiment),
    components(schemas(CommentRequest, SentimentResponse, ErrorDetail)),
    tags((name = "sentiment", description = "Sentiment Analysis Microservice"))
)]
struct ApiDoc;

/// Classify a comment
#[utoipa::path(
    post,
    path = "/analyze-sentiment/",
    request_body = CommentRequest,
    responses(
        (status = 200, description = "Sentiment verdict", body = SentimentResponse),
        (status = 400, description = "Empty comment", body = ErrorDetail)
    ),
    tag = "sentiment"
)]
pub async fn analyze_sentiment(
    Json(req): Json<CommentRequest>,
) -> Result<Json<SentimentResponse>, (StatusCode, Json<ErrorDetail>)> {
    if req.text.trim().is_empty() {
        warn!("Rejected empty comment");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorDetail {
                detail: "Comment cannot be empty".to_string(),
            }),
        ));
    }

    let verdict = lexicon::score_text(&req.text);
    debug!(
        "Scored comment: {} positive, {} negative -> {}",
        verdict.positive_count, verdict.negative_count, verdict.label
    );

    Ok(Json(SentimentResponse {
        label: verdict.label.to_string(),
        score: verdict.score,
    }))
}

pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8000";

/// Credentialed CORS for one origin. Methods and headers mirror the preflight,
/// since wildcards cannot be combined with credentials.
pub fn cors_layer(allow_origin: &str) -> CorsLayer {
    let origin = allow_origin.parse::<HeaderValue>().unwrap_or_else(|_| {
        warn!("Invalid CORS_ALLOW_ORIGIN {allow_origin:?}, using {DEFAULT_CORS_ORIGIN}");
        HeaderValue::from_static(DEFAULT_CORS_ORIGIN)
    });

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn build_router(cors_allow_origin: &str) -> Router {
    let cors = cors_layer(cors_allow_origin);

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/analyze-sentiment/", post(analyze_sentiment))
        .layer(cors)
}
