//! HTTP surface: the comment form page, the analyze action and health.

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

use crate::analysis::{CommentAnalyzer, CommentForm, CommentView};
use crate::error::{AppError, ValidationError};

pub struct AppState {
    pub analyzer: CommentAnalyzer,
}

pub fn build_router(state: Arc<AppState>, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(show_form))
        .route("/analyze", post(analyze_comment))
        .route("/health", get(health))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Template)]
#[template(path = "comment.html")]
struct CommentPage<'a> {
    comment: &'a str,
    sentiment: Option<&'a str>,
    score: Option<&'a str>,
    error: Option<&'a str>,
    validation_error: Option<String>,
}

impl<'a> CommentPage<'a> {
    fn from_view(view: &'a CommentView) -> Self {
        Self {
            comment: view.comment.as_deref().unwrap_or_default(),
            sentiment: view.sentiment(),
            score: view.score(),
            error: view.error(),
            validation_error: None,
        }
    }

    fn rejected(comment: &'a str, reason: &ValidationError) -> Self {
        Self {
            comment,
            sentiment: None,
            score: None,
            error: None,
            validation_error: Some(reason.to_string()),
        }
    }
}

async fn show_form(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let view = state.analyzer.render_form();
    Ok(Html(CommentPage::from_view(&view).render()?))
}

async fn analyze_comment(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CommentForm>,
) -> Result<Response, AppError> {
    let submitted = form.comment.clone();

    let comment = match form.into_comment() {
        Ok(comment) => comment,
        Err(reason) => {
            info!("Rejected comment: {reason}");
            let page = CommentPage::rejected(&submitted, &reason).render()?;
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response());
        }
    };

    let view = state.analyzer.analyze(&comment).await;
    let page = CommentPage::from_view(&view).render()?;

    Ok(Html(page).into_response())
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
