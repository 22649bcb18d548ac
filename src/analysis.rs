//! Comment analysis: validate, ask the sentiment service once, map the outcome
//! into the view the page renders.

use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

use crate::error::ValidationError;
use crate::sentiment::SentimentService;

pub const MAX_COMMENT_CHARS: u64 = 255;

/// Urlencoded body of `POST /analyze`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CommentForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 255))]
    pub comment: String,
}

impl CommentForm {
    /// Returns the trimmed comment text when it is non-empty and at most 255
    /// characters. Surrounding whitespace is dropped before validation, so a
    /// blank submission counts as missing.
    pub fn into_comment(mut self) -> Result<String, ValidationError> {
        self.comment = self.comment.trim().to_string();

        match self.validate() {
            Ok(()) => Ok(self.comment),
            Err(_) if self.comment.is_empty() => Err(ValidationError::Required),
            Err(_) => Err(ValidationError::TooLong {
                max: MAX_COMMENT_CHARS,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Sentiment { sentiment: String, score: String },
    Error { error: String },
}

/// What the comment page shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommentView {
    pub comment: Option<String>,
    pub outcome: Option<Outcome>,
}

impl CommentView {
    pub fn sentiment(&self) -> Option<&str> {
        match &self.outcome {
            Some(Outcome::Sentiment { sentiment, .. }) => Some(sentiment),
            _ => None,
        }
    }

    pub fn score(&self) -> Option<&str> {
        match &self.outcome {
            Some(Outcome::Sentiment { score, .. }) => Some(score),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Some(Outcome::Error { error }) => Some(error),
            _ => None,
        }
    }
}

pub fn format_score(score: f64) -> String {
    format!("{score:.2}")
}

#[derive(Clone)]
pub struct CommentAnalyzer {
    service: Arc<dyn SentimentService>,
}

impl CommentAnalyzer {
    pub fn new(service: Arc<dyn SentimentService>) -> Self {
        Self { service }
    }

    pub fn render_form(&self) -> CommentView {
        CommentView::default()
    }

    /// Expects a comment that already passed [`CommentForm::into_comment`].
    pub async fn analyze(&self, comment: &str) -> CommentView {
        let outcome = match self.service.analyze(comment).await {
            Ok(result) => Outcome::Sentiment {
                sentiment: result.label,
                score: format_score(result.score),
            },
            Err(e) => Outcome::Error {
                error: e.user_message().to_string(),
            },
        };

        CommentView {
            comment: Some(comment.to_string()),
            outcome: Some(outcome),
        }
    }
}
