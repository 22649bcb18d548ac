use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

pub const CONNECTIVITY_MESSAGE: &str =
    "Unable to connect to the sentiment analysis service. Please try again later.";
pub const CLIENT_REQUEST_MESSAGE: &str = "Invalid comment format. Please check your input.";
pub const SERVICE_INTERNAL_MESSAGE: &str =
    "Sentiment analysis service encountered an internal error.";
pub const UNKNOWN_REQUEST_MESSAGE: &str = "An error occurred while analyzing the comment.";

/// Why a submitted comment was refused before reaching the sentiment service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The comment field is required.")]
    Required,

    #[error("The comment field must not be greater than {max} characters.")]
    TooLong { max: u64 },
}

/// Failure of a single call to the sentiment service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("sentiment service unreachable: {0}")]
    Connectivity(String),

    #[error("sentiment service rejected the request with status {status}")]
    ClientRequest { status: u16 },

    #[error("sentiment service failed with status {status}")]
    ServiceInternal { status: u16 },

    #[error("sentiment request failed (status {status:?}): {reason}")]
    UnknownRequest { status: Option<u16>, reason: String },
}

impl AnalysisError {
    /// Classifies a non-success HTTP status.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => AnalysisError::ClientRequest { status },
            500 => AnalysisError::ServiceInternal { status },
            _ => AnalysisError::UnknownRequest {
                status: Some(status),
                reason: "unexpected status".to_string(),
            },
        }
    }

    /// Classifies a failure while reading a success response body.
    pub fn from_body_error(e: reqwest::Error, status: u16) -> Self {
        if e.is_timeout() {
            return AnalysisError::Connectivity(e.to_string());
        }

        AnalysisError::UnknownRequest {
            status: Some(status),
            reason: e.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            AnalysisError::Connectivity(_) => None,
            AnalysisError::ClientRequest { status } | AnalysisError::ServiceInternal { status } => {
                Some(*status)
            }
            AnalysisError::UnknownRequest { status, .. } => *status,
        }
    }

    /// The sentence shown to the person who submitted the comment.
    pub fn user_message(&self) -> &'static str {
        match self {
            AnalysisError::Connectivity(_) => CONNECTIVITY_MESSAGE,
            AnalysisError::ClientRequest { .. } => CLIENT_REQUEST_MESSAGE,
            AnalysisError::ServiceInternal { .. } => SERVICE_INTERNAL_MESSAGE,
            AnalysisError::UnknownRequest { .. } => UNKNOWN_REQUEST_MESSAGE,
        }
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(e: reqwest::Error) -> Self {
        // A request that fails before any status arrives (refused, timed out,
        // or the socket closed without a reply) never reached the service.
        if e.is_connect() || e.is_timeout() || (e.is_request() && e.status().is_none()) {
            return AnalysisError::Connectivity(e.to_string());
        }

        match e.status() {
            Some(status) if status.is_client_error() || status.is_server_error() => {
                AnalysisError::from_status(status.as_u16())
            }
            status => AnalysisError::UnknownRequest {
                status: status.map(|s| s.as_u16()),
                reason: e.to_string(),
            },
        }
    }
}

/// Errors that abort page rendering entirely.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("{self}");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
