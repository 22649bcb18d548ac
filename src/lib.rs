//! Comment form backed by a remote sentiment analysis service.
//!
//! `GET /` renders the form, `POST /analyze` validates the comment, forwards it
//! once to `<SENTIMENT_API_URL>/analyze-sentiment/` and renders the verdict or a
//! mapped error message into the same page.

pub mod analysis;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod sentiment;
pub mod stub;
pub mod web;
