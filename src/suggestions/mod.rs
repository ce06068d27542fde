//! Meal suggestions from an external chat-completion service.
//!
//! The service returns free text; nothing here interprets it.

mod client;
mod prompt;
mod types;

use reqwest::StatusCode;
use thiserror::Error;

pub use client::{DeepSeekClient, FALLBACK_MESSAGE, MealSuggester, fetch_or_fallback};
pub use prompt::{SYSTEM_PROMPT, user_prompt};
pub use types::{SuggestionFilters, SuggestionRequest};

#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service returned {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("malformed response: {0}")]
    Parse(serde_json::Error),

    #[error("response contained no suggestions")]
    EmptyResponse,
}
