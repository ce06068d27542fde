use thiserror::Error;

use crate::suggestions::SuggestionError;

#[derive(Debug, Error)]
pub enum DietError {
    #[error("Please fill all required fields ({0} is missing)")]
    MissingField(&'static str),

    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Unknown gender: {0} (expected male or female)")]
    UnknownGender(String),

    #[error("Unknown activity level: {value}{}", did_you_mean(.hint))]
    UnknownActivityLevel { value: String, hint: Option<String> },

    #[error("No diet plan calculated yet")]
    NoPlan,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Suggestion error: {0}")]
    Suggestion(#[from] SuggestionError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DietError {
    /// Whether this error came from checking user input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DietError::MissingField(_)
                | DietError::InvalidField { .. }
                | DietError::UnknownGender(_)
                | DietError::UnknownActivityLevel { .. }
        )
    }
}

fn did_you_mean(hint: &Option<String>) -> String {
    hint.as_ref()
        .map(|h| format!(" (did you mean '{h}'?)"))
        .unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, DietError>;
