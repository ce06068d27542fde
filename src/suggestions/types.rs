use serde::{Deserialize, Serialize};

use crate::models::{DietPlan, Macros};

/// Optional preferences forwarded to the meal suggestion prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionFilters {
    /// e.g. vegetarian, vegan, pescatarian.
    pub dietary_preference: String,

    /// Ingredients to exclude.
    pub allergies: Vec<String>,

    /// breakfast, lunch, dinner, snacks or all.
    pub meal_type: String,

    pub cuisine: String,
}

impl Default for SuggestionFilters {
    fn default() -> Self {
        Self {
            dietary_preference: "any".to_string(),
            allergies: Vec::new(),
            meal_type: "all".to_string(),
            cuisine: "any".to_string(),
        }
    }
}

/// Everything the suggestion service needs to know about a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRequest {
    pub daily_calories: i64,
    pub macros: Macros,
    pub filters: SuggestionFilters,
}

impl SuggestionRequest {
    pub fn from_plan(plan: &DietPlan, filters: SuggestionFilters) -> Self {
        Self {
            daily_calories: plan.daily_calories,
            macros: plan.macros,
            filters,
        }
    }
}

// Chat-completion wire format (OpenAI compatible).

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorDetail {
    pub message: String,
}
