use crate::suggestions::types::{ChatMessage, SuggestionRequest};

pub const SYSTEM_PROMPT: &str = "You are a professional nutritionist creating meal plans.";

/// User message describing the plan and filters.
pub fn user_prompt(request: &SuggestionRequest) -> String {
    let filters = &request.filters;
    let macros = &request.macros;
    format!(
        "Create a {} meal plan for {} with {} calories.\n\
         Macros: Protein {}g, Carbs {}g, Fat {}g.\n\
         Exclude: {}.\n\
         Cuisine preference: {}",
        filters.dietary_preference,
        filters.meal_type,
        request.daily_calories,
        macros.protein,
        macros.carbs,
        macros.fat,
        filters.allergies.join(", "),
        filters.cuisine,
    )
}

pub(crate) fn build_messages(request: &SuggestionRequest) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(user_prompt(request)),
    ]
}
