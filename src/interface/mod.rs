pub mod prompts;
pub mod render;

pub use prompts::{
    Action, collect_biometrics, parse_allergies, prompt_action, prompt_activity_level,
    prompt_field, prompt_filters, prompt_gender, prompt_yes_no,
};
pub use render::{display_plan, display_suggestions, format_plan};
