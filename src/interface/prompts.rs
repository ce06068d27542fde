use dialoguer::{Confirm, Input, Select};

use crate::error::Result;
use crate::models::{ActivityLevel, BiometricForm, Gender};
use crate::suggestions::SuggestionFilters;

pub const DIETARY_PREFERENCES: [&str; 4] = ["any", "vegetarian", "vegan", "pescatarian"];
pub const MEAL_TYPES: [&str; 5] = ["all", "breakfast", "lunch", "dinner", "snacks"];

/// What to do after a plan has been shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    GetSuggestions,
    EditInputs,
    Reset,
    Quit,
}

impl Action {
    const ALL: [Action; 4] = [
        Action::GetSuggestions,
        Action::EditInputs,
        Action::Reset,
        Action::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            Action::GetSuggestions => "Get meal suggestions",
            Action::EditInputs => "Edit inputs and recalculate",
            Action::Reset => "Reset",
            Action::Quit => "Quit",
        }
    }
}

/// Prompt for a numeric form field, keeping the raw text.
///
/// Blank input is allowed here; validation reports it as missing.
pub fn prompt_field(label: &str, current: &str) -> Result<String> {
    let mut input = Input::<String>::new()
        .with_prompt(label)
        .allow_empty(true);
    if !current.is_empty() {
        input = input.default(current.to_string());
    }
    Ok(input.interact_text()?.trim().to_string())
}

pub fn prompt_gender(current: &str) -> Result<Gender> {
    let labels: Vec<&str> = Gender::ALL.iter().map(|g| g.label()).collect();
    let default = Gender::ALL
        .iter()
        .position(|g| g.as_str() == current)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Gender")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(Gender::ALL[selection])
}

pub fn prompt_activity_level(current: &str) -> Result<ActivityLevel> {
    let labels: Vec<&str> = ActivityLevel::ALL.iter().map(|l| l.label()).collect();
    let default = ActivityLevel::ALL
        .iter()
        .position(|l| l.as_str() == current)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Activity Level")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(ActivityLevel::ALL[selection])
}

/// Walk the user through every form field, prefilled with current values.
pub fn collect_biometrics(form: &mut BiometricForm) -> Result<()> {
    form.weight = prompt_field("Current Weight (kg)", &form.weight)?;
    form.target_weight = prompt_field("Target Weight (kg)", &form.target_weight)?;
    form.height = prompt_field("Height (cm)", &form.height)?;
    form.age = prompt_field("Age", &form.age)?;
    form.gender = prompt_gender(&form.gender)?.as_str().to_string();
    form.activity_level = prompt_activity_level(&form.activity_level)?
        .as_str()
        .to_string();
    Ok(())
}

/// Split a comma-separated allergy list, dropping blanks.
pub fn parse_allergies(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn select_from(prompt: &str, options: &[&str], current: &str) -> Result<String> {
    let default = options.iter().position(|o| *o == current).unwrap_or(0);
    let selection = Select::new()
        .with_prompt(prompt)
        .items(options)
        .default(default)
        .interact()?;
    Ok(options[selection].to_string())
}

/// Prompt for the optional meal suggestion filters.
pub fn prompt_filters(current: &SuggestionFilters) -> Result<SuggestionFilters> {
    let dietary_preference =
        select_from("Dietary preference", &DIETARY_PREFERENCES, &current.dietary_preference)?;

    let allergies: String = Input::new()
        .with_prompt("Allergies to exclude (comma-separated, Enter for none)")
        .with_initial_text(current.allergies.join(", "))
        .allow_empty(true)
        .interact_text()?;

    let meal_type = select_from("Meal type", &MEAL_TYPES, &current.meal_type)?;

    let cuisine: String = Input::new()
        .with_prompt("Cuisine preference")
        .default(current.cuisine.clone())
        .interact_text()?;

    Ok(SuggestionFilters {
        dietary_preference,
        allergies: parse_allergies(&allergies),
        meal_type,
        cuisine: cuisine.trim().to_string(),
    })
}

pub fn prompt_action() -> Result<Action> {
    let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();
    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Action::ALL[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
