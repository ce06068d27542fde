use clap::{Args, Parser, Subcommand};

use crate::models::BiometricForm;
use crate::suggestions::SuggestionFilters;

/// Diet Planner: calorie and macro targets from body metrics, with optional meal suggestions.
#[derive(Parser, Debug)]
#[command(name = "diet-planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Chat-completion base URL (overrides DEEPSEEK_API_URL).
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Model name (overrides DEEPSEEK_MODEL).
    #[arg(long, global = true)]
    pub model: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fill in the form interactively, then view the plan and fetch suggestions.
    Interactive,

    /// Calculate a plan from flags without prompting.
    Calc(CalcArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CalcArgs {
    /// Current weight in kg.
    #[arg(long)]
    pub weight: Option<String>,

    /// Target weight in kg.
    #[arg(long)]
    pub target_weight: Option<String>,

    /// Height in cm.
    #[arg(long)]
    pub height: Option<String>,

    /// Age in years.
    #[arg(long)]
    pub age: Option<String>,

    /// male or female.
    #[arg(long, default_value = "male")]
    pub gender: String,

    /// sedentary, light, moderate or active.
    #[arg(long, default_value = "sedentary")]
    pub activity: String,

    /// Print the plan as JSON.
    #[arg(long)]
    pub json: bool,

    /// Also fetch meal suggestions for the plan.
    #[arg(long)]
    pub suggest: bool,

    #[command(flatten)]
    pub filters: FilterArgs,
}

#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Dietary preference (vegetarian, vegan, pescatarian, any).
    #[arg(long = "diet", default_value = "any")]
    pub dietary_preference: String,

    /// Ingredient to exclude; repeat for several.
    #[arg(long = "allergy")]
    pub allergies: Vec<String>,

    /// Meal type (breakfast, lunch, dinner, snacks, all).
    #[arg(long, default_value = "all")]
    pub meal_type: String,

    /// Cuisine preference.
    #[arg(long, default_value = "any")]
    pub cuisine: String,
}

impl From<FilterArgs> for SuggestionFilters {
    fn from(args: FilterArgs) -> Self {
        Self {
            dietary_preference: args.dietary_preference,
            allergies: args.allergies,
            meal_type: args.meal_type,
            cuisine: args.cuisine,
        }
    }
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive
    }
}

impl Command {
    pub fn is_interactive(&self) -> bool {
        matches!(self, Command::Interactive)
    }
}

impl CalcArgs {
    /// Flags as form fields; absent flags stay blank and fail validation.
    pub fn to_form(&self) -> BiometricForm {
        BiometricForm {
            weight: self.weight.clone().unwrap_or_default(),
            target_weight: self.target_weight.clone().unwrap_or_default(),
            height: self.height.clone().unwrap_or_default(),
            age: self.age.clone().unwrap_or_default(),
            gender: self.gender.clone(),
            activity_level: self.activity.clone(),
        }
    }
}
