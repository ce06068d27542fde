pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod state;
pub mod suggestions;

pub use error::{DietError, Result};
pub use models::{ActivityLevel, BiometricForm, BiometricInput, DietPlan, Gender, Macros};
pub use planner::{calculate_diet_plan, compute};
