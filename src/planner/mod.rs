pub mod calculations;
pub mod constants;

pub use calculations::{
    basal_metabolic_rate, calculate_diet_plan, calculate_macros, compute, daily_calorie_target,
    maintenance_calories, round_half_up,
};
pub use constants::*;
