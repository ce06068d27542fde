mod biometrics;
mod plan;

pub use biometrics::{ActivityLevel, BiometricForm, BiometricInput, Gender};
pub use plan::{DietPlan, Goal, MacroSplit, Macros};
