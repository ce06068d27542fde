use serde::{Deserialize, Serialize};

use crate::planner::constants::{CARB_KCAL_PER_GRAM, FAT_KCAL_PER_GRAM, PROTEIN_KCAL_PER_GRAM};
use crate::planner::round_half_up;

/// Daily macronutrient targets in grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macros {
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
}

impl Macros {
    /// Share of daily calories each macro supplies, in whole percent.
    pub fn split(&self, daily_calories: i64) -> MacroSplit {
        if daily_calories <= 0 {
            return MacroSplit::default();
        }
        let share = |grams: i64, kcal_per_gram: f64| -> i64 {
            round_half_up(grams as f64 * kcal_per_gram / daily_calories as f64 * 100.0)
        };
        MacroSplit {
            protein: share(self.protein, PROTEIN_KCAL_PER_GRAM),
            carbs: share(self.carbs, CARB_KCAL_PER_GRAM),
            fat: share(self.fat, FAT_KCAL_PER_GRAM),
        }
    }
}

/// Percentage of daily calories per macro.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MacroSplit {
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
}

/// Direction of the plan relative to the target weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Goal {
    Lose,
    GainOrMaintain,
}

impl Goal {
    /// Losing only when current weight is strictly above target.
    pub fn from_weights(weight: f64, target_weight: f64) -> Self {
        if weight - target_weight > 0.0 {
            Goal::Lose
        } else {
            Goal::GainOrMaintain
        }
    }

    pub fn is_losing(&self) -> bool {
        matches!(self, Goal::Lose)
    }
}

/// Calorie and macro targets derived from a [`crate::models::BiometricInput`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    /// Daily calorie target in kcal.
    pub daily_calories: i64,

    /// Expected weekly change in kg; negative when losing.
    pub weekly_weight_change: f64,

    pub macros: Macros,
}

impl DietPlan {
    pub fn goal(&self) -> Goal {
        if self.weekly_weight_change < 0.0 {
            Goal::Lose
        } else {
            Goal::GainOrMaintain
        }
    }

    pub fn macro_split(&self) -> MacroSplit {
        self.macros.split(self.daily_calories)
    }
}
