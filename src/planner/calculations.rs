use tracing::debug;

use crate::error::Result;
use crate::models::{BiometricForm, BiometricInput, DietPlan, Gender, Goal, Macros};
use crate::planner::constants::*;

/// Round to the nearest integer, halves toward positive infinity.
///
/// 0.5 -> 1, 2.5 -> 3, -2.5 -> -2.
pub fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}

/// Basal metabolic rate in kcal/day.
pub fn basal_metabolic_rate(gender: Gender, weight: f64, height: f64, age: u32) -> f64 {
    let c = bmr_coefficients(gender);
    c.base + c.per_kg * weight + c.per_cm * height - c.per_year * age as f64
}

/// BMR scaled by the activity multiplier.
pub fn maintenance_calories(input: &BiometricInput) -> f64 {
    let bmr = basal_metabolic_rate(input.gender, input.weight, input.height, input.age);
    bmr * activity_multiplier(input.activity_level)
}

/// Unrounded daily calorie target: maintenance minus the adjustment when
/// losing, plus it otherwise.
pub fn daily_calorie_target(maintenance: f64, goal: Goal) -> f64 {
    match goal {
        Goal::Lose => maintenance - DAILY_CALORIE_ADJUSTMENT,
        Goal::GainOrMaintain => maintenance + DAILY_CALORIE_ADJUSTMENT,
    }
}

/// Macro grams from body weight and the unrounded calorie target.
pub fn calculate_macros(weight: f64, daily_calories: f64, goal: Goal) -> Macros {
    let protein_per_kg = if goal.is_losing() {
        PROTEIN_PER_KG_LOSING
    } else {
        PROTEIN_PER_KG_OTHERWISE
    };

    Macros {
        protein: round_half_up(weight * protein_per_kg),
        carbs: round_half_up(daily_calories * CARB_CALORIE_SHARE / CARB_KCAL_PER_GRAM),
        fat: round_half_up(daily_calories * FAT_CALORIE_SHARE / FAT_KCAL_PER_GRAM),
    }
}

/// Compute a diet plan from validated input. Pure and deterministic.
pub fn compute(input: &BiometricInput) -> DietPlan {
    let maintenance = maintenance_calories(input);
    let goal = Goal::from_weights(input.weight, input.target_weight);
    let daily_calories = daily_calorie_target(maintenance, goal);

    debug!(
        maintenance,
        weight_diff = input.weight_diff(),
        ?goal,
        daily_calories,
        "computed calorie target"
    );

    let weekly_weight_change = if goal.is_losing() {
        -WEEKLY_WEIGHT_CHANGE_KG
    } else {
        WEEKLY_WEIGHT_CHANGE_KG
    };

    DietPlan {
        daily_calories: round_half_up(daily_calories),
        weekly_weight_change,
        macros: calculate_macros(input.weight, daily_calories, goal),
    }
}

/// Validate raw form fields, then compute.
///
/// No plan is produced if any field is missing or invalid.
pub fn calculate_diet_plan(form: &BiometricForm) -> Result<DietPlan> {
    let input = form.validate()?;
    Ok(compute(&input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityLevel;

    fn male_input() -> BiometricInput {
        BiometricInput::new(70.0, 65.0, 175.0, 30, Gender::Male, ActivityLevel::Moderate)
            .unwrap()
    }

    #[test]
    fn test_round_half_up_midpoints() {
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(0.49), 0);
        assert_eq!(round_half_up(2228.63), 2229);
        assert_eq!(round_half_up(1.5), 2);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.6), -3);
    }

    #[test]
    fn test_bmr_male() {
        let bmr = basal_metabolic_rate(Gender::Male, 70.0, 175.0, 30);
        // 88.362 + 13.397*70 + 4.799*175 - 5.677*30
        assert!((bmr - 1695.667).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_female() {
        // 447.593 + 9.247*60 + 3.098*165 - 4.330*25
        let bmr = basal_metabolic_rate(Gender::Female, 60.0, 165.0, 25);
        assert!((bmr - 1405.333).abs() < 1e-9);
    }

    #[test]
    fn test_maintenance_uses_multiplier() {
        let maintenance = maintenance_calories(&male_input());
        assert!((maintenance - 2628.28385).abs() < 1e-6);
    }

    #[test]
    fn test_macros_use_unrounded_calories() {
        let macros = calculate_macros(70.0, 2128.28385, Goal::Lose);
        assert_eq!(macros.protein, 154);
        assert_eq!(macros.carbs, 213);
        assert_eq!(macros.fat, 71);

        // 1004.6 kcal rounds to 1005, which would give 100.5 -> 101 g carbs
        let macros = calculate_macros(50.0, 1004.6, Goal::GainOrMaintain);
        assert_eq!(macros.protein, 100);
        assert_eq!(macros.carbs, 100);
        assert_eq!(macros.fat, 33);
    }

    #[test]
    fn test_daily_target_direction() {
        assert_eq!(daily_calorie_target(2000.0, Goal::Lose), 1500.0);
        assert_eq!(daily_calorie_target(2000.0, Goal::GainOrMaintain), 2500.0);
    }
}
