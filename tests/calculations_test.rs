use assert_float_eq::{assert_f64_near, assert_float_absolute_eq};

use diet_planner_rs::DietError;
use diet_planner_rs::models::{ActivityLevel, BiometricForm, BiometricInput, Gender};
use diet_planner_rs::planner::{
    DAILY_CALORIE_ADJUSTMENT, calculate_diet_plan, compute, maintenance_calories, round_half_up,
};

fn make_input(
    weight: f64,
    target: f64,
    height: f64,
    age: u32,
    gender: Gender,
    activity: ActivityLevel,
) -> BiometricInput {
    BiometricInput::new(weight, target, height, age, gender, activity).unwrap()
}

fn make_form(weight: &str, target: &str, height: &str, age: &str) -> BiometricForm {
    BiometricForm {
        weight: weight.to_string(),
        target_weight: target.to_string(),
        height: height.to_string(),
        age: age.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_male_losing_weight() {
    let input = make_input(70.0, 65.0, 175.0, 30, Gender::Male, ActivityLevel::Moderate);
    let plan = compute(&input);

    // BMR 1695.667, maintenance 2628.28385, minus 500
    assert_eq!(plan.daily_calories, 2128);
    assert_f64_near!(plan.weekly_weight_change, -0.5);
    assert_eq!(plan.macros.protein, 154);
    assert_eq!(plan.macros.carbs, 213);
    assert_eq!(plan.macros.fat, 71);
}

#[test]
fn test_female_gaining_weight() {
    let input = make_input(60.0, 65.0, 165.0, 25, Gender::Female, ActivityLevel::Sedentary);
    let plan = compute(&input);

    let maintenance = maintenance_calories(&input);
    assert_eq!(
        plan.daily_calories,
        round_half_up(maintenance + DAILY_CALORIE_ADJUSTMENT)
    );
    // 1405.333 * 1.2 + 500
    assert_eq!(plan.daily_calories, 2186);
    assert_f64_near!(plan.weekly_weight_change, 0.5);
    assert_eq!(plan.macros.protein, 120);
    assert_eq!(plan.macros.carbs, 219);
    assert_eq!(plan.macros.fat, 73);
}

#[test]
fn test_equal_weights_take_surplus_branch() {
    let input = make_input(65.0, 65.0, 170.0, 40, Gender::Male, ActivityLevel::Light);
    let plan = compute(&input);

    let maintenance = maintenance_calories(&input);
    assert_eq!(
        plan.daily_calories,
        round_half_up(maintenance + DAILY_CALORIE_ADJUSTMENT)
    );
    assert_f64_near!(plan.weekly_weight_change, 0.5);
    assert_eq!(plan.macros.protein, 130);
}

#[test]
fn test_calories_never_equal_maintenance() {
    for level in ActivityLevel::ALL {
        for gender in Gender::ALL {
            for (weight, target) in [(80.0, 70.0), (70.0, 70.0), (60.0, 70.0)] {
                let input = make_input(weight, target, 170.0, 35, gender, level);
                let plan = compute(&input);
                let maintenance = maintenance_calories(&input);
                let diff = plan.daily_calories as f64 - maintenance;
                assert!((diff.abs() - DAILY_CALORIE_ADJUSTMENT).abs() <= 0.5);
                assert_eq!(diff < 0.0, weight > target);
            }
        }
    }
}

#[test]
fn test_activity_multipliers_scale_maintenance() {
    let base = make_input(70.0, 70.0, 175.0, 30, Gender::Male, ActivityLevel::Sedentary);
    let sedentary = maintenance_calories(&base);

    let expected = [
        (ActivityLevel::Sedentary, 1.2),
        (ActivityLevel::Light, 1.375),
        (ActivityLevel::Moderate, 1.55),
        (ActivityLevel::Active, 1.725),
    ];
    for (level, mult) in expected {
        let input = BiometricInput {
            activity_level: level,
            ..base
        };
        assert_float_absolute_eq!(maintenance_calories(&input), sedentary / 1.2 * mult, 1e-9);
    }
}

#[test]
fn test_compute_is_idempotent() {
    let input = make_input(92.5, 80.0, 181.0, 52, Gender::Female, ActivityLevel::Active);
    assert_eq!(compute(&input), compute(&input));
}

#[test]
fn test_form_wrapper_matches_compute() {
    let mut form = make_form("70", "65", "175", "30");
    form.activity_level = "moderate".to_string();

    let via_form = calculate_diet_plan(&form).unwrap();
    let direct = compute(&form.validate().unwrap());
    assert_eq!(via_form, direct);
}

#[test]
fn test_missing_field_is_validation_error() {
    let err = calculate_diet_plan(&make_form("70", "", "175", "30")).unwrap_err();
    assert!(err.is_validation());
    assert!(matches!(err, DietError::MissingField("target weight")));
}

#[test]
fn test_unknown_activity_level_is_validation_error() {
    let mut form = make_form("70", "65", "175", "30");
    form.activity_level = "extreme".to_string();

    let err = calculate_diet_plan(&form).unwrap_err();
    assert!(err.is_validation());
    assert!(matches!(err, DietError::UnknownActivityLevel { .. }));
}

#[test]
fn test_non_positive_values_rejected() {
    assert!(calculate_diet_plan(&make_form("0", "65", "175", "30")).is_err());
    assert!(calculate_diet_plan(&make_form("70", "65", "-175", "30")).is_err());
    assert!(calculate_diet_plan(&make_form("70", "65", "175", "-1")).is_err());
    assert!(BiometricInput::new(70.0, 65.0, 175.0, 0, Gender::Male, ActivityLevel::Light).is_err());
}
