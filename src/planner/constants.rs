use crate::models::{ActivityLevel, Gender};

// ─────────────────────────────────────────────────────────────────────────────
// Basal metabolic rate (Harris-Benedict, revised)
// ─────────────────────────────────────────────────────────────────────────────

/// BMR coefficients for one gender: base + w·kg + h·cm − a·years.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmrCoefficients {
    pub base: f64,
    pub per_kg: f64,
    pub per_cm: f64,
    pub per_year: f64,
}

pub const MALE_BMR: BmrCoefficients = BmrCoefficients {
    base: 88.362,
    per_kg: 13.397,
    per_cm: 4.799,
    per_year: 5.677,
};

pub const FEMALE_BMR: BmrCoefficients = BmrCoefficients {
    base: 447.593,
    per_kg: 9.247,
    per_cm: 3.098,
    per_year: 4.330,
};

pub fn bmr_coefficients(gender: Gender) -> BmrCoefficients {
    match gender {
        Gender::Male => MALE_BMR,
        Gender::Female => FEMALE_BMR,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Activity multipliers
// ─────────────────────────────────────────────────────────────────────────────

pub const SEDENTARY_MULT: f64 = 1.2;
pub const LIGHT_MULT: f64 = 1.375;
pub const MODERATE_MULT: f64 = 1.55;
pub const ACTIVE_MULT: f64 = 1.725;

/// Multiplier applied to BMR to get maintenance calories. Exact table, no interpolation.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => SEDENTARY_MULT,
        ActivityLevel::Light => LIGHT_MULT,
        ActivityLevel::Moderate => MODERATE_MULT,
        ActivityLevel::Active => ACTIVE_MULT,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Goal adjustments
// ─────────────────────────────────────────────────────────────────────────────

/// Daily kcal removed when losing, added otherwise.
pub const DAILY_CALORIE_ADJUSTMENT: f64 = 500.0;

/// Fixed weekly change in kg. Not derived from the daily adjustment.
pub const WEEKLY_WEIGHT_CHANGE_KG: f64 = 0.5;

/// Protein grams per kg of current body weight.
pub const PROTEIN_PER_KG_LOSING: f64 = 2.2;
pub const PROTEIN_PER_KG_OTHERWISE: f64 = 2.0;

// ─────────────────────────────────────────────────────────────────────────────
// Macro energy split
// ─────────────────────────────────────────────────────────────────────────────

/// Fraction of daily calories from carbohydrate.
pub const CARB_CALORIE_SHARE: f64 = 0.4;

/// Fraction of daily calories from fat.
pub const FAT_CALORIE_SHARE: f64 = 0.3;

pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
pub const CARB_KCAL_PER_GRAM: f64 = 4.0;
pub const FAT_KCAL_PER_GRAM: f64 = 9.0;
