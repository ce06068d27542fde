use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::{DietError, Result};

/// Minimum similarity for an activity level "did you mean" hint.
const HINT_SIMILARITY: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = DietError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "" => Err(DietError::MissingField("gender")),
            _ => Err(DietError::UnknownGender(s.trim().to_string())),
        }
    }
}

/// How active the person is day to day.
///
/// Each level maps to a fixed multiplier on BMR, see
/// [`crate::planner::constants::activity_multiplier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 4] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
        }
    }

    /// Human-readable label for prompts.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Light Exercise",
            ActivityLevel::Moderate => "Moderate Exercise",
            ActivityLevel::Active => "Active",
        }
    }

    /// Closest known level name for a misspelled input, if any is close enough.
    pub fn closest_match(input: &str) -> Option<&'static str> {
        let input = input.trim().to_lowercase();
        ActivityLevel::ALL
            .iter()
            .map(|level| (level.as_str(), jaro_winkler(level.as_str(), &input)))
            .filter(|(_, score)| *score >= HINT_SIMILARITY)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(name, _)| name)
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = DietError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        ActivityLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == normalized)
            .ok_or_else(|| {
                if normalized.is_empty() {
                    DietError::MissingField("activity level")
                } else {
                    DietError::UnknownActivityLevel {
                        value: s.trim().to_string(),
                        hint: ActivityLevel::closest_match(&normalized).map(str::to_string),
                    }
                }
            })
    }
}

/// Validated body metrics, ready for calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiometricInput {
    /// Current weight in kg.
    pub weight: f64,

    /// Target weight in kg.
    pub target_weight: f64,

    /// Height in cm.
    pub height: f64,

    /// Age in whole years.
    pub age: u32,

    pub gender: Gender,

    pub activity_level: ActivityLevel,
}

impl BiometricInput {
    /// Build a validated input from already-typed values.
    pub fn new(
        weight: f64,
        target_weight: f64,
        height: f64,
        age: u32,
        gender: Gender,
        activity_level: ActivityLevel,
    ) -> Result<Self> {
        check_positive("weight", weight)?;
        check_positive("target weight", target_weight)?;
        check_positive("height", height)?;
        if age == 0 {
            return Err(DietError::InvalidField {
                field: "age",
                reason: "must be a positive whole number".to_string(),
            });
        }

        Ok(Self {
            weight,
            target_weight,
            height,
            age,
            gender,
            activity_level,
        })
    }

    /// Weight still to lose (positive) or gain (negative), in kg.
    pub fn weight_diff(&self) -> f64 {
        self.weight - self.target_weight
    }
}

/// Raw form fields exactly as the user typed them.
///
/// Blank numeric fields count as missing. Gender and activity level start at
/// `male` and `sedentary`, the same initial selection the form offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BiometricForm {
    pub weight: String,
    pub target_weight: String,
    pub height: String,
    pub age: String,
    pub gender: String,
    pub activity_level: String,
}

impl Default for BiometricForm {
    fn default() -> Self {
        Self {
            weight: String::new(),
            target_weight: String::new(),
            height: String::new(),
            age: String::new(),
            gender: Gender::Male.as_str().to_string(),
            activity_level: ActivityLevel::Sedentary.as_str().to_string(),
        }
    }
}

impl BiometricForm {
    /// Check every field and produce a typed input.
    ///
    /// Required numeric fields are checked for presence first, in form order,
    /// so a half-filled form reports the first gap rather than a parse error.
    pub fn validate(&self) -> Result<BiometricInput> {
        let fields = [
            ("weight", &self.weight),
            ("target weight", &self.target_weight),
            ("height", &self.height),
            ("age", &self.age),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(DietError::MissingField(*name));
        }

        let weight = parse_measure("weight", &self.weight)?;
        let target_weight = parse_measure("target weight", &self.target_weight)?;
        let height = parse_measure("height", &self.height)?;
        let age = parse_age(&self.age)?;
        let gender: Gender = self.gender.parse()?;
        let activity_level: ActivityLevel = self.activity_level.parse()?;

        BiometricInput::new(weight, target_weight, height, age, gender, activity_level)
    }

    /// Whether every required numeric field has something in it.
    pub fn is_complete(&self) -> bool {
        [&self.weight, &self.target_weight, &self.height, &self.age]
            .iter()
            .all(|v| !v.trim().is_empty())
    }
}

fn parse_measure(field: &'static str, raw: &str) -> Result<f64> {
    let value: f64 = raw.trim().parse().map_err(|_| DietError::InvalidField {
        field,
        reason: format!("'{}' is not a number", raw.trim()),
    })?;
    check_positive(field, value)?;
    Ok(value)
}

fn parse_age(raw: &str) -> Result<u32> {
    raw.trim().parse::<u32>().map_err(|_| DietError::InvalidField {
        field: "age",
        reason: format!("'{}' is not a positive whole number", raw.trim()),
    })
}

fn check_positive(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(DietError::InvalidField {
            field,
            reason: "must be a positive number".to_string(),
        });
    }
    Ok(())
}
