use std::fmt::Write;

use crate::models::{DietPlan, Goal};

/// Format a plan the way it is shown after calculation.
pub fn format_plan(plan: &DietPlan) -> String {
    let split = plan.macro_split();
    let direction = match plan.goal() {
        Goal::Lose => "losing",
        Goal::GainOrMaintain => "gaining / maintaining",
    };

    let mut out = String::new();
    let _ = writeln!(out, "=== Your Diet Plan ===");
    let _ = writeln!(out);
    let _ = writeln!(out, "Daily Calories: {} kcal", plan.daily_calories);
    let _ = writeln!(
        out,
        "Weekly Weight Change: {:+} kg ({})",
        plan.weekly_weight_change, direction
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "--- Recommended Macros ---");
    let rows = [
        ("Protein", plan.macros.protein, split.protein),
        ("Carbs", plan.macros.carbs, split.carbs),
        ("Fat", plan.macros.fat, split.fat),
    ];
    for (label, grams, percent) in rows {
        let _ = writeln!(out, "{:<8} {:>5}g {:>4}%", label, grams, percent);
    }
    out
}

/// Display a plan.
pub fn display_plan(plan: &DietPlan) {
    println!();
    print!("{}", format_plan(plan));
    println!();
}

pub fn display_suggestions(text: &str) {
    println!();
    println!("=== Personalized Meal Suggestions ===");
    println!();
    println!("{}", text.trim_end());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Macros;

    #[test]
    fn test_format_plan() {
        let plan = DietPlan {
            daily_calories: 2128,
            weekly_weight_change: -0.5,
            macros: Macros {
                protein: 154,
                carbs: 213,
                fat: 71,
            },
        };
        let text = format_plan(&plan);
        assert!(text.contains("Daily Calories: 2128 kcal"));
        assert!(text.contains("Weekly Weight Change: -0.5 kg (losing)"));
        // 154 * 4 / 2128 = 28.9%
        assert!(text.contains("Protein    154g   29%"));
    }
}
