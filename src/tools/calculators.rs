//! Calculator Tools
//!
//! One tool per calculator form. Each accepts values as entered (metric or
//! imperial), normalizes them to kg/cm and runs the formula.

use serde::Serialize;

use crate::calculations::{
    bmi_category, calculate_bmi, calculate_bmr, calculate_daily_calories,
    calculate_ideal_weight, calculate_maintenance_calories, calculate_water_intake,
    form_lbs_to_kg, inches_to_cm, kg_to_lbs,
};
use crate::config::ServiceConfig;
use crate::models::{
    ActivityLevel, BmiCategory, Gender, Severity, UnitSystem, WeightGoal,
};

// ============================================================================
// Response Structs
// ============================================================================

/// Response for the BMI calculator
#[derive(Debug, Clone, Serialize)]
pub struct BmiResponse {
    pub bmi: f64,
    pub bmi_rounded: f64,
    pub category: BmiCategory,
    pub label: &'static str,
    pub severity: Severity,
    pub color: &'static str,
    pub description: &'static str,
    pub units: UnitSystem,
    pub weight_kg: f64,
    pub height_cm: f64,
}

/// Response for the BMR calculator
#[derive(Debug, Clone, Serialize)]
pub struct BmrResponse {
    pub bmr: f64,
    /// Whole kcal/day
    pub bmr_rounded: f64,
    pub gender: Gender,
    pub age: i64,
    pub units: UnitSystem,
    pub weight_kg: f64,
    pub height_cm: f64,
}

/// Response for the daily calorie calculator
#[derive(Debug, Clone, Serialize)]
pub struct CalorieResponse {
    pub calories: f64,
    pub calories_rounded: f64,
    pub maintenance: f64,
    pub bmr: f64,
    pub activity_level: ActivityLevel,
    pub activity_label: &'static str,
    pub activity_description: &'static str,
    pub multiplier: f64,
    pub goal: WeightGoal,
    pub goal_label: &'static str,
    pub adjustment: f64,
    pub explanation: &'static str,
}

/// Response for the ideal weight calculator
#[derive(Debug, Clone, Serialize)]
pub struct IdealWeightResponse {
    pub ideal_weight_kg: f64,
    /// Ideal weight in the caller's unit system
    pub ideal_weight: f64,
    pub unit: &'static str,
    pub display: String,
    pub gender: Gender,
    pub units: UnitSystem,
    pub height_cm: f64,
    pub formula: &'static str,
}

/// Response for the water intake calculator
#[derive(Debug, Clone, Serialize)]
pub struct WaterIntakeResponse {
    pub liters: f64,
    pub ml: f64,
    pub weight_kg: f64,
    pub units: UnitSystem,
}

// ============================================================================
// Shared Helpers
// ============================================================================

/// Round to `decimals` places, sending halves toward +∞ (-2.5 → -2, 2.5 → 3)
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    let floor = scaled.floor();
    let rounded = if scaled - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded / factor
}

/// Format with exactly `decimals` places, rounding on the exact decimal value
/// of the float with ties going away from zero ("174.625" → "174.63").
///
/// `format!("{:.2}")` breaks exact ties toward the even digit instead.
pub(crate) fn format_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // Every finite f64 has an exact decimal expansion of at most 1074 places
    let exact = format!("{:.1100}", value.abs());
    let point = exact.find('.').unwrap_or(exact.len());
    let mut digits: Vec<u8> = exact[..point].bytes().collect();
    digits.extend(exact.bytes().skip(point + 1).take(decimals));

    let round_up = exact.as_bytes().get(point + 1 + decimals).is_some_and(|d| *d >= b'5');
    if round_up {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|d| *d as char));
    if decimals > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(|d| *d as char));
    }
    out
}

/// Log a warning for results the formulas produced from out-of-domain input
pub(crate) fn warn_if_not_finite(tool: &str, value: f64) {
    if !value.is_finite() {
        tracing::warn!("{} produced a non-finite result ({}); check the inputs", tool, value);
    }
}

pub(crate) fn parse_gender(gender: &str) -> Result<Gender, String> {
    Gender::from_str(gender)
        .ok_or_else(|| format!("Invalid gender: '{}'. Valid values: male, female", gender))
}

pub(crate) fn parse_activity(activity: &str) -> Result<ActivityLevel, String> {
    ActivityLevel::from_str(activity).ok_or_else(|| {
        format!(
            "Invalid activity level: '{}'. Valid values: sedentary, lightly_active, \
             moderately_active, very_active, extra_active (or 1.2, 1.375, 1.55, 1.725, 1.9)",
            activity
        )
    })
}

pub(crate) fn parse_goal(goal: &str) -> Result<WeightGoal, String> {
    WeightGoal::from_str(goal)
        .ok_or_else(|| format!("Invalid goal: '{}'. Valid values: loss, maintain, gain", goal))
}

/// Weight entered on a form, in kilograms
pub(crate) fn weight_to_kg(units: UnitSystem, weight: f64) -> f64 {
    match units {
        UnitSystem::Metric => weight,
        UnitSystem::Imperial => form_lbs_to_kg(weight),
    }
}

/// Height entered on a form, in centimeters
pub(crate) fn height_to_cm(units: UnitSystem, height: f64) -> f64 {
    match units {
        UnitSystem::Metric => height,
        UnitSystem::Imperial => inches_to_cm(height),
    }
}

// ============================================================================
// Calculator Tool Functions
// ============================================================================

/// Calculate BMI and its category
pub fn bmi_calculator(
    config: &ServiceConfig,
    weight: f64,
    height: f64,
    units: Option<&str>,
) -> Result<BmiResponse, String> {
    let units = config.resolve_units(units)?;
    let weight_kg = weight_to_kg(units, weight);
    let height_cm = height_to_cm(units, height);

    let bmi = calculate_bmi(weight_kg, height_cm);
    warn_if_not_finite("bmi_calculator", bmi);
    let classification = bmi_category(bmi);

    tracing::debug!(bmi, category = classification.label, "calculated BMI");

    Ok(BmiResponse {
        bmi,
        bmi_rounded: round_to(bmi, 1),
        category: classification.category,
        label: classification.label,
        severity: classification.severity,
        color: classification.severity.color(),
        description: classification.description,
        units,
        weight_kg,
        height_cm,
    })
}

/// Calculate basal metabolic rate
pub fn bmr_calculator(
    config: &ServiceConfig,
    gender: &str,
    weight: f64,
    height: f64,
    age: i64,
    units: Option<&str>,
) -> Result<BmrResponse, String> {
    let gender = parse_gender(gender)?;
    let units = config.resolve_units(units)?;
    let weight_kg = weight_to_kg(units, weight);
    let height_cm = height_to_cm(units, height);

    let bmr = calculate_bmr(gender, weight_kg, height_cm, age as f64);
    warn_if_not_finite("bmr_calculator", bmr);

    tracing::debug!(bmr, gender = gender.as_str(), "calculated BMR");

    Ok(BmrResponse {
        bmr,
        bmr_rounded: round_to(bmr, 0),
        gender,
        age,
        units,
        weight_kg,
        height_cm,
    })
}

/// Calculate daily calorie needs from a known BMR
pub fn calorie_calculator(bmr: f64, activity: &str, goal: &str) -> Result<CalorieResponse, String> {
    let activity_level = parse_activity(activity)?;
    let goal = parse_goal(goal)?;

    let maintenance = calculate_maintenance_calories(bmr, activity_level);
    let calories = calculate_daily_calories(bmr, activity_level, goal);
    warn_if_not_finite("calorie_calculator", calories);

    tracing::debug!(
        calories,
        activity = activity_level.as_str(),
        goal = goal.as_str(),
        "calculated daily calories"
    );

    Ok(CalorieResponse {
        calories,
        calories_rounded: round_to(calories, 0),
        maintenance,
        bmr,
        activity_level,
        activity_label: activity_level.display_name(),
        activity_description: activity_level.description(),
        multiplier: activity_level.multiplier(),
        goal,
        goal_label: goal.display_name(),
        adjustment: goal.adjustment(),
        explanation: goal.explanation(),
    })
}

/// Calculate ideal body weight, reported in the caller's unit system
pub fn ideal_weight_calculator(
    config: &ServiceConfig,
    gender: &str,
    height: f64,
    units: Option<&str>,
) -> Result<IdealWeightResponse, String> {
    let gender = parse_gender(gender)?;
    let units = config.resolve_units(units)?;
    let height_cm = height_to_cm(units, height);

    let ideal_weight_kg = calculate_ideal_weight(gender, height_cm);
    warn_if_not_finite("ideal_weight_calculator", ideal_weight_kg);

    let (ideal_weight, unit) = match units {
        UnitSystem::Metric => (ideal_weight_kg, "kg"),
        UnitSystem::Imperial => (kg_to_lbs(ideal_weight_kg), "lbs"),
    };

    Ok(IdealWeightResponse {
        ideal_weight_kg,
        ideal_weight,
        unit,
        display: format!("{} {}", format_fixed(ideal_weight, 1), unit),
        gender,
        units,
        height_cm,
        formula: "Devine",
    })
}

/// Calculate recommended daily water intake
pub fn water_intake_calculator(
    config: &ServiceConfig,
    weight: f64,
    units: Option<&str>,
) -> Result<WaterIntakeResponse, String> {
    let units = config.resolve_units(units)?;
    let weight_kg = weight_to_kg(units, weight);

    let liters = calculate_water_intake(weight_kg);
    warn_if_not_finite("water_intake_calculator", liters);

    Ok(WaterIntakeResponse {
        liters,
        ml: liters * 1000.0,
        weight_kg,
        units,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric() -> ServiceConfig {
        ServiceConfig::default()
    }

    fn imperial() -> ServiceConfig {
        ServiceConfig {
            default_unit_system: UnitSystem::Imperial,
        }
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(22.4913, 1), 22.5);
        assert_eq!(round_to(1673.75, 0), 1674.0);
        assert_eq!(round_to(66.929, 2), 66.93);
    }

    #[test]
    fn test_round_to_halves_go_up() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -2.0);
        assert_eq!(round_to(-0.5, 0), 0.0);
        assert_eq!(round_to(0.49999999999999994, 0), 0.0);
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(66.929, 2), "66.93");
        assert_eq!(format_fixed(170.0, 2), "170.00");
        assert_eq!(format_fixed(73.0, 1), "73.0");
        assert_eq!(format_fixed(9.96, 1), "10.0");
        assert_eq!(format_fixed(1673.75, 0), "1674");
    }

    #[test]
    fn test_format_fixed_exact_ties_round_up() {
        assert_eq!(format_fixed(0.25, 1), "0.3");
        assert_eq!(format_fixed(0.5, 0), "1");
        assert_eq!(format_fixed(2.5, 0), "3");
        assert_eq!(format_fixed(174.625, 2), "174.63");
        assert_eq!(format_fixed(-0.25, 1), "-0.3");
    }

    #[test]
    fn test_format_fixed_uses_exact_binary_value() {
        // 2.675 is stored as 2.67499999...
        assert_eq!(format_fixed(2.675, 2), "2.67");
        assert_eq!(format_fixed(1.005, 2), "1.00");
    }

    #[test]
    fn test_bmi_metric() {
        let r = bmi_calculator(&metric(), 65.0, 170.0, None).unwrap();
        assert!((r.bmi - 22.49).abs() < 0.01);
        assert_eq!(r.bmi_rounded, 22.5);
        assert_eq!(r.label, "Normal Weight");
        assert_eq!(r.color, "green");
        assert_eq!(r.units, UnitSystem::Metric);
    }

    #[test]
    fn test_bmi_imperial_matches_metric() {
        let r = bmi_calculator(&metric(), 143.3, 66.93, Some("imperial")).unwrap();
        assert!((r.weight_kg - 65.0).abs() < 0.01);
        assert!((r.height_cm - 170.0).abs() < 0.01);
        assert!((r.bmi - 22.49).abs() < 0.01);
    }

    #[test]
    fn test_bmi_uses_configured_default_units() {
        let r = bmi_calculator(&imperial(), 143.3, 66.93, None).unwrap();
        assert_eq!(r.units, UnitSystem::Imperial);
        assert!((r.bmi - 22.49).abs() < 0.01);
    }

    #[test]
    fn test_bmi_zero_height_still_returns() {
        let r = bmi_calculator(&metric(), 70.0, 0.0, None).unwrap();
        assert!(!r.bmi.is_finite());
        assert_eq!(r.category, BmiCategory::Obese);
    }

    #[test]
    fn test_bmi_invalid_units() {
        let err = bmi_calculator(&metric(), 70.0, 170.0, Some("stone")).unwrap_err();
        assert!(err.contains("stone"));
    }

    #[test]
    fn test_bmr_calculator() {
        let r = bmr_calculator(&metric(), "male", 70.0, 175.0, 25, None).unwrap();
        assert_eq!(r.bmr, 1673.75);
        assert_eq!(r.bmr_rounded, 1674.0);
        assert_eq!(r.gender, Gender::Male);

        let r = bmr_calculator(&metric(), "Female", 70.0, 175.0, 25, Some("metric")).unwrap();
        assert_eq!(r.bmr, 1507.75);
    }

    #[test]
    fn test_bmr_invalid_gender() {
        let err = bmr_calculator(&metric(), "robot", 70.0, 175.0, 25, None).unwrap_err();
        assert!(err.contains("Invalid gender"));
    }

    #[test]
    fn test_calorie_calculator() {
        let r = calorie_calculator(1674.0, "moderately_active", "loss").unwrap();
        assert!((r.calories - 2094.7).abs() < 1e-9);
        assert!((r.maintenance - 2594.7).abs() < 1e-9);
        assert_eq!(r.calories_rounded, 2095.0);
        assert_eq!(r.adjustment, -500.0);
        assert_eq!(r.activity_label, "Moderately Active");
        assert!(r.explanation.contains("deficit"));
    }

    #[test]
    fn test_calorie_calculator_accepts_multiplier() {
        let r = calorie_calculator(1500.0, "1.2", "maintain").unwrap();
        assert_eq!(r.activity_level, ActivityLevel::Sedentary);
        assert!((r.calories - 1800.0).abs() < 1e-9);
    }

    #[test]
    fn test_calorie_calculator_rejects_unknown() {
        assert!(calorie_calculator(1500.0, "1.3", "maintain").is_err());
        assert!(calorie_calculator(1500.0, "sedentary", "cut").is_err());
    }

    #[test]
    fn test_ideal_weight_metric() {
        let r = ideal_weight_calculator(&metric(), "male", 177.8, None).unwrap();
        assert!((r.ideal_weight_kg - 73.0).abs() < 1e-9);
        assert_eq!(r.unit, "kg");
        assert_eq!(r.display, "73.0 kg");
    }

    #[test]
    fn test_ideal_weight_imperial_reports_lbs() {
        let r = ideal_weight_calculator(&metric(), "female", 60.0, Some("imperial")).unwrap();
        assert_eq!(r.ideal_weight_kg, 45.5);
        assert_eq!(r.unit, "lbs");
        assert!((r.ideal_weight - 100.31).abs() < 0.01);
        assert_eq!(r.display, "100.3 lbs");
    }

    #[test]
    fn test_water_intake() {
        let r = water_intake_calculator(&metric(), 70.0, None).unwrap();
        assert!((r.liters - 2.31).abs() < 1e-9);
        assert!((r.ml - 2310.0).abs() < 1e-6);
    }
}
