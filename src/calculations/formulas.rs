//! Anthropometric formulas
//!
//! Every function takes metric inputs (kg, cm, years) and performs no range
//! checks. Out-of-domain input yields a mathematically derived value, e.g. a
//! zero height gives an infinite or NaN BMI.

use crate::models::{ActivityLevel, Gender, WeightGoal, GOAL_ADJUSTMENT_KCAL};

use super::units::cm_to_inches;

/// Height in inches that the Devine formula measures from (5 ft)
const DEVINE_BASE_INCHES: f64 = 60.0;
/// Kilograms added per inch over 5 ft
const DEVINE_KG_PER_INCH: f64 = 2.3;
/// Liters of water per kilogram of body weight
const WATER_LITERS_PER_KG: f64 = 0.033;

/// Body Mass Index: weight divided by height in meters squared
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Basal Metabolic Rate in kcal/day (Mifflin-St Jeor)
pub fn calculate_bmr(gender: Gender, weight_kg: f64, height_cm: f64, age: f64) -> f64 {
    let offset = match gender {
        Gender::Male => 5.0,
        Gender::Female => -161.0,
    };
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * age + offset
}

/// Maintenance calories (BMR × activity multiplier) before any goal adjustment
pub fn calculate_maintenance_calories(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.multiplier()
}

/// Daily calorie target: maintenance shifted by the goal's ±500 kcal
pub fn calculate_daily_calories(bmr: f64, activity_level: ActivityLevel, goal: WeightGoal) -> f64 {
    let maintenance = calculate_maintenance_calories(bmr, activity_level);
    match goal {
        WeightGoal::Loss => maintenance - GOAL_ADJUSTMENT_KCAL,
        WeightGoal::Gain => maintenance + GOAL_ADJUSTMENT_KCAL,
        WeightGoal::Maintain => maintenance,
    }
}

/// Ideal body weight in kg (Devine).
///
/// Heights at or below 5 ft clamp to the base weight.
pub fn calculate_ideal_weight(gender: Gender, height_cm: f64) -> f64 {
    let over_five_feet = (cm_to_inches(height_cm) - DEVINE_BASE_INCHES).max(0.0);
    let base = match gender {
        Gender::Male => 50.0,
        Gender::Female => 45.5,
    };
    base + DEVINE_KG_PER_INCH * over_five_feet
}

/// Recommended daily water intake in liters (~33 ml per kg)
pub fn calculate_water_intake(weight_kg: f64) -> f64 {
    weight_kg * WATER_LITERS_PER_KG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_worked_example() {
        let bmi = calculate_bmi(65.0, 170.0);
        assert!((bmi - 22.49).abs() < 0.01);
    }

    #[test]
    fn test_bmi_matches_formula() {
        for (w, h) in [(50.0, 150.0), (80.0, 180.0), (120.5, 201.3)] {
            let expected = w / ((h / 100.0) * (h / 100.0));
            let bmi = calculate_bmi(w, h);
            assert!((bmi - expected).abs() < 1e-12);
            assert!(bmi > 0.0);
        }
    }

    #[test]
    fn test_bmi_zero_height_is_not_finite() {
        assert!(!calculate_bmi(70.0, 0.0).is_finite());
        assert!(calculate_bmi(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_bmr_worked_examples() {
        assert_eq!(calculate_bmr(Gender::Male, 70.0, 175.0, 25.0), 1673.75);
        assert_eq!(calculate_bmr(Gender::Female, 70.0, 175.0, 25.0), 1507.75);
    }

    #[test]
    fn test_bmr_gender_gap() {
        let male = calculate_bmr(Gender::Male, 82.0, 168.0, 41.0);
        let female = calculate_bmr(Gender::Female, 82.0, 168.0, 41.0);
        assert!((male - female - 166.0).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_monotonic() {
        for gender in [Gender::Male, Gender::Female] {
            let base = calculate_bmr(gender, 70.0, 175.0, 30.0);
            assert!(calculate_bmr(gender, 70.5, 175.0, 30.0) > base);
            assert!(calculate_bmr(gender, 70.0, 176.0, 30.0) > base);
            assert!(calculate_bmr(gender, 70.0, 175.0, 31.0) < base);
        }
    }

    #[test]
    fn test_bmr_accepts_meaningless_input() {
        let bmr = calculate_bmr(Gender::Female, 0.0, 0.0, 0.0);
        assert_eq!(bmr, -161.0);
    }

    #[test]
    fn test_daily_calories() {
        let loss = calculate_daily_calories(1674.0, ActivityLevel::ModeratelyActive, WeightGoal::Loss);
        assert!((loss - 2094.7).abs() < 1e-9);

        let maintain =
            calculate_daily_calories(1674.0, ActivityLevel::ModeratelyActive, WeightGoal::Maintain);
        assert!((maintain - 2594.7).abs() < 1e-9);

        let gain = calculate_daily_calories(1674.0, ActivityLevel::ModeratelyActive, WeightGoal::Gain);
        assert!((gain - 3094.7).abs() < 1e-9);
    }

    #[test]
    fn test_maintenance_per_tier() {
        let bmr = 1500.0;
        assert!((calculate_maintenance_calories(bmr, ActivityLevel::Sedentary) - 1800.0).abs() < 1e-9);
        assert!((calculate_maintenance_calories(bmr, ActivityLevel::ExtraActive) - 2850.0).abs() < 1e-9);
    }

    #[test]
    fn test_ideal_weight_at_five_feet() {
        assert_eq!(calculate_ideal_weight(Gender::Male, 152.4), 50.0);
        assert_eq!(calculate_ideal_weight(Gender::Female, 152.4), 45.5);
    }

    #[test]
    fn test_ideal_weight_clamps_below_five_feet() {
        assert_eq!(calculate_ideal_weight(Gender::Male, 120.0), 50.0);
        assert_eq!(calculate_ideal_weight(Gender::Female, 0.0), 45.5);
    }

    #[test]
    fn test_ideal_weight_five_ten() {
        let male = calculate_ideal_weight(Gender::Male, 177.8);
        assert!((male - 73.0).abs() < 1e-9);
        let female = calculate_ideal_weight(Gender::Female, 177.8);
        assert!((female - 68.5).abs() < 1e-9);
    }

    #[test]
    fn test_water_intake() {
        assert!((calculate_water_intake(70.0) - 2.31).abs() < 1e-9);
        assert_eq!(calculate_water_intake(0.0), 0.0);
    }
}
