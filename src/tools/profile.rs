//! Body Profile Tool
//!
//! Runs every calculator over a single set of measurements.

use serde::{Deserialize, Serialize};

use crate::calculations::{
    bmi_category, calculate_bmi, calculate_bmr, calculate_daily_calories,
    calculate_ideal_weight, calculate_maintenance_calories, calculate_water_intake,
};
use crate::config::ServiceConfig;
use crate::models::{ActivityLevel, Gender, UnitSystem, WeightGoal};

use super::calculators::{
    height_to_cm, parse_activity, parse_gender, parse_goal, round_to, warn_if_not_finite,
    weight_to_kg,
};

/// Inputs for a body profile
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileInput {
    pub gender: String,
    pub weight: f64,
    pub height: f64,
    pub age: i64,
    pub activity: Option<String>,
    pub goal: Option<String>,
    pub units: Option<String>,
}

/// BMI section of a body profile
#[derive(Debug, Clone, Serialize)]
pub struct ProfileBmi {
    pub value: f64,
    pub rounded: f64,
    pub label: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

/// Combined calculator results
#[derive(Debug, Clone, Serialize)]
pub struct BodyProfileResponse {
    pub gender: Gender,
    pub age: i64,
    pub units: UnitSystem,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub bmi: ProfileBmi,
    pub bmr: f64,
    pub activity_level: ActivityLevel,
    pub maintenance_calories: f64,
    pub goal: WeightGoal,
    pub daily_calories: f64,
    pub ideal_weight_kg: f64,
    pub water_liters: f64,
}

/// Build a full profile; activity defaults to sedentary and goal to maintain
pub fn body_profile(config: &ServiceConfig, input: &ProfileInput) -> Result<BodyProfileResponse, String> {
    let gender = parse_gender(&input.gender)?;
    let activity_level = match input.activity.as_deref() {
        Some(a) => parse_activity(a)?,
        None => ActivityLevel::default(),
    };
    let goal = match input.goal.as_deref() {
        Some(g) => parse_goal(g)?,
        None => WeightGoal::default(),
    };
    let units = config.resolve_units(input.units.as_deref())?;

    let weight_kg = weight_to_kg(units, input.weight);
    let height_cm = height_to_cm(units, input.height);

    let bmi = calculate_bmi(weight_kg, height_cm);
    warn_if_not_finite("body_profile", bmi);
    let classification = bmi_category(bmi);

    let bmr = calculate_bmr(gender, weight_kg, height_cm, input.age as f64);

    tracing::debug!(bmi, bmr, "calculated body profile");

    Ok(BodyProfileResponse {
        gender,
        age: input.age,
        units,
        weight_kg,
        height_cm,
        bmi: ProfileBmi {
            value: bmi,
            rounded: round_to(bmi, 1),
            label: classification.label,
            color: classification.severity.color(),
            description: classification.description,
        },
        bmr,
        activity_level,
        maintenance_calories: calculate_maintenance_calories(bmr, activity_level),
        goal,
        daily_calories: calculate_daily_calories(bmr, activity_level, goal),
        ideal_weight_kg: calculate_ideal_weight(gender, height_cm),
        water_liters: calculate_water_intake(weight_kg),
    })
}
