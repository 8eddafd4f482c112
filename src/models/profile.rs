//! Profile input enums
//!
//! Closed sets of values selected on the calculator forms: gender, unit system,
//! activity level and weight goal.

use serde::{Deserialize, Serialize};

/// Biological sex used to pick the formula constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "man" => Some(Gender::Male),
            "female" | "f" | "woman" => Some(Gender::Female),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Measurement system the caller entered values in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Kilograms and centimeters
    #[default]
    Metric,
    /// Pounds and inches
    Imperial,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "si" | "kg/cm" => Some(UnitSystem::Metric),
            "imperial" | "us" | "lbs/in" => Some(UnitSystem::Imperial),
            _ => None,
        }
    }

    /// Unit label for weight inputs
    pub fn weight_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lbs",
        }
    }

    /// Unit label for height inputs
    pub fn height_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "cm",
            UnitSystem::Imperial => "in",
        }
    }
}

/// Activity tier applied to BMR to get TDEE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    /// All tiers, least to most active
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::ExtraActive => "extra_active",
        }
    }

    /// Parse from a tier name or from the exact multiplier ("1.55")
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "lightly_active" | "light" => Some(ActivityLevel::LightlyActive),
            "moderately_active" | "moderate" => Some(ActivityLevel::ModeratelyActive),
            "very_active" | "very" => Some(ActivityLevel::VeryActive),
            "extra_active" | "extra" => Some(ActivityLevel::ExtraActive),
            other => other.parse::<f64>().ok().and_then(Self::from_multiplier),
        }
    }

    /// Map a multiplier back to its tier; only the five fixed values match
    pub fn from_multiplier(multiplier: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| (level.multiplier() - multiplier).abs() < 1e-9)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
            ActivityLevel::ExtraActive => "Extra Active",
        }
    }

    /// Exercise frequency this tier stands for
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little to no exercise",
            ActivityLevel::LightlyActive => "Exercise 1-3 days/week",
            ActivityLevel::ModeratelyActive => "Exercise 3-5 days/week",
            ActivityLevel::VeryActive => "Hard exercise 6-7 days/week",
            ActivityLevel::ExtraActive => "Very hard exercise & physical job",
        }
    }
}

/// Daily calorie target direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightGoal {
    Loss,
    #[default]
    Maintain,
    Gain,
}

/// Fixed daily calorie deficit/surplus for loss and gain goals
pub const GOAL_ADJUSTMENT_KCAL: f64 = 500.0;

impl WeightGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightGoal::Loss => "loss",
            WeightGoal::Maintain => "maintain",
            WeightGoal::Gain => "gain",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "loss" | "lose" | "lose weight" => Some(WeightGoal::Loss),
            "maintain" | "maintenance" => Some(WeightGoal::Maintain),
            "gain" | "gain weight" => Some(WeightGoal::Gain),
            _ => None,
        }
    }

    /// Signed kcal/day adjustment applied to maintenance calories
    pub fn adjustment(&self) -> f64 {
        match self {
            WeightGoal::Loss => -GOAL_ADJUSTMENT_KCAL,
            WeightGoal::Maintain => 0.0,
            WeightGoal::Gain => GOAL_ADJUSTMENT_KCAL,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WeightGoal::Loss => "Lose Weight",
            WeightGoal::Maintain => "Maintain",
            WeightGoal::Gain => "Gain Weight",
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            WeightGoal::Loss => {
                "This includes a caloric deficit of 500 calories to support steady weight loss."
            }
            WeightGoal::Maintain => {
                "This represents your Total Daily Energy Expenditure (TDEE) to maintain your current weight."
            }
            WeightGoal::Gain => {
                "This includes a caloric surplus of 500 calories to support muscle or weight gain."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_from_str() {
        assert_eq!(Gender::from_str("male"), Some(Gender::Male));
        assert_eq!(Gender::from_str(" Female "), Some(Gender::Female));
        assert_eq!(Gender::from_str("F"), Some(Gender::Female));
        assert_eq!(Gender::from_str("other"), None);
    }

    #[test]
    fn test_unit_system_from_str() {
        assert_eq!(UnitSystem::from_str("metric"), Some(UnitSystem::Metric));
        assert_eq!(UnitSystem::from_str("IMPERIAL"), Some(UnitSystem::Imperial));
        assert_eq!(UnitSystem::from_str("furlongs"), None);
        assert_eq!(UnitSystem::default(), UnitSystem::Metric);
    }

    #[test]
    fn test_activity_multipliers() {
        let multipliers: Vec<f64> = ActivityLevel::ALL.iter().map(|l| l.multiplier()).collect();
        assert_eq!(multipliers, vec![1.2, 1.375, 1.55, 1.725, 1.9]);
    }

    #[test]
    fn test_activity_from_multiplier() {
        assert_eq!(ActivityLevel::from_multiplier(1.55), Some(ActivityLevel::ModeratelyActive));
        assert_eq!(ActivityLevel::from_multiplier(1.9), Some(ActivityLevel::ExtraActive));
        assert_eq!(ActivityLevel::from_multiplier(1.5), None);
    }

    #[test]
    fn test_activity_from_str() {
        assert_eq!(ActivityLevel::from_str("sedentary"), Some(ActivityLevel::Sedentary));
        assert_eq!(ActivityLevel::from_str("Lightly Active"), Some(ActivityLevel::LightlyActive));
        assert_eq!(ActivityLevel::from_str("very-active"), Some(ActivityLevel::VeryActive));
        assert_eq!(ActivityLevel::from_str("1.725"), Some(ActivityLevel::VeryActive));
        assert_eq!(ActivityLevel::from_str("couch"), None);
    }

    #[test]
    fn test_weight_goal() {
        assert_eq!(WeightGoal::from_str("Lose Weight"), Some(WeightGoal::Loss));
        assert_eq!(WeightGoal::from_str("gain_weight"), Some(WeightGoal::Gain));
        assert_eq!(WeightGoal::from_str("maintain"), Some(WeightGoal::Maintain));
        assert_eq!(WeightGoal::from_str("bulk"), None);
        assert_eq!(WeightGoal::Loss.adjustment(), -500.0);
        assert_eq!(WeightGoal::Maintain.adjustment(), 0.0);
        assert_eq!(WeightGoal::Gain.adjustment(), 500.0);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ActivityLevel::ModeratelyActive).unwrap();
        assert_eq!(json, "\"moderately_active\"");
        let goal: WeightGoal = serde_json::from_str("\"gain\"").unwrap();
        assert_eq!(goal, WeightGoal::Gain);
    }
}
