//! BMI classification model
//!
//! Category bands and the display severity attached to each.

use serde::{Deserialize, Serialize};

/// Display severity of a BMI category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Healthy,
    Elevated,
    High,
}

impl Severity {
    /// Color name used when rendering the category
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Low => "blue",
            Severity::Healthy => "green",
            Severity::Elevated => "yellow",
            Severity::High => "red",
        }
    }
}

/// BMI category band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal Weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            BmiCategory::Underweight => Severity::Low,
            BmiCategory::NormalWeight => Severity::Healthy,
            BmiCategory::Overweight => Severity::Elevated,
            BmiCategory::Obese => Severity::High,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => {
                "A BMI below 18.5 indicates that you may be underweight. It is recommended to consult with a healthcare provider."
            }
            BmiCategory::NormalWeight => {
                "A BMI of 18.5–24.9 is considered healthy. Great job maintaining a balanced lifestyle!"
            }
            BmiCategory::Overweight => {
                "A BMI of 25–29.9 suggests you are slightly over the healthy weight range for your height."
            }
            BmiCategory::Obese => {
                "A BMI of 30 or higher is categorized as obesity. Consider consulting a doctor for a weight management plan."
            }
        }
    }
}

/// Category lookup result for a BMI value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiClassification {
    pub category: BmiCategory,
    pub label: &'static str,
    pub severity: Severity,
    pub description: &'static str,
}

impl From<BmiCategory> for BmiClassification {
    fn from(category: BmiCategory) -> Self {
        Self {
            category,
            label: category.label(),
            severity: category.severity(),
            description: category.description(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_colors() {
        assert_eq!(BmiCategory::Underweight.severity().color(), "blue");
        assert_eq!(BmiCategory::NormalWeight.severity().color(), "green");
        assert_eq!(BmiCategory::Overweight.severity().color(), "yellow");
        assert_eq!(BmiCategory::Obese.severity().color(), "red");
    }

    #[test]
    fn test_classification_from_category() {
        let c = BmiClassification::from(BmiCategory::NormalWeight);
        assert_eq!(c.label, "Normal Weight");
        assert_eq!(c.severity, Severity::Healthy);
        assert!(c.description.starts_with("A BMI of 18.5"));
    }
}
