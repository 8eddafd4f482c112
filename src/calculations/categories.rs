//! BMI category lookup

use crate::models::{BmiCategory, BmiClassification};

/// Lower bound of the normal weight band
pub const BMI_NORMAL_MIN: f64 = 18.5;
/// Lower bound of the overweight band
pub const BMI_OVERWEIGHT_MIN: f64 = 25.0;
/// Lower bound of the obese band
pub const BMI_OBESE_MIN: f64 = 30.0;

/// Band a BMI value; upper bounds are exclusive, so 25.0 is overweight.
///
/// NaN fails every comparison and lands in `Obese`.
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < BMI_NORMAL_MIN {
        BmiCategory::Underweight
    } else if bmi < BMI_OVERWEIGHT_MIN {
        BmiCategory::NormalWeight
    } else if bmi < BMI_OBESE_MIN {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Category with its label, severity and description
pub fn bmi_category(bmi: f64) -> BmiClassification {
    classify_bmi(bmi).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(bmi_category(18.49).label, "Underweight");
        assert_eq!(bmi_category(18.5).label, "Normal Weight");
        assert_eq!(bmi_category(24.99).label, "Normal Weight");
        assert_eq!(bmi_category(25.0).label, "Overweight");
        assert_eq!(bmi_category(29.99).label, "Overweight");
        assert_eq!(bmi_category(30.0).label, "Obese");
    }

    #[test]
    fn test_extremes() {
        assert_eq!(classify_bmi(0.0), BmiCategory::Underweight);
        assert_eq!(classify_bmi(-3.0), BmiCategory::Underweight);
        assert_eq!(classify_bmi(55.0), BmiCategory::Obese);
        assert_eq!(classify_bmi(f64::INFINITY), BmiCategory::Obese);
        assert_eq!(classify_bmi(f64::NAN), BmiCategory::Obese);
    }

    #[test]
    fn test_severity_follows_band() {
        assert_eq!(bmi_category(17.0).severity, Severity::Low);
        assert_eq!(bmi_category(22.0).severity, Severity::Healthy);
        assert_eq!(bmi_category(27.0).severity, Severity::Elevated);
        assert_eq!(bmi_category(33.0).severity, Severity::High);
    }
}
