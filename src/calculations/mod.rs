//! Calculation module
//!
//! Stateless health formulas, BMI banding and unit conversions.

pub mod categories;
pub mod formulas;
pub mod units;

pub use categories::{bmi_category, classify_bmi};
pub use formulas::{
    calculate_bmi, calculate_bmr, calculate_daily_calories, calculate_ideal_weight,
    calculate_maintenance_calories, calculate_water_intake,
};
pub use units::{
    cm_to_feet_inches, cm_to_inches, feet_to_cm, form_lbs_to_kg, inches_to_cm, kg_to_lbs,
    lbs_to_kg, ConverterUnit, FeetInches,
};
