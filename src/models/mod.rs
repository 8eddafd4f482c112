//! Data models
//!
//! Value types passed into and returned from the calculators.

mod bmi;
mod profile;

pub use bmi::{BmiCategory, BmiClassification, Severity};
pub use profile::{ActivityLevel, Gender, UnitSystem, WeightGoal, GOAL_ADJUSTMENT_KCAL};
