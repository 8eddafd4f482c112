//! Unit Converter Tools
//!
//! Standalone cm ↔ inch and kg ↔ lbs converter, plus the feet/inches helpers.

use serde::Serialize;

use crate::calculations::{cm_to_feet_inches, feet_to_cm, ConverterUnit};

use super::calculators::{format_fixed, warn_if_not_finite};

/// Response for height and weight conversions
#[derive(Debug, Clone, Serialize)]
pub struct ConversionResponse {
    pub input: f64,
    pub from_unit: &'static str,
    pub result: f64,
    pub to_unit: &'static str,
    /// Result with two decimals and unit suffix, e.g. "66.93 inch"
    pub display: String,
}

/// Response for cm → feet + inches
#[derive(Debug, Clone, Serialize)]
pub struct FeetInchesResponse {
    pub cm: f64,
    pub feet: f64,
    pub inches: f64,
    pub display: String,
}

/// Response for feet → cm
#[derive(Debug, Clone, Serialize)]
pub struct FeetToCmResponse {
    pub feet: f64,
    pub cm: f64,
    pub display: String,
}

fn convert(value: f64, from: &str, length: bool) -> Result<ConversionResponse, String> {
    let (kind, valid) = if length {
        ("length", "cm, inch")
    } else {
        ("weight", "kg, lbs")
    };

    let unit = ConverterUnit::from_str(from)
        .filter(|u| u.is_length() == length)
        .ok_or_else(|| format!("Invalid {} unit: '{}'. Valid units: {}", kind, from, valid))?;

    let result = unit.convert(value);
    warn_if_not_finite("unit converter", result);
    let to = unit.counterpart();

    Ok(ConversionResponse {
        input: value,
        from_unit: unit.as_str(),
        result,
        to_unit: to.as_str(),
        display: format!("{} {}", format_fixed(result, 2), to.as_str()),
    })
}

/// Convert a height between centimeters and inches
pub fn convert_height(value: f64, from: &str) -> Result<ConversionResponse, String> {
    convert(value, from, true)
}

/// Convert a weight between kilograms and pounds
pub fn convert_weight(value: f64, from: &str) -> Result<ConversionResponse, String> {
    convert(value, from, false)
}

/// Split a height in centimeters into feet and inches
pub fn convert_cm_to_feet_inches(cm: f64) -> FeetInchesResponse {
    let split = cm_to_feet_inches(cm);
    FeetInchesResponse {
        cm,
        feet: split.feet,
        inches: split.inches,
        display: format!("{} ft {} in", split.feet, format_fixed(split.inches, 1)),
    }
}

/// Convert decimal feet (e.g. 5.5) to centimeters
pub fn convert_feet_to_cm(feet: f64) -> FeetToCmResponse {
    let cm = feet_to_cm(feet);
    FeetToCmResponse {
        feet,
        cm,
        display: format!("{} cm", format_fixed(cm, 2)),
    }
}
