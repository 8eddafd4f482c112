//! Length and mass conversion
//!
//! Conversion constants and helpers for the unit converter and for normalizing
//! imperial form input to metric before it reaches the formulas.

use serde::Serialize;

// ============================================================================
// Conversion Constants
// ============================================================================

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;
/// Centimeters per foot
pub const CM_PER_FOOT: f64 = 30.48;
/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;
/// Pounds per kilogram (unit converter)
pub const LBS_PER_KG: f64 = 2.20462;
/// Kilograms per pound (imperial form input)
pub const KG_PER_LB: f64 = 0.453592;

// ============================================================================
// Converter Helpers
// ============================================================================

pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

pub fn kg_to_lbs(kg: f64) -> f64 {
    kg * LBS_PER_KG
}

pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs / LBS_PER_KG
}

/// Convert form weight input in pounds to kilograms.
///
/// Uses 0.453592 kg/lb, which is not the exact inverse of `kg_to_lbs`.
pub fn form_lbs_to_kg(lbs: f64) -> f64 {
    lbs * KG_PER_LB
}

/// Height split into whole feet and remaining inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeetInches {
    pub feet: f64,
    pub inches: f64,
}

/// Decompose centimeters into whole feet plus remainder inches
pub fn cm_to_feet_inches(cm: f64) -> FeetInches {
    let total_inches = cm_to_inches(cm);
    FeetInches {
        feet: (total_inches / INCHES_PER_FOOT).floor(),
        inches: total_inches % INCHES_PER_FOOT,
    }
}

/// Convert a single decimal feet value to centimeters
pub fn feet_to_cm(feet: f64) -> f64 {
    feet * CM_PER_FOOT
}

// ============================================================================
// Unit Recognition
// ============================================================================

/// Units accepted by the standalone converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConverterUnit {
    Cm,
    Inch,
    Kg,
    Lbs,
}

impl ConverterUnit {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                Some(ConverterUnit::Cm)
            }
            "in" | "inch" | "inches" => Some(ConverterUnit::Inch),
            "kg" | "kilogram" | "kilograms" => Some(ConverterUnit::Kg),
            "lb" | "lbs" | "pound" | "pounds" => Some(ConverterUnit::Lbs),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConverterUnit::Cm => "cm",
            ConverterUnit::Inch => "inch",
            ConverterUnit::Kg => "kg",
            ConverterUnit::Lbs => "lbs",
        }
    }

    pub fn is_length(&self) -> bool {
        matches!(self, ConverterUnit::Cm | ConverterUnit::Inch)
    }

    /// The unit on the other side of the converter
    pub fn counterpart(&self) -> Self {
        match self {
            ConverterUnit::Cm => ConverterUnit::Inch,
            ConverterUnit::Inch => ConverterUnit::Cm,
            ConverterUnit::Kg => ConverterUnit::Lbs,
            ConverterUnit::Lbs => ConverterUnit::Kg,
        }
    }

    /// Convert a value in this unit to its counterpart
    pub fn convert(&self, value: f64) -> f64 {
        match self {
            ConverterUnit::Cm => cm_to_inches(value),
            ConverterUnit::Inch => inches_to_cm(value),
            ConverterUnit::Kg => kg_to_lbs(value),
            ConverterUnit::Lbs => lbs_to_kg(value),
        }
    }
}
