//! FitCalc Library
//!
//! Health calculators (BMI, BMR, daily calories, ideal weight, water intake)
//! and length/mass unit conversion.

pub mod build_info;
pub mod calculations;
pub mod config;
pub mod mcp;
pub mod models;
pub mod tools;
