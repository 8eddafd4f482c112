//! FitCalc Tools module
//!
//! Calculator tool implementations served over MCP.

pub mod calculators;
pub mod converter;
pub mod profile;
pub mod status;
