//! FitCalc Status Tool
//!
//! Runtime status information and the calculator usage guide.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::models::UnitSystem;

/// Calculator usage guide for AI assistants
pub const CALCULATOR_INSTRUCTIONS: &str = r#"
# FitCalc Calculator Instructions

## Overview

FitCalc estimates common health metrics from height, weight, age and sex.
Results are informational estimates, not medical advice.

## Units

- Tools taking `units` accept `metric` (kg, cm) or `imperial` (lbs, inches).
- When `units` is omitted the server default is used (`FITCALC_DEFAULT_UNITS`, metric unless set).
- Imperial input is converted before calculating: lbs × 0.453592 = kg, inches × 2.54 = cm.
- Heights are a single number: enter 5 ft 10 in as `70` inches or `177.8` cm.

## Calculators

| Task | Tool | Formula |
|------|------|---------|
| Body Mass Index | `calculate_bmi` | weight_kg / (height_m)² |
| Basal Metabolic Rate | `calculate_bmr` | Mifflin-St Jeor: 10·kg + 6.25·cm − 5·age + 5 (male) / − 161 (female) |
| Daily calories (TDEE) | `calculate_daily_calories` | BMR × activity multiplier, ±500 for loss/gain |
| Ideal weight | `calculate_ideal_weight` | Devine: 50 kg (male) / 45.5 kg (female) + 2.3 kg per inch over 5 ft |
| Water intake | `calculate_water_intake` | 0.033 L per kg |
| Everything at once | `body_profile` | all of the above |

### BMI Categories

| BMI | Category |
|-----|----------|
| below 18.5 | Underweight |
| 18.5 to below 25 | Normal Weight |
| 25 to below 30 | Overweight |
| 30 and above | Obese |

A BMI of exactly 25.0 is Overweight; exactly 30.0 is Obese.

### Activity Levels

| Value | Multiplier | Meaning |
|-------|------------|---------|
| `sedentary` | 1.2 | Little to no exercise |
| `lightly_active` | 1.375 | Exercise 1-3 days/week |
| `moderately_active` | 1.55 | Exercise 3-5 days/week |
| `very_active` | 1.725 | Hard exercise 6-7 days/week |
| `extra_active` | 1.9 | Very hard exercise & physical job |

The multiplier itself (e.g. `"1.55"`) is also accepted.

### Goals

- `loss`: maintenance − 500 kcal/day
- `maintain`: maintenance
- `gain`: maintenance + 500 kcal/day

If the BMR is unknown, call `calculate_bmr` first and pass its `bmr` to `calculate_daily_calories`.

## Unit Converter

| Task | Tool |
|------|------|
| cm ↔ inch | `convert_height` (`from`: `cm` or `inch`) |
| kg ↔ lbs | `convert_weight` (`from`: `kg` or `lbs`) |
| cm → feet + inches | `convert_cm_to_feet_inches` |
| decimal feet → cm | `convert_feet_to_cm` (5.5 ft means five and a half feet, not 5 ft 5 in) |

## Notes

- Inputs are not range-checked. A height of 0 yields no BMI (`null`).
- Ideal weight for heights at or below 5 ft is the base weight.
"#;

/// Runtime status of the FitCalc service
#[derive(Debug, Clone, Serialize)]
pub struct FitCalcStatus {
    pub build: String,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    pub default_unit_system: UnitSystem,

    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: DateTime<Utc>,
    default_unit_system: UnitSystem,
}

impl StatusTracker {
    pub fn new(default_unit_system: UnitSystem) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: Utc::now(),
            default_unit_system,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> FitCalcStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        FitCalcStatus {
            build: build_info.label(),
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            default_unit_system: self.default_unit_system,
            started_at: self.started_at.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
