//! Print a body profile for the given measurements
//!
//! Usage: profile_summary <gender> <weight> <height> <age> [activity] [goal]
//!
//! Weight and height use FITCALC_DEFAULT_UNITS (metric unless set).

use fitcalc::config::ServiceConfig;
use fitcalc::tools::profile::{body_profile, ProfileInput};

const USAGE: &str = "Usage: profile_summary <gender> <weight> <height> <age> [activity] [goal]";

fn parse_number<T: std::str::FromStr>(name: &str, value: Option<&String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("Missing {}\n{}", name, USAGE))?;
    value
        .parse()
        .map_err(|_| format!("Invalid {}: '{}'", name, value))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let gender = args.first().cloned().ok_or(USAGE)?;
    let input = ProfileInput {
        gender,
        weight: parse_number("weight", args.get(1))?,
        height: parse_number("height", args.get(2))?,
        age: parse_number("age", args.get(3))?,
        activity: args.get(4).cloned(),
        goal: args.get(5).cloned(),
        units: None,
    };

    let config = ServiceConfig::from_env()?;
    let profile = body_profile(&config, &input)?;

    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}
