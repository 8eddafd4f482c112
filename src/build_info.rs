//! Build information
//!
//! `build.rs` bumps `build_number.txt` on every compile and exports the
//! number and a UTC timestamp as `FITCALC_BUILD_NUMBER` and
//! `FITCALC_BUILD_TIMESTAMP`. Both are optional at compile time so the
//! library still builds when the script did not run (e.g. under some IDEs).

use serde::Serialize;

/// Build number from `build_number.txt`, or 0 when unavailable
pub const BUILD_NUMBER: u64 = match option_env!("FITCALC_BUILD_NUMBER") {
    Some(s) => match parse_u64(s) {
        Some(n) => n,
        None => 0,
    },
    None => 0,
};

/// UTC compile time, `YYYY-MM-DDTHH:MM:SSZ`, or "unknown"
pub const BUILD_TIMESTAMP: &str = match option_env!("FITCALC_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

/// Crate version, reported as the MCP server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name, also the MCP server name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// One-line crate description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Title shown in the startup banner and the MCP server info
pub const TITLE: &str = "FitCalc Health Calculators";

/// Decimal string to u64 in const context; `None` for empty or non-digit input
const fn parse_u64(s: &str) -> Option<u64> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    let mut result: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if !b.is_ascii_digit() {
            return None;
        }
        result = result * 10 + (b - b'0') as u64;
        i += 1;
    }
    Some(result)
}

/// Build metadata as reported by the status tool
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub description: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: BUILD_NUMBER,
            build_timestamp: BUILD_TIMESTAMP,
            description: DESCRIPTION,
        }
    }

    /// Short identifier, e.g. "fitcalc 1.0.0 (build 12)"
    pub fn label(&self) -> String {
        format!("{} {} (build {})", self.name, self.version, self.build_number)
    }

    /// True when `build.rs` supplied a timestamp
    pub fn has_timestamp(&self) -> bool {
        self.build_timestamp != "unknown"
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::current()
    }
}

/// Print the startup banner to stderr (stdout carries MCP traffic)
pub fn print_startup_banner() {
    let info = BuildInfo::current();
    eprintln!("===============================================");
    eprintln!("  {}", TITLE);
    eprintln!("  {}", info.label());
    if info.has_timestamp() {
        eprintln!("  Compiled: {}", info.build_timestamp);
    }
    eprintln!("===============================================");
}
