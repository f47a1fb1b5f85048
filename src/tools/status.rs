//! UUC Status Tool
//!
//! Provides runtime status information about the UUC service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::conversion::CurrencyCoverage;

/// Usage instructions for AI assistants
pub const CONVERTER_INSTRUCTIONS: &str = r#"
# UUC Conversion Instructions

## Unit conversions

1. Call `list_categories` to see the categories: Length, Weight, Temperature,
   Time, Speed, Area, Volume, Data Storage, Energy, Pressure, Currency, BMI.
2. Call `list_units` with a category to see its units in display order.
3. Call `convert_units` with `category`, `value`, `from_unit`, `to_unit`.

Unit names are matched case-insensitively and accept common symbols
("m", "ft", "kg", "lb", "°C"). Values must be zero or positive, except
temperatures, which may be negative down to absolute zero.

Results are exact; the `formatted` field rounds to 4 decimals.

## Currency

Call `convert_currency` with `amount`, `from_currency`, `to_currency`
(ISO codes: USD, EUR, GBP, INR, PKR, AUD, CAD, JPY, CNY).

Rates are a fixed table, not live market data. With the default
"published" coverage only USD, EUR and GBP can be converted FROM, and
same-currency pairs are not answered. Call `list_currency_rates` to see
exactly which pairs are available before telling the user a conversion is
impossible.

## BMI

Call `calculate_bmi` with `weight_kg` and `height_m` (both positive).
Classes: Underweight (< 18.5), Normal (18.5 to < 24.9),
Overweight (25 to < 29.9), Above healthy range (everything else).

If `in_boundary_gap` is true the value is between 24.9 and 25, which the
class table does not cover; say so rather than presenting the class as a
firm verdict.
"#;

/// Status information for the UUC service
#[derive(Debug, Clone, Serialize)]
pub struct UucStatus {
    pub build: String,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,
    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
    pub currency_coverage: CurrencyCoverage,
}

/// Tracks service start time for status reporting
pub struct StatusTracker {
    start_time: Instant,
    started_at: chrono::DateTime<chrono::Utc>,
    currency_coverage: CurrencyCoverage,
}

impl StatusTracker {
    pub fn new(currency_coverage: CurrencyCoverage) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: chrono::Utc::now(),
            currency_coverage,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> UucStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        UucStatus {
            build: build_info.label(),
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            started_at: self.started_at.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            currency_coverage: self.currency_coverage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_process() {
        let tracker = StatusTracker::new(CurrencyCoverage::Derived);
        let status = tracker.get_status();
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.currency_coverage, CurrencyCoverage::Derived);
        assert!(status.uptime_seconds < 60);
        assert!(status.build.starts_with("uuc "));
    }

    #[test]
    fn test_instructions_mention_every_tool() {
        for tool in [
            "list_categories",
            "list_units",
            "convert_units",
            "convert_currency",
            "list_currency_rates",
            "calculate_bmi",
        ] {
            assert!(CONVERTER_INSTRUCTIONS.contains(tool), "missing {}", tool);
        }
    }
}
