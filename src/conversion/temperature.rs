//! Temperature conversion
//!
//! Temperature scales differ by an offset as well as a scale, so they are
//! converted with explicit formulas through Celsius rather than a factor
//! table.

use serde::{Deserialize, Serialize};

use super::error::{ensure_finite_result, ConversionError, ConversionResult};
use super::units::UnitCategory;

/// Offset between Kelvin and Celsius
pub const KELVIN_OFFSET: f64 = 273.15;
/// Fahrenheit reading at the freezing point of water
pub const FAHRENHEIT_OFFSET: f64 = 32.0;
/// Absolute zero in Fahrenheit, exact rather than derived through Celsius
pub const ABSOLUTE_ZERO_FAHRENHEIT: f64 = -459.67;

/// Supported temperature scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().trim_start_matches('°') {
            "celsius" | "c" | "centigrade" => Some(TemperatureUnit::Celsius),
            "fahrenheit" | "f" => Some(TemperatureUnit::Fahrenheit),
            "kelvin" | "k" => Some(TemperatureUnit::Kelvin),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
            TemperatureUnit::Kelvin => "Kelvin",
        }
    }

    /// Lowest physically meaningful reading on this scale
    pub fn absolute_zero(&self) -> f64 {
        match self {
            TemperatureUnit::Celsius => -KELVIN_OFFSET,
            TemperatureUnit::Fahrenheit => ABSOLUTE_ZERO_FAHRENHEIT,
            TemperatureUnit::Kelvin => 0.0,
        }
    }

    fn to_celsius(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => fahrenheit_to_celsius(value),
            TemperatureUnit::Kelvin => value - KELVIN_OFFSET,
        }
    }

    fn express_celsius(self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius_to_fahrenheit(celsius),
            TemperatureUnit::Kelvin => celsius + KELVIN_OFFSET,
        }
    }
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + FAHRENHEIT_OFFSET
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - FAHRENHEIT_OFFSET) * 5.0 / 9.0
}

/// Convert a temperature reading between scales
///
/// Negative readings are valid; readings below absolute zero are not.
pub fn convert(value: f64, from_unit: &str, to_unit: &str) -> ConversionResult<f64> {
    let (Some(from), Some(to)) = (
        TemperatureUnit::from_str(from_unit),
        TemperatureUnit::from_str(to_unit),
    ) else {
        return Err(ConversionError::unsupported_pair(
            UnitCategory::Temperature,
            from_unit,
            to_unit,
        ));
    };

    if !value.is_finite() {
        return Err(ConversionError::invalid_input("Temperature must be a finite number"));
    }
    if value < from.absolute_zero() {
        return Err(ConversionError::invalid_input(format!(
            "{} {} is below absolute zero",
            value,
            from.display_name()
        )));
    }

    if from == to {
        return Ok(value);
    }

    let converted = ensure_finite_result(to.express_celsius(from.to_celsius(value)))?;
    // Absolute zero on one scale can round to just below it on another
    Ok(converted.max(to.absolute_zero()))
}
