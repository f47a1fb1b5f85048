//! Conversion dispatch
//!
//! Routes a [`ConversionRequest`] to the converter that owns its category.

use serde::{Deserialize, Serialize};

use super::currency::{convert_currency, CurrencyRateTable, CURRENCIES};
use super::error::{ConversionError, ConversionResult};
use super::linear;
use super::temperature::{self, TemperatureUnit};
use super::units::UnitCategory;

/// One conversion to perform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub category: UnitCategory,
    pub from_unit: String,
    pub to_unit: String,
    pub input_value: f64,
}

impl ConversionRequest {
    pub fn new(
        category: UnitCategory,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
        input_value: f64,
    ) -> Self {
        Self {
            category,
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
            input_value,
        }
    }
}

/// Perform a conversion
pub fn convert(request: &ConversionRequest, rates: &CurrencyRateTable) -> ConversionResult<f64> {
    let category = request.category;
    let from = request.from_unit.as_str();
    let to = request.to_unit.as_str();
    let value = request.input_value;

    let result = match category {
        UnitCategory::Temperature => temperature::convert(value, from, to),
        UnitCategory::Currency => convert_currency(value, from, to, rates),
        UnitCategory::Bmi => Err(ConversionError::Unimplemented { category }),
        _ => match category.table() {
            Some(table) => linear::convert(value, from, to, table),
            None => Err(ConversionError::Unimplemented { category }),
        },
    };

    match &result {
        Ok(output) => tracing::debug!(
            category = category.as_str(),
            from,
            to,
            value,
            output,
            "Converted"
        ),
        Err(e) => tracing::warn!(
            category = category.as_str(),
            from,
            to,
            value,
            "Conversion rejected: {}",
            e
        ),
    }

    result
}

/// Units (or currency codes) a category offers, in display order
///
/// BMI takes a weight and a height rather than a unit pair, so it lists none.
pub fn units_for(category: UnitCategory) -> Vec<&'static str> {
    match category {
        UnitCategory::Temperature => TemperatureUnit::ALL
            .iter()
            .map(|u| u.display_name())
            .collect(),
        UnitCategory::Currency => CURRENCIES.to_vec(),
        UnitCategory::Bmi => Vec::new(),
        _ => category.table().map(|t| t.names()).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::currency::PUBLISHED_RATES;

    fn run(category: UnitCategory, from: &str, to: &str, value: f64) -> ConversionResult<f64> {
        convert(&ConversionRequest::new(category, from, to, value), &PUBLISHED_RATES)
    }

    #[test]
    fn test_dispatch_linear() {
        let feet = run(UnitCategory::Length, "Meters", "Feet", 1.0).unwrap();
        assert!((feet - 3.28084).abs() < 1e-9);

        let hours = run(UnitCategory::Time, "Minutes", "Hours", 90.0).unwrap();
        assert!((hours - 1.5).abs() < 1e-9);

        let mb = run(UnitCategory::DataStorage, "Gigabytes", "Megabytes", 2.0).unwrap();
        assert!((mb - 2000.0).abs() < 1e-6);
    }

    #[test]
    fn test_dispatch_temperature() {
        let f = run(UnitCategory::Temperature, "Celsius", "Fahrenheit", 100.0).unwrap();
        assert!((f - 212.0).abs() < 1e-9);
    }

    #[test]
    fn test_dispatch_currency() {
        let eur = run(UnitCategory::Currency, "USD", "EUR", 100.0).unwrap();
        assert!((eur - 92.0).abs() < 1e-9);
        assert!(matches!(
            run(UnitCategory::Currency, "INR", "USD", 100.0),
            Err(ConversionError::UnsupportedUnitPair { .. })
        ));
    }

    #[test]
    fn test_bmi_is_not_a_unit_conversion() {
        assert_eq!(
            run(UnitCategory::Bmi, "kg", "m", 70.0),
            Err(ConversionError::Unimplemented {
                category: UnitCategory::Bmi
            })
        );
    }

    #[test]
    fn test_units_from_other_category_rejected() {
        assert!(run(UnitCategory::Weight, "Meters", "Feet", 1.0).is_err());
    }

    #[test]
    fn test_units_for() {
        assert_eq!(units_for(UnitCategory::Temperature), vec!["Celsius", "Fahrenheit", "Kelvin"]);
        assert_eq!(units_for(UnitCategory::Currency).len(), 9);
        assert_eq!(units_for(UnitCategory::Length).first(), Some(&"Meters"));
        assert!(units_for(UnitCategory::Bmi).is_empty());
    }
}
