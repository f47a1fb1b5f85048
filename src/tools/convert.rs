//! Conversion MCP Tools
//!
//! Tool bodies for unit, currency and BMI conversions.

use serde::Serialize;

use crate::conversion::{
    engine, BmiReport, ConversionError, ConversionRequest, ConversionResult, CurrencyCoverage,
    CurrencyRateTable, TemperatureUnit, UnitCategory, CURRENCIES,
};

/// Category summary for listing
#[derive(Debug, Serialize)]
pub struct CategorySummary {
    pub id: &'static str,
    pub name: &'static str,
    /// linear, affine, rate_table or calculator
    pub kind: &'static str,
    pub unit_count: usize,
}

/// Response for list_categories
#[derive(Debug, Serialize)]
pub struct ListCategoriesResponse {
    pub categories: Vec<CategorySummary>,
    pub total: usize,
}

/// Unit summary for listing
#[derive(Debug, Serialize)]
pub struct UnitSummary {
    pub name: &'static str,
    pub symbol: Option<&'static str>,
    /// Units per base unit, linear categories only
    pub factor: Option<f64>,
}

/// Response for list_units
#[derive(Debug, Serialize)]
pub struct ListUnitsResponse {
    pub category: UnitCategory,
    pub category_display: &'static str,
    pub base_unit: Option<&'static str>,
    pub units: Vec<UnitSummary>,
}

/// Response for convert_units and convert_currency
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub category: UnitCategory,
    pub from_unit: String,
    pub to_unit: String,
    pub input_value: f64,
    pub result: f64,
    /// Human readable line, e.g. "1 Meters = 3.2808 Feet"
    pub formatted: String,
}

/// Single rate entry
#[derive(Debug, Serialize)]
pub struct RateEntry {
    pub from: &'static str,
    pub to: &'static str,
    pub rate: f64,
}

/// Response for list_currency_rates
#[derive(Debug, Serialize)]
pub struct CurrencyRatesResponse {
    pub coverage: CurrencyCoverage,
    pub currencies: Vec<&'static str>,
    pub source_currencies: Vec<&'static str>,
    pub rates: Vec<RateEntry>,
}

fn category_kind(category: UnitCategory) -> &'static str {
    match category {
        UnitCategory::Temperature => "affine",
        UnitCategory::Currency => "rate_table",
        UnitCategory::Bmi => "calculator",
        _ => "linear",
    }
}

/// Parse a category name, mapping failure to a conversion error
pub fn parse_category(name: &str) -> ConversionResult<UnitCategory> {
    UnitCategory::from_str(name).ok_or_else(|| ConversionError::UnknownCategory(name.to_string()))
}

/// Canonical spelling of a unit for display, falling back to the input
fn canonical_unit(category: UnitCategory, unit: &str) -> String {
    match category {
        UnitCategory::Temperature => TemperatureUnit::from_str(unit)
            .map(|u| u.display_name().to_string())
            .unwrap_or_else(|| unit.trim().to_string()),
        UnitCategory::Currency => unit.trim().to_uppercase(),
        _ => category
            .table()
            .and_then(|t| t.lookup(unit))
            .map(|u| u.name.to_string())
            .unwrap_or_else(|| unit.trim().to_string()),
    }
}

/// List every category
pub fn list_categories() -> ListCategoriesResponse {
    let categories: Vec<CategorySummary> = UnitCategory::ALL
        .iter()
        .map(|c| CategorySummary {
            id: c.as_str(),
            name: c.display_name(),
            kind: category_kind(*c),
            unit_count: engine::units_for(*c).len(),
        })
        .collect();
    let total = categories.len();
    ListCategoriesResponse { categories, total }
}

/// List the units of a category
pub fn list_units(category: &str) -> ConversionResult<ListUnitsResponse> {
    let category = parse_category(category)?;

    let (base_unit, units): (Option<&'static str>, Vec<UnitSummary>) = match category.table() {
        Some(table) => (
            table.units.iter().find(|u| u.factor == 1.0).map(|u| u.name),
            table
                .units
                .iter()
                .map(|u| UnitSummary {
                    name: u.name,
                    symbol: Some(u.symbol),
                    factor: Some(u.factor),
                })
                .collect(),
        ),
        None => (
            None,
            engine::units_for(category)
                .into_iter()
                .map(|name| UnitSummary {
                    name,
                    symbol: None,
                    factor: None,
                })
                .collect(),
        ),
    };

    Ok(ListUnitsResponse {
        category,
        category_display: category.display_name(),
        base_unit,
        units,
    })
}

/// Convert a value between two units of a category
pub fn convert_units(
    rates: &CurrencyRateTable,
    category: &str,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> ConversionResult<ConvertResponse> {
    let category = parse_category(category)?;
    let request = ConversionRequest::new(category, from_unit, to_unit, value);
    let result = engine::convert(&request, rates)?;

    let from_unit = canonical_unit(category, from_unit);
    let to_unit = canonical_unit(category, to_unit);
    let formatted = match category {
        UnitCategory::Currency => format!("{} {} = {:.2} {}", value, from_unit, result, to_unit),
        _ => format!("{} {} = {:.4} {}", value, from_unit, result, to_unit),
    };

    Ok(ConvertResponse {
        category,
        from_unit,
        to_unit,
        input_value: value,
        result,
        formatted,
    })
}

/// Convert an amount between two currencies
pub fn convert_currency(
    rates: &CurrencyRateTable,
    amount: f64,
    from_currency: &str,
    to_currency: &str,
) -> ConversionResult<ConvertResponse> {
    convert_units(
        rates,
        UnitCategory::Currency.as_str(),
        amount,
        from_currency,
        to_currency,
    )
}

/// Calculate and classify a BMI
pub fn calculate_bmi(weight_kg: f64, height_m: f64) -> ConversionResult<BmiReport> {
    let report = BmiReport::calculate(weight_kg, height_m)?;
    tracing::debug!(bmi = report.bmi, class = report.class_display, "Calculated BMI");
    Ok(report)
}

/// List the rates the configured table answers
pub fn list_currency_rates(rates: &CurrencyRateTable) -> CurrencyRatesResponse {
    CurrencyRatesResponse {
        coverage: rates.coverage(),
        currencies: CURRENCIES.to_vec(),
        source_currencies: rates.sources(),
        rates: rates
            .pairs()
            .into_iter()
            .map(|(from, to, rate)| RateEntry { from, to, rate })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::currency::PUBLISHED_RATES;
    use crate::conversion::BmiClass;

    #[test]
    fn test_list_categories() {
        let response = list_categories();
        assert_eq!(response.total, 12);
        let length = response.categories.iter().find(|c| c.id == "length").unwrap();
        assert_eq!(length.unit_count, 8);
        assert_eq!(length.kind, "linear");
        let bmi = response.categories.iter().find(|c| c.id == "bmi").unwrap();
        assert_eq!(bmi.kind, "calculator");
    }

    #[test]
    fn test_list_units() {
        let response = list_units("Pressure").unwrap();
        assert_eq!(response.base_unit, Some("Pascals"));
        assert_eq!(response.units.len(), 4);
        assert_eq!(response.units[3].name, "PSI");

        let response = list_units("temperature").unwrap();
        assert_eq!(response.base_unit, None);
        assert_eq!(response.units.len(), 3);

        assert!(matches!(
            list_units("luminosity"),
            Err(ConversionError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_convert_units_formats_four_decimals() {
        let response = convert_units(&PUBLISHED_RATES, "Length", 1.0, "m", "ft").unwrap();
        assert_eq!(response.from_unit, "Meters");
        assert_eq!(response.to_unit, "Feet");
        assert_eq!(response.formatted, "1 Meters = 3.2808 Feet");
    }

    #[test]
    fn test_convert_units_temperature() {
        let response =
            convert_units(&PUBLISHED_RATES, "Temperature", 0.0, "c", "kelvin").unwrap();
        assert_eq!(response.formatted, "0 Celsius = 273.1500 Kelvin");
    }

    #[test]
    fn test_convert_currency_formats_two_decimals() {
        let response = convert_currency(&PUBLISHED_RATES, 100.0, "usd", "EUR").unwrap();
        assert_eq!(response.formatted, "100 USD = 92.00 EUR");

        assert!(matches!(
            convert_currency(&PUBLISHED_RATES, 100.0, "INR", "USD"),
            Err(ConversionError::UnsupportedUnitPair { .. })
        ));
    }

    #[test]
    fn test_calculate_bmi() {
        let report = calculate_bmi(70.0, 1.75).unwrap();
        assert_eq!(report.class, BmiClass::Normal);
        assert!(calculate_bmi(0.0, 1.75).is_err());
    }

    #[test]
    fn test_list_currency_rates() {
        let response = list_currency_rates(&PUBLISHED_RATES);
        assert_eq!(response.coverage, CurrencyCoverage::Published);
        assert_eq!(response.rates.len(), 24);
        assert_eq!(response.currencies.len(), 9);

        let derived = CurrencyRateTable::new(CurrencyCoverage::Derived);
        assert!(list_currency_rates(&derived).rates.len() > 24);
    }
}
