//! Conversion engine
//!
//! Static unit tables, the linear and temperature converters, the BMI
//! calculator and the currency converter.

pub mod bmi;
pub mod currency;
pub mod engine;
pub mod error;
pub mod linear;
pub mod temperature;
pub mod units;

pub use bmi::{BmiClass, BmiReport};
pub use currency::{convert_currency, CurrencyCoverage, CurrencyRateTable, CURRENCIES};
pub use engine::{convert, units_for, ConversionRequest};
pub use error::{ConversionError, ConversionResult};
pub use temperature::TemperatureUnit;
pub use units::{ConversionTable, UnitCategory, UnitFactor};
