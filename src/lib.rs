//! Universal Unit Converter (UUC) Library
//!
//! Static-table unit, temperature, currency and BMI conversions.

pub mod build_info;
pub mod config;
pub mod conversion;
pub mod mcp;
pub mod tools;
