//! UUC Tools module
//!
//! MCP tool implementations for the Universal Unit Converter.

pub mod convert;
pub mod status;
