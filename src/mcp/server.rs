//! UUC MCP Server Implementation
//!
//! Implements the MCP server with all UUC tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::Config;
use crate::conversion::{ConversionError, CurrencyRateTable};
use crate::tools::convert;
use crate::tools::status::StatusTracker;

/// UUC MCP Service
#[derive(Clone)]
pub struct UucService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    rates: Arc<CurrencyRateTable>,
    tool_router: ToolRouter<UucService>,
}

impl UucService {
    pub fn new(config: &Config) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(config.currency_coverage))),
            rates: Arc::new(CurrencyRateTable::new(config.currency_coverage)),
            tool_router: Self::tool_router(),
        }
    }
}

/// Conversion failures are caller mistakes, not server faults
fn to_mcp_error(e: ConversionError) -> McpError {
    McpError::invalid_params(e.to_string(), None)
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListUnitsParams {
    /// Category name, e.g. "length", "Data Storage", "temperature", "currency"
    pub category: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertUnitsParams {
    /// Category name, e.g. "length", "weight", "temperature"
    pub category: String,
    /// Value to convert (zero or positive; temperatures may be negative)
    pub value: f64,
    /// Source unit name or symbol, e.g. "Meters" or "m"
    pub from_unit: String,
    /// Destination unit name or symbol, e.g. "Feet" or "ft"
    pub to_unit: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertCurrencyParams {
    /// Amount to convert (zero or positive)
    pub amount: f64,
    /// Source currency code, e.g. "USD"
    pub from_currency: String,
    /// Destination currency code, e.g. "EUR"
    pub to_currency: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateBmiParams {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in meters
    pub height_m: f64,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl UucService {
    // --- Status ---

    #[tool(description = "Get the current status of the UUC service including build info, currency coverage, and process information")]
    async fn uuc_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        json_result(&tracker.get_status())
    }

    #[tool(description = "Get instructions for using the conversion tools. Call this when unsure which tool or unit names to use.")]
    fn converter_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CONVERTER_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CONVERTER_INSTRUCTIONS)]))
    }

    // --- Units ---

    #[tool(description = "List all conversion categories (length, weight, temperature, time, speed, area, volume, data storage, energy, pressure, currency, BMI)")]
    fn list_categories(&self) -> Result<CallToolResult, McpError> {
        json_result(&convert::list_categories())
    }

    #[tool(description = "List the units available in a category, in display order, with their symbols and conversion factors")]
    fn list_units(&self, Parameters(p): Parameters<ListUnitsParams>) -> Result<CallToolResult, McpError> {
        let result = convert::list_units(&p.category).map_err(to_mcp_error)?;
        json_result(&result)
    }

    #[tool(description = "Convert a value between two units of the same category (e.g. 1 Meters to Feet, 100 Celsius to Fahrenheit)")]
    fn convert_units(&self, Parameters(p): Parameters<ConvertUnitsParams>) -> Result<CallToolResult, McpError> {
        let result = convert::convert_units(&self.rates, &p.category, p.value, &p.from_unit, &p.to_unit)
            .map_err(to_mcp_error)?;
        json_result(&result)
    }

    // --- Currency ---

    #[tool(description = "Convert an amount between two currencies using the fixed rate table (not live rates)")]
    fn convert_currency(&self, Parameters(p): Parameters<ConvertCurrencyParams>) -> Result<CallToolResult, McpError> {
        let result = convert::convert_currency(&self.rates, p.amount, &p.from_currency, &p.to_currency)
            .map_err(to_mcp_error)?;
        json_result(&result)
    }

    #[tool(description = "List every currency pair and rate the converter can answer")]
    fn list_currency_rates(&self) -> Result<CallToolResult, McpError> {
        json_result(&convert::list_currency_rates(&self.rates))
    }

    // --- BMI ---

    #[tool(description = "Calculate Body Mass Index from weight (kg) and height (m) and classify it")]
    fn calculate_bmi(&self, Parameters(p): Parameters<CalculateBmiParams>) -> Result<CallToolResult, McpError> {
        let result = convert::calculate_bmi(p.weight_kg, p.height_m).map_err(to_mcp_error)?;
        json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for UucService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "uuc".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Universal Unit Converter".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Universal Unit Converter (UUC) - unit, currency, and BMI conversions from fixed tables. \
                 Call converter_instructions first if unsure. \
                 Units: list_categories, list_units, convert_units. \
                 Currency: convert_currency, list_currency_rates (rates are static, not live). \
                 BMI: calculate_bmi. \
                 Status: uuc_status."
                    .into(),
            ),
        }
    }
}
