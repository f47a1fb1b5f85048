//! Universal Unit Converter (UUC)
//!
//! An MCP server for unit, currency and BMI conversions.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use uuc::build_info;
use uuc::config::Config;
use uuc::mcp::UucService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging goes to stderr so it doesn't interfere with MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("uuc=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let config = Config::from_env();
    tracing::info!(
        currency_coverage = config.currency_coverage.as_str(),
        "Loaded configuration"
    );

    let service = UucService::new(&config);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
