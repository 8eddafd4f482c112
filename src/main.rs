//! FitCalc
//!
//! An MCP server exposing health calculators.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use fitcalc::build_info;
use fitcalc::config::ServiceConfig;
use fitcalc::mcp::FitCalcService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so stdout stays free for MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("fitcalc=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = ServiceConfig::from_env()?;
    tracing::info!(
        default_units = config.default_unit_system.as_str(),
        "loaded configuration"
    );

    eprintln!("Starting MCP server on stdio...");

    let service = FitCalcService::new(config);
    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
