//! MCP server handler exposing the Banxico tool set.

use banxico_tools::BanxicoTools;
use banxico_tools::inputs::{
    DateRangeInput, InflationInput, RecentDataInput, SeriesMetadataInput, UnemploymentInput,
};
use rmcp::model as m;
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler};
use serde::de::DeserializeOwned;
use std::sync::Arc;

const TOOL_NAMES: [&str; 10] = [
    "health_check",
    "get_latest_usd_mxn_rate",
    "get_usd_mxn_historical_data",
    "get_series_metadata",
    "get_date_range_data",
    "get_inflation_data",
    "get_udis_data",
    "get_cetes_28_data",
    "get_banxico_reserves_data",
    "get_unemployment_data",
];

/// Names of all exposed tools, for `--list-tools`.
pub fn tool_names() -> &'static [&'static str] {
    &TOOL_NAMES
}

/// MCP server handler over a shared [`BanxicoTools`] instance.
///
/// The tool set is fixed, so discovery and dispatch are a static table and
/// a match rather than a registry.
pub struct BanxicoServer {
    tools: Arc<BanxicoTools>,
}

impl BanxicoServer {
    /// Create a handler sharing the given tool set.
    pub fn new(tools: Arc<BanxicoTools>) -> Self {
        Self { tools }
    }
}

fn input_schema<T: schemars::JsonSchema>() -> serde_json::Value {
    serde_json::to_value(schemars::schema_for!(T))
        .unwrap_or_else(|_| serde_json::json!({"type": "object"}))
}

fn no_input_schema() -> serde_json::Value {
    serde_json::json!({"type": "object", "properties": {}})
}

fn tool(name: &'static str, description: &'static str, schema: serde_json::Value) -> m::Tool {
    m::Tool::new(
        name,
        description,
        Arc::new(schema.as_object().cloned().unwrap_or_default()),
    )
    .with_title(name.to_string())
}

fn text_result(text: String) -> m::CallToolResult {
    m::CallToolResult::success(vec![m::Content::text(text)])
}

fn parse_input<T: DeserializeOwned>(
    tool_name: &str,
    args: serde_json::Value,
) -> Result<T, m::CallToolResult> {
    serde_json::from_value(args).map_err(|e| {
        m::CallToolResult::error(vec![m::Content::text(format!(
            "Invalid arguments for '{tool_name}': {e}"
        ))])
    })
}

// Allow manual_async_fn because the trait signature uses `impl Future` return types
#[allow(clippy::manual_async_fn)]
impl ServerHandler for BanxicoServer {
    fn initialize(
        &self,
        _params: m::InitializeRequestParam,
        _ctx: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<m::InitializeResult, m::ErrorData>> + Send + '_
    {
        async move {
            Ok(
                m::InitializeResult::new(m::ServerCapabilities::builder().enable_tools().build())
                    .with_server_info(
                        m::Implementation::new(
                            "banxico-mcp",
                            env!("CARGO_PKG_VERSION"),
                        )
                        .with_title("banxico-mcp"),
                    ),
            )
        }
    }

    fn list_tools(
        &self,
        _req: Option<m::PaginatedRequestParam>,
        _ctx: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<m::ListToolsResult, m::ErrorData>> + Send + '_
    {
        async move {
            let tools = vec![
                tool(
                    "health_check",
                    "Health check endpoint for container monitoring",
                    no_input_schema(),
                ),
                tool(
                    "get_latest_usd_mxn_rate",
                    "Get the latest USD/MXN exchange rate from Banxico",
                    no_input_schema(),
                ),
                tool(
                    "get_usd_mxn_historical_data",
                    "Get historical USD/MXN exchange rate data from Banxico",
                    input_schema::<RecentDataInput>(),
                ),
                tool(
                    "get_series_metadata",
                    "Get metadata for a Banxico series (title, date range, frequency, unit)",
                    input_schema::<SeriesMetadataInput>(),
                ),
                tool(
                    "get_date_range_data",
                    "Get exchange rate data for a specific date range (YYYY-MM-DD dates)",
                    input_schema::<DateRangeInput>(),
                ),
                tool(
                    "get_inflation_data",
                    "Get inflation data from Banxico (monthly, accumulated, or annual)",
                    input_schema::<InflationInput>(),
                ),
                tool(
                    "get_udis_data",
                    "Get UDIS (Investment Units) data from Banxico",
                    input_schema::<RecentDataInput>(),
                ),
                tool(
                    "get_cetes_28_data",
                    "Get CETES 28-day interest rate data from Banxico",
                    input_schema::<RecentDataInput>(),
                ),
                tool(
                    "get_banxico_reserves_data",
                    "Get Banxico international reserve assets data",
                    input_schema::<RecentDataInput>(),
                ),
                tool(
                    "get_unemployment_data",
                    "Get unemployment rate data from Banxico",
                    input_schema::<UnemploymentInput>(),
                ),
            ];
            Ok(m::ListToolsResult {
                tools,
                next_cursor: None,
                meta: None,
            })
        }
    }

    fn call_tool(
        &self,
        req: m::CallToolRequestParam,
        _ctx: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<m::CallToolResult, m::ErrorData>> + Send + '_
    {
        async move {
            let args = serde_json::Value::Object(req.arguments.unwrap_or_default());
            let tools = &self.tools;

            let result = match req.name.as_ref() {
                "health_check" => {
                    let status = tools.health_check();
                    let data = serde_json::to_value(&status)
                        .unwrap_or_else(|_| serde_json::json!({"status": "healthy"}));
                    m::CallToolResult::structured(data)
                }
                "get_latest_usd_mxn_rate" => text_result(tools.latest_usd_mxn_rate().await),
                "get_usd_mxn_historical_data" => {
                    match parse_input::<RecentDataInput>(&req.name, args) {
                        Ok(input) => text_result(tools.usd_mxn_historical_data(input.limit).await),
                        Err(err) => err,
                    }
                }
                "get_series_metadata" => match parse_input::<SeriesMetadataInput>(&req.name, args) {
                    Ok(input) => text_result(tools.series_metadata(&input.series_id).await),
                    Err(err) => err,
                },
                "get_date_range_data" => match parse_input::<DateRangeInput>(&req.name, args) {
                    Ok(input) => text_result(
                        tools
                            .date_range_data(&input.start_date, &input.end_date, &input.series_id)
                            .await,
                    ),
                    Err(err) => err,
                },
                "get_inflation_data" => match parse_input::<InflationInput>(&req.name, args) {
                    Ok(input) => {
                        text_result(tools.inflation_data(&input.inflation_type, input.limit).await)
                    }
                    Err(err) => err,
                },
                "get_udis_data" => match parse_input::<RecentDataInput>(&req.name, args) {
                    Ok(input) => text_result(tools.udis_data(input.limit).await),
                    Err(err) => err,
                },
                "get_cetes_28_data" => match parse_input::<RecentDataInput>(&req.name, args) {
                    Ok(input) => text_result(tools.cetes_28_data(input.limit).await),
                    Err(err) => err,
                },
                "get_banxico_reserves_data" => {
                    match parse_input::<RecentDataInput>(&req.name, args) {
                        Ok(input) => text_result(tools.reserves_data(input.limit).await),
                        Err(err) => err,
                    }
                }
                "get_unemployment_data" => match parse_input::<UnemploymentInput>(&req.name, args) {
                    Ok(input) => text_result(tools.unemployment_data(input.limit).await),
                    Err(err) => err,
                },
                _ => m::CallToolResult::error(vec![m::Content::text(format!(
                    "Tool '{}' not found on this server",
                    req.name
                ))]),
            };

            Ok(result)
        }
    }

    fn ping(
        &self,
        _ctx: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<(), m::ErrorData>> + Send + '_ {
        async { Ok(()) }
    }
}
