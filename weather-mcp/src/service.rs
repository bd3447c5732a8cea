use std::sync::Arc;

use rmcp::{
    ErrorData as McpError,
    handler::server::{ServerHandler, tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use weather_core::{WeatherApiClient, WeatherError};

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetLiveTemperatureRequest {
    /// Latitude coordinate, -90 to 90 (e.g., 41.0082 for Istanbul).
    pub latitude: f64,
    /// Longitude coordinate, -180 to 180 (e.g., 28.9784 for Istanbul).
    pub longitude: f64,
}

/// MCP service exposing the shared weather lookup as a single tool.
#[derive(Clone)]
pub struct WeatherService {
    client: Arc<WeatherApiClient>,
    tool_router: ToolRouter<Self>,
}

impl WeatherService {
    pub fn new(client: WeatherApiClient) -> Self {
        Self {
            client: Arc::new(client),
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_handler]
impl ServerHandler for WeatherService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "weather-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "A weather assistant backed by live WeatherAPI.com data. The \
                get_live_temperature tool needs latitude and longitude. When a user names a \
                place instead of giving coordinates, ask for (or suggest) its coordinates \
                first — for example Istanbul is roughly latitude 41.0082, longitude 28.9784 — \
                then call the tool and present the result."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl WeatherService {
    #[tool(
        description = "Get live temperature and current conditions for a location. Provide latitude and longitude coordinates (e.g., latitude: 41.0082, longitude: 28.9784 for Istanbul)."
    )]
    async fn get_live_temperature(
        &self,
        Parameters(request): Parameters<GetLiveTemperatureRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            latitude = request.latitude,
            longitude = request.longitude,
            "get_live_temperature"
        );

        match self.client.current(request.latitude, request.longitude).await {
            Ok(weather) => {
                let payload = serde_json::to_string(&weather)
                    .map_err(|e| McpError::internal_error(e.to_string(), None))?;
                Ok(CallToolResult::success(vec![Content::text(payload)]))
            }
            Err(err) if err.is_validation() => Err(McpError::invalid_params(err.to_string(), None)),
            Err(err) => Err(McpError::internal_error(
                format!("Failed to fetch weather: {err}"),
                None,
            )),
        }
    }
}
