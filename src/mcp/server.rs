//! FitCalc MCP Server Implementation
//!
//! Exposes the calculators, unit converter and status as MCP tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::ServiceConfig;
use crate::tools::calculators;
use crate::tools::converter;
use crate::tools::profile::{self, ProfileInput};
use crate::tools::status::StatusTracker;

/// FitCalc MCP Service
#[derive(Clone)]
pub struct FitCalcService {
    config: ServiceConfig,
    status_tracker: Arc<Mutex<StatusTracker>>,
    tool_router: ToolRouter<FitCalcService>,
}

impl FitCalcService {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config,
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(config.default_unit_system))),
            tool_router: Self::tool_router(),
        }
    }
}

/// Serialize a tool response as pretty JSON text content
fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn invalid_params(message: String) -> McpError {
    tracing::debug!("rejected tool call: {}", message);
    McpError::invalid_params(message, None)
}

// ============================================================================
// Calculator Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct BmiParams {
    /// Body weight (kg for metric, lbs for imperial)
    pub weight: f64,
    /// Height (cm for metric, inches for imperial)
    pub height: f64,
    /// "metric" or "imperial" (defaults to the server setting)
    pub units: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct BmrParams {
    /// "male" or "female"
    pub gender: String,
    /// Body weight (kg for metric, lbs for imperial)
    pub weight: f64,
    /// Height (cm for metric, inches for imperial)
    pub height: f64,
    /// Age in whole years
    pub age: i64,
    /// "metric" or "imperial" (defaults to the server setting)
    pub units: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DailyCaloriesParams {
    /// Basal metabolic rate in kcal/day
    pub bmr: f64,
    /// sedentary, lightly_active, moderately_active, very_active, extra_active (default sedentary)
    #[serde(default = "default_activity")]
    pub activity: String,
    /// loss, maintain, or gain (default maintain)
    #[serde(default = "default_goal")]
    pub goal: String,
}

fn default_activity() -> String {
    "sedentary".to_string()
}

fn default_goal() -> String {
    "maintain".to_string()
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct IdealWeightParams {
    /// "male" or "female"
    pub gender: String,
    /// Height (cm for metric, inches for imperial)
    pub height: f64,
    /// "metric" or "imperial" (defaults to the server setting)
    pub units: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct WaterIntakeParams {
    /// Body weight (kg for metric, lbs for imperial)
    pub weight: f64,
    /// "metric" or "imperial" (defaults to the server setting)
    pub units: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct BodyProfileParams {
    /// "male" or "female"
    pub gender: String,
    /// Body weight (kg for metric, lbs for imperial)
    pub weight: f64,
    /// Height (cm for metric, inches for imperial)
    pub height: f64,
    /// Age in whole years
    pub age: i64,
    /// Activity level (default sedentary)
    pub activity: Option<String>,
    /// loss, maintain, or gain (default maintain)
    pub goal: Option<String>,
    /// "metric" or "imperial" (defaults to the server setting)
    pub units: Option<String>,
}

// ============================================================================
// Converter Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertParams {
    /// Value to convert
    pub value: f64,
    /// Unit of the value: cm/inch for height, kg/lbs for weight
    pub from: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CmParams {
    /// Height in centimeters
    pub cm: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FeetParams {
    /// Height in decimal feet (5.5 = five and a half feet)
    pub feet: f64,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl FitCalcService {
    // --- Status ---

    #[tool(description = "Get the current status of the FitCalc service including build info and process information")]
    async fn fitcalc_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        json_result(&tracker.get_status())
    }

    #[tool(description = "Get a reference of every calculator: inputs, units, formulas, BMI categories and activity levels. Call this when unsure which tool or units to use.")]
    fn calculator_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CALCULATOR_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CALCULATOR_INSTRUCTIONS)]))
    }

    // --- Calculators ---

    #[tool(description = "Calculate Body Mass Index and its category (Underweight, Normal Weight, Overweight, Obese)")]
    fn calculate_bmi(
        &self,
        Parameters(p): Parameters<BmiParams>,
    ) -> Result<CallToolResult, McpError> {
        let result =
            calculators::bmi_calculator(&self.config, p.weight, p.height, p.units.as_deref())
                .map_err(invalid_params)?;
        json_result(&result)
    }

    #[tool(description = "Calculate Basal Metabolic Rate (kcal/day at rest) with the Mifflin-St Jeor formula")]
    fn calculate_bmr(
        &self,
        Parameters(p): Parameters<BmrParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = calculators::bmr_calculator(
            &self.config,
            &p.gender,
            p.weight,
            p.height,
            p.age,
            p.units.as_deref(),
        )
        .map_err(invalid_params)?;
        json_result(&result)
    }

    #[tool(description = "Calculate daily calorie needs (TDEE) from BMR, activity level and weight goal (loss: -500, gain: +500)")]
    fn calculate_daily_calories(
        &self,
        Parameters(p): Parameters<DailyCaloriesParams>,
    ) -> Result<CallToolResult, McpError> {
        let result =
            calculators::calorie_calculator(p.bmr, &p.activity, &p.goal).map_err(invalid_params)?;
        json_result(&result)
    }

    #[tool(description = "Calculate ideal body weight with the Devine formula. Imperial requests are answered in lbs.")]
    fn calculate_ideal_weight(
        &self,
        Parameters(p): Parameters<IdealWeightParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = calculators::ideal_weight_calculator(
            &self.config,
            &p.gender,
            p.height,
            p.units.as_deref(),
        )
        .map_err(invalid_params)?;
        json_result(&result)
    }

    #[tool(description = "Estimate recommended daily water intake (about 33 ml per kg of body weight)")]
    fn calculate_water_intake(
        &self,
        Parameters(p): Parameters<WaterIntakeParams>,
    ) -> Result<CallToolResult, McpError> {
        let result =
            calculators::water_intake_calculator(&self.config, p.weight, p.units.as_deref())
                .map_err(invalid_params)?;
        json_result(&result)
    }

    #[tool(description = "Run every calculator (BMI, BMR, daily calories, ideal weight, water intake) for one set of measurements")]
    fn body_profile(
        &self,
        Parameters(p): Parameters<BodyProfileParams>,
    ) -> Result<CallToolResult, McpError> {
        let input = ProfileInput {
            gender: p.gender,
            weight: p.weight,
            height: p.height,
            age: p.age,
            activity: p.activity,
            goal: p.goal,
            units: p.units,
        };
        let result = profile::body_profile(&self.config, &input).map_err(invalid_params)?;
        json_result(&result)
    }

    // --- Unit Converter ---

    #[tool(description = "Convert a height between centimeters and inches")]
    fn convert_height(
        &self,
        Parameters(p): Parameters<ConvertParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = converter::convert_height(p.value, &p.from).map_err(invalid_params)?;
        json_result(&result)
    }

    #[tool(description = "Convert a weight between kilograms and pounds")]
    fn convert_weight(
        &self,
        Parameters(p): Parameters<ConvertParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = converter::convert_weight(p.value, &p.from).map_err(invalid_params)?;
        json_result(&result)
    }

    #[tool(description = "Split a height in centimeters into whole feet and remaining inches")]
    fn convert_cm_to_feet_inches(
        &self,
        Parameters(p): Parameters<CmParams>,
    ) -> Result<CallToolResult, McpError> {
        json_result(&converter::convert_cm_to_feet_inches(p.cm))
    }

    #[tool(description = "Convert a height in decimal feet to centimeters")]
    fn convert_feet_to_cm(
        &self,
        Parameters(p): Parameters<FeetParams>,
    ) -> Result<CallToolResult, McpError> {
        json_result(&converter::convert_feet_to_cm(p.feet))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for FitCalcService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "fitcalc".into(),
                version: crate::build_info::VERSION.into(),
                title: Some(crate::build_info::TITLE.into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "FitCalc - BMI, BMR, daily calorie, ideal weight and water intake calculators plus a unit converter. \
                 Call calculator_instructions for units, formulas and accepted values. \
                 Calculators: calculate_bmi, calculate_bmr, calculate_daily_calories, calculate_ideal_weight, \
                 calculate_water_intake, body_profile (all at once). \
                 Converter: convert_height (cm/inch), convert_weight (kg/lbs), convert_cm_to_feet_inches, convert_feet_to_cm. \
                 Status: fitcalc_status."
                    .into(),
            ),
        }
    }
}
