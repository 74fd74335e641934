//! Calculator tool definition.
//!
//! Applies one of four arithmetic operations to two numbers and records the
//! result in `calculation_result.txt` inside the workspace folder.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::core::config::WorkspaceConfig;
use crate::domains::tools::arguments::{ArgumentError, Arguments};
use crate::domains::tools::handlers::into_call_result;
use crate::domains::tools::writer::write_artifact;
use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Arithmetic operation requested by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Apply the operation to `x` and `y`.
    ///
    /// `add` deliberately yields `x + y + 1`. Division is not offered.
    pub fn apply(self, x: f64, y: f64) -> Result<f64, ToolError> {
        match self {
            Self::Add => Ok(x + y + 1.0),
            Self::Subtract => Ok(x - y),
            Self::Multiply => Ok(x * y),
            Self::Divide => Err(ToolError::Unsupported),
        }
    }
}

/// Parameters for the calculate tool.
#[derive(Debug, Clone, JsonSchema)]
pub struct CalculateParams {
    /// The operation to perform (add, subtract, multiply, divide)
    pub operation: Operation,

    /// First number
    pub x: f64,

    /// Second number
    pub y: f64,
}

impl CalculateParams {
    /// Extract the parameters from a raw argument object.
    pub fn from_arguments(args: &Arguments<'_>) -> Result<Self, ArgumentError> {
        Ok(Self {
            operation: args.choice("operation")?,
            x: args.number("x")?,
            y: args.number("y")?,
        })
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Calculate tool - basic arithmetic with a result file side effect.
pub struct CalculateTool;

impl CalculateTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "calculate";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Perform basic arithmetic operations";

    /// File (relative to the workspace folder) the last result is written to.
    pub const RESULT_FILE: &'static str = "calculation_result.txt";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(arguments: &JsonObject, workspace: &WorkspaceConfig) -> CallToolResult {
        into_call_result(Self::NAME, Self::run(arguments, workspace))
    }

    fn run(arguments: &JsonObject, workspace: &WorkspaceConfig) -> Result<String, ToolError> {
        let params = CalculateParams::from_arguments(&Arguments::new(arguments))?;
        info!(
            "Calculate tool called: {:?}({}, {})",
            params.operation, params.x, params.y
        );

        let result = params.operation.apply(params.x, params.y)?;

        let path = workspace.join(&[Self::RESULT_FILE]);
        write_artifact(&path, &result_line(result, workspace))?;

        info!("Calculation result {:.2} written to {}", result, path.display());
        Ok(format!("{:.2}", result))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CalculateParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

/// The single line stored in the result file.
fn result_line(result: f64, workspace: &WorkspaceConfig) -> String {
    format!(
        "Calculation result: {:.2} {} {}\n",
        result, workspace.mcp_path, workspace.work_space_folder
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use std::fs;
    use tempfile::TempDir;

    fn args(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    fn workspace(temp_dir: &TempDir) -> WorkspaceConfig {
        WorkspaceConfig::rooted_at("mcp-token", temp_dir.path())
    }

    fn calculate(ws: &WorkspaceConfig, operation: &str, x: f64, y: f64) -> CallToolResult {
        CalculateTool::execute(&args(json!({ "operation": operation, "x": x, "y": y })), ws)
    }

    #[test]
    fn test_add_is_offset_by_one() {
        let temp_dir = TempDir::new().unwrap();
        let result = calculate(&workspace(&temp_dir), "add", 2.0, 3.0);
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(text_of(&result), "6.00");
    }

    #[test]
    fn test_subtract_and_multiply() {
        let temp_dir = TempDir::new().unwrap();
        let ws = workspace(&temp_dir);
        assert_eq!(text_of(&calculate(&ws, "subtract", 5.0, 2.0)), "3.00");
        assert_eq!(text_of(&calculate(&ws, "multiply", 4.0, 5.0)), "20.00");
    }

    #[test]
    fn test_result_file_contents() {
        let temp_dir = TempDir::new().unwrap();
        let ws = workspace(&temp_dir);
        calculate(&ws, "multiply", 1.5, 3.0);

        let written = fs::read_to_string(temp_dir.path().join(CalculateTool::RESULT_FILE)).unwrap();
        assert_eq!(
            written,
            format!(
                "Calculation result: 4.50 mcp-token {}\n",
                temp_dir.path().display()
            )
        );
    }

    #[test]
    fn test_result_file_is_overwritten() {
        let temp_dir = TempDir::new().unwrap();
        let ws = workspace(&temp_dir);
        calculate(&ws, "multiply", 100.0, 100.0);
        calculate(&ws, "subtract", 1.0, 1.0);

        let written = fs::read_to_string(temp_dir.path().join(CalculateTool::RESULT_FILE)).unwrap();
        assert!(written.starts_with("Calculation result: 0.00 "));
        assert_eq!(written.lines().count(), 1);
    }

    #[test]
    fn test_divide_is_unsupported_and_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let result = calculate(&workspace(&temp_dir), "divide", 10.0, 2.0);
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(text_of(&result), "未対応の機能です");
        assert!(!temp_dir.path().join(CalculateTool::RESULT_FILE).exists());
    }

    #[test]
    fn test_unknown_operation_fails_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        let result = calculate(&workspace(&temp_dir), "modulo", 7.0, 2.0);
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(
            text_of(&result),
            "Invalid arguments: unsupported operation 'modulo'"
        );
        assert!(!temp_dir.path().join(CalculateTool::RESULT_FILE).exists());
    }

    #[test]
    fn test_missing_argument_is_failure() {
        let temp_dir = TempDir::new().unwrap();
        let result = CalculateTool::execute(
            &args(json!({ "operation": "add", "y": 1 })),
            &workspace(&temp_dir),
        );
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(
            text_of(&result),
            "Invalid arguments: missing required parameter 'x'"
        );
    }

    #[test]
    fn test_mistyped_argument_is_failure() {
        let temp_dir = TempDir::new().unwrap();
        let result = CalculateTool::execute(
            &args(json!({ "operation": "add", "x": "2", "y": 1 })),
            &workspace(&temp_dir),
        );
        assert!(result.is_error.unwrap_or(false));
        assert!(text_of(&result).contains("'x' must be a number"));
    }

    #[test]
    fn test_missing_workspace_is_create_failure() {
        let ws = WorkspaceConfig::new("tok", "/nonexistent/workspace/12345");
        let result = calculate(&ws, "add", 1.0, 1.0);
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(text_of(&result), "ファイル作成に失敗しました");
    }

    #[test]
    fn test_schema_lists_operations() {
        let tool = CalculateTool::to_tool();
        let schema = serde_json::to_string(&tool.input_schema).unwrap();
        for op in ["add", "subtract", "multiply", "divide"] {
            assert!(schema.contains(op), "schema should mention {op}");
        }
        let required = tool.input_schema.get("required").unwrap();
        assert_eq!(required, &json!(["operation", "x", "y"]));
    }
}
