//! Tool handler plumbing.
//!
//! A handler is a plain function from the call arguments and the workspace
//! configuration to an rmcp `CallToolResult`. Handlers never fail at the
//! protocol level: every problem is reported as an error result.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, JsonObject};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::ToolError;
use crate::core::config::WorkspaceConfig;

/// A single tool invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolRequest {
    /// The name of the tool to execute.
    pub tool_name: String,

    /// The arguments to pass to the tool.
    #[serde(default)]
    pub arguments: JsonObject,
}

impl ToolRequest {
    pub fn new(tool_name: impl Into<String>, arguments: JsonObject) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments,
        }
    }
}

/// Function bound to a tool name in the [`ToolRegistry`](super::ToolRegistry).
pub type ToolHandler = Arc<dyn Fn(&JsonObject, &WorkspaceConfig) -> CallToolResult + Send + Sync>;

/// Turn a handler outcome into the result sent back to the client.
pub fn into_call_result(tool: &str, outcome: Result<String, ToolError>) -> CallToolResult {
    match outcome {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => {
            match std::error::Error::source(&e) {
                Some(source) => warn!("{} failed: {} ({})", tool, e, source),
                None => warn!("{} failed: {}", tool, e),
            }
            CallToolResult::error(vec![Content::text(e.to_string())])
        }
    }
}
