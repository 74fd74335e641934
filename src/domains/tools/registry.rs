//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A per-server map from tool name to definition and handler
//! - Dispatch of tool calls to the matching handler
//! - Tool metadata for listing

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};
use tracing::{debug, info, warn};

use crate::core::config::Config;

use super::definitions::{CalculateTool, TemplateTool};
use super::handlers::{ToolHandler, ToolRequest};
use super::ToolError;

// ============================================================================
// Tool Registry
// ============================================================================

struct RegisteredTool {
    definition: Tool,
    handler: ToolHandler,
}

/// Tool registry - manages the tools of one server instance.
///
/// Definitions are immutable once registered. The registry is built at
/// startup and then shared behind an `Arc`; nothing in it changes while
/// calls are being served.
pub struct ToolRegistry {
    config: Arc<Config>,
    tools: HashMap<String, RegisteredTool>,
}

impl ToolRegistry {
    /// Create an empty tool registry.
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            tools: HashMap::new(),
        }
    }

    /// Create a registry holding the built-in `calculate` and `template` tools.
    pub fn with_default_tools(config: Arc<Config>) -> Self {
        let mut registry = Self::new(config);
        registry.register(CalculateTool::to_tool(), Arc::new(CalculateTool::execute));
        registry.register(TemplateTool::to_tool(), Arc::new(TemplateTool::execute));
        registry
    }

    /// Bind `handler` to the tool described by `definition`.
    ///
    /// Registering a name twice replaces the earlier entry; the replaced
    /// definition is returned.
    pub fn register(&mut self, definition: Tool, handler: ToolHandler) -> Option<Tool> {
        let name = definition.name.to_string();
        let previous = self
            .tools
            .insert(name.clone(), RegisteredTool { definition, handler })
            .map(|old| old.definition);

        if previous.is_some() {
            debug!("Tool '{}' re-registered, previous handler replaced", name);
        }
        previous
    }

    /// Get the server configuration handed to every handler.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get all tool names, sorted.
    pub fn tool_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Get all tools as Tool models (metadata), sorted by name.
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO/TCP transports use this to get tool metadata.
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_names()
            .into_iter()
            .filter_map(|name| self.tools.get(name))
            .map(|entry| entry.definition.clone())
            .collect()
    }

    /// Dispatch a tool call to its handler and return the handler's result unchanged.
    pub fn dispatch(&self, request: &ToolRequest) -> Result<CallToolResult, ToolError> {
        let Some(entry) = self.tools.get(&request.tool_name) else {
            warn!("Unknown tool requested: {}", request.tool_name);
            return Err(ToolError::not_found(&request.tool_name));
        };

        info!("Dispatching tool call: {}", request.tool_name);
        Ok((entry.handler)(&request.arguments, &self.config.workspace))
    }
}
