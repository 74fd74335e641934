//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients to perform
//! specific actions or computations.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `arguments.rs` - Typed extraction of call arguments
//! - `writer.rs` - File output shared by the tools
//! - `registry.rs` - Tool registration and dispatch
//! - `router.rs` - Builds the rmcp ToolRouter from the registry for STDIO/TCP
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define params, `execute()` and `to_tool()`
//! 3. Export in `definitions/mod.rs`
//! 4. Register it in `ToolRegistry::with_default_tools`
//!
//! The router and the HTTP transport both read from the registry.

pub mod arguments;
pub mod definitions;
mod error;
mod handlers;
mod registry;
pub mod router;
pub mod writer;

pub use arguments::{ArgKind, ArgValue, ArgumentError, Arguments};
pub use error::ToolError;
pub use handlers::*;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
