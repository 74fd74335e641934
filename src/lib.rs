//! Calculator MCP Server Library
//!
//! A small Model Context Protocol (MCP) server exposing two tools:
//!
//! - **calculate**: add, subtract or multiply two numbers and record the
//!   result in `calculation_result.txt` inside the workspace folder
//! - **template**: generate a controller/usecase source stub under the
//!   workspace folder
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: argument extraction, the tool registry and the tool definitions
//!
//! # Example
//!
//! ```rust,no_run
//! use calculator_mcp_server::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
