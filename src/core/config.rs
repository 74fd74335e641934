//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that is
//! populated once at startup from environment variables (and an optional
//! `.env` file), then shared read-only with every tool invocation.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Environment variable holding the opaque token written into calculation results.
pub const MCP_PATH_VAR: &str = "MCP_PATH";

/// Environment variable holding the base directory for generated files.
pub const WORK_SPACE_FOLDER_VAR: &str = "WORK_SPACE_FOLDER";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Workspace the tools write their artifacts into.
    pub workspace: WorkspaceConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Process-wide workspace settings read by the tools on every call.
///
/// Both values are taken verbatim from the environment. Nothing is
/// validated: an unset variable becomes an empty string, which yields
/// paths relative to the filesystem root (e.g. `/calculation_result.txt`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Opaque token (`MCP_PATH`) embedded in the calculation result file.
    pub mcp_path: String,

    /// Base directory (`WORK_SPACE_FOLDER`) for all file outputs.
    pub work_space_folder: String,
}

impl WorkspaceConfig {
    /// Log a warning for every value that was left empty.
    pub fn warn_if_unset(&self) {
        if self.mcp_path.is_empty() {
            warn!("{} not set - result files will carry an empty token", MCP_PATH_VAR);
        }
        if self.work_space_folder.is_empty() {
            warn!(
                "{} not set - files will be written under the filesystem root",
                WORK_SPACE_FOLDER_VAR
            );
        }
    }

    /// Build a workspace configuration from explicit values.
    pub fn new(mcp_path: impl Into<String>, work_space_folder: impl Into<String>) -> Self {
        Self {
            mcp_path: mcp_path.into(),
            work_space_folder: work_space_folder.into(),
        }
    }

    /// Build a workspace configuration rooted at a local directory.
    pub fn rooted_at(mcp_path: impl Into<String>, folder: &Path) -> Self {
        Self::new(mcp_path, folder.to_string_lossy())
    }

    /// Load `MCP_PATH` and `WORK_SPACE_FOLDER` from the environment.
    pub fn from_env() -> Self {
        Self {
            mcp_path: env_or_empty(MCP_PATH_VAR),
            work_space_folder: env_or_empty(WORK_SPACE_FOLDER_VAR),
        }
    }

    /// Join path segments onto the workspace folder with `/`.
    ///
    /// Plain string joining keeps the empty-folder case producing an
    /// absolute path, matching how the artifacts have always been located.
    pub fn join(&self, segments: &[&str]) -> PathBuf {
        let mut path = self.work_space_folder.clone();
        for segment in segments {
            path.push('/');
            path.push_str(segment);
        }
        PathBuf::from(path)
    }
}

fn env_or_empty(key: &str) -> String {
    std::env::var(key).unwrap_or_default()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "Calculator Demo".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            workspace: WorkspaceConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a default configuration that writes into the given workspace.
    pub fn with_workspace(workspace: WorkspaceConfig) -> Self {
        Self {
            workspace,
            ..Self::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_TRANSPORT`...); the workspace is read from
    /// `MCP_PATH` and `WORK_SPACE_FOLDER`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();
        config.workspace = WorkspaceConfig::from_env();

        config
    }
}
