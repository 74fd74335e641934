//! Tool-specific error types.

use std::io;

use thiserror::Error;

use super::arguments::ArgumentError;

/// Errors that can occur during tool operations.
///
/// The `Display` text of every variant is what the client sees in a failed
/// tool result, so I/O variants keep their source out of the message.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The requested feature is recognised but not implemented.
    #[error("未対応の機能です")]
    Unsupported,

    /// The output file could not be created.
    #[error("ファイル作成に失敗しました")]
    CreateFailed(#[source] io::Error),

    /// The output file was created but writing to it failed.
    #[error("ファイル書き込みに失敗しました")]
    WriteFailed(#[source] io::Error),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}

impl From<ArgumentError> for ToolError {
    fn from(err: ArgumentError) -> Self {
        Self::InvalidArguments(err.to_string())
    }
}
