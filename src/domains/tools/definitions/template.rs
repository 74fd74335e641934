//! Code template tool definition.
//!
//! Generates a Go source stub named after the requested identifier under
//! `<workspace>/<template>/<name>.go`.

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

/// Kind of template to generate. Also the name of the target sub-directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Controller,
    Usecase,
}

impl TemplateKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Controller => "controller",
            Self::Usecase => "usecase",
        }
    }
}

/// Parameters for the template tool.
#[derive(Debug, Clone, JsonSchema)]
pub struct TemplateParams {
    /// Select generater template (controller, usecase)
    pub template: TemplateKind,

    /// file name
    pub name: String,
}

impl TemplateParams {
    /// Extract the parameters from a raw argument object.
    pub fn from_arguments(args: &Arguments<'_>) -> Result<Self, ArgumentError> {
        Ok(Self {
            template: args.choice("template")?,
            name: args.string("name")?.to_string(),
        })
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Template tool - writes a function stub into the workspace.
pub struct TemplateTool;

impl TemplateTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "template";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Generate code template";

    /// Extension of generated source files.
    pub const EXTENSION: &'static str = "go";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(arguments: &JsonObject, workspace: &WorkspaceConfig) -> CallToolResult {
        into_call_result(Self::NAME, Self::run(arguments, workspace))
    }

    fn run(arguments: &JsonObject, workspace: &WorkspaceConfig) -> Result<String, ToolError> {
        let params = TemplateParams::from_arguments(&Arguments::new(arguments))?;
        info!(
            "Template tool called: {} '{}'",
            params.template.as_str(),
            params.name
        );

        // `name` is used verbatim; the parent directory must already exist.
        let file_name = format!("{}.{}", params.name, Self::EXTENSION);
        let path = workspace.join(&[params.template.as_str(), file_name.as_str()]);

        let code = render_stub(&params.name);
        write_artifact(&path, &code)?;

        info!("Template written to {}", path.display());
        Ok(code)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<TemplateParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

fn render_stub(name: &str) -> String {
    format!("package main\n\nfunc {name}() {{\n\t// TODO: Implement {name}\n}}\n")
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

    fn workspace_with_dirs() -> (TempDir, WorkspaceConfig) {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("controller")).unwrap();
        fs::create_dir(temp_dir.path().join("usecase")).unwrap();
        let ws = WorkspaceConfig::rooted_at("tok", temp_dir.path());
        (temp_dir, ws)
    }

    #[test]
    fn test_controller_and_usecase_produce_same_stub() {
        let (temp_dir, ws) = workspace_with_dirs();

        let controller =
            TemplateTool::execute(&args(json!({ "template": "controller", "name": "foo" })), &ws);
        let usecase =
            TemplateTool::execute(&args(json!({ "template": "usecase", "name": "foo" })), &ws);

        assert!(!controller.is_error.unwrap_or(false));
        assert!(!usecase.is_error.unwrap_or(false));
        assert_eq!(text_of(&controller), text_of(&usecase));
        assert_eq!(
            text_of(&controller),
            "package main\n\nfunc foo() {\n\t// TODO: Implement foo\n}\n"
        );
        assert_eq!(text_of(&controller).matches("foo").count(), 2);

        let on_disk = fs::read_to_string(temp_dir.path().join("controller/foo.go")).unwrap();
        assert_eq!(on_disk, text_of(&controller));
        assert!(temp_dir.path().join("usecase/foo.go").is_file());
    }

    #[test]
    fn test_missing_parent_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let ws = WorkspaceConfig::rooted_at("tok", temp_dir.path());

        let result =
            TemplateTool::execute(&args(json!({ "template": "usecase", "name": "bar" })), &ws);
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(text_of(&result), "ファイル作成に失敗しました");
        assert!(!temp_dir.path().join("usecase").exists());
    }

    #[test]
    fn test_unknown_template_kind_fails() {
        let (temp_dir, ws) = workspace_with_dirs();

        for kind in ["divide", "repository"] {
            let result =
                TemplateTool::execute(&args(json!({ "template": kind, "name": "foo" })), &ws);
            assert!(result.is_error.unwrap_or(false));
            assert_eq!(
                text_of(&result),
                format!("Invalid arguments: unsupported template '{kind}'")
            );
        }
        assert_eq!(fs::read_dir(temp_dir.path().join("controller")).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_name_is_failure() {
        let (_temp_dir, ws) = workspace_with_dirs();
        let result = TemplateTool::execute(&args(json!({ "template": "controller" })), &ws);
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(
            text_of(&result),
            "Invalid arguments: missing required parameter 'name'"
        );
    }

    #[test]
    fn test_regenerating_overwrites() {
        let (temp_dir, ws) = workspace_with_dirs();
        let target = temp_dir.path().join("controller/foo.go");
        fs::write(&target, "stale content that is longer than the stub itself ...........").unwrap();

        TemplateTool::execute(&args(json!({ "template": "controller", "name": "foo" })), &ws);
        assert_eq!(fs::read_to_string(&target).unwrap(), render_stub("foo"));
    }
}
