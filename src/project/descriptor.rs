//! Project descriptor loaded from `.yo-rc.json`

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use super::build_tool::BuildTool;
use super::error::ProjectError;
use crate::fs::FileSystem;
use crate::rewrite::RewriteTarget;

/// Name of the configuration marker file at the root of a generated project
pub const CONFIG_FILE_NAME: &str = ".yo-rc.json";

/// Key of the object holding the generator's persisted answers
pub const GENERATOR_SECTION: &str = "generator-jhipster";

/// Metadata of a generated project, read once and never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDescriptor {
    pub base_name: String,
    pub package_name: String,
    pub angular_app_name: Option<String>,
    pub client_framework: String,
    pub client_package_manager: String,
    pub build_tool: BuildTool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDescriptor {
    base_name: Option<String>,
    package_name: Option<String>,
    angular_app_name: Option<String>,
    client_framework: Option<String>,
    client_package_manager: Option<String>,
    build_tool: Option<String>,
}

/// True for a present, non-empty string.
pub fn is_not_empty_string(value: Option<&str>) -> bool {
    matches!(value, Some(s) if !s.is_empty())
}

impl ProjectDescriptor {
    /// Reads and validates the descriptor stored at `path`.
    pub fn load<F: FileSystem>(fs: &F, path: &Path) -> Result<Self, ProjectError> {
        if !fs.is_file(path) {
            return Err(ProjectError::ConfigNotFound(path.to_path_buf()));
        }

        let content = fs.read_to_string(path).map_err(|e| ProjectError::Read {
            path: path.to_path_buf(),
            message: format!("{:#}", e),
        })?;

        let descriptor = Self::from_json(&content, path)?;
        debug!(
            path = %path.display(),
            base_name = %descriptor.base_name,
            build_tool = %descriptor.build_tool,
            "Loaded project descriptor"
        );
        Ok(descriptor)
    }

    /// Parses descriptor JSON; `path` is only used in error messages.
    pub fn from_json(content: &str, path: &Path) -> Result<Self, ProjectError> {
        let parse_error = |e: serde_json::Error| ProjectError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        let document: serde_json::Value = serde_json::from_str(content).map_err(parse_error)?;
        let section = document
            .get(GENERATOR_SECTION)
            .filter(|v| v.is_object())
            .ok_or_else(|| ProjectError::MissingSection {
                path: path.to_path_buf(),
                section: GENERATOR_SECTION.to_string(),
            })?;
        let raw = RawDescriptor::deserialize(section).map_err(parse_error)?;

        let required = |field: &str, value: Option<String>| -> Result<String, ProjectError> {
            if is_not_empty_string(value.as_deref()) {
                Ok(value.unwrap_or_default())
            } else {
                Err(ProjectError::InvalidField {
                    path: path.to_path_buf(),
                    field: field.to_string(),
                    reason: "expected a non-empty string".to_string(),
                })
            }
        };

        let angular_app_name = match raw.angular_app_name {
            Some(name) if name.is_empty() => {
                return Err(ProjectError::InvalidField {
                    path: path.to_path_buf(),
                    field: "angularAppName".to_string(),
                    reason: "expected null or a non-empty string".to_string(),
                })
            }
            other => other,
        };

        let build_tool = required("buildTool", raw.build_tool)?.parse::<BuildTool>()?;

        Ok(Self {
            base_name: required("baseName", raw.base_name)?,
            package_name: required("packageName", raw.package_name)?,
            angular_app_name,
            client_framework: required("clientFramework", raw.client_framework)?,
            client_package_manager: required("clientPackageManager", raw.client_package_manager)?,
            build_tool,
        })
    }

    /// Files holding naming strategies for this project's build tool
    pub fn rewrite_target(&self) -> RewriteTarget {
        RewriteTarget::for_build_tool(self.build_tool)
    }
}
