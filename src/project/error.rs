use std::path::PathBuf;
use thiserror::Error;

use super::build_tool::UnsupportedBuildTool;

/// Errors raised while locating or reading the project descriptor
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Failed to read configuration file {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("Failed to parse configuration file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Configuration file {path} has no '{section}' section")]
    MissingSection { path: PathBuf, section: String },

    #[error("Invalid value for '{field}' in {path}: {reason}")]
    InvalidField {
        path: PathBuf,
        field: String,
        reason: String,
    },

    #[error(transparent)]
    UnsupportedBuildTool(#[from] UnsupportedBuildTool),
}
