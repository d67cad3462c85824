//! Generated-project metadata
//!
//! A generated project persists the answers given at generation time in a
//! `.yo-rc.json` marker file at its root. This module locates that file and
//! reads the subset of fields needed to decide which files to patch.

pub mod build_tool;
pub mod descriptor;
pub mod error;
pub mod marker;

pub use build_tool::{BuildTool, UnsupportedBuildTool};
pub use descriptor::{is_not_empty_string, ProjectDescriptor, CONFIG_FILE_NAME, GENERATOR_SECTION};
pub use error::ProjectError;
pub use marker::{config_file_path, TestCase};
