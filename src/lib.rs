//! dbh - naming strategy migration for generated Spring Boot projects
//!
//! Projects generated before the switch to Hibernate's naming strategies
//! reference Spring's `SpringImplicitNamingStrategy` and
//! `SpringPhysicalNamingStrategy`, which rename tables and columns to snake
//! case. This crate patches such a project in place so it uses
//! `ImplicitNamingStrategyLegacyHbmImpl` and
//! `PhysicalNamingStrategyStandardImpl` instead, keeping existing database
//! identifiers untouched.
//!
//! # Example
//!
//! ```no_run
//! use dbh::fs::RealFileSystem;
//! use dbh::project::{config_file_path, ProjectDescriptor};
//! use dbh::rewrite::NamingStrategyRewriter;
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let root = Path::new("/path/to/app");
//! let fs = RealFileSystem::new();
//!
//! let descriptor = ProjectDescriptor::load(&fs, &config_file_path(root, None))?;
//! let report = NamingStrategyRewriter::new(fs).rewrite_project(root, &descriptor)?;
//!
//! for file in report.changed_files() {
//!     println!("patched {}", file.display());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Project Structure
//!
//! - [`project`]: `.yo-rc.json` location and parsing
//! - [`rewrite`]: target resolution and literal rewriting
//! - [`hooks`]: registration in the host generator's hook registry
//! - [`fs`]: file system abstraction with an in-memory implementation

pub mod cli;
pub mod config;
pub mod fs;
pub mod hooks;
pub mod project;
pub mod rewrite;
pub mod util;

pub use config::{ConfigError, DbhConfig};
pub use hooks::{register_hook, HookError, HookRegistration};
pub use project::{BuildTool, ProjectDescriptor, ProjectError};
pub use rewrite::{
    rewrite_naming_strategies, NamingStrategyPair, NamingStrategyRewriter, RewriteError,
    RewriteReport, RewriteTarget,
};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
