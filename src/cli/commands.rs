use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::hooks::{HookFor, HookType};
use crate::project::BuildTool;
use crate::rewrite::NamingStrategyPair;

/// Migrates generated Spring Boot projects to the Hibernate naming strategies
#[derive(Parser, Debug)]
#[command(
    name = "dbh",
    about = "Migrates generated Spring Boot projects to the Hibernate naming strategies",
    version,
    long_about = "dbh reads a generated project's .yo-rc.json, then replaces Spring's \
                  naming strategy class names with Hibernate's in the build file \
                  (pom.xml or gradle/liquibase.gradle) and in the main and test \
                  application.yml, so that existing table and column names are kept as-is."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        ignore_case = true,
        help = "Set logging level"
    )]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Rewrite naming strategies in a generated project",
        long_about = "Rewrites the naming strategy class names in the build file and both \
                      application.yml files. Nothing is written if any target file is missing.\n\n\
                      Examples:\n  \
                      dbh rewrite\n  \
                      dbh rewrite /path/to/app --dry-run\n  \
                      dbh rewrite --build-tool gradle --format json"
    )]
    Rewrite(RewriteArgs),

    #[command(
        about = "Show the project descriptor and the files that would be rewritten",
        long_about = "Reads .yo-rc.json and prints the project metadata together with the \
                      target files for its build tool.\n\n\
                      Examples:\n  \
                      dbh inspect\n  \
                      dbh inspect --test-case usingGradle --format yaml"
    )]
    Inspect(InspectArgs),

    #[command(
        about = "Register dbh as a hook of the host generator",
        long_about = "Adds an entry to .jhipster/modules/jhi-hooks.json so the host generator \
                      invokes dbh after generating the application.\n\n\
                      Examples:\n  \
                      dbh register\n  \
                      dbh register --hook-for entity --callback entity"
    )]
    Register(RegisterArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct RewriteArgs {
    #[arg(
        value_name = "PATH",
        help = "Path to the generated project (defaults to current directory)"
    )]
    pub project_path: Option<PathBuf>,

    #[arg(
        short = 'b',
        long,
        value_enum,
        help = "Build tool to assume instead of reading it from .yo-rc.json"
    )]
    pub build_tool: Option<BuildToolArg>,

    #[arg(
        long,
        value_name = "NAME",
        conflicts_with = "build_tool",
        help = "Read .yo-rc.json from the named fixture project instead of PATH"
    )]
    pub test_case: Option<String>,

    #[arg(long, help = "Report what would change without writing")]
    pub dry_run: bool,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(long, value_name = "CLASS", help = "Implicit naming strategy to replace")]
    pub implicit_old: Option<String>,

    #[arg(long, value_name = "CLASS", help = "Implicit naming strategy to use")]
    pub implicit_new: Option<String>,

    #[arg(long, value_name = "CLASS", help = "Physical naming strategy to replace")]
    pub physical_old: Option<String>,

    #[arg(long, value_name = "CLASS", help = "Physical naming strategy to use")]
    pub physical_new: Option<String>,
}

impl RewriteArgs {
    /// Default strategy pair with any command-line overrides applied
    pub fn naming_strategies(&self) -> NamingStrategyPair {
        let mut pairs = NamingStrategyPair::default();
        if let Some(v) = &self.implicit_old {
            pairs.implicit_old = v.clone();
        }
        if let Some(v) = &self.implicit_new {
            pairs.implicit_new = v.clone();
        }
        if let Some(v) = &self.physical_old {
            pairs.physical_old = v.clone();
        }
        if let Some(v) = &self.physical_new {
            pairs.physical_new = v.clone();
        }
        pairs
    }
}

#[derive(Parser, Debug, Clone)]
pub struct InspectArgs {
    #[arg(
        value_name = "PATH",
        help = "Path to the generated project (defaults to current directory)"
    )]
    pub project_path: Option<PathBuf>,

    #[arg(
        long,
        value_name = "NAME",
        help = "Read .yo-rc.json from the named fixture project instead of PATH"
    )]
    pub test_case: Option<String>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct RegisterArgs {
    #[arg(
        value_name = "PATH",
        help = "Path to the generated project (defaults to current directory)"
    )]
    pub project_path: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "app", help = "Generator to hook into")]
    pub hook_for: HookFor,

    #[arg(long, value_enum, default_value = "post", help = "Run before or after it")]
    pub hook_type: HookType,

    #[arg(long, value_name = "NAME", help = "npm package name to register")]
    pub package: Option<String>,

    #[arg(
        long,
        value_name = "SUBGENERATOR",
        default_value = "app",
        help = "Sub-generator the host should call"
    )]
    pub callback: String,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildToolArg {
    Maven,
    Gradle,
}

impl From<BuildToolArg> for BuildTool {
    fn from(arg: BuildToolArg) -> Self {
        match arg {
            BuildToolArg::Maven => BuildTool::Maven,
            BuildToolArg::Gradle => BuildTool::Gradle,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}
