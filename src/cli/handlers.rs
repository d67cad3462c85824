//! Subcommand handlers
//!
//! Each handler returns the process exit code: 0 on success, 1 when the
//! operation itself fails, 2 when the configuration or project descriptor is
//! unusable.

use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use super::commands::{InspectArgs, RegisterArgs, RewriteArgs};
use super::output::{InspectView, OutputFormat, OutputFormatter, RegistrationView};
use crate::config::DbhConfig;
use crate::fs::RealFileSystem;
use crate::hooks::{hooks_file_path, register_hook, HookRegistration, DEFAULT_NPM_PACKAGE_NAME};
use crate::project::{config_file_path, BuildTool, ProjectDescriptor, TestCase};
use crate::rewrite::NamingStrategyRewriter;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

fn resolve_project_root(path: Option<&PathBuf>) -> Result<PathBuf, i32> {
    let root = match path {
        Some(p) => p.clone(),
        None => match env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                error!("Failed to get current directory: {}", e);
                return Err(EXIT_FAILURE);
            }
        },
    };

    if !root.is_dir() {
        error!("Project path is not a directory: {}", root.display());
        return Err(EXIT_FAILURE);
    }

    match root.canonicalize() {
        Ok(path) => {
            debug!("Project root: {}", path.display());
            Ok(path)
        }
        Err(e) => {
            error!("Failed to canonicalize project path: {}", e);
            Err(EXIT_FAILURE)
        }
    }
}

fn load_descriptor(
    root: &Path,
    test_case: Option<&TestCase>,
) -> Result<(PathBuf, ProjectDescriptor), i32> {
    let config_file = config_file_path(root, test_case);
    debug!("Reading project descriptor from {}", config_file.display());

    match ProjectDescriptor::load(&RealFileSystem::new(), &config_file) {
        Ok(descriptor) => Ok((config_file, descriptor)),
        Err(e) => {
            error!("{}", e);
            Err(EXIT_CONFIG_ERROR)
        }
    }
}

fn emit(output: anyhow::Result<String>, format: OutputFormat, quiet: bool) -> i32 {
    match output {
        Ok(text) => {
            if !(quiet && format == OutputFormat::Human) {
                println!("{}", text);
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            error!("Failed to format output: {:#}", e);
            EXIT_FAILURE
        }
    }
}

pub fn handle_rewrite(args: &RewriteArgs, config: &DbhConfig, quiet: bool) -> i32 {
    let root = match resolve_project_root(args.project_path.as_ref()) {
        Ok(root) => root,
        Err(code) => return code,
    };

    let build_tool: BuildTool = match args.build_tool {
        Some(arg) => {
            debug!("Build tool overridden to {}", BuildTool::from(arg));
            arg.into()
        }
        None => {
            let test_case = args.test_case.as_deref().map(|name| config.test_case(name));
            match load_descriptor(&root, test_case.as_ref()) {
                Ok((_, descriptor)) => descriptor.build_tool,
                Err(code) => return code,
            }
        }
    };

    let dry_run = args.dry_run || config.dry_run;
    info!(
        root = %root.display(),
        build_tool = %build_tool,
        dry_run,
        "Rewriting naming strategies"
    );

    let rewriter = NamingStrategyRewriter::new(RealFileSystem::new())
        .with_pairs(args.naming_strategies())
        .dry_run(dry_run);

    match rewriter.rewrite(&root, build_tool) {
        Ok(report) => {
            let format = OutputFormat::from(args.format);
            emit(
                OutputFormatter::new(format).format_report(&report),
                format,
                quiet,
            )
        }
        Err(e) => {
            error!("Rewrite failed: {}", e);
            EXIT_FAILURE
        }
    }
}

pub fn handle_inspect(args: &InspectArgs, config: &DbhConfig, quiet: bool) -> i32 {
    let root = match resolve_project_root(args.project_path.as_ref()) {
        Ok(root) => root,
        Err(code) => return code,
    };

    let test_case = args.test_case.as_deref().map(|name| config.test_case(name));
    let (config_file, descriptor) = match load_descriptor(&root, test_case.as_ref()) {
        Ok(loaded) => loaded,
        Err(code) => return code,
    };

    let view = InspectView {
        config_file,
        project: &descriptor,
        targets: descriptor.rewrite_target().resolve(&root),
    };

    let format = OutputFormat::from(args.format);
    emit(
        OutputFormatter::new(format).format_inspect(&view),
        format,
        quiet,
    )
}

pub fn handle_register(args: &RegisterArgs, quiet: bool) -> i32 {
    let root = match resolve_project_root(args.project_path.as_ref()) {
        Ok(root) => root,
        Err(code) => return code,
    };

    let registration = HookRegistration {
        npm_package_name: args
            .package
            .clone()
            .unwrap_or_else(|| DEFAULT_NPM_PACKAGE_NAME.to_string()),
        hook_for: args.hook_for,
        hook_type: args.hook_type,
        callback_sub_generator: args.callback.clone(),
        ..Default::default()
    };

    let entry = match registration.to_entry() {
        Ok(entry) => entry,
        Err(e) => {
            error!("{}", e);
            return EXIT_CONFIG_ERROR;
        }
    };

    match register_hook(&RealFileSystem::new(), &root, &registration) {
        Ok(outcome) => {
            let view = RegistrationView {
                registry: hooks_file_path(&root),
                outcome,
                hook: &entry,
            };
            let format = OutputFormat::from(args.format);
            emit(
                OutputFormatter::new(format).format_registration(&view),
                format,
                quiet,
            )
        }
        Err(e) => {
            error!("Hook registration failed: {}", e);
            EXIT_FAILURE
        }
    }
}
