//! Output formatting for rewrite reports, descriptors and hook registration
//!
//! Every formatter supports JSON and YAML for scripting plus a short
//! human-readable summary.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;

use crate::hooks::{HookEntry, RegistrationOutcome};
use crate::project::ProjectDescriptor;
use crate::rewrite::{RewriteReport, StrategyKind};

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
    /// Human-readable formatted text
    Human,
}

/// Descriptor plus the files that would be rewritten for it
#[derive(Debug, Clone, Serialize)]
pub struct InspectView<'a> {
    pub config_file: PathBuf,
    pub project: &'a ProjectDescriptor,
    pub targets: Vec<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegistrationView<'a> {
    pub registry: PathBuf,
    pub outcome: RegistrationOutcome,
    pub hook: &'a HookEntry,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_report(&self, report: &RewriteReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => to_json(report, "rewrite report"),
            OutputFormat::Yaml => to_yaml(report, "rewrite report"),
            OutputFormat::Human => Ok(self.format_report_human(report)),
        }
    }

    pub fn format_inspect(&self, view: &InspectView<'_>) -> Result<String> {
        match self.format {
            OutputFormat::Json => to_json(view, "project descriptor"),
            OutputFormat::Yaml => to_yaml(view, "project descriptor"),
            OutputFormat::Human => Ok(self.format_inspect_human(view)),
        }
    }

    pub fn format_registration(&self, view: &RegistrationView<'_>) -> Result<String> {
        match self.format {
            OutputFormat::Json => to_json(view, "hook registration"),
            OutputFormat::Yaml => to_yaml(view, "hook registration"),
            OutputFormat::Human => Ok(format!(
                "Hook {} ({} {}) {} in {}",
                view.hook.generator_callback,
                view.hook.hook_type,
                view.hook.hook_for,
                match view.outcome {
                    RegistrationOutcome::Added => "added",
                    RegistrationOutcome::Updated => "updated",
                    RegistrationOutcome::Unchanged => "already registered",
                },
                view.registry.display()
            )),
        }
    }

    fn format_report_human(&self, report: &RewriteReport) -> String {
        let mut out = String::new();
        let verb = if report.dry_run { "Would rewrite" } else { "Rewrote" };

        let _ = writeln!(
            out,
            "{} naming strategies in {} ({})",
            verb,
            report.root.display(),
            report.build_tool.name()
        );

        for file in &report.files {
            let relative = file
                .path
                .strip_prefix(&report.root)
                .unwrap_or(file.path.as_path())
                .display();
            if file.changed {
                let _ = writeln!(
                    out,
                    "  ✓ {} (implicit: {}, physical: {})",
                    relative,
                    file.count_for(StrategyKind::Implicit),
                    file.count_for(StrategyKind::Physical)
                );
            } else {
                let _ = writeln!(out, "  - {} (unchanged)", relative);
            }
        }

        let _ = write!(
            out,
            "{} file(s) changed, {} replacement(s)",
            report.changed_files().len(),
            report.total_replacements()
        );
        out
    }

    fn format_inspect_human(&self, view: &InspectView<'_>) -> String {
        let project = view.project;
        let mut out = String::new();

        let _ = writeln!(out, "Configuration: {}", view.config_file.display());
        let _ = writeln!(out, "  Base name:          {}", project.base_name);
        let _ = writeln!(out, "  Package:            {}", project.package_name);
        if let Some(name) = &project.angular_app_name {
            let _ = writeln!(out, "  Angular app name:   {}", name);
        }
        let _ = writeln!(out, "  Client framework:   {}", project.client_framework);
        let _ = writeln!(out, "  Package manager:    {}", project.client_package_manager);
        let _ = writeln!(out, "  Build tool:         {}", project.build_tool.name());
        let _ = write!(out, "Targets:");
        for target in &view.targets {
            let _ = write!(out, "\n  {}", target.display());
        }
        out
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T, what: &str) -> Result<String> {
    serde_json::to_string_pretty(value).with_context(|| format!("Failed to serialize {} to JSON", what))
}

fn to_yaml<T: Serialize + ?Sized>(value: &T, what: &str) -> Result<String> {
    serde_yaml::to_string(value).with_context(|| format!("Failed to serialize {} to YAML", what))
}
