use serde::Serialize;
use std::path::PathBuf;

use super::naming::StrategyKind;
use crate::project::BuildTool;

/// Number of occurrences replaced for one strategy kind in one file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Replacement {
    pub kind: StrategyKind,
    pub count: usize,
}

/// What happened to a single target file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub replacements: Vec<Replacement>,
    pub changed: bool,
}

impl FileOutcome {
    pub fn total_replacements(&self) -> usize {
        self.replacements.iter().map(|r| r.count).sum()
    }

    pub fn count_for(&self, kind: StrategyKind) -> usize {
        self.replacements
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| r.count)
            .sum()
    }
}

/// Result of a rewrite run over every target of a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewriteReport {
    pub root: PathBuf,
    pub build_tool: BuildTool,
    pub dry_run: bool,
    pub files: Vec<FileOutcome>,
}

impl RewriteReport {
    pub fn changed_files(&self) -> Vec<&PathBuf> {
        self.files
            .iter()
            .filter(|f| f.changed)
            .map(|f| &f.path)
            .collect()
    }

    pub fn total_replacements(&self) -> usize {
        self.files.iter().map(|f| f.total_replacements()).sum()
    }

    pub fn is_noop(&self) -> bool {
        self.files.iter().all(|f| !f.changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(path: &str, implicit: usize, physical: usize) -> FileOutcome {
        FileOutcome {
            path: PathBuf::from(path),
            replacements: vec![
                Replacement {
                    kind: StrategyKind::Implicit,
                    count: implicit,
                },
                Replacement {
                    kind: StrategyKind::Physical,
                    count: physical,
                },
            ],
            changed: implicit + physical > 0,
        }
    }

    #[test]
    fn test_totals() {
        let report = RewriteReport {
            root: PathBuf::from("/app"),
            build_tool: BuildTool::Maven,
            dry_run: false,
            files: vec![
                outcome("/app/pom.xml", 1, 1),
                outcome("/app/src/main/resources/config/application.yml", 1, 2),
                outcome("/app/src/test/resources/config/application.yml", 0, 0),
            ],
        };

        assert_eq!(report.total_replacements(), 5);
        assert_eq!(report.changed_files().len(), 2);
        assert!(!report.is_noop());
        assert_eq!(report.files[1].count_for(StrategyKind::Physical), 2);
    }

    #[test]
    fn test_serializes_build_tool_as_identifier() {
        let report = RewriteReport {
            root: PathBuf::from("/app"),
            build_tool: BuildTool::Gradle,
            dry_run: true,
            files: vec![],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["build_tool"], "gradle");
        assert_eq!(json["dry_run"], true);
        assert!(report.is_noop());
    }
}
