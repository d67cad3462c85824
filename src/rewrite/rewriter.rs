//! Literal naming strategy rewriting over a project's target files

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::naming::{NamingStrategyPair, StrategyKind};
use super::report::{FileOutcome, Replacement, RewriteReport};
use super::targets::RewriteTarget;
use crate::fs::{FileSystem, RealFileSystem};
use crate::project::{BuildTool, ProjectDescriptor};

#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("Target file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("I/O error on {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("The old {0} naming strategy must not be empty")]
    EmptyPattern(StrategyKind),

    #[error("Failed to write {path}: {message}; could not restore {unrestored:?}")]
    RestoreFailed {
        path: PathBuf,
        message: String,
        unrestored: Vec<PathBuf>,
    },
}

/// A target whose new contents have been computed but not yet written
struct PendingFile {
    path: PathBuf,
    original: String,
    rewritten: Option<String>,
    replacements: Vec<Replacement>,
}

/// Replaces every occurrence of each old string with its new string in a
/// single left-to-right pass, so the result does not depend on the order of
/// `substitutions` and replaced text is never scanned again.
///
/// When several old strings match at the same position the longest wins.
/// Empty old strings never match.
pub fn replace_literals(content: &str, substitutions: &[(&str, &str)]) -> (String, Vec<usize>) {
    let mut counts = vec![0; substitutions.len()];
    let mut output = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(c) = rest.chars().next() {
        let matched = substitutions
            .iter()
            .enumerate()
            .filter(|(_, (old, _))| !old.is_empty() && rest.starts_with(old))
            .max_by_key(|(_, (old, _))| old.len());

        match matched {
            Some((index, (old, new))) => {
                output.push_str(new);
                counts[index] += 1;
                rest = &rest[old.len()..];
            }
            None => {
                output.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    (output, counts)
}

pub struct NamingStrategyRewriter<F: FileSystem> {
    fs: F,
    pairs: NamingStrategyPair,
    dry_run: bool,
}

impl<F: FileSystem> NamingStrategyRewriter<F> {
    pub fn new(fs: F) -> Self {
        Self {
            fs,
            pairs: NamingStrategyPair::default(),
            dry_run: false,
        }
    }

    pub fn with_pairs(mut self, pairs: NamingStrategyPair) -> Self {
        self.pairs = pairs;
        self
    }

    /// Compute the report without writing anything
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    pub fn rewrite_project(
        &self,
        root: &Path,
        descriptor: &ProjectDescriptor,
    ) -> Result<RewriteReport, RewriteError> {
        self.rewrite(root, descriptor.build_tool)
    }

    /// Rewrites the naming strategies in every target file of the project.
    ///
    /// All targets are read and rewritten in memory first, so a missing or
    /// unreadable file fails the run before anything is written. If a write
    /// fails, files already written are restored to their original contents.
    pub fn rewrite(&self, root: &Path, build_tool: BuildTool) -> Result<RewriteReport, RewriteError> {
        if let Some(kind) = self.pairs.empty_patterns().into_iter().next() {
            return Err(RewriteError::EmptyPattern(kind));
        }

        let target = RewriteTarget::for_build_tool(build_tool);
        debug!(
            root = %root.display(),
            build_tool = %build_tool,
            targets = target.len(),
            "Resolving naming strategy targets"
        );

        let pending = target
            .resolve(root)
            .into_iter()
            .map(|path| self.prepare(path))
            .collect::<Result<Vec<_>, _>>()?;

        if !self.dry_run {
            self.commit(&pending)?;
        }

        let files: Vec<FileOutcome> = pending
            .into_iter()
            .map(|file| FileOutcome {
                changed: file.rewritten.is_some(),
                path: file.path,
                replacements: file.replacements,
            })
            .collect();

        let report = RewriteReport {
            root: root.to_path_buf(),
            build_tool,
            dry_run: self.dry_run,
            files,
        };

        info!(
            build_tool = %build_tool,
            changed = report.changed_files().len(),
            replacements = report.total_replacements(),
            dry_run = self.dry_run,
            "Naming strategies rewritten"
        );

        Ok(report)
    }

    fn prepare(&self, path: PathBuf) -> Result<PendingFile, RewriteError> {
        if !self.fs.is_file(&path) {
            return Err(RewriteError::FileNotFound(path));
        }

        let original = self
            .fs
            .read_to_string(&path)
            .map_err(|e| RewriteError::Io {
                path: path.clone(),
                message: format!("{:#}", e),
            })?;

        let substitutions = self.pairs.substitutions();
        let literals: Vec<(&str, &str)> = substitutions
            .iter()
            .map(|(_, old, new)| (*old, *new))
            .collect();
        let (rewritten, counts) = replace_literals(&original, &literals);

        let replacements: Vec<Replacement> = substitutions
            .iter()
            .zip(counts)
            .map(|((kind, _, _), count)| Replacement { kind: *kind, count })
            .collect();

        let rewritten = if rewritten != original {
            Some(rewritten)
        } else {
            None
        };

        debug!(
            path = %path.display(),
            changed = rewritten.is_some(),
            "Prepared target file"
        );

        Ok(PendingFile {
            path,
            original,
            rewritten,
            replacements,
        })
    }

    fn commit(&self, pending: &[PendingFile]) -> Result<(), RewriteError> {
        let mut written: Vec<&PendingFile> = Vec::new();

        for file in pending {
            let Some(contents) = &file.rewritten else {
                continue;
            };

            if let Err(e) = self.fs.write(&file.path, contents) {
                let message = format!("{:#}", e);
                warn!(path = %file.path.display(), error = %message, "Write failed, restoring targets");
                return Err(self.restore(&written, file.path.clone(), message));
            }
            written.push(file);
        }

        Ok(())
    }

    fn restore(&self, written: &[&PendingFile], path: PathBuf, message: String) -> RewriteError {
        let unrestored: Vec<PathBuf> = written
            .iter()
            .filter(|file| self.fs.write(&file.path, &file.original).is_err())
            .map(|file| file.path.clone())
            .collect();

        if unrestored.is_empty() {
            RewriteError::Io { path, message }
        } else {
            RewriteError::RestoreFailed {
                path,
                message,
                unrestored,
            }
        }
    }
}

/// Rewrites the default naming strategies of the project at `root` on disk.
pub fn rewrite_naming_strategies(
    root: &Path,
    build_tool: BuildTool,
) -> Result<RewriteReport, RewriteError> {
    NamingStrategyRewriter::new(RealFileSystem::new()).rewrite(root, build_tool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;
    use crate::rewrite::naming::{
        IMPLICIT_NAMING_STRATEGY_NEW, IMPLICIT_NAMING_STRATEGY_OLD, PHYSICAL_NAMING_STRATEGY_NEW,
        PHYSICAL_NAMING_STRATEGY_OLD,
    };

    const MAIN_YML: &str = "src/main/resources/config/application.yml";
    const TEST_YML: &str = "src/test/resources/config/application.yml";

    fn application_yml() -> String {
        format!(
            "spring:\n  jpa:\n    hibernate:\n      naming:\n        physical-strategy: {}\n        implicit-strategy: {}\n",
            PHYSICAL_NAMING_STRATEGY_OLD, IMPLICIT_NAMING_STRATEGY_OLD
        )
    }

    fn pom_xml() -> String {
        format!(
            "<referenceUrl>hibernate:spring:com.mycompany.myapp.domain?dialect=org.hibernate.dialect.MySQL5InnoDBDialect&amp;hibernate.physical_naming_strategy={}&amp;hibernate.implicit_naming_strategy={}</referenceUrl>\n",
            PHYSICAL_NAMING_STRATEGY_OLD, IMPLICIT_NAMING_STRATEGY_OLD
        )
    }

    fn maven_project() -> MockFileSystem {
        let fs = MockFileSystem::new();
        fs.add_file("pom.xml", &pom_xml());
        fs.add_file(MAIN_YML, &application_yml());
        fs.add_file(TEST_YML, &application_yml());
        fs
    }

    #[test]
    fn test_replace_literals_counts_each_pattern() {
        let (out, counts) = replace_literals("a-b-a", &[("a", "x"), ("b", "y")]);
        assert_eq!(out, "x-y-x");
        assert_eq!(counts, vec![2, 1]);
    }

    #[test]
    fn test_replace_literals_is_order_independent() {
        let forward = replace_literals("ab", &[("a", "b"), ("b", "c")]);
        let backward = replace_literals("ab", &[("b", "c"), ("a", "b")]);
        assert_eq!(forward.0, "bc");
        assert_eq!(backward.0, "bc");
    }

    #[test]
    fn test_replace_literals_prefers_longest_match() {
        let (out, counts) = replace_literals("Strategy", &[("Strat", "X"), ("Strategy", "Y")]);
        assert_eq!(out, "Y");
        assert_eq!(counts, vec![0, 1]);
    }

    #[test]
    fn test_replace_literals_handles_multibyte_text() {
        let (out, counts) = replace_literals("é→old←ü", &[("old", "new")]);
        assert_eq!(out, "é→new←ü");
        assert_eq!(counts, vec![1]);
    }

    #[test]
    fn test_replace_literals_ignores_empty_pattern() {
        let (out, counts) = replace_literals("abc", &[("", "x")]);
        assert_eq!(out, "abc");
        assert_eq!(counts, vec![0]);
    }

    #[test]
    fn test_rewrite_maven_project() {
        let rewriter = NamingStrategyRewriter::new(maven_project());
        let report = rewriter.rewrite(Path::new("/mock"), BuildTool::Maven).unwrap();

        assert_eq!(report.files.len(), 3);
        assert_eq!(report.changed_files().len(), 3);
        assert_eq!(report.total_replacements(), 6);

        for path in ["pom.xml", MAIN_YML, TEST_YML] {
            let content = rewriter.fs().contents(path).unwrap();
            assert!(!content.contains(IMPLICIT_NAMING_STRATEGY_OLD));
            assert!(!content.contains(PHYSICAL_NAMING_STRATEGY_OLD));
            assert!(content.contains(IMPLICIT_NAMING_STRATEGY_NEW));
            assert!(content.contains(PHYSICAL_NAMING_STRATEGY_NEW));
        }
    }

    #[test]
    fn test_rewrite_gradle_project_touches_liquibase_script() {
        let fs = MockFileSystem::new();
        let gradle = format!(
            "liquibase {{\n    activities {{\n        main {{\n            referenceUrl 'hibernate:spring:com.mycompany.myapp.domain?hibernate.physical_naming_strategy={}&hibernate.implicit_naming_strategy={}'\n        }}\n    }}\n}}\n",
            PHYSICAL_NAMING_STRATEGY_OLD, IMPLICIT_NAMING_STRATEGY_OLD
        );
        fs.add_file("gradle/liquibase.gradle", &gradle);
        fs.add_file("build.gradle", &gradle);
        fs.add_file(MAIN_YML, &application_yml());
        fs.add_file(TEST_YML, &application_yml());

        let rewriter = NamingStrategyRewriter::new(fs);
        rewriter.rewrite(Path::new("/mock"), BuildTool::Gradle).unwrap();

        assert_eq!(
            rewriter.fs().writes(),
            vec![
                PathBuf::from("/mock/gradle/liquibase.gradle"),
                PathBuf::from("/mock").join(MAIN_YML),
                PathBuf::from("/mock").join(TEST_YML),
            ]
        );
        assert_eq!(rewriter.fs().contents("build.gradle"), Some(gradle));
    }

    #[test]
    fn test_unmatched_file_is_not_written() {
        let fs = maven_project();
        fs.add_file(TEST_YML, "spring:\n  profiles:\n    active: test\n");

        let rewriter = NamingStrategyRewriter::new(fs);
        let report = rewriter.rewrite(Path::new("/mock"), BuildTool::Maven).unwrap();

        assert!(!report.files[2].changed);
        assert_eq!(report.files[2].total_replacements(), 0);
        assert!(!rewriter
            .fs()
            .writes()
            .contains(&PathBuf::from("/mock").join(TEST_YML)));
        assert_eq!(
            rewriter.fs().contents(TEST_YML).as_deref(),
            Some("spring:\n  profiles:\n    active: test\n")
        );
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let rewriter = NamingStrategyRewriter::new(maven_project());
        rewriter.rewrite(Path::new("/mock"), BuildTool::Maven).unwrap();
        let once = rewriter.fs().contents("pom.xml");

        let second = rewriter.rewrite(Path::new("/mock"), BuildTool::Maven).unwrap();
        assert!(second.is_noop());
        assert_eq!(rewriter.fs().contents("pom.xml"), once);
    }

    #[test]
    fn test_missing_target_fails_before_any_write() {
        let fs = MockFileSystem::new();
        fs.add_file("pom.xml", &pom_xml());
        fs.add_file(MAIN_YML, &application_yml());

        let rewriter = NamingStrategyRewriter::new(fs);
        let err = rewriter
            .rewrite(Path::new("/mock"), BuildTool::Maven)
            .unwrap_err();

        match err {
            RewriteError::FileNotFound(path) => {
                assert_eq!(path, PathBuf::from("/mock").join(TEST_YML))
            }
            other => panic!("Expected FileNotFound, got {:?}", other),
        }
        assert!(rewriter.fs().writes().is_empty());
        assert_eq!(rewriter.fs().contents("pom.xml"), Some(pom_xml()));
    }

    #[test]
    fn test_directory_in_place_of_target_is_not_found() {
        let fs = maven_project();
        fs.add_dir("gradle/liquibase.gradle");

        let rewriter = NamingStrategyRewriter::new(fs);
        let err = rewriter
            .rewrite(Path::new("/mock"), BuildTool::Gradle)
            .unwrap_err();
        assert!(matches!(err, RewriteError::FileNotFound(_)));
    }

    #[test]
    fn test_write_failure_restores_written_files() {
        let fs = maven_project();
        fs.fail_writes_to(MAIN_YML);

        let rewriter = NamingStrategyRewriter::new(fs);
        let err = rewriter
            .rewrite(Path::new("/mock"), BuildTool::Maven)
            .unwrap_err();

        match err {
            RewriteError::Io { path, .. } => assert_eq!(path, PathBuf::from("/mock").join(MAIN_YML)),
            other => panic!("Expected Io, got {:?}", other),
        }
        assert_eq!(rewriter.fs().contents("pom.xml"), Some(pom_xml()));
        assert_eq!(rewriter.fs().contents(TEST_YML), Some(application_yml()));
    }

    #[test]
    fn test_failed_restore_lists_unrestored_files() {
        let fs = maven_project();
        // pom.xml takes the rewrite but rejects the restore
        fs.fail_writes_after("pom.xml", 1);
        fs.fail_writes_to(TEST_YML);

        let rewriter = NamingStrategyRewriter::new(fs);
        let err = rewriter
            .rewrite(Path::new("/mock"), BuildTool::Maven)
            .unwrap_err();

        match err {
            RewriteError::RestoreFailed {
                path, unrestored, ..
            } => {
                assert_eq!(path, PathBuf::from("/mock").join(TEST_YML));
                assert_eq!(unrestored, vec![PathBuf::from("/mock/pom.xml")]);
            }
            other => panic!("Expected RestoreFailed, got {:?}", other),
        }
        assert_ne!(rewriter.fs().contents("pom.xml"), Some(pom_xml()));
        assert_eq!(rewriter.fs().contents(MAIN_YML), Some(application_yml()));
        assert_eq!(rewriter.fs().contents(TEST_YML), Some(application_yml()));
    }

    #[test]
    fn test_dry_run_leaves_files_untouched() {
        let rewriter = NamingStrategyRewriter::new(maven_project()).dry_run(true);
        let report = rewriter.rewrite(Path::new("/mock"), BuildTool::Maven).unwrap();

        assert!(report.dry_run);
        assert_eq!(report.changed_files().len(), 3);
        assert!(rewriter.fs().writes().is_empty());
        assert_eq!(rewriter.fs().contents("pom.xml"), Some(pom_xml()));
    }

    #[test]
    fn test_custom_pairs() {
        let fs = MockFileSystem::new();
        fs.add_file("pom.xml", "com.acme.OldImplicit com.acme.OldPhysical");
        fs.add_file(MAIN_YML, "none here");
        fs.add_file(TEST_YML, "com.acme.OldPhysical");

        let pairs = NamingStrategyPair::new(
            "com.acme.OldImplicit",
            "com.acme.NewImplicit",
            "com.acme.OldPhysical",
            "com.acme.NewPhysical",
        );
        let rewriter = NamingStrategyRewriter::new(fs).with_pairs(pairs);
        let report = rewriter.rewrite(Path::new("/mock"), BuildTool::Maven).unwrap();

        assert_eq!(
            rewriter.fs().contents("pom.xml").as_deref(),
            Some("com.acme.NewImplicit com.acme.NewPhysical")
        );
        assert_eq!(report.files[2].count_for(StrategyKind::Physical), 1);
        assert_eq!(report.files[2].count_for(StrategyKind::Implicit), 0);
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let pairs = NamingStrategyPair::new("a", "b", "", "d");
        let rewriter = NamingStrategyRewriter::new(maven_project()).with_pairs(pairs);
        let err = rewriter
            .rewrite(Path::new("/mock"), BuildTool::Maven)
            .unwrap_err();
        assert!(matches!(err, RewriteError::EmptyPattern(StrategyKind::Physical)));
    }
}
