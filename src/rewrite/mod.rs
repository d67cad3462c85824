//! Naming strategy rewriting
//!
//! Generated Spring Boot backends reference Spring's naming strategy classes
//! in three places: the Liquibase configuration of the build (`pom.xml` or
//! `gradle/liquibase.gradle`) and the main and test `application.yml`. The
//! rewriter swaps those class names for the Hibernate ones by plain literal
//! replacement.
//!
//! # Example
//!
//! ```no_run
//! use dbh::fs::RealFileSystem;
//! use dbh::project::BuildTool;
//! use dbh::rewrite::NamingStrategyRewriter;
//! use std::path::Path;
//!
//! let rewriter = NamingStrategyRewriter::new(RealFileSystem::new());
//! let report = rewriter.rewrite(Path::new("."), BuildTool::Maven)?;
//! println!("{} files changed", report.changed_files().len());
//! # Ok::<(), dbh::rewrite::RewriteError>(())
//! ```

pub mod naming;
pub mod report;
pub mod rewriter;
pub mod targets;

pub use naming::{
    NamingStrategyPair, StrategyKind, IMPLICIT_NAMING_STRATEGY_NEW, IMPLICIT_NAMING_STRATEGY_OLD,
    PHYSICAL_NAMING_STRATEGY_NEW, PHYSICAL_NAMING_STRATEGY_OLD,
};
pub use report::{FileOutcome, Replacement, RewriteReport};
pub use rewriter::{replace_literals, rewrite_naming_strategies, NamingStrategyRewriter, RewriteError};
pub use targets::{RewriteTarget, MAIN_APPLICATION_CONFIG, TEST_APPLICATION_CONFIG};
