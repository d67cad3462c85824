//! Hibernate naming strategy identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

pub const IMPLICIT_NAMING_STRATEGY_OLD: &str =
    "org.springframework.boot.orm.jpa.hibernate.SpringImplicitNamingStrategy";
pub const IMPLICIT_NAMING_STRATEGY_NEW: &str =
    "org.hibernate.boot.model.naming.ImplicitNamingStrategyLegacyHbmImpl";
pub const PHYSICAL_NAMING_STRATEGY_OLD: &str =
    "org.springframework.boot.orm.jpa.hibernate.SpringPhysicalNamingStrategy";
pub const PHYSICAL_NAMING_STRATEGY_NEW: &str =
    "org.hibernate.boot.model.naming.PhysicalNamingStrategyStandardImpl";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Implicit,
    Physical,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Implicit => write!(f, "implicit"),
            StrategyKind::Physical => write!(f, "physical"),
        }
    }
}

/// Old and new class names for both naming strategy kinds.
///
/// The default replaces Spring Boot's naming strategies with the Hibernate
/// implementations that keep entity and column names exactly as declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingStrategyPair {
    pub implicit_old: String,
    pub implicit_new: String,
    pub physical_old: String,
    pub physical_new: String,
}

impl Default for NamingStrategyPair {
    fn default() -> Self {
        Self {
            implicit_old: IMPLICIT_NAMING_STRATEGY_OLD.to_string(),
            implicit_new: IMPLICIT_NAMING_STRATEGY_NEW.to_string(),
            physical_old: PHYSICAL_NAMING_STRATEGY_OLD.to_string(),
            physical_new: PHYSICAL_NAMING_STRATEGY_NEW.to_string(),
        }
    }
}

impl NamingStrategyPair {
    pub fn new(
        implicit_old: impl Into<String>,
        implicit_new: impl Into<String>,
        physical_old: impl Into<String>,
        physical_new: impl Into<String>,
    ) -> Self {
        Self {
            implicit_old: implicit_old.into(),
            implicit_new: implicit_new.into(),
            physical_old: physical_old.into(),
            physical_new: physical_new.into(),
        }
    }

    /// `(kind, old, new)` triples in application order
    pub fn substitutions(&self) -> [(StrategyKind, &str, &str); 2] {
        [
            (
                StrategyKind::Implicit,
                self.implicit_old.as_str(),
                self.implicit_new.as_str(),
            ),
            (
                StrategyKind::Physical,
                self.physical_old.as_str(),
                self.physical_new.as_str(),
            ),
        ]
    }

    /// Kinds whose old class name is empty
    pub fn empty_patterns(&self) -> Vec<StrategyKind> {
        self.substitutions()
            .iter()
            .filter(|(_, old, _)| old.is_empty())
            .map(|(kind, _, _)| *kind)
            .collect()
    }
}
