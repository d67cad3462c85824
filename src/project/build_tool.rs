//! Build tool identifier read from the project descriptor

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Raised when a descriptor names a build tool other than Maven or Gradle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported build tool: '{0}'. Valid options: maven, gradle")]
pub struct UnsupportedBuildTool(pub String);

/// The two build tools a generated backend can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildTool {
    Maven,
    Gradle,
}

impl BuildTool {
    /// Identifier as persisted in `.yo-rc.json`
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildTool::Maven => "maven",
            BuildTool::Gradle => "gradle",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            BuildTool::Maven => "Maven",
            BuildTool::Gradle => "Gradle",
        }
    }

    /// Case-insensitive lookup; surrounding whitespace is ignored.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "maven" => Some(BuildTool::Maven),
            "gradle" => Some(BuildTool::Gradle),
            _ => None,
        }
    }

    pub fn is_valid(name: &str) -> bool {
        Self::from_name(name).is_some()
    }

    /// Build file carrying the naming strategies, relative to the project root.
    ///
    /// Maven projects pass them to the Liquibase plugin in `pom.xml`; Gradle
    /// projects keep the Liquibase configuration in a separate script.
    pub fn build_file(&self) -> &'static str {
        match self {
            BuildTool::Maven => "pom.xml",
            BuildTool::Gradle => "gradle/liquibase.gradle",
        }
    }
}

impl fmt::Display for BuildTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BuildTool {
    type Err = UnsupportedBuildTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnsupportedBuildTool(s.to_string()))
    }
}

impl Serialize for BuildTool {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BuildTool {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
