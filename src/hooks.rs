//! Module hook registry of a generated project
//!
//! Generator modules announce themselves to the host generator through
//! `.jhipster/modules/jhi-hooks.json`, a JSON array of hook entries. The host
//! runs every `pre`/`post` hook registered for the `app` or `entity`
//! generator it is executing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::fs::FileSystem;

/// Registry location relative to the project root
pub const HOOKS_FILE: &str = ".jhipster/modules/jhi-hooks.json";

pub const DEFAULT_NPM_PACKAGE_NAME: &str = "generator-jhipster-db-helper";
pub const DEFAULT_DESCRIPTION: &str =
    "Use the Hibernate naming strategies and keep existing table and column names";

#[derive(Debug, Error)]
pub enum HookError {
    #[error("Failed to read hook registry {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("Hook registry {path} is not a JSON array of hooks: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Failed to write hook registry {path}: {message}")]
    Write { path: PathBuf, message: String },

    #[error("Hook registration field '{0}' must not be empty")]
    EmptyField(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HookFor {
    App,
    Entity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HookType {
    Pre,
    Post,
}

impl fmt::Display for HookFor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookFor::App => write!(f, "app"),
            HookFor::Entity => write!(f, "entity"),
        }
    }
}

impl fmt::Display for HookType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookType::Pre => write!(f, "pre"),
            HookType::Post => write!(f, "post"),
        }
    }
}

/// One entry of `jhi-hooks.json`, in the host's field naming
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookEntry {
    pub name: String,
    pub npm_package_name: String,
    pub description: String,
    pub hook_for: HookFor,
    pub hook_type: HookType,
    pub generator_callback: String,
}

impl HookEntry {
    fn same_slot(&self, other: &HookEntry) -> bool {
        self.npm_package_name == other.npm_package_name
            && self.hook_for == other.hook_for
            && self.hook_type == other.hook_type
    }
}

/// Request to register a generator module as a hook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookRegistration {
    pub npm_package_name: String,
    pub hook_for: HookFor,
    pub hook_type: HookType,
    pub callback_sub_generator: String,
    pub description: String,
}

impl Default for HookRegistration {
    fn default() -> Self {
        Self {
            npm_package_name: DEFAULT_NPM_PACKAGE_NAME.to_string(),
            hook_for: HookFor::App,
            hook_type: HookType::Post,
            callback_sub_generator: "app".to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

impl HookRegistration {
    /// Builds the registry entry. The display name and callback are derived
    /// from the npm package name the way the host derives them:
    /// `generator-jhipster-foo` becomes `foo generator` and `jhipster-foo:<sub>`.
    pub fn to_entry(&self) -> Result<HookEntry, HookError> {
        if self.npm_package_name.trim().is_empty() {
            return Err(HookError::EmptyField("npmPackageName"));
        }
        if self.callback_sub_generator.trim().is_empty() {
            return Err(HookError::EmptyField("callbackSubGenerator"));
        }

        let short_name = self
            .npm_package_name
            .strip_prefix("generator-jhipster-")
            .unwrap_or(&self.npm_package_name);
        let callback_base = self
            .npm_package_name
            .strip_prefix("generator-")
            .unwrap_or(&self.npm_package_name);

        Ok(HookEntry {
            name: format!("{} generator", short_name),
            npm_package_name: self.npm_package_name.clone(),
            description: self.description.clone(),
            hook_for: self.hook_for,
            hook_type: self.hook_type,
            generator_callback: format!("{}:{}", callback_base, self.callback_sub_generator),
        })
    }
}

/// Effect of `register_hook` on the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationOutcome {
    Added,
    Updated,
    Unchanged,
}

pub fn hooks_file_path(root: &Path) -> PathBuf {
    root.join(HOOKS_FILE)
}

/// Reads the registry; a missing file is an empty registry.
pub fn load_hooks<F: FileSystem>(fs: &F, root: &Path) -> Result<Vec<HookEntry>, HookError> {
    let path = hooks_file_path(root);
    if !fs.exists(&path) {
        return Ok(Vec::new());
    }

    let content = fs.read_to_string(&path).map_err(|e| HookError::Read {
        path: path.clone(),
        message: format!("{:#}", e),
    })?;

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&content).map_err(|e| HookError::Parse {
        path,
        message: e.to_string(),
    })
}

/// Adds the hook to the project's registry, replacing any entry registered
/// by the same package for the same generator and hook type.
pub fn register_hook<F: FileSystem>(
    fs: &F,
    root: &Path,
    registration: &HookRegistration,
) -> Result<RegistrationOutcome, HookError> {
    let entry = registration.to_entry()?;
    let mut hooks = load_hooks(fs, root)?;

    let outcome = match hooks.iter().position(|h| h.same_slot(&entry)) {
        Some(index) if hooks[index] == entry => RegistrationOutcome::Unchanged,
        Some(index) => {
            hooks[index] = entry;
            RegistrationOutcome::Updated
        }
        None => {
            hooks.push(entry);
            RegistrationOutcome::Added
        }
    };

    let path = hooks_file_path(root);
    if outcome == RegistrationOutcome::Unchanged {
        debug!(path = %path.display(), "Hook already registered");
        return Ok(outcome);
    }

    let write_error = |e: anyhow::Error| HookError::Write {
        path: path.clone(),
        message: format!("{:#}", e),
    };

    if let Some(parent) = path.parent() {
        fs.create_dir_all(parent).map_err(write_error)?;
    }

    let mut json = serde_json::to_string_pretty(&hooks).map_err(|e| HookError::Write {
        path: path.clone(),
        message: e.to_string(),
    })?;
    json.push('\n');
    fs.write(&path, &json).map_err(write_error)?;

    info!(
        path = %path.display(),
        package = %registration.npm_package_name,
        hook_for = %registration.hook_for,
        hook_type = %registration.hook_type,
        ?outcome,
        "Registered generator hook"
    );

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;

    fn root() -> PathBuf {
        PathBuf::from("/mock")
    }

    #[test]
    fn test_entry_names_derived_from_package() {
        let entry = HookRegistration::default().to_entry().unwrap();

        assert_eq!(entry.name, "db-helper generator");
        assert_eq!(entry.npm_package_name, "generator-jhipster-db-helper");
        assert_eq!(entry.generator_callback, "jhipster-db-helper:app");
        assert_eq!(entry.hook_for, HookFor::App);
        assert_eq!(entry.hook_type, HookType::Post);
    }

    #[test]
    fn test_entry_serializes_in_host_format() {
        let entry = HookRegistration::default().to_entry().unwrap();
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["npmPackageName"], "generator-jhipster-db-helper");
        assert_eq!(json["hookFor"], "app");
        assert_eq!(json["hookType"], "post");
        assert_eq!(json["generatorCallback"], "jhipster-db-helper:app");
    }

    #[test]
    fn test_empty_package_rejected() {
        let registration = HookRegistration {
            npm_package_name: " ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            registration.to_entry(),
            Err(HookError::EmptyField("npmPackageName"))
        ));
    }

    #[test]
    fn test_register_creates_registry() {
        let fs = MockFileSystem::new();

        let outcome = register_hook(&fs, &root(), &HookRegistration::default()).unwrap();
        assert_eq!(outcome, RegistrationOutcome::Added);

        let hooks = load_hooks(&fs, &root()).unwrap();
        assert_eq!(hooks.len(), 1);
        assert!(fs.is_dir(Path::new("/mock/.jhipster/modules")));
    }

    #[test]
    fn test_register_twice_is_unchanged() {
        let fs = MockFileSystem::new();
        register_hook(&fs, &root(), &HookRegistration::default()).unwrap();
        let outcome = register_hook(&fs, &root(), &HookRegistration::default()).unwrap();

        assert_eq!(outcome, RegistrationOutcome::Unchanged);
        assert_eq!(load_hooks(&fs, &root()).unwrap().len(), 1);
    }

    #[test]
    fn test_register_updates_same_slot_and_keeps_others() {
        let fs = MockFileSystem::new();
        fs.add_file(
            HOOKS_FILE,
            r#"[
  {
    "name": "other generator",
    "npmPackageName": "generator-jhipster-other",
    "description": "Another module",
    "hookFor": "entity",
    "hookType": "post",
    "generatorCallback": "jhipster-other:entity"
  },
  {
    "name": "db-helper generator",
    "npmPackageName": "generator-jhipster-db-helper",
    "description": "Old description",
    "hookFor": "app",
    "hookType": "post",
    "generatorCallback": "jhipster-db-helper:app"
  }
]"#,
        );

        let outcome = register_hook(&fs, &root(), &HookRegistration::default()).unwrap();
        assert_eq!(outcome, RegistrationOutcome::Updated);

        let hooks = load_hooks(&fs, &root()).unwrap();
        assert_eq!(hooks.len(), 2);
        assert_eq!(hooks[0].npm_package_name, "generator-jhipster-other");
        assert_eq!(hooks[1].description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn test_entity_hook_is_a_separate_slot() {
        let fs = MockFileSystem::new();
        register_hook(&fs, &root(), &HookRegistration::default()).unwrap();

        let entity = HookRegistration {
            hook_for: HookFor::Entity,
            callback_sub_generator: "entity".to_string(),
            ..Default::default()
        };
        let outcome = register_hook(&fs, &root(), &entity).unwrap();

        assert_eq!(outcome, RegistrationOutcome::Added);
        let hooks = load_hooks(&fs, &root()).unwrap();
        assert_eq!(hooks.len(), 2);
        assert_eq!(hooks[1].generator_callback, "jhipster-db-helper:entity");
    }

    #[test]
    fn test_malformed_registry() {
        let fs = MockFileSystem::new();
        fs.add_file(HOOKS_FILE, "{\"not\": \"an array\"}");

        let err = register_hook(&fs, &root(), &HookRegistration::default()).unwrap_err();
        assert!(matches!(err, HookError::Parse { .. }));
    }

    #[test]
    fn test_empty_registry_file() {
        let fs = MockFileSystem::new();
        fs.add_file(HOOKS_FILE, "");
        assert!(load_hooks(&fs, &root()).unwrap().is_empty());
    }
}
