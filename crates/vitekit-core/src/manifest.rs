//! Package manifest construction.
//!
//! Field order is fixed by the struct declaration; dependency maps are
//! sorted by key while scripts keep their logical order. The serialized
//! form is pretty-printed JSON with 2-space indentation.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::Serialize;

use crate::deps::Resolved;
use crate::features::FeatureFlags;
use crate::project::ProjectConfig;

#[derive(Debug, Serialize)]
pub struct PackageJson {
    pub name: String,
    pub version: String,
    pub private: bool,
    #[serde(rename = "type")]
    pub module_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub license: String,
    pub scripts: IndexMap<String, String>,
    pub dependencies: BTreeMap<String, String>,
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,
    #[serde(rename = "lint-staged", skip_serializing_if = "Option::is_none")]
    pub lint_staged: Option<IndexMap<String, Vec<String>>>,
}

impl PackageJson {
    pub fn to_pretty_json(&self) -> String {
        let mut out = serde_json::to_string_pretty(self).unwrap_or_default();
        out.push('\n');
        out
    }
}

/// Build the manifest from the resolved dependency/script maps
pub fn generate_package_json(config: &ProjectConfig, resolved: &Resolved) -> PackageJson {
    let non_empty = |s: &str| {
        if s.is_empty() {
            None
        } else {
            Some(s.to_string())
        }
    };

    PackageJson {
        name: config.name.clone(),
        version: "0.1.0".to_string(),
        private: true,
        module_type: "module".to_string(),
        description: non_empty(&config.description),
        author: non_empty(&config.author),
        license: if config.license.is_empty() {
            "MIT".to_string()
        } else {
            config.license.clone()
        },
        scripts: resolved.scripts.clone(),
        dependencies: resolved.dependencies.clone(),
        dev_dependencies: resolved.dev_dependencies.clone(),
        lint_staged: lint_staged_config(&config.features),
    }
}

/// The lint-staged task table, present only when husky is enabled and at
/// least one formatter/linter is active
pub fn lint_staged_config(features: &FeatureFlags) -> Option<IndexMap<String, Vec<String>>> {
    if !features.husky {
        return None;
    }

    let mut tasks: IndexMap<String, Vec<String>> = IndexMap::new();

    if features.eslint && features.prettier {
        tasks.insert(
            "*.{ts,tsx}".to_string(),
            vec!["eslint --fix".to_string(), "prettier --write".to_string()],
        );
    } else if features.eslint {
        tasks.insert("*.{ts,tsx}".to_string(), vec!["eslint --fix".to_string()]);
    } else if features.prettier {
        tasks.insert("*.{ts,tsx}".to_string(), vec!["prettier --write".to_string()]);
    }

    if features.prettier {
        tasks.insert(
            "*.{json,md,css}".to_string(),
            vec!["prettier --write".to_string()],
        );
    }

    if tasks.is_empty() {
        None
    } else {
        Some(tasks)
    }
}
