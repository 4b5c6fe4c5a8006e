//! Dependency and script resolution
//!
//! Fixed version tables are merged per active plugin, in ascending plugin
//! order, into the final dependency maps. Dependency keys are emitted in
//! lexicographic order so that identical feature selections always produce
//! a byte-stable manifest. Scripts keep their logical order instead:
//! lifecycle scripts first, then plugin contributions in plugin order.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::error::ScaffoldError;
use crate::plugins::{PluginContext, Registry};

/// Runtime dependencies present in every generated project
pub const BASE_DEPENDENCIES: &[(&str, &str)] = &[
    ("react", "^18.3.1"),
    ("react-dom", "^18.3.1"),
];

/// Dev dependencies present in every generated project
pub const BASE_DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("@vitejs/plugin-react", "^4.5.2"),
    ("typescript", "~5.8.3"),
    ("@types/react", "^18.3.20"),
    ("@types/react-dom", "^18.3.7"),
    ("@types/node", "^22.15.0"),
    ("vite", "npm:rolldown-vite@7.2.5"),
];

/// Lifecycle scripts, in emission order
pub const LIFECYCLE_SCRIPTS: &[(&str, &str)] = &[
    ("dev", "vite"),
    ("build", "tsc -b && vite build"),
    ("preview", "vite preview"),
];

pub const TAILWIND_DEPENDENCIES: &[(&str, &str)] = &[
    ("tailwindcss", "^4.1.17"),
    ("@tailwindcss/vite", "^4.1.17"),
];

pub const TAILWIND_DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("autoprefixer", "^10.4.22"),
    ("postcss", "^8.5.6"),
];

pub const REDUX_DEPENDENCIES: &[(&str, &str)] = &[
    ("@reduxjs/toolkit", "^2.11.0"),
    ("react-redux", "^9.2.0"),
];

pub const REACT_ROUTER_DEPENDENCIES: &[(&str, &str)] = &[("react-router-dom", "^7.9.6")];

pub const I18N_DEPENDENCIES: &[(&str, &str)] = &[
    ("i18next", "^24.2.2"),
    ("react-i18next", "^15.4.1"),
];

pub const ESLINT_DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("eslint", "^9.39.1"),
    ("@eslint/js", "^9.39.1"),
    ("@typescript-eslint/eslint-plugin", "^8.48.0"),
    ("@typescript-eslint/parser", "^8.48.0"),
    ("typescript-eslint", "^8.46.4"),
    ("eslint-plugin-react-hooks", "^5.2.0"),
    ("eslint-plugin-react-refresh", "^0.4.20"),
    ("globals", "^16.5.0"),
];

pub const PRETTIER_DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("prettier", "^3.6.2"),
    ("eslint-config-prettier", "^10.1.8"),
    ("eslint-plugin-prettier", "^5.5.4"),
];

pub const HUSKY_DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("husky", "^9.1.7"),
    ("lint-staged", "^16.1.0"),
];

/// Version lookup table for testing packages. Test-profile dependency
/// lists resolve through this table; a name listed by a profile but absent
/// here is skipped rather than emitted without a version.
pub const TESTING_VERSIONS: &[(&str, &str)] = &[
    ("vitest", "^3.1.4"),
    ("@vitest/coverage-v8", "^3.1.4"),
    ("@vitest/ui", "^3.1.4"),
    ("@testing-library/react", "^16.2.0"),
    ("@testing-library/jest-dom", "^6.6.3"),
    ("@testing-library/user-event", "^14.6.1"),
    ("jsdom", "^26.1.0"),
];

/// Extra dev dependencies for accessibility test suites
pub const A11Y_DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("vitest-axe", "^0.1.0"),
    ("axe-core", "^4.10.0"),
];

/// Owned copy of a static version table
pub fn versions_of(table: &[(&str, &str)]) -> Vec<(String, String)> {
    table
        .iter()
        .map(|(name, version)| (name.to_string(), version.to_string()))
        .collect()
}

/// Look up a testing package version by name
pub fn testing_version(name: &str) -> Option<&'static str> {
    TESTING_VERSIONS
        .iter()
        .find(|(dep, _)| *dep == name)
        .map(|(_, version)| *version)
}

/// Fully merged dependency and script maps for one project configuration
#[derive(Debug, Default)]
pub struct Resolved {
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
    pub scripts: IndexMap<String, String>,
    /// Non-fatal findings, e.g. a dependency redeclared at a different version
    pub warnings: Vec<String>,
}

/// Merge base tables with every active plugin's contributions.
///
/// Later (higher-order) plugins win on exact key collisions; a collision
/// with a differing version string is recorded as a warning. Two plugins
/// contributing the same script key is a configuration error.
pub fn resolve(registry: &Registry, ctx: &PluginContext) -> Result<Resolved, ScaffoldError> {
    let mut resolved = Resolved::default();

    for (name, version) in BASE_DEPENDENCIES {
        resolved
            .dependencies
            .insert(name.to_string(), version.to_string());
    }
    for (name, version) in BASE_DEV_DEPENDENCIES {
        resolved
            .dev_dependencies
            .insert(name.to_string(), version.to_string());
    }
    for (name, command) in LIFECYCLE_SCRIPTS {
        resolved
            .scripts
            .insert(name.to_string(), command.to_string());
    }

    let mut script_owners: IndexMap<String, String> = resolved
        .scripts
        .keys()
        .map(|key| (key.clone(), "base".to_string()))
        .collect();

    for plugin in registry.active(&ctx.config.features) {
        for (name, version) in plugin.dependencies(ctx) {
            merge_dependency(&mut resolved.dependencies, name, version, plugin.id(), &mut resolved.warnings);
        }
        for (name, version) in plugin.dev_dependencies(ctx) {
            merge_dependency(&mut resolved.dev_dependencies, name, version, plugin.id(), &mut resolved.warnings);
        }
        for (name, command) in plugin.scripts(ctx) {
            if let Some(owner) = script_owners.get(&name) {
                return Err(ScaffoldError::ScriptCollision {
                    key: name,
                    first: owner.clone(),
                    second: plugin.id().to_string(),
                });
            }
            script_owners.insert(name.clone(), plugin.id().to_string());
            resolved.scripts.insert(name, command);
        }
    }

    Ok(resolved)
}

fn merge_dependency(
    map: &mut BTreeMap<String, String>,
    name: String,
    version: String,
    plugin_id: &str,
    warnings: &mut Vec<String>,
) {
    if let Some(existing) = map.get(&name) {
        if existing != &version {
            warnings.push(format!(
                "dependency '{}' redeclared by '{}' as {} (was {})",
                name, plugin_id, version, existing
            ));
        }
    }
    map.insert(name, version);
}
