//! Plugin system: each optional feature is a self-contained unit exposing
//! an activation predicate plus file, dependency, and script contributions.
//!
//! Plugins are stateless and independent: they read only the shared
//! feature flags and project context, never another plugin's output. The
//! registry's sort order (ascending `order`) is the single source of truth
//! for every downstream merge; changing a plugin's order is the only
//! supported way to change composition precedence.

mod eslint;
mod github_actions;
mod husky;
mod i18n;
mod prettier;
mod react_router;
mod redux;
mod tailwind;
mod testing;
mod vscode;

pub use eslint::EslintPlugin;
pub use github_actions::GithubActionsPlugin;
pub use husky::HuskyPlugin;
pub use i18n::I18nPlugin;
pub use prettier::PrettierPlugin;
pub use react_router::ReactRouterPlugin;
pub use redux::ReduxPlugin;
pub use tailwind::TailwindPlugin;
pub use testing::TestingPlugin;
pub use vscode::VscodePlugin;

use serde_json::Value;

use crate::engine::{ContextBuilder, Engine};
use crate::error::ScaffoldError;
use crate::features::FeatureFlags;
use crate::project::ProjectConfig;

/// One generated file: project-relative path plus full text content
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Shared, read-only input to every plugin call
pub struct PluginContext<'a> {
    pub config: &'a ProjectConfig,
    pub engine: &'a Engine,
}

impl PluginContext<'_> {
    pub fn features(&self) -> &FeatureFlags {
        &self.config.features
    }

    /// Rendering context carrying the feature flags and project metadata
    pub fn template_context(&self) -> Value {
        ContextBuilder::new(&self.config.features)
            .project(
                &self.config.name,
                &self.config.author,
                &self.config.description,
                &self.config.license,
            )
            .build()
    }
}

/// A self-contained feature contribution. Required methods cover identity,
/// activation, and files; dependency/script/setup contributions default to
/// empty for plugins that have none.
pub trait Plugin: Send + Sync {
    fn id(&self) -> &'static str;

    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str {
        ""
    }

    /// Merge precedence: lower orders apply first
    fn order(&self) -> u32 {
        100
    }

    fn should_activate(&self, features: &FeatureFlags) -> bool;

    fn files(&self, ctx: &PluginContext) -> Result<Vec<GeneratedFile>, ScaffoldError>;

    fn dependencies(&self, _ctx: &PluginContext) -> Vec<(String, String)> {
        Vec::new()
    }

    fn dev_dependencies(&self, _ctx: &PluginContext) -> Vec<(String, String)> {
        Vec::new()
    }

    fn scripts(&self, _ctx: &PluginContext) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Shell commands run inside the project after dependency installation
    fn setup_commands(&self, _ctx: &PluginContext) -> Vec<String> {
        Vec::new()
    }
}

/// Holds the available plugins and answers "which are active for these
/// features" in deterministic order. Constructed explicitly and passed to
/// the orchestrator; there is no ambient global instance.
#[derive(Default)]
pub struct Registry {
    plugins: Vec<Box<dyn Plugin>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with every built-in plugin
    pub fn with_builtin_plugins() -> Self {
        let mut registry = Self::new();
        let builtin: Vec<Box<dyn Plugin>> = vec![
            Box::new(TailwindPlugin),
            Box::new(I18nPlugin),
            Box::new(ReduxPlugin),
            Box::new(ReactRouterPlugin),
            Box::new(TestingPlugin),
            Box::new(EslintPlugin),
            Box::new(PrettierPlugin),
            Box::new(HuskyPlugin),
            Box::new(GithubActionsPlugin),
            Box::new(VscodePlugin),
        ];
        for plugin in builtin {
            registry
                .register(plugin)
                .expect("built-in plugins are well-formed");
        }
        registry
    }

    /// Add a plugin, overwriting any existing plugin with the same id.
    /// Malformed plugins are rejected here, at registration time.
    pub fn register(&mut self, plugin: Box<dyn Plugin>) -> Result<(), ScaffoldError> {
        if plugin.id().trim().is_empty() {
            return Err(ScaffoldError::InvalidPlugin(
                "plugin id must not be empty".to_string(),
            ));
        }
        if plugin.name().trim().is_empty() {
            return Err(ScaffoldError::InvalidPlugin(format!(
                "plugin '{}' must have a display name",
                plugin.id()
            )));
        }
        if let Some(existing) = self.plugins.iter_mut().find(|p| p.id() == plugin.id()) {
            *existing = plugin;
        } else {
            self.plugins.push(plugin);
        }
        Ok(())
    }

    /// All plugins, ascending by order (registration order breaks ties)
    pub fn all(&self) -> Vec<&dyn Plugin> {
        let mut plugins: Vec<&dyn Plugin> = self.plugins.iter().map(|p| p.as_ref()).collect();
        plugins.sort_by_key(|p| p.order());
        plugins
    }

    /// Active plugins for a feature set, preserving the sort order
    pub fn active(&self, features: &FeatureFlags) -> Vec<&dyn Plugin> {
        self.all()
            .into_iter()
            .filter(|p| p.should_activate(features))
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&dyn Plugin> {
        self.plugins
            .iter()
            .find(|p| p.id() == id)
            .map(|p| p.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopPlugin {
        id: &'static str,
        order: u32,
    }

    impl Plugin for NoopPlugin {
        fn id(&self) -> &'static str {
            self.id
        }
        fn name(&self) -> &'static str {
            "Noop"
        }
        fn order(&self) -> u32 {
            self.order
        }
        fn should_activate(&self, _features: &FeatureFlags) -> bool {
            true
        }
        fn files(&self, _ctx: &PluginContext) -> Result<Vec<GeneratedFile>, ScaffoldError> {
            Ok(Vec::new())
        }
    }

    struct UnnamedPlugin;

    impl Plugin for UnnamedPlugin {
        fn id(&self) -> &'static str {
            ""
        }
        fn name(&self) -> &'static str {
            "Broken"
        }
        fn should_activate(&self, _features: &FeatureFlags) -> bool {
            false
        }
        fn files(&self, _ctx: &PluginContext) -> Result<Vec<GeneratedFile>, ScaffoldError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_all_sorted_by_order() {
        let mut registry = Registry::new();
        registry.register(Box::new(NoopPlugin { id: "b", order: 50 })).unwrap();
        registry.register(Box::new(NoopPlugin { id: "a", order: 10 })).unwrap();
        registry.register(Box::new(NoopPlugin { id: "c", order: 99 })).unwrap();
        let ids: Vec<&str> = registry.all().iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_register_overwrites_by_id() {
        let mut registry = Registry::new();
        registry.register(Box::new(NoopPlugin { id: "a", order: 10 })).unwrap();
        registry.register(Box::new(NoopPlugin { id: "a", order: 20 })).unwrap();
        assert_eq!(registry.all().len(), 1);
        assert_eq!(registry.get("a").unwrap().order(), 20);
    }

    #[test]
    fn test_register_rejects_empty_id() {
        let mut registry = Registry::new();
        assert!(matches!(
            registry.register(Box::new(UnnamedPlugin)),
            Err(ScaffoldError::InvalidPlugin(_))
        ));
    }

    #[test]
    fn test_builtin_activation_is_pure() {
        let registry = Registry::with_builtin_plugins();
        let features = FeatureFlags {
            tailwindcss: true,
            eslint: true,
            testing: true,
            ..FeatureFlags::default()
        };
        let first: Vec<&str> = registry.active(&features).iter().map(|p| p.id()).collect();
        let second: Vec<&str> = registry.active(&features).iter().map(|p| p.id()).collect();
        assert_eq!(first, second);
        assert_eq!(first, vec!["tailwindcss", "testing", "eslint"]);
    }

    #[test]
    fn test_builtin_orders_are_distinct_and_ascending() {
        let registry = Registry::with_builtin_plugins();
        let orders: Vec<u32> = registry.all().iter().map(|p| p.order()).collect();
        let mut sorted = orders.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(orders, sorted);
    }

    #[test]
    fn test_get_unknown_plugin() {
        let registry = Registry::with_builtin_plugins();
        assert!(registry.get("nope").is_none());
        assert!(registry.get("redux").is_some());
    }
}
