//! Husky plugin: git hooks running lint-staged on commit.
//!
//! The lint-staged task table itself lives in the package manifest; this
//! plugin owns the hook file, the `prepare` script, and the post-install
//! setup commands.

use crate::deps;
use crate::error::ScaffoldError;
use crate::features::FeatureFlags;
use crate::plugins::{GeneratedFile, Plugin, PluginContext};

const PRE_COMMIT: &str = "npx lint-staged\n";

pub struct HuskyPlugin;

impl Plugin for HuskyPlugin {
    fn id(&self) -> &'static str {
        "husky"
    }

    fn name(&self) -> &'static str {
        "Husky"
    }

    fn description(&self) -> &'static str {
        "Git hooks with Husky and lint-staged"
    }

    fn order(&self) -> u32 {
        60
    }

    fn should_activate(&self, features: &FeatureFlags) -> bool {
        features.husky
    }

    fn files(&self, _ctx: &PluginContext) -> Result<Vec<GeneratedFile>, ScaffoldError> {
        Ok(vec![GeneratedFile::new(".husky/pre-commit", PRE_COMMIT)])
    }

    fn dev_dependencies(&self, _ctx: &PluginContext) -> Vec<(String, String)> {
        deps::versions_of(deps::HUSKY_DEV_DEPENDENCIES)
    }

    fn scripts(&self, _ctx: &PluginContext) -> Vec<(String, String)> {
        vec![("prepare".to_string(), "husky".to_string())]
    }

    fn setup_commands(&self, _ctx: &PluginContext) -> Vec<String> {
        vec!["chmod +x .husky/pre-commit".to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;
    use crate::project::ProjectConfig;

    #[test]
    fn test_hook_and_setup() {
        let features = FeatureFlags {
            husky: true,
            ..FeatureFlags::default()
        };
        let config = ProjectConfig::for_features("demo", features);
        let engine = Engine::new();
        let ctx = PluginContext {
            config: &config,
            engine: &engine,
        };

        let files = HuskyPlugin.files(&ctx).unwrap();
        assert_eq!(files[0].path, ".husky/pre-commit");
        assert!(files[0].content.contains("lint-staged"));

        let setup = HuskyPlugin.setup_commands(&ctx);
        assert_eq!(setup, vec!["chmod +x .husky/pre-commit"]);
    }
}
