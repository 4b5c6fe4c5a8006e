//! Testing plugin: Vitest setup with configurable profiles.
//!
//! The chosen test profile decides which dev dependencies, scripts, and
//! generated test files ship with the project. File contents are rendered
//! through the template engine against the feature/profile context.

mod templates;

use serde_json::json;

use crate::deps;
use crate::error::ScaffoldError;
use crate::features::FeatureFlags;
use crate::plugins::{GeneratedFile, Plugin, PluginContext};
use crate::profiles::TestProfile;

pub struct TestingPlugin;

impl Plugin for TestingPlugin {
    fn id(&self) -> &'static str {
        "testing"
    }

    fn name(&self) -> &'static str {
        "Testing"
    }

    fn description(&self) -> &'static str {
        "Testing with Vitest and Testing Library"
    }

    fn order(&self) -> u32 {
        40
    }

    fn should_activate(&self, features: &FeatureFlags) -> bool {
        features.testing
    }

    fn files(&self, ctx: &PluginContext) -> Result<Vec<GeneratedFile>, ScaffoldError> {
        let features = ctx.features();
        let profile = features.effective_test_profile();
        let config = profile.config();
        let included = &config.include_tests;

        let template_ctx = template_context(ctx, profile);
        let mut render = |path: &str, template: &str| -> Result<GeneratedFile, ScaffoldError> {
            let content = ctx.engine.render(template, &template_ctx)?;
            Ok(GeneratedFile::new(path, content))
        };

        let mut files = vec![
            render("vitest.config.ts", templates::VITEST_CONFIG)?,
            render("src/__tests__/setup.ts", templates::SETUP)?,
            render("src/__tests__/test-utils.tsx", templates::TEST_UTILS)?,
        ];

        if included.unit {
            files.push(render("src/__tests__/App.test.tsx", templates::APP_TEST)?);
        }

        // Feature-specific suites ship from the standard tier up
        let feature_suites = profile >= TestProfile::Standard;
        if feature_suites && features.redux {
            files.push(render("src/__tests__/store.test.ts", templates::STORE_TEST)?);
        }
        if included.integration && features.redux {
            files.push(render(
                "src/__tests__/redux-integration.test.tsx",
                templates::REDUX_INTEGRATION_TEST,
            )?);
        }
        if feature_suites && features.react_router {
            files.push(render("src/__tests__/router.test.tsx", templates::ROUTER_TEST)?);
        }
        if feature_suites && features.i18n {
            files.push(render("src/__tests__/i18n.test.tsx", templates::I18N_TEST)?);
        }
        if included.a11y {
            files.push(render("src/__tests__/a11y.test.tsx", templates::A11Y_TEST)?);
        }
        if included.performance {
            files.push(render(
                "src/__tests__/performance.test.tsx",
                templates::PERFORMANCE_TEST,
            )?);
        }
        if profile >= TestProfile::Advanced && features.tailwindcss {
            files.push(render(
                "src/__tests__/tailwind.test.tsx",
                templates::TAILWIND_TEST,
            )?);
        }

        Ok(files)
    }

    /// Profile dependency names resolved through the version table; names
    /// without a known version are skipped
    fn dev_dependencies(&self, ctx: &PluginContext) -> Vec<(String, String)> {
        let profile = ctx.features().effective_test_profile();
        let config = profile.config();

        let mut contributions: Vec<(String, String)> = config
            .dependencies
            .iter()
            .filter_map(|name| {
                deps::testing_version(name).map(|version| (name.to_string(), version.to_string()))
            })
            .collect();

        if config.include_tests.a11y {
            contributions.extend(deps::versions_of(deps::A11Y_DEV_DEPENDENCIES));
        }

        contributions
    }

    fn scripts(&self, ctx: &PluginContext) -> Vec<(String, String)> {
        let profile = ctx.features().effective_test_profile();
        let mut scripts = vec![
            ("test".to_string(), "vitest run".to_string()),
            ("test:watch".to_string(), "vitest".to_string()),
            ("test:ui".to_string(), "vitest --ui".to_string()),
        ];
        if profile.config().coverage_threshold > 0 {
            scripts.push((
                "test:coverage".to_string(),
                "vitest run --coverage".to_string(),
            ));
        }
        scripts
    }
}

fn template_context(ctx: &PluginContext, profile: TestProfile) -> serde_json::Value {
    let config = profile.config();
    let mut value = ctx.template_context();
    if let Some(map) = value.as_object_mut() {
        map.insert("testProfile".to_string(), json!(profile.id()));
        map.insert(
            "coverageThreshold".to_string(),
            json!(config.coverage_threshold),
        );
        map.insert(
            "hasCoverage".to_string(),
            json!(config.coverage_threshold > 0),
        );
        map.insert(
            "snapshotIncluded".to_string(),
            json!(config.include_tests.snapshot),
        );
        map.insert("a11yIncluded".to_string(), json!(config.include_tests.a11y));
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;
    use crate::project::ProjectConfig;

    fn files_for(features: FeatureFlags) -> Vec<GeneratedFile> {
        let config = ProjectConfig::for_features("demo", features);
        let engine = Engine::new();
        let ctx = PluginContext {
            config: &config,
            engine: &engine,
        };
        TestingPlugin.files(&ctx).unwrap()
    }

    fn testing_features(profile: TestProfile) -> FeatureFlags {
        FeatureFlags {
            testing: true,
            test_profile: Some(profile),
            ..FeatureFlags::default()
        }
    }

    fn paths(files: &[GeneratedFile]) -> Vec<&str> {
        files.iter().map(|f| f.path.as_str()).collect()
    }

    #[test]
    fn test_bare_profile_generates_setup_only() {
        let files = files_for(testing_features(TestProfile::Bare));
        assert_eq!(
            paths(&files),
            vec![
                "vitest.config.ts",
                "src/__tests__/setup.ts",
                "src/__tests__/test-utils.tsx",
            ]
        );
        // No coverage block at threshold zero
        assert!(!files[0].content.contains("coverage"));
    }

    #[test]
    fn test_standard_profile_emits_coverage_threshold() {
        let files = files_for(testing_features(TestProfile::Standard));
        let vitest_config = &files[0].content;
        assert!(vitest_config.contains("provider: 'v8'"));
        assert!(vitest_config.contains("lines: 70"));
        assert!(paths(&files).contains(&"src/__tests__/App.test.tsx"));
    }

    #[test]
    fn test_feature_suites_require_both_tier_and_feature() {
        // redux enabled but minimum tier: no redux suite
        let minimum = files_for(FeatureFlags {
            redux: true,
            ..testing_features(TestProfile::Minimum)
        });
        assert!(!paths(&minimum).contains(&"src/__tests__/store.test.ts"));

        // standard tier without redux: still no redux suite
        let no_redux = files_for(testing_features(TestProfile::Standard));
        assert!(!paths(&no_redux).contains(&"src/__tests__/store.test.ts"));

        let both = files_for(FeatureFlags {
            redux: true,
            ..testing_features(TestProfile::Standard)
        });
        assert!(paths(&both).contains(&"src/__tests__/store.test.ts"));
        assert!(paths(&both).contains(&"src/__tests__/redux-integration.test.tsx"));
    }

    #[test]
    fn test_a11y_and_performance_suites_by_tier() {
        let advanced = files_for(testing_features(TestProfile::Advanced));
        assert!(paths(&advanced).contains(&"src/__tests__/a11y.test.tsx"));
        assert!(!paths(&advanced).contains(&"src/__tests__/performance.test.tsx"));

        let complete = files_for(testing_features(TestProfile::Complete));
        assert!(paths(&complete).contains(&"src/__tests__/performance.test.tsx"));
    }

    #[test]
    fn test_test_utils_wraps_active_providers() {
        let files = files_for(FeatureFlags {
            redux: true,
            react_router: true,
            ..testing_features(TestProfile::Standard)
        });
        let utils = files
            .iter()
            .find(|f| f.path.ends_with("test-utils.tsx"))
            .unwrap();
        assert!(utils.content.contains("<Provider store={store}>"));
        assert!(utils.content.contains("<BrowserRouter>{children}</BrowserRouter>"));

        let bare_utils_files = files_for(testing_features(TestProfile::Standard));
        let bare_utils = bare_utils_files
            .iter()
            .find(|f| f.path.ends_with("test-utils.tsx"))
            .unwrap();
        assert!(bare_utils.content.contains("return <>{children}</>;"));
        assert!(!bare_utils.content.contains("react-redux"));
    }

    #[test]
    fn test_dev_dependencies_follow_profile() {
        let config = ProjectConfig::for_features("demo", testing_features(TestProfile::Bare));
        let engine = Engine::new();
        let ctx = PluginContext {
            config: &config,
            engine: &engine,
        };
        let names: Vec<String> = TestingPlugin
            .dev_dependencies(&ctx)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(
            names,
            vec!["vitest", "jsdom", "@testing-library/react", "@testing-library/jest-dom"]
        );
    }

    #[test]
    fn test_a11y_extras_added_for_advanced() {
        let config = ProjectConfig::for_features("demo", testing_features(TestProfile::Advanced));
        let engine = Engine::new();
        let ctx = PluginContext {
            config: &config,
            engine: &engine,
        };
        let names: Vec<String> = TestingPlugin
            .dev_dependencies(&ctx)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert!(names.contains(&"vitest-axe".to_string()));
        assert!(names.contains(&"axe-core".to_string()));
        // jest-axe has no version table entry and is skipped
        assert!(!names.contains(&"jest-axe".to_string()));
    }

    #[test]
    fn test_coverage_script_gated_on_threshold() {
        let engine = Engine::new();

        let bare_config = ProjectConfig::for_features("demo", testing_features(TestProfile::Bare));
        let bare_ctx = PluginContext {
            config: &bare_config,
            engine: &engine,
        };
        let bare_scripts = TestingPlugin.scripts(&bare_ctx);
        assert!(!bare_scripts.iter().any(|(key, _)| key == "test:coverage"));

        let std_config =
            ProjectConfig::for_features("demo", testing_features(TestProfile::Standard));
        let std_ctx = PluginContext {
            config: &std_config,
            engine: &engine,
        };
        let std_scripts = TestingPlugin.scripts(&std_ctx);
        assert!(std_scripts.iter().any(|(key, _)| key == "test:coverage"));
    }
}
