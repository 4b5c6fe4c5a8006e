//! GitHub Actions plugin: CI workflow conditioned on the active features
//! and the chosen package manager

use crate::error::ScaffoldError;
use crate::features::FeatureFlags;
use crate::plugins::{GeneratedFile, Plugin, PluginContext};

pub struct GithubActionsPlugin;

impl Plugin for GithubActionsPlugin {
    fn id(&self) -> &'static str {
        "githubActions"
    }

    fn name(&self) -> &'static str {
        "GitHub Actions"
    }

    fn description(&self) -> &'static str {
        "CI/CD with GitHub Actions"
    }

    fn order(&self) -> u32 {
        70
    }

    fn should_activate(&self, features: &FeatureFlags) -> bool {
        features.github_actions
    }

    fn files(&self, ctx: &PluginContext) -> Result<Vec<GeneratedFile>, ScaffoldError> {
        let pm = ctx.config.package_manager;
        let features = ctx.features();

        let mut workflow = String::new();
        workflow.push_str("name: CI\n\n");
        workflow.push_str("on:\n");
        workflow.push_str("  push:\n    branches: [main, master]\n");
        workflow.push_str("  pull_request:\n    branches: [main, master]\n\n");
        workflow.push_str("jobs:\n  build:\n    runs-on: ubuntu-latest\n\n");
        workflow.push_str("    strategy:\n      matrix:\n        node-version: [18.x, 20.x]\n\n");
        workflow.push_str("    steps:\n");
        workflow.push_str("      - uses: actions/checkout@v4\n\n");
        workflow.push_str("      - name: Use Node.js ${{ matrix.node-version }}\n");
        workflow.push_str("        uses: actions/setup-node@v4\n");
        workflow.push_str("        with:\n");
        workflow.push_str("          node-version: ${{ matrix.node-version }}\n");
        workflow.push_str(&format!("          cache: '{}'\n\n", pm.command()));
        workflow.push_str("      - name: Install dependencies\n");
        workflow.push_str(&format!("        run: {}\n\n", pm.install_command()));

        if features.eslint {
            workflow.push_str("      - name: Lint\n");
            workflow.push_str(&format!("        run: {}\n\n", pm.run_script("lint")));
        }
        if features.testing {
            workflow.push_str("      - name: Test\n");
            workflow.push_str(&format!("        run: {}\n\n", pm.run_script("test")));
        }

        workflow.push_str("      - name: Build\n");
        workflow.push_str(&format!("        run: {}\n", pm.run_script("build")));

        Ok(vec![GeneratedFile::new(".github/workflows/ci.yml", workflow)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;
    use crate::features::PackageManager;
    use crate::project::ProjectConfig;

    fn workflow(features: FeatureFlags, pm: PackageManager) -> String {
        let mut config = ProjectConfig::for_features("demo", features);
        config.package_manager = pm;
        let engine = Engine::new();
        let ctx = PluginContext {
            config: &config,
            engine: &engine,
        };
        GithubActionsPlugin.files(&ctx).unwrap().remove(0).content
    }

    #[test]
    fn test_workflow_reflects_package_manager() {
        let base = FeatureFlags {
            github_actions: true,
            ..FeatureFlags::default()
        };
        let npm = workflow(base.clone(), PackageManager::Npm);
        assert!(npm.contains("cache: 'npm'"));
        assert!(npm.contains("run: npm install"));
        assert!(npm.contains("run: npm run build"));

        let pnpm = workflow(base, PackageManager::Pnpm);
        assert!(pnpm.contains("cache: 'pnpm'"));
        assert!(pnpm.contains("run: pnpm install"));
        assert!(pnpm.contains("run: pnpm build"));
    }

    #[test]
    fn test_lint_and_test_steps_are_conditional() {
        let minimal = workflow(
            FeatureFlags {
                github_actions: true,
                ..FeatureFlags::default()
            },
            PackageManager::Npm,
        );
        assert!(!minimal.contains("- name: Lint"));
        assert!(!minimal.contains("- name: Test"));

        let full = workflow(
            FeatureFlags {
                github_actions: true,
                eslint: true,
                testing: true,
                ..FeatureFlags::default()
            },
            PackageManager::Npm,
        );
        assert!(full.contains("- name: Lint"));
        assert!(full.contains("- name: Test"));
        let lint_at = full.find("- name: Lint").unwrap();
        let test_at = full.find("- name: Test").unwrap();
        let build_at = full.find("- name: Build").unwrap();
        assert!(lint_at < test_at && test_at < build_at);
    }

    #[test]
    fn test_matrix_expression_left_intact() {
        let content = workflow(
            FeatureFlags {
                github_actions: true,
                ..FeatureFlags::default()
            },
            PackageManager::Npm,
        );
        assert!(content.contains("${{ matrix.node-version }}"));
    }
}
