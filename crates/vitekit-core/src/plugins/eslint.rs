//! ESLint plugin: flat-config generation for TypeScript + React.
//!
//! The config file is assembled from structured import/plugin/rule lists
//! and serialized by a single formatting function, so nesting and comma
//! placement stay correct regardless of which entries a feature set adds.

use crate::deps;
use crate::error::ScaffoldError;
use crate::features::FeatureFlags;
use crate::plugins::{GeneratedFile, Plugin, PluginContext};

/// Structured form of an `eslint.config.js` flat config
struct FlatConfig {
    imports: Vec<(&'static str, &'static str)>,
    plugins: Vec<(&'static str, &'static str)>,
    rules: Vec<&'static str>,
    /// Extra top-level config entries appended after the main block
    extends: Vec<&'static str>,
}

impl FlatConfig {
    fn base() -> Self {
        Self {
            imports: vec![
                ("js", "@eslint/js"),
                ("globals", "globals"),
                ("reactHooks", "eslint-plugin-react-hooks"),
                ("reactRefresh", "eslint-plugin-react-refresh"),
                ("tseslint", "typescript-eslint"),
            ],
            plugins: vec![
                ("'@typescript-eslint'", "tseslint.plugin"),
                ("'react-hooks'", "reactHooks"),
                ("'react-refresh'", "reactRefresh"),
            ],
            rules: vec![
                "...js.configs.recommended.rules",
                "...tseslint.configs.recommended.rules",
                "...reactHooks.configs.recommended.rules",
                "'react-refresh/only-export-components': 'warn'",
                "'@typescript-eslint/no-explicit-any': 'warn'",
                "'@typescript-eslint/no-unused-vars': ['error', { argsIgnorePattern: '^_' }]",
            ],
            extends: Vec::new(),
        }
    }

    fn with_prettier(mut self) -> Self {
        self.imports.push(("prettier", "eslint-plugin-prettier"));
        self.imports
            .push(("eslintConfigPrettier", "eslint-config-prettier"));
        self.plugins.push(("prettier", "prettier"));
        self.rules.push("'prettier/prettier': 'error'");
        self.extends.push("eslintConfigPrettier");
        self
    }

    fn render(&self) -> String {
        let mut out = String::new();
        for (symbol, module) in &self.imports {
            out.push_str(&format!("import {} from '{}';\n", symbol, module));
        }
        out.push_str("\nexport default [\n");
        out.push_str("  { ignores: ['dist', 'node_modules'] },\n");
        out.push_str("  {\n");
        out.push_str("    files: ['**/*.{ts,tsx}'],\n");
        out.push_str("    languageOptions: {\n");
        out.push_str("      ecmaVersion: 2020,\n");
        out.push_str("      sourceType: 'module',\n");
        out.push_str("      globals: globals.browser,\n");
        out.push_str("      parser: tseslint.parser,\n");
        out.push_str("    },\n");
        out.push_str("    plugins: {\n");
        for (key, expr) in &self.plugins {
            out.push_str(&format!("      {}: {},\n", key, expr));
        }
        out.push_str("    },\n");
        out.push_str("    rules: {\n");
        for rule in &self.rules {
            out.push_str(&format!("      {},\n", rule));
        }
        out.push_str("    },\n");
        out.push_str("  }");
        for entry in &self.extends {
            out.push_str(&format!(",\n  {}", entry));
        }
        out.push_str(",\n];\n");
        out
    }
}

pub struct EslintPlugin;

impl Plugin for EslintPlugin {
    fn id(&self) -> &'static str {
        "eslint"
    }

    fn name(&self) -> &'static str {
        "ESLint"
    }

    fn description(&self) -> &'static str {
        "Code linting with ESLint"
    }

    fn order(&self) -> u32 {
        50
    }

    fn should_activate(&self, features: &FeatureFlags) -> bool {
        features.eslint
    }

    fn files(&self, ctx: &PluginContext) -> Result<Vec<GeneratedFile>, ScaffoldError> {
        let mut config = FlatConfig::base();
        if ctx.features().prettier {
            config = config.with_prettier();
        }
        Ok(vec![GeneratedFile::new("eslint.config.js", config.render())])
    }

    fn dev_dependencies(&self, _ctx: &PluginContext) -> Vec<(String, String)> {
        deps::versions_of(deps::ESLINT_DEV_DEPENDENCIES)
    }

    fn scripts(&self, _ctx: &PluginContext) -> Vec<(String, String)> {
        vec![
            ("lint".to_string(), "eslint . --max-warnings=0".to_string()),
            ("lint:fix".to_string(), "eslint . --fix".to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;
    use crate::project::ProjectConfig;

    fn generate(features: FeatureFlags) -> String {
        let config = ProjectConfig::for_features("demo", features);
        let engine = Engine::new();
        let ctx = PluginContext {
            config: &config,
            engine: &engine,
        };
        EslintPlugin.files(&ctx).unwrap().remove(0).content
    }

    #[test]
    fn test_base_config_without_prettier() {
        let content = generate(FeatureFlags {
            eslint: true,
            ..FeatureFlags::default()
        });
        assert!(content.starts_with("import js from '@eslint/js';"));
        assert!(content.contains("'react-refresh/only-export-components': 'warn'"));
        assert!(!content.contains("prettier"));
        assert!(content.ends_with("];\n"));
    }

    #[test]
    fn test_prettier_entries_added_when_enabled() {
        let content = generate(FeatureFlags {
            eslint: true,
            prettier: true,
            ..FeatureFlags::default()
        });
        assert!(content.contains("import prettier from 'eslint-plugin-prettier';"));
        assert!(content.contains("'prettier/prettier': 'error'"));
        assert!(content.contains("},\n  eslintConfigPrettier,\n];"));
    }

    #[test]
    fn test_balanced_brackets() {
        let content = generate(FeatureFlags {
            eslint: true,
            prettier: true,
            ..FeatureFlags::default()
        });
        let opens = content.matches('{').count();
        let closes = content.matches('}').count();
        assert_eq!(opens, closes);
    }
}
