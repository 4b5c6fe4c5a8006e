//! Prettier plugin: formatter configuration and scripts

use serde_json::json;

use crate::deps;
use crate::error::ScaffoldError;
use crate::features::FeatureFlags;
use crate::plugins::{GeneratedFile, Plugin, PluginContext};

pub struct PrettierPlugin;

impl Plugin for PrettierPlugin {
    fn id(&self) -> &'static str {
        "prettier"
    }

    fn name(&self) -> &'static str {
        "Prettier"
    }

    fn description(&self) -> &'static str {
        "Code formatting with Prettier"
    }

    fn order(&self) -> u32 {
        51
    }

    fn should_activate(&self, features: &FeatureFlags) -> bool {
        features.prettier
    }

    fn files(&self, _ctx: &PluginContext) -> Result<Vec<GeneratedFile>, ScaffoldError> {
        let config = json!({
            "semi": true,
            "singleQuote": true,
            "tabWidth": 2,
            "trailingComma": "es5",
            "printWidth": 100,
            "bracketSpacing": true,
            "arrowParens": "avoid",
            "endOfLine": "lf",
        });
        let content = serde_json::to_string_pretty(&config).unwrap_or_default();
        Ok(vec![GeneratedFile::new(".prettierrc", content)])
    }

    fn dev_dependencies(&self, _ctx: &PluginContext) -> Vec<(String, String)> {
        deps::versions_of(deps::PRETTIER_DEV_DEPENDENCIES)
    }

    fn scripts(&self, _ctx: &PluginContext) -> Vec<(String, String)> {
        vec![
            (
                "format".to_string(),
                "prettier --write 'src/**/*.{ts,tsx}'".to_string(),
            ),
            (
                "format:check".to_string(),
                "prettier --check 'src/**/*.{ts,tsx}'".to_string(),
            ),
        ]
    }
}
