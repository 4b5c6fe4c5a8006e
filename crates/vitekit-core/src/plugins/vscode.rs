//! VS Code plugin: recommended extensions and workspace settings

use serde_json::{json, Map, Value};

use crate::error::ScaffoldError;
use crate::features::FeatureFlags;
use crate::plugins::{GeneratedFile, Plugin, PluginContext};

pub struct VscodePlugin;

impl Plugin for VscodePlugin {
    fn id(&self) -> &'static str {
        "vscode"
    }

    fn name(&self) -> &'static str {
        "VS Code"
    }

    fn description(&self) -> &'static str {
        "VS Code editor settings and extensions"
    }

    fn order(&self) -> u32 {
        80
    }

    fn should_activate(&self, features: &FeatureFlags) -> bool {
        features.vscode
    }

    fn files(&self, ctx: &PluginContext) -> Result<Vec<GeneratedFile>, ScaffoldError> {
        let features = ctx.features();
        let mut files = Vec::new();

        let mut extensions = vec!["dbaeumer.vscode-eslint", "esbenp.prettier-vscode"];
        if features.tailwindcss {
            extensions.push("bradlc.vscode-tailwindcss");
        }
        if features.i18n {
            extensions.push("lokalise.i18n-ally");
        }
        files.push(GeneratedFile::new(
            ".vscode/extensions.json",
            pretty(&json!({ "recommendations": extensions })),
        ));

        let mut settings = Map::new();
        settings.insert("editor.formatOnSave".to_string(), json!(true));
        settings.insert(
            "editor.defaultFormatter".to_string(),
            json!("esbenp.prettier-vscode"),
        );
        settings.insert(
            "editor.codeActionsOnSave".to_string(),
            json!({ "source.fixAll.eslint": "explicit" }),
        );
        settings.insert(
            "typescript.tsdk".to_string(),
            json!("node_modules/typescript/lib"),
        );
        settings.insert(
            "typescript.enablePromptUseWorkspaceTsdk".to_string(),
            json!(true),
        );
        if features.tailwindcss {
            settings.insert(
                "tailwindCSS.experimental.classRegex".to_string(),
                json!([
                    ["cva\\(([^)]*)\\)", "[\"'`]([^\"'`]*).*?[\"'`]"],
                    ["cx\\(([^)]*)\\)", "(?:'|\"|`)([^']*)(?:'|\"|`)"],
                ]),
            );
            settings.insert(
                "editor.quickSuggestions".to_string(),
                json!({ "strings": "on" }),
            );
        }
        files.push(GeneratedFile::new(
            ".vscode/settings.json",
            pretty(&Value::Object(settings)),
        ));

        Ok(files)
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;
    use crate::project::ProjectConfig;

    fn generate(features: FeatureFlags) -> Vec<GeneratedFile> {
        let config = ProjectConfig::for_features("demo", features);
        let engine = Engine::new();
        let ctx = PluginContext {
            config: &config,
            engine: &engine,
        };
        VscodePlugin.files(&ctx).unwrap()
    }

    #[test]
    fn test_extension_recommendations_follow_features() {
        let base = generate(FeatureFlags {
            vscode: true,
            ..FeatureFlags::default()
        });
        assert!(!base[0].content.contains("bradlc.vscode-tailwindcss"));

        let with_tailwind = generate(FeatureFlags {
            vscode: true,
            tailwindcss: true,
            i18n: true,
            ..FeatureFlags::default()
        });
        assert!(with_tailwind[0].content.contains("bradlc.vscode-tailwindcss"));
        assert!(with_tailwind[0].content.contains("lokalise.i18n-ally"));
    }

    #[test]
    fn test_settings_are_valid_json() {
        let files = generate(FeatureFlags {
            vscode: true,
            tailwindcss: true,
            ..FeatureFlags::default()
        });
        let settings: Value = serde_json::from_str(&files[1].content).unwrap();
        assert_eq!(settings["editor.formatOnSave"], json!(true));
        assert!(settings.get("tailwindCSS.experimental.classRegex").is_some());
    }
}
