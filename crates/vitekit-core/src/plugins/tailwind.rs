//! Tailwind CSS plugin: config file and the Vite integration packages

use crate::deps;
use crate::error::ScaffoldError;
use crate::features::FeatureFlags;
use crate::plugins::{GeneratedFile, Plugin, PluginContext};

const TAILWIND_CONFIG: &str = "import type { Config } from 'tailwindcss';

export default {
  content: ['./index.html', './src/**/*.{js,ts,jsx,tsx}'],
  theme: {
    extend: {},
  },
  plugins: [],
} satisfies Config;
";

pub struct TailwindPlugin;

impl Plugin for TailwindPlugin {
    fn id(&self) -> &'static str {
        "tailwindcss"
    }

    fn name(&self) -> &'static str {
        "Tailwind CSS"
    }

    fn description(&self) -> &'static str {
        "Utility-first CSS framework"
    }

    fn order(&self) -> u32 {
        10
    }

    fn should_activate(&self, features: &FeatureFlags) -> bool {
        features.tailwindcss
    }

    fn files(&self, _ctx: &PluginContext) -> Result<Vec<GeneratedFile>, ScaffoldError> {
        Ok(vec![GeneratedFile::new("tailwind.config.ts", TAILWIND_CONFIG)])
    }

    fn dependencies(&self, _ctx: &PluginContext) -> Vec<(String, String)> {
        deps::versions_of(deps::TAILWIND_DEPENDENCIES)
    }

    fn dev_dependencies(&self, _ctx: &PluginContext) -> Vec<(String, String)> {
        deps::versions_of(deps::TAILWIND_DEV_DEPENDENCIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;
    use crate::project::ProjectConfig;

    #[test]
    fn test_activation_and_files() {
        let plugin = TailwindPlugin;
        assert!(!plugin.should_activate(&FeatureFlags::default()));

        let features = FeatureFlags {
            tailwindcss: true,
            ..FeatureFlags::default()
        };
        assert!(plugin.should_activate(&features));

        let config = ProjectConfig::for_features("demo", features);
        let engine = Engine::new();
        let ctx = PluginContext {
            config: &config,
            engine: &engine,
        };
        let files = plugin.files(&ctx).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "tailwind.config.ts");
        assert!(files[0].content.contains("satisfies Config"));
    }
}
