//! React Router plugin.
//!
//! Router integration happens inside the generated `main.tsx`; this plugin
//! only contributes the dependency.

use crate::deps;
use crate::error::ScaffoldError;
use crate::features::FeatureFlags;
use crate::plugins::{GeneratedFile, Plugin, PluginContext};

pub struct ReactRouterPlugin;

impl Plugin for ReactRouterPlugin {
    fn id(&self) -> &'static str {
        "reactRouter"
    }

    fn name(&self) -> &'static str {
        "React Router"
    }

    fn description(&self) -> &'static str {
        "Client-side routing with React Router"
    }

    fn order(&self) -> u32 {
        25
    }

    fn should_activate(&self, features: &FeatureFlags) -> bool {
        features.react_router
    }

    fn files(&self, _ctx: &PluginContext) -> Result<Vec<GeneratedFile>, ScaffoldError> {
        Ok(Vec::new())
    }

    fn dependencies(&self, _ctx: &PluginContext) -> Vec<(String, String)> {
        deps::versions_of(deps::REACT_ROUTER_DEPENDENCIES)
    }
}
