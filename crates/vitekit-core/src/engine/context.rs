//! Rendering-context construction from feature flags and project metadata

use serde_json::{json, Map, Value};

use crate::features::FeatureFlags;

/// Provider components wrapping the generated app, outermost first:
/// i18n, then the Redux store provider, then the router.
pub fn provider_order(features: &FeatureFlags) -> Vec<&'static str> {
    let mut order = Vec::new();
    if features.i18n {
        order.push("i18n");
    }
    if features.redux {
        order.push("redux");
    }
    if features.react_router {
        order.push("router");
    }
    order
}

/// Builds the context object handed to [`crate::engine::Engine::render`].
/// Feature flags are exposed both nested (`features.redux`) and flat
/// (`redux`), alongside project metadata and computed helper fields.
pub struct ContextBuilder {
    map: Map<String, Value>,
}

impl ContextBuilder {
    pub fn new(features: &FeatureFlags) -> Self {
        let mut map = Map::new();

        let feature_values = serde_json::to_value(features).unwrap_or(Value::Null);
        if let Some(flags) = feature_values.as_object() {
            for (key, value) in flags {
                map.insert(key.clone(), value.clone());
            }
        }
        map.insert("features".to_string(), feature_values);

        let providers = provider_order(features);
        map.insert("hasProviders".to_string(), json!(!providers.is_empty()));
        map.insert("providerOrder".to_string(), json!(providers));

        map.insert("projectName".to_string(), json!("my-app"));
        map.insert("author".to_string(), json!(""));
        map.insert("description".to_string(), json!(""));
        map.insert("license".to_string(), json!("MIT"));

        Self { map }
    }

    /// Attach project metadata, overriding the placeholder defaults
    pub fn project(
        mut self,
        name: &str,
        author: &str,
        description: &str,
        license: &str,
    ) -> Self {
        self.map.insert("projectName".to_string(), json!(name));
        self.map.insert("author".to_string(), json!(author));
        self.map.insert("description".to_string(), json!(description));
        self.map.insert("license".to_string(), json!(license));
        self
    }

    /// Add or override an arbitrary context entry. This is the only route
    /// for ad-hoc keys; the rest of the context is strictly shaped.
    pub fn set(mut self, key: &str, value: Value) -> Self {
        self.map.insert(key.to_string(), value);
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_order_is_i18n_redux_router() {
        let features = FeatureFlags {
            i18n: true,
            redux: true,
            react_router: true,
            ..FeatureFlags::default()
        };
        assert_eq!(provider_order(&features), vec!["i18n", "redux", "router"]);

        let redux_only = FeatureFlags {
            redux: true,
            ..FeatureFlags::default()
        };
        assert_eq!(provider_order(&redux_only), vec!["redux"]);
        assert!(provider_order(&FeatureFlags::default()).is_empty());
    }

    #[test]
    fn test_context_exposes_flags_nested_and_flat() {
        let features = FeatureFlags {
            redux: true,
            ..FeatureFlags::default()
        };
        let ctx = ContextBuilder::new(&features).build();
        assert_eq!(ctx["redux"], json!(true));
        assert_eq!(ctx["features"]["redux"], json!(true));
        assert_eq!(ctx["features"]["reactRouter"], json!(false));
        assert_eq!(ctx["hasProviders"], json!(true));
    }

    #[test]
    fn test_project_metadata_defaults_and_overrides() {
        let features = FeatureFlags::default();
        let ctx = ContextBuilder::new(&features).build();
        assert_eq!(ctx["projectName"], json!("my-app"));
        assert_eq!(ctx["license"], json!("MIT"));

        let ctx = ContextBuilder::new(&features)
            .project("shop", "ada", "A shop", "Apache-2.0")
            .build();
        assert_eq!(ctx["projectName"], json!("shop"));
        assert_eq!(ctx["author"], json!("ada"));
        assert_eq!(ctx["license"], json!("Apache-2.0"));
    }
}
