//! Context value helpers: path resolution, truthiness, interpolation

use serde_json::{Map, Value};

/// Resolve a dot-notation path against the context object.
///
/// `this` and `@`-prefixed tokens are looked up directly as top-level keys
/// rather than split on dots. A `features.` prefix resolves the remainder
/// as a single key inside the `features` sub-object. Resolution
/// short-circuits to `None` as soon as an intermediate segment is missing
/// or not an object.
pub fn resolve_path<'a>(path: &str, ctx: &'a Map<String, Value>) -> Option<&'a Value> {
    if path == "this" {
        return ctx.get("this");
    }
    if path.starts_with('@') {
        return ctx.get(path);
    }
    if let Some(feature_key) = path.strip_prefix("features.") {
        return ctx
            .get("features")
            .and_then(Value::as_object)
            .and_then(|features| features.get(feature_key));
    }

    let mut parts = path.split('.');
    let mut current = ctx.get(parts.next()?)?;
    for part in parts {
        current = current.as_object()?.get(part)?;
    }
    Some(current)
}

/// Template truthiness: arrays and objects are truthy iff non-empty,
/// everything else follows native boolean coercion.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

/// String form of a resolved value for interpolation. Missing and null
/// values render as the empty string.
pub fn stringify(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| stringify(Some(item)))
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => String::new(),
    }
}

/// Escape the five HTML-significant characters
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ctx(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("object context")
    }

    #[test]
    fn test_resolve_nested_path() {
        let ctx = ctx(json!({"a": {"b": {"c": 42}}}));
        assert_eq!(resolve_path("a.b.c", &ctx), Some(&json!(42)));
        assert_eq!(resolve_path("a.b.missing", &ctx), None);
        assert_eq!(resolve_path("a.b.c.too.far", &ctx), None);
    }

    #[test]
    fn test_resolve_special_tokens() {
        let ctx = ctx(json!({"this": "item", "@index": 3}));
        assert_eq!(resolve_path("this", &ctx), Some(&json!("item")));
        assert_eq!(resolve_path("@index", &ctx), Some(&json!(3)));
    }

    #[test]
    fn test_resolve_features_prefix() {
        let ctx = ctx(json!({"features": {"redux": true}}));
        assert_eq!(resolve_path("features.redux", &ctx), Some(&json!(true)));
        assert_eq!(resolve_path("features.unknown", &ctx), None);
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(None));
        assert!(!is_truthy(Some(&json!(null))));
        assert!(!is_truthy(Some(&json!(false))));
        assert!(!is_truthy(Some(&json!(0))));
        assert!(!is_truthy(Some(&json!(""))));
        assert!(!is_truthy(Some(&json!([]))));
        assert!(!is_truthy(Some(&json!({}))));
        assert!(is_truthy(Some(&json!(true))));
        assert!(is_truthy(Some(&json!(1))));
        assert!(is_truthy(Some(&json!("x"))));
        assert!(is_truthy(Some(&json!(["x"]))));
        assert!(is_truthy(Some(&json!({"k": 1}))));
    }

    #[test]
    fn test_stringify() {
        assert_eq!(stringify(Some(&json!("s"))), "s");
        assert_eq!(stringify(Some(&json!(0))), "0");
        assert_eq!(stringify(Some(&json!(true))), "true");
        assert_eq!(stringify(Some(&json!(null))), "");
        assert_eq!(stringify(Some(&json!([1, 2]))), "1,2");
        assert_eq!(stringify(None), "");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>&\"'"), "&lt;b&gt;&amp;&quot;&#39;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
