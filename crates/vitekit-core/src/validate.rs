//! Project name validation against npm package naming rules

/// Outcome of validating a candidate project name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Validate a project name the way the npm registry would for a new
/// package
pub fn validate_project_name(name: &str) -> ValidationResult {
    let mut errors = Vec::new();

    if name.trim().is_empty() {
        return ValidationResult {
            valid: false,
            errors: vec!["Project name cannot be empty".to_string()],
        };
    }

    if name.len() > 214 {
        errors.push("Project name must be less than 214 characters".to_string());
    }

    if name.starts_with('.') || name.starts_with('_') {
        errors.push("Project name cannot start with . or _".to_string());
    }

    if name != name.to_lowercase() {
        errors.push("Project name must be lowercase".to_string());
    }

    if name.chars().any(|c| "~'!()*".contains(c)) {
        errors.push("Project name cannot contain special characters: ~'!()*".to_string());
    }

    if name.contains(char::is_whitespace) {
        errors.push("Project name cannot contain spaces".to_string());
    }

    if name.starts_with('@') && !name.contains('/') {
        errors.push("Scoped package names must include a scope and name".to_string());
    }

    ValidationResult {
        valid: errors.is_empty(),
        errors,
    }
}

/// Derive a valid name from arbitrary input, e.g. `"My App"` -> `"my-app"`
pub fn suggest_valid_name(name: &str) -> String {
    let mut suggested: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() || c == '_' { '-' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect();

    // Collapse runs of hyphens introduced by replacement
    while suggested.contains("--") {
        suggested = suggested.replace("--", "-");
    }
    suggested = suggested.trim_matches('-').to_string();

    if suggested.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        suggested = format!("app-{}", suggested);
    }

    if suggested.is_empty() {
        suggested = "my-app".to_string();
    }

    suggested
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["my-app", "app2", "some.project", "@scope/pkg"] {
            let result = validate_project_name(name);
            assert!(result.valid, "{}: {:?}", name, result.errors);
        }
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = validate_project_name("");
        assert!(!result.valid);
        assert_eq!(result.errors, vec!["Project name cannot be empty"]);
    }

    #[test]
    fn test_uppercase_rejected() {
        assert!(!validate_project_name("MyApp").valid);
    }

    #[test]
    fn test_leading_dot_and_underscore_rejected() {
        assert!(!validate_project_name(".hidden").valid);
        assert!(!validate_project_name("_private").valid);
    }

    #[test]
    fn test_special_characters_rejected() {
        assert!(!validate_project_name("app!").valid);
        assert!(!validate_project_name("a*b").valid);
        assert!(!validate_project_name("my app").valid);
    }

    #[test]
    fn test_scoped_name_needs_slash() {
        assert!(!validate_project_name("@scope").valid);
        assert!(validate_project_name("@scope/name").valid);
    }

    #[test]
    fn test_overlong_name_rejected() {
        let name = "a".repeat(215);
        assert!(!validate_project_name(&name).valid);
    }

    #[test]
    fn test_suggestions() {
        assert_eq!(suggest_valid_name("My App"), "my-app");
        assert_eq!(suggest_valid_name("hello_world"), "hello-world");
        assert_eq!(suggest_valid_name("Crazy!!Name"), "crazyname");
        assert_eq!(suggest_valid_name("42things"), "app-42things");
        assert_eq!(suggest_valid_name("___"), "my-app");
        assert_eq!(suggest_valid_name("--edge--"), "edge");
    }

    #[test]
    fn test_suggested_names_validate() {
        for input in ["My App", "42things", "Crazy!!Name", "  ", "a_b_c"] {
            let suggested = suggest_valid_name(input);
            assert!(
                validate_project_name(&suggested).valid,
                "suggestion for {:?} was {:?}",
                input,
                suggested
            );
        }
    }
}
