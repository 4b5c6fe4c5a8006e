//! Feature model: the flag set, predefined templates, and selection metadata

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::profiles::TestProfile;

/// Supported package managers for the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// Binary name of the package manager
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    /// Full install command run inside the generated project
    pub fn install_command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm install",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm install",
        }
    }

    /// How a package script is invoked; npm needs the `run` subcommand,
    /// yarn and pnpm execute scripts directly
    pub fn run_script(&self, script: &str) -> String {
        match self {
            PackageManager::Npm => format!("npm run {}", script),
            _ => format!("{} {}", self.command(), script),
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "npm" => Some(PackageManager::Npm),
            "yarn" => Some(PackageManager::Yarn),
            "pnpm" => Some(PackageManager::Pnpm),
            _ => None,
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command())
    }
}

/// Named boolean switches, one per optional capability of the generated
/// project. Serialized field names match the template-context vocabulary
/// (`features.reactRouter` etc.).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    /// Always enabled; generated projects are TypeScript-only
    pub typescript: bool,
    pub tailwindcss: bool,
    pub redux: bool,
    pub react_router: bool,
    pub i18n: bool,
    pub eslint: bool,
    pub prettier: bool,
    pub husky: bool,
    pub github_actions: bool,
    pub vscode: bool,
    pub testing: bool,
    /// Which preset of generated tests ships when `testing` is enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_profile: Option<TestProfile>,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            typescript: true,
            tailwindcss: false,
            redux: false,
            react_router: false,
            i18n: false,
            eslint: false,
            prettier: false,
            husky: false,
            github_actions: false,
            vscode: false,
            testing: false,
            test_profile: None,
        }
    }
}

impl FeatureFlags {
    /// Effective test profile, defaulting to `standard` when unset
    pub fn effective_test_profile(&self) -> TestProfile {
        self.test_profile.unwrap_or_default()
    }
}

/// A selectable feature, used by the wizard's feature-select step and the
/// CLI's per-feature flags. `typescript` is deliberately absent: it cannot
/// be toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Tailwindcss,
    Redux,
    ReactRouter,
    I18n,
    Eslint,
    Prettier,
    Husky,
    GithubActions,
    Vscode,
    Testing,
}

impl Feature {
    pub const SELECTABLE: &'static [Feature] = &[
        Feature::Tailwindcss,
        Feature::Redux,
        Feature::ReactRouter,
        Feature::I18n,
        Feature::Eslint,
        Feature::Prettier,
        Feature::Husky,
        Feature::GithubActions,
        Feature::Vscode,
        Feature::Testing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Feature::Tailwindcss => "TailwindCSS",
            Feature::Redux => "Redux Toolkit",
            Feature::ReactRouter => "React Router",
            Feature::I18n => "i18n",
            Feature::Eslint => "ESLint",
            Feature::Prettier => "Prettier",
            Feature::Husky => "Husky + lint-staged",
            Feature::GithubActions => "GitHub Actions",
            Feature::Vscode => "VS Code Config",
            Feature::Testing => "Testing",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Feature::Tailwindcss => "Utility-first CSS framework with Vite plugin",
            Feature::Redux => "State management with Redux Toolkit and React-Redux",
            Feature::ReactRouter => "Declarative routing for React applications",
            Feature::I18n => "Internationalization with i18next",
            Feature::Eslint => "Find and fix problems in your TypeScript code",
            Feature::Prettier => "Opinionated code formatter",
            Feature::Husky => "Git hooks for linting and formatting on commit",
            Feature::GithubActions => "CI/CD workflow for testing and building",
            Feature::Vscode => "Editor settings and recommended extensions",
            Feature::Testing => "Testing with Vitest and Testing Library",
        }
    }

    pub fn is_enabled(&self, flags: &FeatureFlags) -> bool {
        match self {
            Feature::Tailwindcss => flags.tailwindcss,
            Feature::Redux => flags.redux,
            Feature::ReactRouter => flags.react_router,
            Feature::I18n => flags.i18n,
            Feature::Eslint => flags.eslint,
            Feature::Prettier => flags.prettier,
            Feature::Husky => flags.husky,
            Feature::GithubActions => flags.github_actions,
            Feature::Vscode => flags.vscode,
            Feature::Testing => flags.testing,
        }
    }

    pub fn set(&self, flags: &mut FeatureFlags, enabled: bool) {
        match self {
            Feature::Tailwindcss => flags.tailwindcss = enabled,
            Feature::Redux => flags.redux = enabled,
            Feature::ReactRouter => flags.react_router = enabled,
            Feature::I18n => flags.i18n = enabled,
            Feature::Eslint => flags.eslint = enabled,
            Feature::Prettier => flags.prettier = enabled,
            Feature::Husky => flags.husky = enabled,
            Feature::GithubActions => flags.github_actions = enabled,
            Feature::Vscode => flags.vscode = enabled,
            Feature::Testing => flags.testing = enabled,
        }
    }
}

/// A named, described bundle of feature flags
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub features: FeatureFlags,
}

/// All predefined templates, in presentation order
pub fn templates() -> Vec<Template> {
    vec![
        Template {
            id: "minimal",
            name: "Minimal",
            description: "React + Vite + TypeScript only. Clean slate for custom setup.",
            icon: "⚡",
            color: "yellow",
            features: FeatureFlags::default(),
        },
        Template {
            id: "standard",
            name: "Standard",
            description: "React + Vite + TypeScript + TailwindCSS + ESLint + Prettier",
            icon: "📦",
            color: "cyan",
            features: FeatureFlags {
                tailwindcss: true,
                eslint: true,
                prettier: true,
                ..FeatureFlags::default()
            },
        },
        Template {
            id: "full-pack",
            name: "Full Pack",
            description: "Everything included: Redux, React Router, TailwindCSS, Linting, Husky, CI/CD",
            icon: "🚀",
            color: "magenta",
            features: FeatureFlags {
                tailwindcss: true,
                redux: true,
                react_router: true,
                eslint: true,
                prettier: true,
                husky: true,
                github_actions: true,
                vscode: true,
                ..FeatureFlags::default()
            },
        },
        Template {
            id: "custom",
            name: "Custom",
            description: "Choose exactly what you need. Pick your own features.",
            icon: "🎨",
            color: "green",
            features: FeatureFlags::default(),
        },
    ]
}

/// Look up a template by id
pub fn template_by_id(id: &str) -> Option<Template> {
    templates().into_iter().find(|t| t.id == id)
}

/// Default template used when none is specified
pub fn default_template() -> Template {
    template_by_id("standard").unwrap_or_else(|| templates().remove(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typescript_always_on_in_every_template() {
        for template in templates() {
            assert!(template.features.typescript, "{}", template.id);
        }
    }

    #[test]
    fn test_template_lookup() {
        assert_eq!(template_by_id("full-pack").unwrap().name, "Full Pack");
        assert!(template_by_id("does-not-exist").is_none());
    }

    #[test]
    fn test_default_template_is_standard() {
        let template = default_template();
        assert_eq!(template.id, "standard");
        assert!(template.features.tailwindcss);
        assert!(template.features.eslint);
        assert!(template.features.prettier);
        assert!(!template.features.redux);
    }

    #[test]
    fn test_run_script_prefix_depends_on_package_manager() {
        assert_eq!(PackageManager::Npm.run_script("dev"), "npm run dev");
        assert_eq!(PackageManager::Yarn.run_script("dev"), "yarn dev");
        assert_eq!(PackageManager::Pnpm.run_script("build"), "pnpm build");
    }

    #[test]
    fn test_feature_toggling() {
        let mut flags = FeatureFlags::default();
        Feature::Redux.set(&mut flags, true);
        assert!(flags.redux);
        assert!(Feature::Redux.is_enabled(&flags));
        Feature::Redux.set(&mut flags, false);
        assert!(!flags.redux);
    }
}
