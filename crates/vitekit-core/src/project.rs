//! Resolved project configuration handed to the assembly pipeline

use std::path::PathBuf;

use crate::features::{default_template, FeatureFlags, PackageManager, Template};

/// Everything the pipeline needs, fully resolved by the wizard or the CLI
/// before assembly starts. Immutable from that point on.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub name: String,
    pub author: String,
    pub license: String,
    pub description: String,
    pub template: Template,
    pub features: FeatureFlags,
    pub package_manager: PackageManager,
    pub init_git: bool,
    pub install_deps: bool,
    pub target_dir: PathBuf,
}

impl ProjectConfig {
    /// Config with sensible defaults for a name and feature set; the target
    /// directory is `<name>` under the current directory
    pub fn for_features(name: &str, features: FeatureFlags) -> Self {
        let target_dir = std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(name);
        Self {
            name: name.to_string(),
            author: String::new(),
            license: "MIT".to_string(),
            description: String::new(),
            template: default_template(),
            features,
            package_manager: PackageManager::Npm,
            init_git: true,
            install_deps: true,
            target_dir,
        }
    }
}
