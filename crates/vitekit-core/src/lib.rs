//! Vitekit Core - Feature-flag driven React + Vite project scaffolding
//!
//! This library turns a declarative feature selection into a complete
//! project skeleton: source stubs, configuration files, a package
//! manifest with deterministic dependency ordering, and the optional
//! git/install follow-up steps.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Pure Composition** - the template micro-engine, the
//!   dependency/script resolver, and the plugin registry; no I/O
//! - **Layer 2: Assembly** - the sequential pipeline writing the output
//!   tree and running git/package-manager subprocesses
//! - **Layer 3: CLI/TUI Interface** - optional cliclack-based wizard
//!   (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based wizard module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use vitekit_core::{plugins::Registry, project::ProjectConfig, scaffold};
//!
//! let registry = Registry::with_builtin_plugins();
//! let config = ProjectConfig::for_features("my-app", features);
//! scaffold::create_project(&config, &registry, &scaffold::DiskFs, |_, _| {}).await?;
//! ```

pub mod deps;
pub mod engine;
pub mod error;
pub mod features;
pub mod manifest;
pub mod plugins;
pub mod profiles;
pub mod project;
pub mod runtime;
pub mod scaffold;
pub mod validate;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use engine::Engine;
pub use error::{EngineError, ScaffoldError};
pub use features::{Feature, FeatureFlags, PackageManager, Template};
pub use plugins::{GeneratedFile, Plugin, PluginContext, Registry};
pub use profiles::{TestProfile, TestProfileConfig};
pub use project::ProjectConfig;

#[cfg(feature = "tui")]
pub use tui::run;
