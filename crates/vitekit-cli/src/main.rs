//! vitekit - Create modern React + Vite projects from the command line

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use vitekit_core::features::{default_template, template_by_id, FeatureFlags, PackageManager};
use vitekit_core::plugins::Registry;
use vitekit_core::profiles::TestProfile;
use vitekit_core::project::ProjectConfig;
use vitekit_core::runtime;
use vitekit_core::scaffold::{self, DiskFs, StepStatus};
use vitekit_core::tui::{self, WizardArgs};
use vitekit_core::validate;

#[derive(Parser, Debug)]
#[command(name = "vitekit")]
#[command(about = "Create modern React + Vite projects with ease")]
#[command(version)]
pub struct Args {
    /// Name of the project
    pub project_name: Option<String>,

    /// Use a specific template (minimal, standard, full-pack, custom)
    #[arg(short, long)]
    pub template: Option<String>,

    /// Skip prompts and use defaults
    #[arg(short, long)]
    pub yes: bool,

    /// Skip git initialization
    #[arg(long)]
    pub no_git: bool,

    /// Skip dependency installation
    #[arg(long)]
    pub no_install: bool,

    /// Package manager to use (npm, yarn, pnpm)
    #[arg(short, long)]
    pub package_manager: Option<String>,

    /// Include TailwindCSS
    #[arg(long)]
    pub tailwind: bool,

    /// Include Redux Toolkit
    #[arg(long)]
    pub redux: bool,

    /// Include React Router
    #[arg(long)]
    pub router: bool,

    /// Include i18next internationalization
    #[arg(long)]
    pub i18n: bool,

    /// Include ESLint
    #[arg(long)]
    pub eslint: bool,

    /// Include Prettier
    #[arg(long)]
    pub prettier: bool,

    /// Include Husky + lint-staged git hooks
    #[arg(long)]
    pub husky: bool,

    /// Include a GitHub Actions CI workflow
    #[arg(long)]
    pub github_actions: bool,

    /// Include VS Code settings and extensions
    #[arg(long)]
    pub vscode: bool,

    /// Include a Vitest testing setup
    #[arg(long)]
    pub testing: bool,

    /// Test profile (bare, minimum, standard, advanced, complete)
    #[arg(long)]
    pub test_profile: Option<String>,
}

impl Args {
    fn has_feature_flags(&self) -> bool {
        self.tailwind
            || self.redux
            || self.router
            || self.i18n
            || self.eslint
            || self.prettier
            || self.husky
            || self.github_actions
            || self.vscode
            || self.testing
            || self.test_profile.is_some()
    }

    /// Final feature set: template base (when named), overlaid with the
    /// per-feature flags
    fn resolve_features(&self) -> Result<FeatureFlags> {
        let mut flags = match &self.template {
            Some(id) => {
                template_by_id(id)
                    .ok_or_else(|| {
                        anyhow::anyhow!(
                            "Template '{}' not found. Available templates: minimal, standard, full-pack, custom",
                            id
                        )
                    })?
                    .features
            }
            None if self.has_feature_flags() => FeatureFlags::default(),
            None => default_template().features,
        };

        if self.tailwind {
            flags.tailwindcss = true;
        }
        if self.redux {
            flags.redux = true;
        }
        if self.router {
            flags.react_router = true;
        }
        if self.i18n {
            flags.i18n = true;
        }
        if self.eslint {
            flags.eslint = true;
        }
        if self.prettier {
            flags.prettier = true;
        }
        if self.husky {
            flags.husky = true;
        }
        if self.github_actions {
            flags.github_actions = true;
        }
        if self.vscode {
            flags.vscode = true;
        }
        if self.testing {
            flags.testing = true;
        }
        if let Some(raw) = &self.test_profile {
            let profile = TestProfile::parse(raw).ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown test profile '{}'. Valid profiles: bare, minimum, standard, advanced, complete",
                    raw
                )
            })?;
            flags.testing = true;
            flags.test_profile = Some(profile);
        }

        Ok(flags)
    }

    fn resolve_package_manager(&self) -> Result<Option<PackageManager>> {
        match &self.package_manager {
            Some(raw) => PackageManager::parse(raw)
                .map(Some)
                .ok_or_else(|| anyhow::anyhow!("Unknown package manager '{}'. Valid choices: npm, yarn, pnpm", raw)),
            None => Ok(None),
        }
    }
}

/// Headless mode: feature flags (or --yes) plus a non-interactive
/// environment plus a supplied project name
fn is_headless(args: &Args) -> bool {
    let non_interactive = !console::user_attended()
        || std::env::var_os("CI").is_some()
        || std::env::var_os("GITHUB_ACTIONS").is_some();
    (args.has_feature_flags() || args.yes) && non_interactive && args.project_name.is_some()
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    // Generated projects need a supported Node.js toolchain
    if let Err(message) = runtime::check_node_version() {
        eprintln!("{} {}", "error:".red().bold(), message);
        std::process::exit(1);
    }

    let result = if is_headless(&args) {
        run_headless(&args).await
    } else {
        run_wizard(&args).await
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}

async fn run_wizard(args: &Args) -> Result<()> {
    let features = if args.has_feature_flags() {
        Some(args.resolve_features()?)
    } else {
        None
    };

    let wizard_args = WizardArgs {
        project_name: args.project_name.clone(),
        template: args.template.clone(),
        features,
        package_manager: args.resolve_package_manager()?,
        yes: args.yes,
        init_git: !args.no_git,
        install_deps: !args.no_install,
    };

    tui::run(wizard_args).await
}

async fn run_headless(args: &Args) -> Result<()> {
    let name = args
        .project_name
        .clone()
        .expect("headless mode requires a project name");

    let validation = validate::validate_project_name(&name);
    if !validation.valid {
        anyhow::bail!(
            "Invalid project name '{}': {}",
            name,
            validation.errors.join(", ")
        );
    }

    let mut config = ProjectConfig::for_features(&name, args.resolve_features()?);
    if let Some(id) = &args.template {
        if let Some(template) = template_by_id(id) {
            config.template = template;
        }
    }
    if let Some(pm) = args.resolve_package_manager()? {
        config.package_manager = pm;
    }
    config.init_git = !args.no_git;
    config.install_deps = !args.no_install;

    println!("{} {}", "Creating".cyan().bold(), config.name);

    let registry = Registry::with_builtin_plugins();
    let steps = scaffold::plan_steps(&config);
    let warnings = scaffold::create_project(&config, &registry, &DiskFs, |index, status| {
        let label = steps
            .get(index)
            .map(|step| step.label())
            .unwrap_or("Working");
        match status {
            StepStatus::InProgress => println!("  {} {}", "-".dimmed(), label),
            StepStatus::Complete => println!("  {} {}", "ok".green(), label),
            StepStatus::Error => eprintln!("  {} {}", "failed".red(), label),
            StepStatus::Pending => {}
        }
    })
    .await?;

    for warning in &warnings {
        eprintln!("{} {}", "warning:".yellow(), warning);
    }

    println!(
        "{} Run {} to get started.",
        "Done.".green().bold(),
        format!("cd {}", config.name).cyan()
    );

    Ok(())
}
