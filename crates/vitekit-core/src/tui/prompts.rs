//! Charm-style CLI prompts using cliclack

use std::cell::RefCell;
use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use crate::features::{self, default_template, template_by_id, Feature, FeatureFlags, PackageManager, Template};
use crate::plugins::Registry;
use crate::profiles::TestProfile;
use crate::project::ProjectConfig;
use crate::scaffold::{self, DiskFs, StepStatus};
use crate::validate;

/// CLI arguments feeding the wizard; anything unset is prompted for
#[derive(Debug, Clone)]
pub struct WizardArgs {
    /// Project name (also the directory created under the current dir)
    pub project_name: Option<String>,

    /// Template id to use without prompting
    pub template: Option<String>,

    /// Pre-resolved feature set (from CLI flags); skips the feature step
    pub features: Option<FeatureFlags>,

    /// Package manager to use without prompting
    pub package_manager: Option<PackageManager>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,

    /// Initialize a git repository (false skips the prompt entirely)
    pub init_git: bool,

    /// Install dependencies (false skips the prompt entirely)
    pub install_deps: bool,
}

impl Default for WizardArgs {
    fn default() -> Self {
        Self {
            project_name: None,
            template: None,
            features: None,
            package_manager: None,
            yes: false,
            init_git: true,
            install_deps: true,
        }
    }
}

/// Run the wizard end to end: prompts, assembly, next steps
pub async fn run(args: WizardArgs) -> Result<()> {
    cliclack::intro("vitekit")?;

    // Step 1: project name and target directory
    let name = select_project_name(&args)?;
    let target_dir = resolve_target_dir(&name);
    if target_dir.exists() {
        cliclack::log::error(format!("Directory already exists: {}", target_dir.display()))?;
        anyhow::bail!("Directory already exists: {}", target_dir.display());
    }

    // Step 2: template, then features for the custom template
    let template = select_template(&args)?;
    let mut feature_flags = match &args.features {
        Some(flags) => flags.clone(),
        None if template.id == "custom" && !args.yes => select_features(&template)?,
        None => template.features.clone(),
    };
    if feature_flags.testing && feature_flags.test_profile.is_none() {
        feature_flags.test_profile = Some(select_test_profile(&args)?);
    }

    // Step 3: package manager and side steps
    let package_manager = select_package_manager(&args)?;
    let init_git = confirm_flag(&args, args.init_git, "Initialize a git repository?")?;
    let install_deps = confirm_flag(&args, args.install_deps, "Install dependencies?")?;

    let config = ProjectConfig {
        name: name.clone(),
        author: String::new(),
        license: "MIT".to_string(),
        description: String::new(),
        features: feature_flags,
        template,
        package_manager,
        init_git,
        install_deps,
        target_dir,
    };

    print_summary(&config)?;

    // Step 4: run the pipeline with step-by-step progress
    let registry = Registry::with_builtin_plugins();
    let warnings = create_with_progress(&config, &registry).await?;

    for warning in &warnings {
        cliclack::log::warning(warning)?;
    }

    print_next_steps(&config)?;

    Ok(())
}

fn resolve_target_dir(name: &str) -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(name)
}

fn select_project_name(args: &WizardArgs) -> Result<String> {
    if let Some(name) = &args.project_name {
        let result = validate::validate_project_name(name);
        if result.valid {
            cliclack::log::info(format!("Project name: {}", name))?;
            return Ok(name.clone());
        }

        let suggested = validate::suggest_valid_name(name);
        cliclack::log::warning(format!(
            "Invalid project name '{}': {}",
            name,
            result.errors.join(", ")
        ))?;
        if args.yes {
            cliclack::log::info(format!("Using suggested name: {}", suggested))?;
            return Ok(suggested);
        }
        return prompt_project_name(&suggested);
    }

    if args.yes {
        return Ok("my-app".to_string());
    }
    prompt_project_name("my-app")
}

fn prompt_project_name(default: &str) -> Result<String> {
    let input: String = cliclack::input("Project name")
        .placeholder(default)
        .default_input(default)
        .validate(|value: &String| {
            let result = validate::validate_project_name(value);
            if result.valid {
                Ok(())
            } else {
                Err(result.errors.join(", "))
            }
        })
        .interact()?;
    Ok(input)
}

fn select_template(args: &WizardArgs) -> Result<Template> {
    let mut templates = features::templates();

    if let Some(id) = &args.template {
        match template_by_id(id) {
            Some(template) => {
                cliclack::log::info(format!(
                    "Template: {} - {}",
                    template.name, template.description
                ))?;
                return Ok(template);
            }
            None => {
                let available: Vec<&str> = templates.iter().map(|t| t.id).collect();
                anyhow::bail!(
                    "Template '{}' not found. Available templates: {}",
                    id,
                    available.join(", ")
                );
            }
        }
    }

    if args.yes {
        return Ok(default_template());
    }

    // Build select prompt - use indices to avoid borrow issues
    let mut select = cliclack::select("Select a template");
    for (idx, template) in templates.iter().enumerate() {
        select = select.item(idx, template.name, template.description);
    }
    let selected: usize = select.interact()?;

    Ok(templates.remove(selected))
}

fn select_features(template: &Template) -> Result<FeatureFlags> {
    let mut multi = cliclack::multiselect("Select features").required(false);
    for feature in Feature::SELECTABLE {
        multi = multi.item(*feature, feature.label(), feature.description());
    }
    let preselected: Vec<Feature> = Feature::SELECTABLE
        .iter()
        .copied()
        .filter(|f| f.is_enabled(&template.features))
        .collect();
    let selected: Vec<Feature> = multi.initial_values(preselected).interact()?;

    let mut flags = FeatureFlags::default();
    for feature in selected {
        feature.set(&mut flags, true);
    }
    Ok(flags)
}

fn select_test_profile(args: &WizardArgs) -> Result<TestProfile> {
    if args.yes {
        return Ok(TestProfile::default());
    }

    let mut select = cliclack::select("Select a test profile");
    for profile in TestProfile::ALL {
        let config = profile.config();
        select = select.item(profile, config.name, config.description);
    }
    Ok(select.interact()?)
}

fn select_package_manager(args: &WizardArgs) -> Result<PackageManager> {
    if let Some(pm) = args.package_manager {
        cliclack::log::info(format!("Package manager: {}", pm))?;
        return Ok(pm);
    }
    if args.yes {
        return Ok(PackageManager::Npm);
    }

    let selected: PackageManager = cliclack::select("Select a package manager")
        .item(PackageManager::Npm, "npm", "Ships with Node.js")
        .item(PackageManager::Yarn, "yarn", "Fast, reliable installs")
        .item(PackageManager::Pnpm, "pnpm", "Disk-efficient installs")
        .interact()?;
    Ok(selected)
}

fn confirm_flag(args: &WizardArgs, enabled: bool, question: &str) -> Result<bool> {
    // An explicit --no-* flag wins; --yes keeps the default without asking
    if !enabled || args.yes {
        return Ok(enabled);
    }
    Ok(cliclack::confirm(question).initial_value(true).interact()?)
}

fn print_summary(config: &ProjectConfig) -> Result<()> {
    let enabled: Vec<&str> = Feature::SELECTABLE
        .iter()
        .filter(|f| f.is_enabled(&config.features))
        .map(|f| f.label())
        .collect();
    let feature_list = if enabled.is_empty() {
        "none".to_string()
    } else {
        enabled.join(", ")
    };

    cliclack::log::info(format!(
        "Creating {} ({} template) with {} in {}",
        config.name,
        config.template.name,
        config.package_manager,
        config.target_dir.display()
    ))?;
    cliclack::log::info(format!("Features: {}", feature_list))?;
    if let Some(profile) = config.features.test_profile {
        cliclack::log::info(format!("Test profile: {}", profile.config().name))?;
    }
    Ok(())
}

async fn create_with_progress(
    config: &ProjectConfig,
    registry: &Registry,
) -> Result<Vec<String>> {
    let steps = scaffold::plan_steps(config);
    let spinner: RefCell<Option<cliclack::ProgressBar>> = RefCell::new(None);

    let warnings = scaffold::create_project(config, registry, &DiskFs, |index, status| {
        let label = steps
            .get(index)
            .map(|step| step.label())
            .unwrap_or("Working");
        match status {
            StepStatus::InProgress => {
                let bar = cliclack::spinner();
                bar.start(label);
                *spinner.borrow_mut() = Some(bar);
            }
            StepStatus::Complete => {
                if let Some(bar) = spinner.borrow_mut().take() {
                    bar.stop(label);
                }
            }
            StepStatus::Error => {
                if let Some(bar) = spinner.borrow_mut().take() {
                    bar.error(label);
                }
            }
            StepStatus::Pending => {}
        }
    })
    .await?;

    Ok(warnings)
}

fn print_next_steps(config: &ProjectConfig) -> Result<()> {
    let mut steps = vec![format!("cd {}", config.name)];
    if !config.install_deps {
        steps.push(config.package_manager.install_command().to_string());
    }
    steps.push(config.package_manager.run_script("dev"));

    println!();
    println!("  {}", "Next steps".bold());
    println!();
    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step.as_str().cyan());
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
