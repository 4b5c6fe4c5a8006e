//! Project assembly: the end-to-end pipeline from a resolved
//! [`ProjectConfig`] to files on disk.
//!
//! Steps run strictly sequentially: creating-directory, copying-files,
//! generating-config, then optionally initializing-git and
//! installing-deps. The first failing step aborts the rest; files already
//! written stay on disk (documented limitation, no rollback). Git
//! initialization is best-effort and only ever downgrades to a warning; a
//! failed dependency install is a pipeline error.

mod configs;
mod fs;
mod sources;

pub use configs::{gitignore, index_html, readme, tsconfigs, vite_config};
pub use fs::{DiskFs, Fs, MemoryFs};
pub use sources::{source_files, VITE_SVG};

use std::collections::HashMap;
use std::path::Path;
use std::process::Stdio;

use crate::deps::{self, Resolved};
use crate::engine::Engine;
use crate::error::ScaffoldError;
use crate::features::PackageManager;
use crate::manifest;
use crate::plugins::{GeneratedFile, PluginContext, Registry};
use crate::project::ProjectConfig;

/// Status of one pipeline step, reported through the progress callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    InProgress,
    Complete,
    Error,
}

/// The pipeline steps, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    CreatingDirectory,
    CopyingFiles,
    GeneratingConfig,
    InitializingGit,
    InstallingDeps,
}

impl Step {
    pub fn label(&self) -> &'static str {
        match self {
            Step::CreatingDirectory => "Creating project directory",
            Step::CopyingFiles => "Writing source files",
            Step::GeneratingConfig => "Generating configuration",
            Step::InitializingGit => "Initializing git repository",
            Step::InstallingDeps => "Installing dependencies",
        }
    }
}

/// The steps a given configuration will run; the two trailing steps are
/// present only when their flag is set
pub fn plan_steps(config: &ProjectConfig) -> Vec<Step> {
    let mut steps = vec![
        Step::CreatingDirectory,
        Step::CopyingFiles,
        Step::GeneratingConfig,
    ];
    if config.init_git {
        steps.push(Step::InitializingGit);
    }
    if config.install_deps {
        steps.push(Step::InstallingDeps);
    }
    steps
}

/// Collision-checked set of output files. Two producers writing the same
/// path is a configuration defect and is rejected outright, never resolved
/// by overwriting.
#[derive(Default)]
pub struct FileSet {
    files: Vec<GeneratedFile>,
    owners: HashMap<String, String>,
}

impl FileSet {
    pub fn push(&mut self, owner: &str, file: GeneratedFile) -> Result<(), ScaffoldError> {
        if let Some(first) = self.owners.get(&file.path) {
            return Err(ScaffoldError::PathCollision {
                path: file.path,
                first: first.clone(),
                second: owner.to_string(),
            });
        }
        self.owners.insert(file.path.clone(), owner.to_string());
        self.files.push(file);
        Ok(())
    }

    pub fn files(&self) -> &[GeneratedFile] {
        &self.files
    }
}

/// Build the complete in-memory configuration file set: manifest, entry
/// point, build and TypeScript configs, every active plugin's files, and
/// the always-on ignore file and README
pub fn build_config_files(
    config: &ProjectConfig,
    registry: &Registry,
    ctx: &PluginContext,
    resolved: &Resolved,
) -> Result<FileSet, ScaffoldError> {
    let mut set = FileSet::default();

    let package_json = manifest::generate_package_json(config, resolved);
    set.push(
        "core",
        GeneratedFile::new("package.json", package_json.to_pretty_json()),
    )?;
    set.push(
        "core",
        GeneratedFile::new("index.html", configs::index_html(&config.name)),
    )?;
    set.push(
        "core",
        GeneratedFile::new("vite.config.ts", configs::vite_config(&config.features)),
    )?;
    for (path, content) in configs::tsconfigs() {
        set.push("core", GeneratedFile::new(path, content))?;
    }

    for plugin in registry.active(&config.features) {
        for file in plugin.files(ctx)? {
            set.push(plugin.id(), file)?;
        }
    }

    set.push("core", GeneratedFile::new(".gitignore", configs::gitignore()))?;
    set.push(
        "core",
        GeneratedFile::new("README.md", configs::readme(config, &resolved.scripts)),
    )?;

    Ok(set)
}

/// Run the full pipeline. The callback receives `(step_index, status)` on
/// every transition; indices follow [`plan_steps`]. Returns the collected
/// warnings on success.
pub async fn create_project(
    config: &ProjectConfig,
    registry: &Registry,
    fs: &dyn Fs,
    mut on_progress: impl FnMut(usize, StepStatus),
) -> Result<Vec<String>, ScaffoldError> {
    let mut warnings = Vec::new();
    let mut current = 0usize;

    match run_pipeline(config, registry, fs, &mut current, &mut on_progress, &mut warnings).await {
        Ok(()) => Ok(warnings),
        Err(err) => {
            on_progress(current, StepStatus::Error);
            Err(err)
        }
    }
}

async fn run_pipeline(
    config: &ProjectConfig,
    registry: &Registry,
    fs: &dyn Fs,
    current: &mut usize,
    on_progress: &mut impl FnMut(usize, StepStatus),
    warnings: &mut Vec<String>,
) -> Result<(), ScaffoldError> {
    // Step: creating-directory. An existing target, empty or not, is a
    // precondition violation; nothing has been written at this point.
    on_progress(*current, StepStatus::InProgress);
    if fs.exists(&config.target_dir) {
        return Err(ScaffoldError::DirectoryExists(config.target_dir.clone()));
    }
    fs.create_dir_all(&config.target_dir)?;
    on_progress(*current, StepStatus::Complete);
    *current += 1;

    // Step: copying-files
    on_progress(*current, StepStatus::InProgress);
    write_files(fs, &config.target_dir, &sources::source_files(&config.features))?;
    on_progress(*current, StepStatus::Complete);
    *current += 1;

    // Step: generating-config. The full file set is built in memory and
    // collision-checked before the first write.
    on_progress(*current, StepStatus::InProgress);
    let setup_commands = {
        let engine = Engine::discover();
        let ctx = PluginContext {
            config,
            engine: &engine,
        };
        let resolved = deps::resolve(registry, &ctx)?;
        warnings.extend(resolved.warnings.iter().cloned());

        let file_set = build_config_files(config, registry, &ctx, &resolved)?;
        write_files(fs, &config.target_dir, file_set.files())?;

        registry
            .active(&config.features)
            .iter()
            .flat_map(|plugin| plugin.setup_commands(&ctx))
            .collect::<Vec<String>>()
    };
    on_progress(*current, StepStatus::Complete);
    *current += 1;

    // Step: initializing-git (best-effort)
    if config.init_git {
        on_progress(*current, StepStatus::InProgress);
        if let Err(err) = initialize_git(&config.target_dir).await {
            warnings.push(format!("Git initialization failed: {}", err));
        }
        on_progress(*current, StepStatus::Complete);
        *current += 1;
    }

    // Step: installing-deps (failure is a pipeline error)
    if config.install_deps {
        on_progress(*current, StepStatus::InProgress);
        install_dependencies(config).await?;
        for command in &setup_commands {
            if let Err(err) = run_shell_words(command, &config.target_dir).await {
                warnings.push(format!("Setup command '{}' failed: {}", command, err));
            }
        }
        on_progress(*current, StepStatus::Complete);
    }

    Ok(())
}

fn write_files(fs: &dyn Fs, root: &Path, files: &[GeneratedFile]) -> Result<(), ScaffoldError> {
    for file in files {
        let dest = root.join(&file.path);
        if let Some(parent) = dest.parent() {
            if !fs.exists(parent) {
                fs.create_dir_all(parent)?;
            }
        }
        fs.write(&dest, &file.content)?;
    }
    Ok(())
}

async fn initialize_git(dir: &Path) -> std::io::Result<()> {
    run_quiet("git", &["init"], dir).await?;
    run_quiet("git", &["add", "."], dir).await?;
    run_quiet("git", &["commit", "-m", "Initial commit"], dir).await?;
    Ok(())
}

async fn install_dependencies(config: &ProjectConfig) -> Result<(), ScaffoldError> {
    let pm = config.package_manager;
    let mut command = tokio::process::Command::new(pm.command());
    if !matches!(pm, PackageManager::Yarn) {
        command.arg("install");
    }
    let status = command
        .current_dir(&config.target_dir)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await?;

    if !status.success() {
        return Err(ScaffoldError::InstallFailed {
            command: pm.install_command().to_string(),
            code: status.code().unwrap_or(-1),
        });
    }
    Ok(())
}

async fn run_quiet(program: &str, args: &[&str], cwd: &Path) -> std::io::Result<()> {
    let status = tokio::process::Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await?;

    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other(format!(
            "{} {} exited with status {}",
            program,
            args.join(" "),
            status.code().unwrap_or(-1)
        )))
    }
}

async fn run_shell_words(command: &str, cwd: &Path) -> std::io::Result<()> {
    let mut parts = command.split_whitespace();
    let Some(program) = parts.next() else {
        return Ok(());
    };
    let args: Vec<&str> = parts.collect();
    run_quiet(program, &args, cwd).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureFlags;

    #[test]
    fn test_plan_steps_reflects_flags() {
        let mut config = ProjectConfig::for_features("demo", FeatureFlags::default());
        config.init_git = false;
        config.install_deps = false;
        assert_eq!(
            plan_steps(&config),
            vec![Step::CreatingDirectory, Step::CopyingFiles, Step::GeneratingConfig]
        );

        config.init_git = true;
        config.install_deps = true;
        assert_eq!(plan_steps(&config).len(), 5);
        assert_eq!(plan_steps(&config)[3], Step::InitializingGit);
        assert_eq!(plan_steps(&config)[4], Step::InstallingDeps);
    }

    #[test]
    fn test_file_set_rejects_path_collision() {
        let mut set = FileSet::default();
        set.push("core", GeneratedFile::new("a.txt", "1")).unwrap();
        let err = set
            .push("pluginX", GeneratedFile::new("a.txt", "2"))
            .unwrap_err();
        match err {
            ScaffoldError::PathCollision { path, first, second } => {
                assert_eq!(path, "a.txt");
                assert_eq!(first, "core");
                assert_eq!(second, "pluginX");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_step_labels() {
        assert_eq!(Step::CreatingDirectory.label(), "Creating project directory");
        assert_eq!(Step::InstallingDeps.label(), "Installing dependencies");
    }
}
