use crate::command::GoCommand;
use crate::config::GoPluginOptions;
use crate::context::PartContext;
use crate::env::{GoEnvironment, create_build_environment};
use crate::error::GoPluginError;
use crate::mode::BuildMode;
use crate::runner::CommandRunner;
use crate::version::{GoVersion, MINIMUM_MODULES_VERSION};
use starbase_styles::color;
use starbase_utils::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Package providing the toolchain when no channel is pinned.
pub const SYSTEM_GO_PACKAGE: &str = "golang-go";

/// Bases whose archives carry a toolchain new enough for the plugin.
pub const SYSTEM_GO_BASES: [&str; 3] = ["core", "core16", "core18"];

/// Lifecycle steps the host packaging tool drives for each part.
pub trait PartPlugin {
    type Error;

    /// Packages to install on the build host before pulling.
    fn get_build_packages(&self) -> &[String];

    /// Snaps to install on the build host before pulling.
    fn get_build_snaps(&self) -> &[String];

    fn pull(&self, runner: &dyn CommandRunner) -> Result<(), Self::Error>;

    fn build(&self, runner: &dyn CommandRunner) -> Result<(), Self::Error>;

    /// Remove everything pulled for the part.
    fn clean_pull(&self) -> Result<(), Self::Error>;

    /// Remove build outputs, keeping pulled sources.
    fn clean_build(&self) -> Result<(), Self::Error>;
}

#[derive(Debug)]
pub struct GoPlugin {
    pub context: PartContext,
    pub options: GoPluginOptions,

    pub gopath_dir: PathBuf,
    pub gopath_bin_dir: PathBuf,
    pub gopath_pkg_dir: PathBuf,
    pub gopath_src_dir: PathBuf,
    pub install_bin_dir: PathBuf,

    build_packages: Vec<String>,
    build_snaps: Vec<String>,
}

impl GoPlugin {
    pub fn new(context: PartContext, options: GoPluginOptions) -> Result<Self, GoPluginError> {
        let mut build_packages = vec![];
        let mut build_snaps = vec![];

        if !options.go_channel.is_empty() {
            build_snaps.push(format!("go/{}", options.go_channel));
        } else if SYSTEM_GO_BASES.contains(&context.base.as_str()) {
            build_packages.push(SYSTEM_GO_PACKAGE.to_owned());
        } else {
            return Err(GoPluginError::UnsupportedBase {
                part: context.part_name.clone(),
                base: context.base.clone(),
            });
        }

        let gopath_dir = context.gopath_dir.clone();

        Ok(GoPlugin {
            gopath_bin_dir: gopath_dir.join("bin"),
            gopath_pkg_dir: gopath_dir.join("pkg"),
            gopath_src_dir: gopath_dir.join("src"),
            gopath_dir,
            install_bin_dir: context.install_dir.join("bin"),
            context,
            options,
            build_packages,
            build_snaps,
        })
    }

    pub fn create_environment(&self) -> Result<GoEnvironment, GoPluginError> {
        create_build_environment(&self.context)
    }

    /// Detect the build mode for the directory, and when modules are in use,
    /// verify the toolchain is new enough before anything else is run.
    pub fn detect_build_mode(
        &self,
        dir: &Path,
        runner: &dyn CommandRunner,
        env: &GoEnvironment,
    ) -> Result<BuildMode, GoPluginError> {
        let mode = BuildMode::detect(dir);

        debug!(dir = ?dir, mode = %mode, "Detected Go build mode");

        if mode == BuildMode::Modules {
            let output = runner.run_output(&GoCommand::version(dir, env))?;
            let version = GoVersion::parse_output(&output)?;

            if !version.supports_modules() {
                return Err(GoPluginError::ModuleVersionTooOld {
                    detected: version,
                    required: MINIMUM_MODULES_VERSION,
                });
            }

            debug!(version = %version, "Go toolchain supports modules");
        }

        Ok(mode)
    }

    pub fn plan_module_pull(&self, env: &GoEnvironment) -> Vec<GoCommand> {
        vec![GoCommand::mod_download(&self.context.source_dir, env)]
    }

    /// Fetch commands for GOPATH mode. The local package is only fetched when
    /// its sources have been linked into `GOPATH/src`.
    pub fn plan_gopath_pull(
        &self,
        local_package: Option<&str>,
        env: &GoEnvironment,
    ) -> Vec<GoCommand> {
        let mut commands = vec![];

        if let Some(package) = local_package {
            commands.push(GoCommand::get(
                &format!("./{package}/..."),
                &self.gopath_src_dir,
                env,
            ));
        }

        for package in &self.options.go_packages {
            commands.push(GoCommand::get(package, &self.gopath_src_dir, env));
        }

        commands
    }

    pub fn plan_module_build(&self, env: &GoEnvironment) -> Vec<GoCommand> {
        let tags = self.options.get_tags_arg();

        self.with_relink(vec![GoCommand::build_into(
            &self.install_bin_dir,
            tags.as_deref(),
            &self.context.build_dir,
            env,
        )])
    }

    pub fn plan_gopath_build(&self, targets: &[String], env: &GoEnvironment) -> Vec<GoCommand> {
        let tags = self.options.get_tags_arg();

        self.with_relink(
            targets
                .iter()
                .map(|target| {
                    GoCommand::build(target, tags.as_deref(), &self.install_bin_dir, env)
                })
                .collect(),
        )
    }

    /// Classic parts are relinked with the system linker, so that the
    /// binaries are dynamic and can have their rpath rewritten later.
    /// Each relink directly follows the build it replaces.
    fn with_relink(&self, commands: Vec<GoCommand>) -> Vec<GoCommand> {
        if !self.context.is_classic() {
            return commands;
        }

        commands
            .into_iter()
            .flat_map(|command| {
                let relink = command.with_external_linking();

                [command, relink]
            })
            .collect()
    }

    /// Import paths of executable (`main`) packages beneath the local package.
    pub fn list_main_packages(
        &self,
        package: &str,
        runner: &dyn CommandRunner,
        env: &GoEnvironment,
    ) -> Result<Vec<String>, GoPluginError> {
        let output = runner.run_output(&GoCommand::list(
            &format!("./{package}/..."),
            &self.gopath_src_dir,
            env,
        ))?;

        Ok(filter_main_packages(&output))
    }

    /// Name of the local package, if the part has local sources. A source
    /// that resolves to no name at all (the filesystem root) is rejected.
    pub fn get_local_package(&self) -> Result<Option<String>, GoPluginError> {
        match self.options.get_local_package(&self.context.project_dir) {
            Some(package) => Ok(Some(package)),
            None if self.options.has_local_source() => Err(GoPluginError::InvalidOptions {
                part: self.context.part_name.clone(),
                message: format!(
                    "unable to derive a package name from source {}",
                    self.options.source.as_deref().unwrap_or_default()
                ),
            }),
            None => Ok(None),
        }
    }

    fn get_local_package_path(&self, package: &str) -> PathBuf {
        self.gopath_src_dir.join(package)
    }

    fn has_source_files(&self) -> Result<bool, GoPluginError> {
        let dir = &self.context.source_dir;

        if !self.options.has_local_source() || !dir.is_dir() {
            return Ok(false);
        }

        Ok(!fs::read_dir(dir)?.is_empty())
    }

    /// Link the pulled sources into `GOPATH/src/<package>`, replacing a previous link.
    fn link_local_source(&self, package: &str) -> Result<(), GoPluginError> {
        let link = self.get_local_package_path(package);

        if is_symlink(&link) {
            std::fs::remove_file(&link).map_err(|error| GoPluginError::LinkSource {
                path: link.clone(),
                error: Box::new(error),
            })?;
        } else if link.exists() {
            fs::remove_dir_all(&link)?;
        }

        if let Some(parent) = link.parent() {
            fs::create_dir_all(parent)?;
        }

        debug!(
            "Linking local sources {} into {}",
            color::path(&self.context.source_dir),
            color::path(&link)
        );

        create_symlink(&self.context.source_dir, &link)?;

        Ok(())
    }

    /// Replace the link to the pulled sources with a copy of the build directory,
    /// so the toolchain compiles the prepared tree.
    fn copy_build_into_gopath(&self, package: &str) -> Result<(), GoPluginError> {
        let link = self.get_local_package_path(package);

        if !is_symlink(&link) {
            return Ok(());
        }

        std::fs::remove_file(&link).map_err(|error| GoPluginError::LinkSource {
            path: link.clone(),
            error: Box::new(error),
        })?;

        debug!(
            "Copying build directory {} into {}",
            color::path(&self.context.build_dir),
            color::path(&link)
        );

        copy_dir(&self.context.build_dir, &link)
    }

    fn run_all(
        &self,
        commands: Vec<GoCommand>,
        runner: &dyn CommandRunner,
    ) -> Result<(), GoPluginError> {
        for command in commands {
            info!("Running {}", color::shell(command.get_command_line()));

            runner.run(&command)?;
        }

        Ok(())
    }
}

impl PartPlugin for GoPlugin {
    type Error = GoPluginError;

    fn get_build_packages(&self) -> &[String] {
        &self.build_packages
    }

    fn get_build_snaps(&self) -> &[String] {
        &self.build_snaps
    }

    fn pull(&self, runner: &dyn CommandRunner) -> Result<(), GoPluginError> {
        fs::create_dir_all(&self.gopath_src_dir)?;

        let env = self.create_environment()?;

        let commands = match self.detect_build_mode(&self.context.source_dir, runner, &env)? {
            BuildMode::Modules => self.plan_module_pull(&env),
            BuildMode::GoPath => {
                let mut local_package = None;

                if self.has_source_files()? {
                    if let Some(package) = self.get_local_package()? {
                        self.link_local_source(&package)?;
                        local_package = Some(package);
                    }
                }

                self.plan_gopath_pull(local_package.as_deref(), &env)
            }
        };

        self.run_all(commands, runner)
    }

    fn build(&self, runner: &dyn CommandRunner) -> Result<(), GoPluginError> {
        fs::create_dir_all(&self.gopath_src_dir)?;

        let env = self.create_environment()?;

        let commands = match self.detect_build_mode(&self.context.build_dir, runner, &env)? {
            BuildMode::Modules => self.plan_module_build(&env),
            BuildMode::GoPath => {
                let targets = if !self.options.go_packages.is_empty() {
                    self.options.go_packages.clone()
                } else if let Some(package) = self.get_local_package()? {
                    self.copy_build_into_gopath(&package)?;
                    self.list_main_packages(&package, runner, &env)?
                } else {
                    vec![]
                };

                fs::create_dir_all(&self.install_bin_dir)?;

                self.plan_gopath_build(&targets, &env)
            }
        };

        self.run_all(commands, runner)
    }

    fn clean_pull(&self) -> Result<(), GoPluginError> {
        debug!("Removing GOPATH {}", color::path(&self.gopath_dir));

        fs::remove_dir_all(&self.gopath_dir)?;

        Ok(())
    }

    fn clean_build(&self) -> Result<(), GoPluginError> {
        for dir in [&self.gopath_bin_dir, &self.gopath_pkg_dir] {
            debug!("Removing build output {}", color::path(dir));

            fs::remove_dir_all(dir)?;
        }

        Ok(())
    }
}

/// Select import paths from `go list` output whose package name is `main`.
pub fn filter_main_packages(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| {
            let mut parts = line.split_whitespace();

            match (parts.next(), parts.next()) {
                (Some(import_path), Some("main")) => Some(import_path.to_owned()),
                _ => None,
            }
        })
        .collect()
}

fn is_symlink(path: &Path) -> bool {
    path.symlink_metadata()
        .is_ok_and(|meta| meta.file_type().is_symlink())
}

fn create_symlink(target: &Path, link: &Path) -> Result<(), GoPluginError> {
    let map_error = |error: io::Error| GoPluginError::LinkSource {
        path: link.to_path_buf(),
        error: Box::new(error),
    };

    #[cfg(unix)]
    std::os::unix::fs::symlink(target, link).map_err(map_error)?;

    #[cfg(windows)]
    {
        let resolved = link.parent().map(|dir| dir.join(target));

        if resolved.is_some_and(|path| path.is_dir()) {
            std::os::windows::fs::symlink_dir(target, link).map_err(map_error)?;
        } else {
            std::os::windows::fs::symlink_file(target, link).map_err(map_error)?;
        }
    }

    Ok(())
}

/// Recursively copy a directory. Symlinks are recreated as links
/// pointing at the same target, and are never followed.
fn copy_dir(from: &Path, to: &Path) -> Result<(), GoPluginError> {
    fs::create_dir_all(to)?;

    if !from.is_dir() {
        return Ok(());
    }

    for entry in fs::read_dir(from)? {
        let path = entry.path();
        let target = to.join(entry.file_name());

        if is_symlink(&path) {
            let link_target = std::fs::read_link(&path).map_err(|error| {
                GoPluginError::LinkSource {
                    path: path.clone(),
                    error: Box::new(error),
                }
            })?;

            create_symlink(&link_target, &target)?;
        } else if path.is_dir() {
            copy_dir(&path, &target)?;
        } else {
            fs::copy_file(&path, &target)?;
        }
    }

    Ok(())
}
