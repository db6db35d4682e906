use crate::app::App as CLI;
use crate::error::PartkitCliError;
use crate::part::PartConfig;
use miette::IntoDiagnostic;
use partkit_go::{AmbientFlags, GoPlugin, PartContext};
use starbase_styles::color;
use starbase_utils::toml;
use std::env;
use std::path::{self, PathBuf};
use system_env::{SystemArch, is_command_on_path};
use tracing::{debug, warn};

pub struct PartSession {
    pub part_file: PathBuf,
    pub work_dir: PathBuf,
}

impl PartSession {
    pub fn new(cli: &CLI) -> miette::Result<Self> {
        // Sources like `.` are named after this directory
        let work_dir = match &cli.work_dir {
            Some(dir) => path::absolute(dir).into_diagnostic()?,
            None => env::current_dir().into_diagnostic()?,
        };

        Ok(Self {
            part_file: work_dir.join(&cli.part_file),
            work_dir,
        })
    }

    pub fn load_part(&self) -> Result<PartConfig, PartkitCliError> {
        if !self.part_file.exists() {
            return Err(PartkitCliError::MissingPartFile {
                path: self.part_file.clone(),
            });
        }

        debug!("Loading part from {}", color::path(&self.part_file));

        let part: PartConfig = toml::read_file(&self.part_file)?;

        part.options.validate(&part.name)?;

        Ok(part)
    }

    pub fn create_context(&self, part: &PartConfig) -> Result<PartContext, PartkitCliError> {
        let host_arch = SystemArch::from_env()?;
        let mut context = PartContext::new(&part.name, &self.work_dir, host_arch);

        context.base = part.base.clone();
        context.confinement = part.confinement;
        context.target_arch = part.target_arch.unwrap_or(host_arch);
        context.ambient_flags = AmbientFlags::from_env();
        context.library_paths = context.discover_library_paths();

        debug!(
            base = %context.base,
            confinement = ?context.confinement,
            host = %context.host_arch,
            target = %context.target_arch,
            "Created context for part {}",
            color::id(&context.part_name),
        );

        Ok(context)
    }

    pub fn load_plugin(&self) -> Result<GoPlugin, PartkitCliError> {
        let part = self.load_part()?;
        let context = self.create_context(&part)?;

        Ok(GoPlugin::new(context, part.options)?)
    }

    /// Warn when the toolchain is missing, as it's normally provisioned
    /// by the host from the plugin's build packages and snaps.
    pub fn check_toolchain(&self) {
        if !is_command_on_path(partkit_go::GO_BIN) {
            warn!(
                "Unable to find {} on PATH, toolchain commands will fail",
                color::shell(partkit_go::GO_BIN)
            );
        }
    }
}
