use crate::commands::CleanArgs;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

/// Values accepted by `--log`, applied to the partkit crates only.
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "partkit",
    version,
    about,
    long_about = None,
    disable_help_subcommand = true,
    propagate_version = true,
    next_line_help = false
)]
pub struct App {
    #[arg(
        value_enum,
        long,
        global = true,
        env = "PARTKIT_LOG",
        help = "Lowest log level to output"
    )]
    pub log: Option<LogLevel>,

    #[arg(
        long,
        global = true,
        env = "PARTKIT_PART_FILE",
        default_value = "part.toml",
        help = "Path to the part definition"
    )]
    pub part_file: PathBuf,

    #[arg(
        long,
        global = true,
        env = "PARTKIT_WORK_DIR",
        help = "Directory containing the parts and stage trees (defaults to the current directory)"
    )]
    pub work_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    #[command(
        name = "build",
        about = "Build the part.",
        long_about = "Build the part's binaries into its install directory, using modules when a go.mod is present, or GOPATH otherwise."
    )]
    Build,

    #[command(
        name = "clean",
        about = "Remove pulled or built artifacts of the part."
    )]
    Clean(CleanArgs),

    #[command(
        name = "env",
        about = "Display the environment toolchain commands run with."
    )]
    Env,

    #[command(
        name = "pull",
        about = "Fetch the part's dependencies.",
        long_about = "Fetch the part's dependencies into its GOPATH, or the module cache when a go.mod is present."
    )]
    Pull,

    #[command(
        name = "schema",
        about = "Display the JSON schema of the part properties."
    )]
    Schema,
}
