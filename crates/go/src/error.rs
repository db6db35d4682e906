use crate::version::GoVersion;
use miette::Diagnostic;
use starbase_styles::color;
use starbase_utils::fs::FsError;
use std::io;
use std::path::PathBuf;
use system_env::SystemArch;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum ProcessError {
    #[diagnostic(code(partkit::process::command_failed))]
    #[error("Failed to execute command {}.", color::shell(.command))]
    FailedCommand {
        command: String,
        #[source]
        error: Box<io::Error>,
    },

    #[diagnostic(code(partkit::process::command_failed))]
    #[error(
        "Command {} returned a {code} exit code.\n{}",
        color::shell(.command),
        color::muted_light(.stderr),
    )]
    FailedCommandNonZeroExit {
        command: String,
        code: i32,
        stderr: String,
    },
}

#[derive(Error, Debug, Diagnostic)]
pub enum GoPluginError {
    #[error(transparent)]
    Fs(#[from] Box<FsError>),

    #[diagnostic(transparent)]
    #[error(transparent)]
    Process(#[from] ProcessError),

    #[diagnostic(code(partkit::go::invalid_options))]
    #[error("Invalid Go options for part {}: {message}", color::id(.part))]
    InvalidOptions { part: String, message: String },

    #[diagnostic(code(partkit::go::link_source_failed))]
    #[error("Failed to link local sources into {}.", color::path(.path))]
    LinkSource {
        path: PathBuf,
        #[source]
        error: Box<io::Error>,
    },

    #[diagnostic(
        code(partkit::go::module_version_too_old),
        help("Select a newer toolchain with go-channel, or remove go.mod to build in GOPATH mode.")
    )]
    #[error(
        "Building with Go modules requires Go {} or newer, but found {} instead.",
        color::hash(.required.to_string()),
        color::hash(.detected.to_string()),
    )]
    ModuleVersionTooOld {
        detected: GoVersion,
        required: GoVersion,
    },

    #[diagnostic(code(partkit::go::unparseable_version))]
    #[error(
        "Unable to determine the Go toolchain version from the output of {}: {}",
        color::shell("go version"),
        color::muted_light(.output),
    )]
    UnparseableVersion { output: String },

    #[diagnostic(code(partkit::go::unsupported_arch))]
    #[error(
        "Cross compiling Go for the {} architecture is not supported.",
        color::id(.arch.to_string()),
    )]
    UnsupportedArch { arch: SystemArch },

    #[diagnostic(
        code(partkit::go::unsupported_base),
        help("Set go-channel to install a pinned Go toolchain instead.")
    )]
    #[error(
        "The system Go toolchain cannot be installed for part {} on base {}.",
        color::id(.part),
        color::id(.base),
    )]
    UnsupportedBase { part: String, base: String },
}

impl From<FsError> for GoPluginError {
    fn from(e: FsError) -> GoPluginError {
        GoPluginError::Fs(Box::new(e))
    }
}
