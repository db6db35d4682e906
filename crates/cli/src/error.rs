use miette::Diagnostic;
use starbase_styles::color;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum PartkitCliError {
    #[diagnostic(
        code(partkit::cli::missing_part_file),
        help("Pass --part-file, or run from a directory containing part.toml.")
    )]
    #[error("No part definition found at {}.", color::path(.path))]
    MissingPartFile { path: PathBuf },

    #[diagnostic(code(partkit::cli::unknown_arch))]
    #[error(transparent)]
    Arch(#[from] system_env::Error),

    #[diagnostic(transparent)]
    #[error(transparent)]
    Plugin(#[from] partkit_go::GoPluginError),

    #[diagnostic(transparent)]
    #[error(transparent)]
    Toml(#[from] starbase_utils::toml::TomlError),
}
