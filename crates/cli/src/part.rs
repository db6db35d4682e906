use partkit_go::{Confinement, DEFAULT_BUILD_BASE, GoPluginOptions};
use serde::Deserialize;
use system_env::SystemArch;

fn default_base() -> String {
    DEFAULT_BUILD_BASE.into()
}

/// A part definition, as loaded from a part file.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PartConfig {
    pub name: String,

    #[serde(default = "default_base")]
    pub base: String,

    #[serde(default)]
    pub confinement: Confinement,

    /// Architecture to build for. Defaults to the host architecture.
    #[serde(default)]
    pub target_arch: Option<SystemArch>,

    #[serde(flatten)]
    pub options: GoPluginOptions,
}
