use crate::context::{AmbientFlags, PartContext};
use crate::error::GoPluginError;
use std::collections::BTreeMap;
use std::path::PathBuf;
use system_env::SystemArch;
use tracing::debug;

/// Variables set on every toolchain invocation, on top of the inherited
/// process environment.
pub type GoEnvironment = BTreeMap<String, String>;

// https://go.dev/doc/install/source#environment
static GO_ARCHS: &[(SystemArch, &str)] = &[
    (SystemArch::Amd64, "amd64"),
    (SystemArch::I386, "386"),
    (SystemArch::Armhf, "arm"),
    (SystemArch::Arm64, "arm64"),
    (SystemArch::Ppc64el, "ppc64le"),
    (SystemArch::S390x, "s390x"),
    (SystemArch::Riscv64, "riscv64"),
];

/// Map a packaging architecture to its `GOARCH` name.
pub fn get_go_arch(arch: SystemArch) -> Result<&'static str, GoPluginError> {
    GO_ARCHS
        .iter()
        .find(|(system, _)| *system == arch)
        .map(|(_, go_arch)| *go_arch)
        .ok_or(GoPluginError::UnsupportedArch { arch })
}

/// Combine the inherited `CGO_LDFLAGS`, a `-L` flag per library path,
/// and the inherited `LDFLAGS`, skipping empty segments.
pub fn get_cgo_ldflags(ambient: &AmbientFlags, library_paths: &[PathBuf]) -> String {
    let mut flags = vec![];

    if let Some(cgo_ldflags) = ambient.cgo_ldflags.as_deref().map(str::trim) {
        if !cgo_ldflags.is_empty() {
            flags.push(cgo_ldflags.to_owned());
        }
    }

    for path in library_paths {
        flags.push(format!("-L{}", path.display()));
    }

    if let Some(ldflags) = ambient.ldflags.as_deref().map(str::trim) {
        if !ldflags.is_empty() {
            flags.push(ldflags.to_owned());
        }
    }

    flags.join(" ")
}

/// Create the environment for every toolchain invocation of a part.
pub fn create_build_environment(context: &PartContext) -> Result<GoEnvironment, GoPluginError> {
    let mut env = GoEnvironment::new();

    env.insert(
        "GOPATH".into(),
        context.gopath_dir.to_string_lossy().to_string(),
    );
    env.insert(
        "GOBIN".into(),
        context.gopath_dir.join("bin").to_string_lossy().to_string(),
    );
    env.insert(
        "CGO_LDFLAGS".into(),
        get_cgo_ldflags(&context.ambient_flags, &context.library_paths),
    );

    if context.is_cross_compiling() {
        let arch = context.target_arch;
        let go_arch = get_go_arch(arch)?;

        debug!(
            host = %context.host_arch,
            target = %arch,
            go_arch,
            "Cross compiling part {}",
            context.part_name,
        );

        env.insert("CC".into(), format!("{}-gcc", arch.triplet()));
        env.insert("CXX".into(), format!("{}-g++", arch.triplet()));
        env.insert("CGO_ENABLED".into(), "1".into());
        env.insert("GOARCH".into(), go_arch.into());

        if arch == SystemArch::Armhf {
            env.insert("GOARM".into(), "7".into());
        }
    }

    Ok(env)
}
