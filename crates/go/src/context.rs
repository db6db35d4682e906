use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use system_env::SystemArch;

pub const DEFAULT_BUILD_BASE: &str = "core18";

/// How strictly the packaged result is isolated from the host.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confinement {
    #[default]
    Strict,
    Devmode,
    /// Binaries may link dynamically against host libraries.
    Classic,
}

/// Linker flags inherited from the invoking process environment.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AmbientFlags {
    pub cgo_ldflags: Option<String>,
    pub ldflags: Option<String>,
}

impl AmbientFlags {
    pub fn from_env() -> Self {
        Self {
            cgo_ldflags: env::var("CGO_LDFLAGS").ok(),
            ldflags: env::var("LDFLAGS").ok(),
        }
    }
}

/// Everything the host packaging tool provides to a part plugin:
/// directories, architectures, confinement, and linker inputs.
#[derive(Clone, Debug)]
pub struct PartContext {
    pub part_name: String,
    pub base: String,
    pub confinement: Confinement,
    pub host_arch: SystemArch,
    pub target_arch: SystemArch,

    pub project_dir: PathBuf, // work dir, where part sources are declared
    pub source_dir: PathBuf,  // parts/<name>/src
    pub build_dir: PathBuf,   // parts/<name>/build
    pub install_dir: PathBuf, // parts/<name>/install
    pub gopath_dir: PathBuf,  // parts/<name>/go
    pub stage_dir: PathBuf,   // stage

    pub library_paths: Vec<PathBuf>,
    pub ambient_flags: AmbientFlags,
}

impl PartContext {
    /// Create a context with the standard layout rooted in the work directory.
    pub fn new(part_name: impl AsRef<str>, work_dir: &Path, host_arch: SystemArch) -> Self {
        let part_name = part_name.as_ref();
        let part_dir = work_dir.join("parts").join(part_name);

        PartContext {
            part_name: part_name.to_owned(),
            base: DEFAULT_BUILD_BASE.into(),
            confinement: Confinement::default(),
            host_arch,
            target_arch: host_arch,
            project_dir: work_dir.to_path_buf(),
            source_dir: part_dir.join("src"),
            build_dir: part_dir.join("build"),
            install_dir: part_dir.join("install"),
            gopath_dir: part_dir.join("go"),
            stage_dir: work_dir.join("stage"),
            library_paths: vec![],
            ambient_flags: AmbientFlags::default(),
        }
    }

    pub fn is_classic(&self) -> bool {
        self.confinement == Confinement::Classic
    }

    pub fn is_cross_compiling(&self) -> bool {
        self.host_arch != self.target_arch
    }

    /// Library directories that currently exist in the install
    /// and stage trees, in linker search order.
    pub fn discover_library_paths(&self) -> Vec<PathBuf> {
        collect_library_paths(
            [self.install_dir.as_path(), self.stage_dir.as_path()],
            self.target_arch.triplet(),
        )
    }
}

/// Collect the `lib` and `usr/lib` directories (and their multiarch
/// subdirectories) that exist under each root, preserving root order.
pub fn collect_library_paths<'a, I>(roots: I, triplet: &str) -> Vec<PathBuf>
where
    I: IntoIterator<Item = &'a Path>,
{
    let mut paths = vec![];

    for root in roots {
        for dir in [
            root.join("lib"),
            root.join("usr").join("lib"),
            root.join("lib").join(triplet),
            root.join("usr").join("lib").join(triplet),
        ] {
            if dir.is_dir() {
                paths.push(dir);
            }
        }
    }

    paths
}
