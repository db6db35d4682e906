use std::fmt;
use std::path::Path;

pub const GO_MOD_FILE: &str = "go.mod";

/// How dependencies are fetched and binaries are built for a part.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Sources and dependencies are arranged under a per-part `GOPATH`,
    /// keyed by import path.
    GoPath,

    /// Dependencies are declared in `go.mod` and cached by the toolchain.
    Modules,
}

impl BuildMode {
    /// Pull detects against the source directory, while build detects
    /// against the build directory, as each phase works on its own copy.
    pub fn detect(dir: &Path) -> Self {
        if dir.join(GO_MOD_FILE).is_file() {
            Self::Modules
        } else {
            Self::GoPath
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GoPath => write!(f, "gopath"),
            Self::Modules => write!(f, "modules"),
        }
    }
}
