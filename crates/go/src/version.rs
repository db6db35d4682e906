use crate::error::GoPluginError;
use once_cell::sync::Lazy;
use regex::Regex;
use semver::Version;
use std::fmt;

static GO_VERSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u:\b)go([0-9]+)(?:\.([0-9]+))?(?:\.([0-9]+))?").unwrap()
});

/// Oldest toolchain that can build with Go modules.
pub const MINIMUM_MODULES_VERSION: GoVersion = GoVersion::new(1, 13, 0);

/// A Go toolchain version, as reported by `go version`. Only the numeric
/// triple is kept, so release candidates compare equal to their release.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct GoVersion(Version);

impl GoVersion {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self(Version::new(major, minor, patch))
    }

    /// Extract the version from `go version` output, for example
    /// `go version go1.21.4 linux/amd64`. Missing minor and patch
    /// numbers default to 0.
    pub fn parse_output<T: AsRef<str>>(output: T) -> Result<Self, GoPluginError> {
        let output = output.as_ref();
        let unparseable = || GoPluginError::UnparseableVersion {
            output: output.trim().to_owned(),
        };

        let caps = GO_VERSION.captures(output).ok_or_else(unparseable)?;
        let mut parts = [0u64; 3];

        for (index, part) in parts.iter_mut().enumerate() {
            if let Some(value) = caps.get(index + 1) {
                *part = value.as_str().parse().map_err(|_| unparseable())?;
            }
        }

        Ok(Self::new(parts[0], parts[1], parts[2]))
    }

    pub fn major(&self) -> u64 {
        self.0.major
    }

    pub fn minor(&self) -> u64 {
        self.0.minor
    }

    pub fn patch(&self) -> u64 {
        self.0.patch
    }

    pub fn supports_modules(&self) -> bool {
        *self >= MINIMUM_MODULES_VERSION
    }
}

impl fmt::Display for GoVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
