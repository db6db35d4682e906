use crate::error::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env::consts;
use std::fmt;
use std::str::FromStr;

/// Architecture of a build host or part target. Variants use packaging
/// (Debian) names, while kernel and Rust names are accepted as aliases.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemArch {
    #[serde(alias = "x86_64")]
    Amd64,
    #[serde(alias = "x86", alias = "i686")]
    I386,
    #[serde(alias = "arm", alias = "armv7l")]
    Armhf,
    #[serde(alias = "aarch64")]
    Arm64,
    // `consts::ARCH` reports big-endian hosts as `powerpc64` too
    #[serde(alias = "ppc64le")]
    #[cfg_attr(target_endian = "little", serde(alias = "powerpc64"))]
    Ppc64el,
    Powerpc,
    S390x,
    Riscv64,
}

impl SystemArch {
    /// Return an instance derived from [`std::env::consts::ARCH`].
    pub fn from_env() -> Result<SystemArch, Error> {
        consts::ARCH.parse()
    }

    /// Return the GNU multiarch triplet, used for prefixing cross compilers
    /// and locating architecture specific library directories.
    pub fn triplet(&self) -> &'static str {
        match self {
            Self::Amd64 => "x86_64-linux-gnu",
            Self::I386 => "i386-linux-gnu",
            Self::Armhf => "arm-linux-gnueabihf",
            Self::Arm64 => "aarch64-linux-gnu",
            Self::Ppc64el => "powerpc64le-linux-gnu",
            Self::Powerpc => "powerpc-linux-gnu",
            Self::S390x => "s390x-linux-gnu",
            Self::Riscv64 => "riscv64-linux-gnu",
        }
    }
}

impl FromStr for SystemArch {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        serde_json::from_value(Value::String(value.to_lowercase()))
            .map_err(|_| Error::UnknownArch(value.to_owned()))
    }
}

impl fmt::Display for SystemArch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}
