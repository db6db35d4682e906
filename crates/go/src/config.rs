use crate::error::GoPluginError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

pub const DEFAULT_GO_CHANNEL: &str = "latest/stable";

fn default_go_channel() -> String {
    DEFAULT_GO_CHANNEL.into()
}

/// Options a part declares to build with the Go plugin.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GoPluginOptions {
    /// Local source of the part, relative to the project.
    pub source: Option<String>,

    /// Remote packages to fetch and build, instead of local sources.
    pub go_packages: Vec<String>,

    /// Import path the local sources are placed under in `GOPATH`.
    pub go_importpath: String,

    pub go_buildtags: Vec<String>,

    /// Channel of the pinned toolchain. When empty, the system
    /// toolchain package is installed instead.
    #[serde(default = "default_go_channel")]
    pub go_channel: String,
}

impl Default for GoPluginOptions {
    fn default() -> Self {
        Self {
            source: None,
            go_packages: vec![],
            go_importpath: String::new(),
            go_buildtags: vec![],
            go_channel: default_go_channel(),
        }
    }
}

impl GoPluginOptions {
    pub fn has_local_source(&self) -> bool {
        self.source.as_deref().is_some_and(|source| !source.is_empty())
    }

    /// Name of the local package within `GOPATH/src`: the import path
    /// override when set, otherwise the final component of the source
    /// once resolved against the project directory (so `.` names the
    /// project itself).
    pub fn get_local_package(&self, project_dir: &Path) -> Option<String> {
        if !self.go_importpath.is_empty() {
            return Some(self.go_importpath.clone());
        }

        let source = self.source.as_deref().filter(|source| !source.is_empty())?;
        let resolved = normalize_path(&project_dir.join(source));

        resolved
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
    }

    /// Joined `-tags` argument, if any build tags are configured.
    pub fn get_tags_arg(&self) -> Option<String> {
        if self.go_buildtags.is_empty() {
            None
        } else {
            Some(format!("-tags={}", self.go_buildtags.join(",")))
        }
    }

    /// Validate the options the same way the schema does, for
    /// callers that construct options without going through it.
    pub fn validate(&self, part: &str) -> Result<(), GoPluginError> {
        let invalid = |message: String| GoPluginError::InvalidOptions {
            part: part.to_owned(),
            message,
        };

        if self.source.is_none() && self.go_packages.is_empty() {
            return Err(invalid(
                "either source or go-packages must be provided".into(),
            ));
        }

        for (key, items) in [
            ("go-packages", &self.go_packages),
            ("go-buildtags", &self.go_buildtags),
        ] {
            let mut seen = BTreeSet::new();

            for item in items {
                if item.is_empty() {
                    return Err(invalid(format!("{key} cannot contain empty values")));
                }

                if !seen.insert(item) {
                    return Err(invalid(format!("{key} contains duplicate value {item}")));
                }
            }
        }

        Ok(())
    }
}

/// Lexically resolve `.` and `..` components, without touching the filesystem.
fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }

    normalized
}
