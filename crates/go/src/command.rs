use crate::env::GoEnvironment;
use std::path::{Path, PathBuf};
use system_env::join_command_line;

pub const GO_BIN: &str = "go";

/// Template for `go list`, producing an "<import path> <package name>" pair per line.
pub const LIST_FORMAT: &str = "{{.ImportPath}} {{.Name}}";

/// A single toolchain invocation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GoCommand {
    pub bin: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub env: GoEnvironment,
}

impl GoCommand {
    pub fn new<I, A>(args: I, cwd: &Path, env: &GoEnvironment) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        GoCommand {
            bin: GO_BIN.into(),
            args: args.into_iter().map(|arg| arg.into()).collect(),
            cwd: cwd.to_path_buf(),
            env: env.to_owned(),
        }
    }

    /// `go version`
    pub fn version(cwd: &Path, env: &GoEnvironment) -> Self {
        Self::new(["version"], cwd, env)
    }

    /// `go mod download`
    pub fn mod_download(cwd: &Path, env: &GoEnvironment) -> Self {
        Self::new(["mod", "download"], cwd, env)
    }

    /// `go get -t -d <target>`, fetching without building, including test dependencies.
    pub fn get(target: &str, cwd: &Path, env: &GoEnvironment) -> Self {
        Self::new(["get", "-t", "-d", target], cwd, env)
    }

    /// `go list -f <format> <pattern>`
    pub fn list(pattern: &str, cwd: &Path, env: &GoEnvironment) -> Self {
        Self::new(["list", "-f", LIST_FORMAT, pattern], cwd, env)
    }

    /// `go build [-tags=..] <target>`, writing the binary into the working directory.
    pub fn build(target: &str, tags: Option<&str>, cwd: &Path, env: &GoEnvironment) -> Self {
        let mut args = vec!["build".to_owned()];
        args.extend(tags.map(String::from));
        args.push(target.to_owned());

        Self::new(args, cwd, env)
    }

    /// `go build [-tags=..] -o <out_dir>`, for module builds.
    pub fn build_into(
        out_dir: &Path,
        tags: Option<&str>,
        cwd: &Path,
        env: &GoEnvironment,
    ) -> Self {
        let mut args = vec!["build".to_owned()];
        args.extend(tags.map(String::from));
        args.push("-o".into());
        args.push(out_dir.to_string_lossy().to_string());

        Self::new(args, cwd, env)
    }

    /// Copy of a build command that forces the external (system) linker,
    /// producing a dynamically linked binary at the same location.
    pub fn with_external_linking(&self) -> Self {
        let mut command = self.clone();
        let at = command.args.len().min(1);

        command.args.insert(at, "-linkmode=external".into());
        command.args.insert(at, "-ldflags".into());
        command
    }

    /// Full argument vector, including the program.
    pub fn get_argv(&self) -> Vec<&str> {
        let mut argv = vec![self.bin.as_str()];
        argv.extend(self.args.iter().map(String::as_str));
        argv
    }

    pub fn get_command_line(&self) -> String {
        join_command_line(&self.bin, &self.args)
    }
}
