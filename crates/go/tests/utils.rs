#![allow(dead_code)]

use partkit_go::*;
use starbase_sandbox::Sandbox;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::Path;
use system_env::SystemArch;

/// Records commands instead of running them. Captured commands
/// return queued outputs in order, or an empty string.
#[derive(Default)]
pub struct RecordingRunner {
    pub runs: RefCell<Vec<GoCommand>>,
    pub captures: RefCell<Vec<GoCommand>>,
    pub outputs: RefCell<VecDeque<String>>,
}

impl RecordingRunner {
    pub fn with_output(output: &str) -> Self {
        let runner = Self::default();
        runner.push_output(output);
        runner
    }

    pub fn push_output(&self, output: &str) {
        self.outputs.borrow_mut().push_back(output.to_owned());
    }

    pub fn reset(&self) {
        self.runs.borrow_mut().clear();
        self.captures.borrow_mut().clear();
    }

    pub fn run_argvs(&self) -> Vec<Vec<String>> {
        self.runs.borrow().iter().map(to_argv).collect()
    }

    pub fn capture_argvs(&self) -> Vec<Vec<String>> {
        self.captures.borrow().iter().map(to_argv).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &GoCommand) -> Result<(), ProcessError> {
        self.runs.borrow_mut().push(command.clone());

        Ok(())
    }

    fn run_output(&self, command: &GoCommand) -> Result<String, ProcessError> {
        self.captures.borrow_mut().push(command.clone());

        Ok(self.outputs.borrow_mut().pop_front().unwrap_or_default())
    }
}

/// Fails every command with a non-zero exit code.
pub struct FailingRunner;

impl CommandRunner for FailingRunner {
    fn run(&self, command: &GoCommand) -> Result<(), ProcessError> {
        Err(ProcessError::FailedCommandNonZeroExit {
            command: command.get_command_line(),
            code: 1,
            stderr: "boom".into(),
        })
    }

    fn run_output(&self, command: &GoCommand) -> Result<String, ProcessError> {
        self.run(command).map(|_| String::new())
    }
}

pub fn to_argv(command: &GoCommand) -> Vec<String> {
    command.get_argv().into_iter().map(String::from).collect()
}

pub fn argv(args: &[&str]) -> Vec<String> {
    args.iter().map(|arg| arg.to_string()).collect()
}

pub fn create_context(sandbox: &Sandbox) -> PartContext {
    PartContext::new("test-part", sandbox.path(), SystemArch::Amd64)
}

pub fn create_options(source: Option<&str>, packages: &[&str]) -> GoPluginOptions {
    GoPluginOptions {
        source: source.map(String::from),
        go_packages: packages.iter().map(|p| p.to_string()).collect(),
        ..GoPluginOptions::default()
    }
}

pub fn create_plugin(sandbox: &Sandbox, options: GoPluginOptions) -> GoPlugin {
    GoPlugin::new(create_context(sandbox), options).unwrap()
}

pub fn touch(path: &Path) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, "").unwrap();
}

pub fn assert_go_paths(plugin: &GoPlugin) {
    assert!(plugin.gopath_dir.is_dir());
    assert!(plugin.gopath_src_dir.is_dir());
}

/// Package name of local sources declared as the project directory itself.
pub fn project_package(sandbox: &Sandbox) -> String {
    sandbox
        .path()
        .file_name()
        .unwrap()
        .to_string_lossy()
        .to_string()
}
