use crate::command::GoCommand;
use crate::error::ProcessError;
use starbase_styles::color;
use std::process::{Command, Output, Stdio};
use system_env::create_process_command;
use tracing::trace;

/// Executes toolchain commands on behalf of a plugin.
pub trait CommandRunner {
    /// Run the command, streaming its output to the console.
    fn run(&self, command: &GoCommand) -> Result<(), ProcessError>;

    /// Run the command and capture its standard output.
    fn run_output(&self, command: &GoCommand) -> Result<String, ProcessError>;
}

/// Runs commands as child processes of the current process.
#[derive(Debug, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    fn create_command(&self, command: &GoCommand) -> Command {
        let mut cmd = create_process_command(&command.bin, &command.args);
        cmd.current_dir(&command.cwd);
        cmd.envs(&command.env);
        cmd
    }

    fn exec(&self, command: &GoCommand, mut cmd: Command) -> Result<Output, ProcessError> {
        let command_line = command.get_command_line();

        trace!(
            cwd = ?command.cwd,
            env = ?command.env,
            "Running command {}",
            color::shell(&command_line)
        );

        let output = cmd
            .spawn()
            .and_then(|child| child.wait_with_output())
            .map_err(|error| ProcessError::FailedCommand {
                command: command_line.clone(),
                error: Box::new(error),
            })?;

        let code = output.status.code().unwrap_or(-1);

        trace!(code, "Ran command {}", color::shell(&command_line));

        if !output.status.success() {
            return Err(ProcessError::FailedCommandNonZeroExit {
                command: command_line,
                code,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }

        Ok(output)
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, command: &GoCommand) -> Result<(), ProcessError> {
        let mut cmd = self.create_command(command);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        self.exec(command, cmd)?;

        Ok(())
    }

    fn run_output(&self, command: &GoCommand) -> Result<String, ProcessError> {
        let mut cmd = self.create_command(command);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let output = self.exec(command, cmd)?;

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}
