use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::Command;

/// Return an absolute path to the provided program by checking `PATH`.
/// On Windows the `.exe` extension is appended when missing.
pub fn find_command_on_path<T: AsRef<OsStr>>(name: T) -> Option<PathBuf> {
    let system_path = env::var_os("PATH")?;
    let mut file_name = name.as_ref().to_os_string();

    if cfg!(windows) && PathBuf::from(&file_name).extension().is_none() {
        file_name.push(".exe");
    }

    env::split_paths(&system_path)
        .map(|dir| dir.join(&file_name))
        .find(|path| path.is_file())
}

/// Return true if the provided program is available on `PATH`.
pub fn is_command_on_path<T: AsRef<OsStr>>(name: T) -> bool {
    find_command_on_path(name).is_some()
}

/// Create a new process [`Command`] and append the provided arguments. If the
/// program is a bare name, it's resolved against `PATH` with [`find_command_on_path`],
/// falling back to the bare name so the OS reports the missing program.
pub fn create_process_command<T, I, A>(bin: T, args: I) -> Command
where
    T: AsRef<OsStr>,
    I: IntoIterator<Item = A>,
    A: AsRef<OsStr>,
{
    let bin = bin.as_ref();
    let is_path = bin
        .as_encoded_bytes()
        .iter()
        .any(|b| *b == b'/' || *b == b'\\');

    let bin_path = if is_path {
        PathBuf::from(bin)
    } else {
        find_command_on_path(bin).unwrap_or_else(|| bin.into())
    };

    let mut command = Command::new(bin_path);
    command.args(args);
    command
}

/// Format a program and its arguments as a single shell-quoted line,
/// suitable for logs and error messages.
pub fn join_command_line<T, I, A>(bin: T, args: I) -> String
where
    T: AsRef<str>,
    I: IntoIterator<Item = A>,
    A: AsRef<str>,
{
    let mut line = vec![bin.as_ref().to_owned()];
    line.extend(args.into_iter().map(|arg| arg.as_ref().to_owned()));

    shell_words::join(line)
}
