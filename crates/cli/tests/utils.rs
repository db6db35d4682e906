#![allow(dead_code)]

use starbase_sandbox::{Sandbox, assert_cmd};
use std::path::Path;

pub fn create_partkit_command<T: AsRef<Path>>(path: T) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("partkit").unwrap();
    cmd.current_dir(path);
    cmd.timeout(std::time::Duration::from_secs(60));
    cmd.env("NO_COLOR", "1");
    cmd.env("PARTKIT_LOG", "trace");
    cmd.env_remove("CGO_LDFLAGS");
    cmd.env_remove("LDFLAGS");
    cmd
}

pub fn create_part_file(sandbox: &Sandbox, content: &str) {
    sandbox.create_file("part.toml", content);
}
