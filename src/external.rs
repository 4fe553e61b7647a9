use crate::command::ExitCode;
use crate::env::Environment;
use crate::path::join_clean;
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use tracing::debug;

/// A command that is not a builtin, launched as a child process.
pub(crate) struct ExternalCommand<'a> {
    name: &'a str,
    args: &'a [&'a str],
}

impl<'a> ExternalCommand<'a> {
    pub(crate) fn new(name: &'a str, args: &'a [&'a str]) -> Self {
        Self { name, args }
    }

    /// Spawn the program and block until it exits.
    ///
    /// The OS resolves `name` against the `PATH` in `env`. Standard output and
    /// error are inherited unchanged; standard input is the null device. Any
    /// error from spawning or waiting is returned; a non-zero exit is not an error.
    pub(crate) fn execute(&self, env: &Environment) -> Result<ExitCode> {
        let status = Command::new(self.name)
            .args(self.args)
            .env_clear()
            .envs(&env.vars)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;
        let code = match status.code() {
            Some(x) => x,
            None => terminated_by_signal(status),
        };
        debug!(name = self.name, code, "child exited");
        Ok(code)
    }
}

#[cfg(unix)]
fn terminated_by_signal(exit_status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    if let Some(signal) = ExitStatusExt::signal(&exit_status) {
        128 + signal
    } else if ExitStatusExt::core_dumped(&exit_status) {
        255
    } else {
        -1
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_exit_status: ExitStatus) -> i32 {
    -1
}

/// Find the first `PATH` entry under which `name` exists.
///
/// Directories in `search_paths` are separated by `:` and tried in order; an
/// empty entry stands for the current directory. Only existence is checked,
/// so directories and non-executable files match too.
pub(crate) fn find_in_path(search_paths: &str, name: &str) -> Option<PathBuf> {
    search_paths
        .split(':')
        .map(|dir| join_clean(Path::new(dir), name))
        .find(|candidate| candidate.exists())
}
