use crate::command::{BuiltinCommand, ExitCode};
use crate::env::Environment;
use crate::external::find_in_path;
use crate::path::normalize;
use anyhow::Result;
use directories::BaseDirs;
use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Write the arguments to standard output, separated by single spaces and
/// followed by a newline. Options are not recognized.
pub struct Echo;

impl BuiltinCommand for Echo {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn execute(
        &self,
        args: &[&str],
        stdout: &mut dyn Write,
        _env: &mut Environment,
    ) -> Result<ExitCode> {
        writeln!(stdout, "{}", args.join(" "))?;
        Ok(0)
    }
}

/// Terminate the interpreter.
///
/// `exit` alone exits with 1, `exit N` with `N`. An argument that is not an
/// integer leaves the interpreter running and prints nothing.
pub struct Exit;

impl BuiltinCommand for Exit {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn execute(
        &self,
        args: &[&str],
        _stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        match args.first() {
            None => env.request_exit(1),
            // Wide integers are accepted; the OS keeps only the low bits of the status.
            Some(arg) => match arg.parse::<i64>() {
                Ok(code) => env.request_exit(code as ExitCode),
                Err(e) => {
                    debug!(arg, error = %e, "ignoring non-integer exit status");
                    return Ok(1);
                }
            },
        }
        Ok(0)
    }
}

/// Describe how a name would be interpreted: builtin, path on `PATH`, or not found.
pub struct Type {
    builtins: Vec<&'static str>,
}

impl Type {
    pub const NAME: &'static str = "type";

    /// `builtins` is the full list of names reported as shell builtins.
    pub fn new(builtins: Vec<&'static str>) -> Self {
        Self { builtins }
    }
}

impl BuiltinCommand for Type {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn execute(
        &self,
        args: &[&str],
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        let Some(&name) = args.first() else {
            writeln!(stdout)?;
            return Ok(0);
        };

        if self.builtins.iter().any(|builtin| *builtin == name) {
            writeln!(stdout, "{name} is a shell builtin")?;
            return Ok(0);
        }

        let search_paths = env.get_var("PATH").unwrap_or_default();
        match find_in_path(search_paths, name) {
            Some(path) => {
                writeln!(stdout, "{}", path.display())?;
                Ok(0)
            }
            None => {
                writeln!(stdout, "{name}: not found")?;
                Ok(1)
            }
        }
    }
}

/// Print the current working directory.
///
/// Takes no arguments; when given any it prints a blank line instead.
pub struct Pwd;

impl BuiltinCommand for Pwd {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn execute(
        &self,
        args: &[&str],
        stdout: &mut dyn Write,
        _env: &mut Environment,
    ) -> Result<ExitCode> {
        if !args.is_empty() {
            writeln!(stdout)?;
            return Ok(1);
        }
        match env::current_dir() {
            Ok(dir) => {
                writeln!(stdout, "{}", dir.display())?;
                Ok(0)
            }
            Err(e) => {
                debug!(error = %e, "cannot read working directory");
                Ok(1)
            }
        }
    }
}

/// Change the current working directory.
///
/// Accepts exactly one argument: `~`, an absolute path, or a path relative to
/// the current directory.
pub struct Cd;

impl Cd {
    /// Work out the directory `target` refers to, without touching the filesystem.
    ///
    /// Returns `None` only when `target` is `~` and the home directory is unknown.
    fn resolve(target: &str) -> Option<PathBuf> {
        if target == "~" {
            return BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
        }
        let target = Path::new(target);
        if target.is_absolute() {
            return Some(target.to_path_buf());
        }
        let joined = match env::current_dir() {
            Ok(cwd) => cwd.join(target),
            Err(_) => target.to_path_buf(),
        };
        Some(normalize(&joined))
    }
}

impl BuiltinCommand for Cd {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(
        &self,
        args: &[&str],
        stdout: &mut dyn Write,
        _env: &mut Environment,
    ) -> Result<ExitCode> {
        let [target] = args else {
            writeln!(stdout, "Usage: cd <directory>")?;
            return Ok(2);
        };

        let Some(dir) = Self::resolve(target) else {
            writeln!(stdout, "cd: could not find home directory")?;
            return Ok(1);
        };

        if let Err(e) = env::set_current_dir(&dir) {
            debug!(dir = %dir.display(), error = %e, "chdir failed");
            writeln!(stdout, "cd: {target}: No such file or directory")?;
            return Ok(1);
        }
        Ok(0)
    }
}
