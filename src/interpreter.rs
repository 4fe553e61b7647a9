use crate::command::{Builtins, ExitCode};
use crate::env::Environment;
use crate::external::ExternalCommand;
use crate::input::LineSource;
use std::io::Write;
use tracing::{debug, trace, warn};

/// Text shown before every line is read.
pub const PROMPT: &str = "$ ";

/// Status the loop ends with when a line cannot be read.
const READ_FAILURE_STATUS: ExitCode = 1;

/// Split a command line into a command name and its arguments.
///
/// Surrounding whitespace is trimmed, then the line is split on every single
/// space. There is no quoting, so consecutive spaces produce empty arguments.
/// The result always holds at least one element (`""` for an empty line).
pub fn tokenize(line: &str) -> Vec<&str> {
    line.trim().split(' ').collect()
}

/// A minimal shell-like interpreter that can execute built-in and external commands.
///
/// The interpreter owns an [`Environment`] and a read-only [`Builtins`] table.
/// Names found in the table run in-process; anything else is launched as a child
/// process. See [`Default`] for the builtins included out of the box.
///
/// Example
/// ```
/// use tinysh::Interpreter;
/// let mut sh = Interpreter::default();
/// let mut out = Vec::new();
/// sh.run("echo", &["hello", "world"], &mut out);
/// assert_eq!(out, b"hello world\n");
/// ```
pub struct Interpreter {
    env: Environment,
    builtins: Builtins,
}

impl Interpreter {
    /// Create a new interpreter with a custom environment and builtin table.
    pub fn new(env: Environment, builtins: Builtins) -> Self {
        Self { env, builtins }
    }

    /// The environment commands run with.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Status requested by `exit`, if any.
    pub fn exit_status(&self) -> Option<ExitCode> {
        self.env.exit_status
    }

    /// Run a single command invocation by name with arguments.
    ///
    /// Builtins write to `stdout`. External programs write straight to the
    /// process's standard output and error; `stdout` is flushed first so the
    /// streams stay in order, and it receives the `command not found` message
    /// if the program cannot be launched.
    pub fn run(&mut self, name: &str, args: &[&str], stdout: &mut dyn Write) {
        if let Some(builtin) = self.builtins.get(name) {
            debug!(name, ?args, "running builtin");
            match builtin.execute(args, stdout, &mut self.env) {
                Ok(code) => debug!(name, code, "builtin finished"),
                Err(e) => warn!(name, error = %e, "builtin failed"),
            }
            return;
        }

        debug!(name, ?args, "running external command");
        if let Err(e) = stdout.flush() {
            warn!(error = %e, "cannot flush stdout");
        }
        if let Err(e) = ExternalCommand::new(name, args).execute(&self.env) {
            debug!(name, error = %e, "cannot launch external command");
            if let Err(e) = writeln!(stdout, "{name}: command not found") {
                warn!(error = %e, "cannot write to stdout");
            }
        }
    }

    /// Tokenize one command line and dispatch it.
    pub fn execute_line(&mut self, line: &str, stdout: &mut dyn Write) {
        let tokens = tokenize(line);
        trace!(?tokens, "tokenized");
        let (name, args) = match tokens.split_first() {
            Some((name, args)) => (*name, args),
            None => ("", &[][..]),
        };
        self.run(name, args, stdout);
    }

    /// Read-Dispatch-Execute loop.
    ///
    /// Prompts, reads a line from `input` and dispatches it, until either `exit`
    /// requests a status or reading fails. A read failure is reported on `stdout`
    /// and ends the loop with status 1. Returns the status the process should
    /// terminate with.
    pub fn repl(&mut self, input: &mut dyn LineSource, stdout: &mut dyn Write) -> ExitCode {
        loop {
            let line = match input.read_line(PROMPT, stdout) {
                Ok(line) => line,
                Err(e) => {
                    debug!(error = %e, "read failed");
                    let _ = writeln!(stdout, "Error during reading command occurred!  {e}");
                    let _ = stdout.flush();
                    return READ_FAILURE_STATUS;
                }
            };

            self.execute_line(&line, stdout);

            if let Some(code) = self.env.exit_status {
                debug!(code, "exit requested");
                let _ = stdout.flush();
                return code;
            }
        }
    }
}

impl Default for Interpreter {
    /// Create an interpreter over the current process environment with the
    /// standard builtins: `cd`, `echo`, `exit`, `pwd` and `type`.
    fn default() -> Self {
        Self::new(Environment::new(), Builtins::default())
    }
}
