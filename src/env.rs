use crate::command::ExitCode;
use std::collections::HashMap;
use std::env as stdenv;

/// Mutable, per-interpreter view of the process state used by commands.
///
/// The environment contains:
/// - `vars`: environment variables visible to `type` lookups and to spawned children.
/// - `exit_status`: set by `exit`; the loop stops once it holds a value.
///
/// The working directory is not stored here; `cd` and `pwd` use the process
/// working directory directly.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    /// Key-value store of environment variables (e.g., PATH).
    pub vars: HashMap<String, String>,
    /// Status the interpreter should terminate with, once requested.
    pub exit_status: Option<ExitCode>,
}

impl Environment {
    /// Capture the current process variables into a new `Environment`.
    pub fn new() -> Self {
        Self::with_vars(stdenv::vars())
    }

    /// Build an environment from an explicit set of variables.
    pub fn with_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            exit_status: None,
        }
    }

    /// Get the value of an environment variable from the snapshot.
    pub fn get_var(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Set or override an environment variable in `self.vars`.
    pub fn set_var(&mut self, key: impl Into<String>, val: impl Into<String>) {
        self.vars.insert(key.into(), val.into());
    }

    /// Ask the interpreter loop to stop with `code`.
    pub fn request_exit(&mut self, code: ExitCode) {
        self.exit_status = Some(code);
    }
}
