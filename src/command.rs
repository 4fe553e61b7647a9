use crate::env::Environment;
use anyhow::Result;
use std::collections::HashMap;
use std::io::Write;

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
pub type ExitCode = i32;

/// A command implemented by the interpreter itself rather than by a child process.
///
/// All builtins share one object-safe signature so the registry can hold them
/// uniformly: arguments in, text on `stdout` and side effects on `env` out.
pub trait BuiltinCommand {
    /// Canonical name the command is invoked by, e.g. "echo" or "cd".
    fn name(&self) -> &'static str;

    /// Executes the command.
    ///
    /// User-facing problems (bad arguments, missing directories) are reported as
    /// text on `stdout`; an `Err` means the output stream itself failed.
    fn execute(
        &self,
        args: &[&str],
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode>;
}

/// Fixed table of builtins, keyed by name.
///
/// Built once when an interpreter is created and read-only afterwards.
pub struct Builtins {
    commands: HashMap<&'static str, Box<dyn BuiltinCommand>>,
}

impl Builtins {
    /// Create a registry from a custom set of commands.
    ///
    /// When two commands share a name the later one wins.
    pub fn new(commands: Vec<Box<dyn BuiltinCommand>>) -> Self {
        Self {
            commands: commands.into_iter().map(|c| (c.name(), c)).collect(),
        }
    }

    /// Look up a builtin by name.
    pub fn get(&self, name: &str) -> Option<&dyn BuiltinCommand> {
        self.commands.get(name).map(Box::as_ref)
    }

    /// Whether `name` is a registered builtin.
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Names of all registered builtins, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for Builtins {
    /// The standard set: `cd`, `echo`, `exit`, `pwd` and `type`.
    fn default() -> Self {
        use crate::builtin::*;
        let mut commands: Vec<Box<dyn BuiltinCommand>> =
            vec![Box::new(Echo), Box::new(Exit), Box::new(Pwd), Box::new(Cd)];
        let mut names: Vec<&'static str> = commands.iter().map(|c| c.name()).collect();
        names.push(Type::NAME);
        commands.push(Box::new(Type::new(names)));
        Self::new(commands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Hello;

    impl BuiltinCommand for Hello {
        fn name(&self) -> &'static str {
            "hello"
        }

        fn execute(
            &self,
            _args: &[&str],
            stdout: &mut dyn Write,
            _env: &mut Environment,
        ) -> Result<ExitCode> {
            writeln!(stdout, "hi")?;
            Ok(0)
        }
    }

    #[test]
    fn test_default_registry_names() {
        let builtins = Builtins::default();
        assert_eq!(builtins.names(), vec!["cd", "echo", "exit", "pwd", "type"]);
        assert!(builtins.contains("type"));
        assert!(!builtins.contains("ls"));
    }

    #[test]
    fn test_custom_registry_dispatches() {
        let builtins = Builtins::new(vec![Box::new(Hello)]);
        let mut out = Vec::new();
        let cmd = builtins.get("hello").expect("registered");
        let code = cmd.execute(&[], &mut out, &mut Environment::default()).unwrap();

        assert_eq!(code, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "hi\n");
        assert!(builtins.get("echo").is_none());
    }
}
