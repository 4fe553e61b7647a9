//! A tiny interactive command interpreter.
//!
//! Reads one line at a time, splits it on spaces and either runs one of the
//! built-in commands (`echo`, `exit`, `type`, `pwd`, `cd`) in-process or
//! launches the named program as a child process.
//!
//! The main entry point is [`Interpreter`]. Line sources live in [`input`];
//! [`command`] exposes the builtin trait and registry so custom builtins can be
//! plugged in.

mod builtin;
pub mod command;
pub mod env;
mod external;
pub mod input;
mod interpreter;
mod path;

/// Re-export of the read-dispatch-execute loop controller.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::{Interpreter, PROMPT, tokenize};
