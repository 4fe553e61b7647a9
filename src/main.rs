use argh::FromArgs;
use std::io::{self, IsTerminal};
use tinysh::Interpreter;
use tinysh::input::{LineSource, Piped, Terminal};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(FromArgs)]
/// A tiny interactive command interpreter.
struct Args {
    #[argh(option)]
    /// tracing filter for diagnostics on stderr, e.g. "tinysh=debug". Overrides RUST_LOG.
    log: Option<String>,
}

fn main() {
    let args: Args = argh::from_env();

    let filter = match args.log {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let stdin = io::stdin();
    let mut input: Box<dyn LineSource> = if stdin.is_terminal() {
        match Terminal::new() {
            Ok(terminal) => Box::new(terminal),
            Err(e) => {
                tracing::warn!(error = %e, "line editor unavailable, reading plain stdin");
                Box::new(Piped::new(stdin.lock()))
            }
        }
    } else {
        Box::new(Piped::new(stdin.lock()))
    };

    let code = Interpreter::default().repl(input.as_mut(), &mut io::stdout());
    std::process::exit(code);
}
