//! Sources of command lines for the interpreter loop.

use anyhow::{Result, bail};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{BufRead, Write};

/// Something the interpreter can pull one command line at a time from.
pub trait LineSource {
    /// Show `prompt` and block until a full line is available.
    ///
    /// The returned line has its terminating newline removed. End of input is
    /// an error, as is a final line that is not newline-terminated. Invalid
    /// UTF-8 is replaced, not rejected.
    fn read_line(&mut self, prompt: &str, stdout: &mut dyn Write) -> Result<String>;
}

/// Line source backed by any buffered reader, e.g. piped standard input.
///
/// The prompt is written to the interpreter's stdout and flushed before reading.
pub struct Piped<R> {
    reader: R,
}

impl<R: BufRead> Piped<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for Piped<R> {
    fn read_line(&mut self, prompt: &str, stdout: &mut dyn Write) -> Result<String> {
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut line = Vec::new();
        let n = self.reader.read_until(b'\n', &mut line)?;
        if n == 0 {
            bail!("end of input");
        }
        // Bytes that are not valid UTF-8 become U+FFFD rather than failing the read.
        match line.strip_suffix(b"\n") {
            Some(stripped) => Ok(String::from_utf8_lossy(stripped).into_owned()),
            None => bail!("end of input after {:?}", String::from_utf8_lossy(&line)),
        }
    }
}

/// Interactive line source using a [`rustyline`] editor.
///
/// The editor draws the prompt itself; nothing is added to its history.
pub struct Terminal {
    editor: DefaultEditor,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for Terminal {
    fn read_line(&mut self, prompt: &str, _stdout: &mut dyn Write) -> Result<String> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(line),
            Err(ReadlineError::Eof) => bail!("end of input"),
            Err(ReadlineError::Interrupted) => bail!("interrupted"),
            Err(err) => Err(err.into()),
        }
    }
}
