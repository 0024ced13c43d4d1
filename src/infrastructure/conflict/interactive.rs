//! Interactive Conflict Prompt
//!
//! Asks the user about each conflict over a line-oriented reader/writer pair
//! (stdin/stderr in the binary).

use std::io::{self, BufRead, Write};

use crate::domain::ports::{ConflictContext, ConflictPrompt, PromptAnswer};

/// Line-based conflict prompt.
///
/// Unrecognized answers resolve to overwrite. End of input is an error so a
/// closed stdin never decides on the user's behalf.
pub struct InteractivePrompt<R, W> {
    input: R,
    output: W,
}

impl InteractivePrompt<io::StdinLock<'static>, io::Stderr> {
    /// Prompt on the process's stdin/stderr.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> InteractivePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> ConflictPrompt for InteractivePrompt<R, W> {
    fn ask(&mut self, context: &ConflictContext<'_>) -> io::Result<PromptAnswer> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "Conflict ({}/{}): {} was {}",
            context.position, context.total, context.conflict.logical_path, context.conflict.reason
        )?;
        write!(self.output, "{}? ", PromptAnswer::HINT)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        Ok(PromptAnswer::parse(&line))
    }
}
