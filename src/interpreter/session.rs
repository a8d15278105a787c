use std::io::{BufRead, Write};

use crate::{
    error::{CalcError, CalcResult},
    interpreter::{env::Environment, eval::expression, lexer::TokenStream, token::Token},
};

/// Printed before each statement in interactive sessions.
const PROMPT: &str = "> ";
/// Printed before each result.
const RESULT: &str = "= ";
/// The statement terminator, also the resynchronization point after errors.
const STATEMENT_END: char = ';';

/// Drives the evaluator in a read-evaluate-print loop.
///
/// A session couples a token stream over some input, a fresh variable
/// environment and an output sink. Statement-local errors are reported on
/// stderr and the input is resynchronized to the next `;`; the session
/// itself only ends at the quit command, at end of input, or on an I/O
/// failure.
pub struct Session<R, W> {
    tokens:      TokenStream<R>,
    env:         Environment,
    output:      W,
    interactive: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading statements from `input` and printing
    /// results to `output`. When `interactive` is set, a prompt is printed
    /// before each statement.
    pub fn new(input: R, output: W, interactive: bool) -> Self {
        Self { tokens: TokenStream::new(input),
               env: Environment::new(),
               output,
               interactive }
    }

    /// Runs the loop until the quit command or end of input.
    ///
    /// # Errors
    /// Returns an error only for I/O failures on the input or output;
    /// malformed statements are reported and recovered from.
    pub fn run(&mut self) -> CalcResult<()> {
        loop {
            self.prompt()?;
            match self.statement() {
                Ok(Some(value)) => writeln!(self.output, "{RESULT}{value}")?,
                Ok(None) => return Ok(()),
                Err(error @ CalcError::Io(_)) => return Err(error),
                Err(error) => {
                    eprintln!("{error}");
                    self.tokens.ignore_until(STATEMENT_END)?;
                },
            }
        }
    }

    /// Evaluates one statement. Runs of `;` before the statement are
    /// consumed silently; `None` means the quit command was read.
    fn statement(&mut self) -> CalcResult<Option<f64>> {
        let mut token = self.tokens.next_token()?;
        while token == Token::Semicolon {
            token = self.tokens.next_token()?;
        }
        if token == Token::Quit {
            return Ok(None);
        }
        self.tokens.put_back(token);
        expression(&mut self.tokens, &mut self.env).map(Some)
    }

    fn prompt(&mut self) -> CalcResult<()> {
        if self.interactive {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;
        }
        Ok(())
    }
}
