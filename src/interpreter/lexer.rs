use std::io::BufRead;

use crate::{
    error::{CalcError, CalcResult},
    interpreter::token::Token,
};

/// A line-buffered character source over any buffered reader.
///
/// Characters are handed out one at a time; when the current line is
/// exhausted the next one is read from the reader, blocking on interactive
/// input. One character of lookahead is available through
/// [`CharStream::peek_char`].
pub struct CharStream<R> {
    input:    R,
    line:     String,
    position: usize,
}

impl<R: BufRead> CharStream<R> {
    pub fn new(input: R) -> Self {
        Self { input,
               line: String::new(),
               position: 0 }
    }

    /// Consumes and returns the next character, or `None` at end of input.
    pub fn next_char(&mut self) -> CalcResult<Option<char>> {
        let next = self.peek_char()?;
        if let Some(c) = next {
            self.position += c.len_utf8();
        }
        Ok(next)
    }

    /// Returns the next character without consuming it, or `None` at end of
    /// input.
    pub fn peek_char(&mut self) -> CalcResult<Option<char>> {
        loop {
            if let Some(c) = self.line[self.position..].chars().next() {
                return Ok(Some(c));
            }
            if !self.refill()? {
                return Ok(None);
            }
        }
    }

    fn refill(&mut self) -> CalcResult<bool> {
        self.line.clear();
        self.position = 0;
        Ok(self.input.read_line(&mut self.line)? > 0)
    }
}

/// Produces [`Token`]s from a character stream on demand.
///
/// The stream supports exactly one token of pushback; the grammar never
/// needs more. Statements may span input lines: whitespace, including line
/// breaks, is skipped between tokens.
pub struct TokenStream<R> {
    chars:  CharStream<R>,
    buffer: Option<Token>,
}

impl<R: BufRead> TokenStream<R> {
    pub fn new(input: R) -> Self {
        Self { chars:  CharStream::new(input),
               buffer: None, }
    }

    /// Reads the next token.
    ///
    /// If the pushback buffer is occupied, empties and returns it without
    /// touching the stream. Otherwise skips whitespace and dispatches on the
    /// first character: the single-character set `( ) ; q + - * / % =`
    /// (checked before the identifier branch, so `q` is always the quit
    /// command), numeric literals, identifiers. End of input surfaces as
    /// [`Token::Quit`].
    ///
    /// # Errors
    /// `BadToken` when the character begins no token; `Io` when the reader
    /// fails.
    pub fn next_token(&mut self) -> CalcResult<Token> {
        if let Some(token) = self.buffer.take() {
            return Ok(token);
        }

        let first = loop {
            match self.chars.next_char()? {
                Some(c) if c.is_whitespace() => {},
                Some(c) => break c,
                None => return Ok(Token::Quit),
            }
        };

        if let Some(token) = Token::from_symbol(first) {
            return Ok(token);
        }
        if first.is_ascii_digit() || first == '.' {
            return self.scan_number(first);
        }
        if first.is_ascii_alphabetic() {
            return self.scan_identifier(first);
        }
        Err(CalcError::BadToken { character: first })
    }

    /// Returns a token to the stream so that the next [`Self::next_token`]
    /// call yields it again.
    ///
    /// # Panics
    /// Panics if the one-slot buffer is already occupied. That is a bug in
    /// the calling grammar code, not bad user input, and must not be caught
    /// by per-statement error recovery.
    pub fn put_back(&mut self, token: Token) {
        assert!(self.buffer.is_none(), "put_back() into a full buffer");
        self.buffer = Some(token);
    }

    /// Discards input up to and including `delimiter`.
    ///
    /// If the pushback buffer holds the delimiter token, dropping it is
    /// enough. Otherwise the buffer is discarded unconditionally and raw
    /// characters are consumed until the delimiter or end of input. The
    /// session loop uses this to recover at the next statement boundary
    /// after an error.
    pub fn ignore_until(&mut self, delimiter: char) -> CalcResult<()> {
        if let Some(token) = self.buffer.take() {
            if token.is_symbol(delimiter) {
                return Ok(());
            }
        }
        while let Some(c) = self.chars.next_char()? {
            if c == delimiter {
                break;
            }
        }
        Ok(())
    }

    /// Scans a numeric literal starting with `first`: digits with at most
    /// one decimal point, no exponent, no sign (a leading minus is grammar,
    /// not lexing).
    fn scan_number(&mut self, first: char) -> CalcResult<Token> {
        let mut literal = String::from(first);
        let mut seen_point = first == '.';

        while let Some(c) = self.chars.peek_char()? {
            if c == '.' && !seen_point {
                seen_point = true;
            } else if !c.is_ascii_digit() {
                break;
            }
            literal.push(c);
            self.chars.next_char()?;
        }

        // A lone '.' reaches here and fails to parse.
        literal.parse()
               .map(Token::Number)
               .map_err(|_| CalcError::BadToken { character: first })
    }

    /// Scans an identifier starting with `first`: ASCII alphanumerics and
    /// `_`, leaving the terminating character in the stream.
    fn scan_identifier(&mut self, first: char) -> CalcResult<Token> {
        let mut name = String::from(first);

        while let Some(c) = self.chars.peek_char()? {
            if !c.is_ascii_alphanumeric() && c != '_' {
                break;
            }
            name.push(c);
            self.chars.next_char()?;
        }

        Ok(Token::Identifier(name))
    }
}
