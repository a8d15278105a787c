use std::io::BufRead;

use crate::{
    error::{CalcError, CalcResult},
    interpreter::{env::Environment, lexer::TokenStream, token::Token},
};

/// Evaluates one full expression.
///
/// This is the entry point for expression evaluation and the
/// loosest-binding grammar level. It handles the left-associative additive
/// operators, plus modulo, whose right-hand side is a single primary.
/// A zero modulo divisor is a hard error, unlike division (see [`term`]).
///
/// The rule is: `expression := term (("+" | "-") term | "%" primary)*`
///
/// On any other token the loop pushes it back and returns, leaving the
/// stream positioned at the first unconsumed token (typically `;` or `q`).
///
/// # Parameters
/// - `tokens`: Token stream providing one token of lookahead.
/// - `env`: Variable environment consulted and mutated by the expression.
///
/// # Returns
/// The value of the expression.
pub fn expression<R: BufRead>(tokens: &mut TokenStream<R>,
                              env: &mut Environment)
                              -> CalcResult<f64> {
    let mut left = term(tokens, env)?;
    loop {
        match tokens.next_token()? {
            Token::Plus => left += term(tokens, env)?,
            Token::Minus => left -= term(tokens, env)?,
            Token::Percent => {
                let divisor = primary(tokens, env)?;
                if divisor == 0.0 {
                    return Err(CalcError::ModuloByZero);
                }
                left %= divisor;
            },
            token => {
                tokens.put_back(token);
                return Ok(left);
            },
        }
    }
}

/// Evaluates a term: the multiplicative grammar level.
///
/// Handles the left-associative operators `*` and `/`. A zero divisor is
/// not an error: a diagnostic is written to stderr and the term's value
/// becomes positive infinity, immediately, without consuming further
/// tokens. Evaluation of the session continues.
///
/// The rule is: `term := primary (("*" | "/") primary)*`
fn term<R: BufRead>(tokens: &mut TokenStream<R>, env: &mut Environment) -> CalcResult<f64> {
    let mut left = primary(tokens, env)?;
    loop {
        match tokens.next_token()? {
            Token::Star => left *= primary(tokens, env)?,
            Token::Slash => {
                let divisor = primary(tokens, env)?;
                if divisor == 0.0 {
                    eprintln!("Error: Division by zero.");
                    return Ok(f64::INFINITY);
                }
                left /= divisor;
            },
            token => {
                tokens.put_back(token);
                return Ok(left);
            },
        }
    }
}

/// Evaluates a primary: the tightest-binding grammar level.
///
/// - A number evaluates to its value.
/// - An identifier looks one token ahead: `=` makes it an assignment whose
///   right-hand side is a full [`expression`] (so `x = 2 + 3` assigns 5);
///   anything else is pushed back and the identifier is resolved in the
///   environment.
/// - `-` negates a recursive primary, so unary minus binds tighter than
///   `*`: `-2 * 3` is `(-2) * 3`.
/// - `(` evaluates a full expression and requires the matching `)`.
fn primary<R: BufRead>(tokens: &mut TokenStream<R>, env: &mut Environment) -> CalcResult<f64> {
    match tokens.next_token()? {
        Token::Number(value) => Ok(value),
        Token::Identifier(name) => {
            let next = tokens.next_token()?;
            if next == Token::Assign {
                let value = expression(tokens, env)?;
                Ok(env.assign(name, value))
            } else {
                tokens.put_back(next);
                env.lookup(&name)
            }
        },
        Token::Minus => Ok(-primary(tokens, env)?),
        Token::LParen => {
            let value = expression(tokens, env)?;
            match tokens.next_token()? {
                Token::RParen => Ok(value),
                _ => Err(CalcError::UnmatchedParenthesis),
            }
        },
        token => Err(CalcError::PrimaryExpected { found: token.to_string() }),
    }
}
