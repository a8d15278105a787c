//! # reckon
//!
//! reckon is an interactive arithmetic expression evaluator written in Rust.
//! It reads statements such as `rate = 2 + 3 * 4;` from a continuous input
//! stream, evaluates them against a grammar with the four basic operators,
//! modulo, parentheses, unary negation, named variables and assignment, and
//! prints one result per statement until the quit command `q` is read.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::CalcResult,
    interpreter::{env::Environment, eval::expression, lexer::TokenStream, token::Token},
};

/// Provides the unified error type for lexing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing or
/// evaluating statements. Every statement-local failure carries enough
/// information to produce the user-facing message printed by the session
/// loop; I/O failures are wrapped so that they can be told apart from bad
/// input.
///
/// # Responsibilities
/// - Defines the error enum covering all failure modes (lexer, evaluator,
///   I/O).
/// - Renders user-facing messages for each failure.
/// - Provides the `CalcResult` alias used throughout the crate.
pub mod error;
/// Orchestrates the entire process of reading and evaluating statements.
///
/// This module ties together the token representation, the streaming lexer,
/// the variable environment, the expression evaluator and the session loop to
/// provide a complete calculator runtime.
///
/// # Responsibilities
/// - Coordinates all core components: tokens, lexer, environment, evaluator
///   and session.
/// - Provides the entry points for evaluating statements from any input
///   stream.
/// - Manages the flow of values and errors between phases.
pub mod interpreter;

/// Evaluates every statement in `source` and returns their values.
///
/// Statements are separated by `;` and evaluation stops at the quit command
/// `q` or at the end of the input, whichever comes first. Each statement's
/// value is collected in order. The first error aborts evaluation and is
/// returned; use [`interpreter::session::Session`] instead when per-statement
/// error recovery is wanted.
///
/// # Errors
/// Returns an error if any statement fails to lex or evaluate.
///
/// # Examples
/// ```
/// use reckon::evaluate_script;
///
/// let results = evaluate_script("x = 5; x + 2;").unwrap();
/// assert_eq!(results, vec![5.0, 7.0]);
///
/// // 'savings' has never been assigned, so the reference fails.
/// assert!(evaluate_script("savings * 2;").is_err());
/// ```
pub fn evaluate_script(source: &str) -> CalcResult<Vec<f64>> {
    let mut tokens = TokenStream::new(source.as_bytes());
    let mut env = Environment::new();
    let mut results = Vec::new();

    loop {
        let mut token = tokens.next_token()?;
        while token == Token::Semicolon {
            token = tokens.next_token()?;
        }
        if token == Token::Quit {
            return Ok(results);
        }
        tokens.put_back(token);
        results.push(expression(&mut tokens, &mut env)?);
    }
}
