/// The token module defines the lexical units of the calculator.
///
/// A token is a minimal but meaningful unit of text produced by the lexer:
/// a numeric literal, an identifier, an operator or punctuation symbol, the
/// statement terminator, the assignment symbol or the quit command.
///
/// # Responsibilities
/// - Defines the `Token` enum with payloads for numbers and identifiers.
/// - Maps single characters to and from their token forms.
/// - Renders tokens for diagnostics.
pub mod token;
/// The lexer module turns an input stream into tokens.
///
/// The lexer reads characters from any buffered reader and produces tokens
/// on demand, one statement at a time, blocking on the reader when the
/// current line is exhausted. It owns the one-slot pushback buffer that the
/// grammar relies on for its single token of lookahead.
///
/// # Responsibilities
/// - Converts the character stream into tokens, skipping whitespace.
/// - Provides exactly one token of pushback.
/// - Resynchronizes the stream to a delimiter after an error.
pub mod lexer;
/// The eval module evaluates expressions as they are parsed.
///
/// Evaluation is single-pass recursive descent: three mutually recursive
/// grammar levels consume tokens, consult and mutate the variable
/// environment, and produce an `f64` directly, with no intermediate tree.
///
/// # Responsibilities
/// - Encodes operator precedence via the grammar levels.
/// - Applies the assignment, negation and grouping rules.
/// - Reports evaluation errors such as modulo by zero.
pub mod eval;
/// The env module stores the session's variable state.
///
/// The environment is a mutable mapping from identifier to value, created
/// once per session, pre-seeded with named constants and mutated only by
/// assignment.
///
/// # Responsibilities
/// - Resolves identifiers to values.
/// - Creates or overwrites bindings on assignment.
pub mod env;
/// The session module drives the read-evaluate-print loop.
///
/// The session couples a token stream, a variable environment and an output
/// sink; it prompts, evaluates one statement at a time, prints results, and
/// recovers at statement boundaries after errors.
///
/// # Responsibilities
/// - Runs the statement loop until quit or end of input.
/// - Reports statement-local errors and resynchronizes the input.
pub mod session;
