use thiserror::Error;

/// Result type used throughout the crate.
///
/// All lexing and evaluation functions return either a value of type `T` or a
/// [`CalcError`] describing the failure.
pub type CalcResult<T> = Result<T, CalcError>;

/// Represents all errors that can occur while lexing or evaluating
/// statements.
///
/// Every variant except [`CalcError::Io`] is statement-local: the session
/// loop reports it and resynchronizes to the next `;`. I/O failures end the
/// session instead.
#[derive(Error, Debug)]
pub enum CalcError {
    /// Read a character that does not begin any token.
    #[error("Bad token: '{character}'.")]
    BadToken {
        /// The offending character.
        character: char,
    },
    /// The token at a primary position matches none of the valid starts
    /// (number, identifier, `-`, `(`).
    #[error("Primary expected, found '{found}'.")]
    PrimaryExpected {
        /// The token that was found instead.
        found: String,
    },
    /// A `(` was opened without a matching `)`.
    #[error("')' expected.")]
    UnmatchedParenthesis,
    /// Referenced an identifier with no prior assignment that is not a
    /// pre-seeded constant.
    #[error("Undefined variable: {name}.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// The right-hand side of `%` evaluated to zero.
    #[error("Modulo by zero.")]
    ModuloByZero,
    /// The underlying reader or writer failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
