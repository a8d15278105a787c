use std::collections::HashMap;

use crate::error::{CalcError, CalcResult};

/// Stores the session's variable state.
///
/// The environment maps identifiers to values. It is created once per
/// session, pre-seeded with the named constants `pi` and `e`, and mutated
/// only by assignment; entries are never deleted.
///
/// ## Usage
///
/// `Environment` is created once and shared by all grammar levels for the
/// lifetime of a session. A server handling several concurrent sessions must
/// give each one its own environment: assignment is an unguarded
/// read-modify-write.
pub struct Environment {
    variables: HashMap<String, f64>,
}

#[allow(clippy::new_without_default)]
impl Environment {
    /// Creates an environment pre-seeded with `pi = 3.14159` and
    /// `e = 2.71828`.
    #[must_use]
    pub fn new() -> Self {
        let variables = HashMap::from([("pi".to_string(), 3.14159),
                                       ("e".to_string(), 2.71828)]);
        Self { variables }
    }

    /// Resolves `name` to its stored value.
    ///
    /// # Errors
    /// `UndefinedVariable` when `name` has never been assigned and is not a
    /// pre-seeded constant.
    pub fn lookup(&self, name: &str) -> CalcResult<f64> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| CalcError::UndefinedVariable { name: name.to_string() })
    }

    /// Binds `name` to `value`, overwriting any previous binding, and
    /// returns the value. Returning it makes assignment usable as an
    /// expression.
    pub fn assign(&mut self, name: String, value: f64) -> f64 {
        self.variables.insert(name, value);
        value
    }
}
