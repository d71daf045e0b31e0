// Chain
//
// Data transformation by successive calls, like pipes.
//
// Licensed under the MIT License.

// src/error.rs
// Error kinds surfaced by chain evaluation

use thiserror::Error;

use crate::value::ValueKind;

/// Every way a chain step can fail.
///
/// Validation errors (`IterateOver`, `IterationClauses`) abort a chain before
/// the offending step runs. `Failure` carries an error raised inside a
/// user-supplied operation; it propagates unchanged to the terminal read.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChainError {
    /// A lazy-sequence step tried to iterate over something other than `ANS`.
    #[error("cannot iterate over '{kind}'; 'ANS' constant only")]
    IterateOver { kind: ValueKind },

    /// A lazy sequence was built with more or fewer than one iteration clause.
    #[error("expected a single iteration clause, got {got}")]
    IterationClauses { got: usize },

    /// The current value cannot be broken into items.
    #[error("'{kind}' value is not iterable")]
    NotIterable { kind: ValueKind },

    /// Method dispatch found no method of this name on the receiver.
    #[error("'{kind}' value has no method '{name}'")]
    NoSuchMethod { kind: ValueKind, name: String },

    /// A method was called with the wrong number of arguments.
    #[error("'{method}' expects {expected} argument(s), got {got}")]
    MethodArity {
        method: String,
        expected: usize,
        got: usize,
    },

    /// An operation was called with the wrong number of arguments.
    #[error("expected {expected} positional argument(s), got {got}")]
    Arity { expected: usize, got: usize },

    /// A value of one kind appeared where another was required.
    #[error("expected a '{expected}' value, got '{got}'")]
    Kind {
        expected: ValueKind,
        got: ValueKind,
    },

    /// Two values have no defined ordering.
    #[error("cannot compare '{left}' with '{right}'")]
    NotComparable { left: ValueKind, right: ValueKind },

    /// An error raised by a user-supplied operation.
    #[error("{0}")]
    Failure(String),
}

impl ChainError {
    /// Build a `Failure` from inside a user-supplied operation.
    pub fn failure(message: impl Into<String>) -> Self {
        ChainError::Failure(message.into())
    }
}
