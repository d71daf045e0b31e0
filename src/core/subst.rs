// Chain
//
// Data transformation by successive calls, like pipes.
//
// Licensed under the MIT License.

// src/core/subst.rs
// Sentinel substitution over step arguments

use std::collections::BTreeMap;

use crate::value::Value;

// ============================================================================
// The Sentinel
// ============================================================================

/// A step argument: either an ordinary value or the `ANS` sentinel.
///
/// `Arg::Value` cannot embed the sentinel, so substitution never needs to
/// recurse into nested lists or maps — a compound value passed as an argument
/// is opaque.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Placeholder for the chain's current value, resolved at step time.
    Ans,
    Value(Value),
}

/// The placeholder for the previous step's answer.
///
/// Substituted with the chain's current value wherever it appears among a
/// step's arguments. Never equal to ordinary data: it is its own variant,
/// not a value.
pub const ANS: Arg = Arg::Ans;

impl<T: Into<Value>> From<T> for Arg {
    fn from(value: T) -> Self {
        Arg::Value(value.into())
    }
}

// ============================================================================
// Substitution
// ============================================================================

/// Replace every `ANS` among the positional arguments with the current value.
///
/// Returns the substituted arguments and whether the sentinel appeared at
/// least once. The caller's slice is left untouched.
pub fn substitute_args(args: &[Arg], current: &Value) -> (Vec<Value>, bool) {
    let mut explicit = false;
    let substituted = args
        .iter()
        .map(|arg| match arg {
            Arg::Ans => {
                explicit = true;
                current.clone()
            }
            Arg::Value(value) => value.clone(),
        })
        .collect();
    (substituted, explicit)
}

/// Replace every `ANS` among the keyword arguments with the current value.
///
/// Same contract as [`substitute_args`]; each occurrence is substituted
/// independently, in any subset of keys.
pub fn substitute_kwargs(
    kwargs: &[(String, Arg)],
    current: &Value,
) -> (BTreeMap<String, Value>, bool) {
    let mut explicit = false;
    let substituted = kwargs
        .iter()
        .map(|(key, arg)| {
            let value = match arg {
                Arg::Ans => {
                    explicit = true;
                    current.clone()
                }
                Arg::Value(value) => value.clone(),
            };
            (key.clone(), value)
        })
        .collect();
    (substituted, explicit)
}
