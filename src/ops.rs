// Chain
//
// Data transformation by successive calls, like pipes.
//
// Licensed under the MIT License.

// src/ops.rs
// Ready-made operations for common chain steps

use std::cmp::Ordering;

use crate::error::ChainError;
use crate::eval::{take_args, OpFn};
use crate::value::{Value, ValueKind};

/// Materialize an iterable into a list. This is the step that forces a
/// pending lazy sequence.
pub fn list() -> OpFn {
    OpFn::named("list", |call| {
        let [value] = take_args::<1>(call)?;
        Ok(Value::List(value.into_items()?))
    })
}

/// Number of items in an iterable.
pub fn len() -> OpFn {
    OpFn::named("len", |call| {
        let [value] = take_args::<1>(call)?;
        Ok(Value::Int(value.into_items()?.len() as i64))
    })
}

/// Largest item of an iterable.
pub fn max() -> OpFn {
    OpFn::named("max", |call| {
        let [value] = take_args::<1>(call)?;
        extremum(value, Ordering::Greater, "max of an empty sequence")
    })
}

/// Smallest item of an iterable.
pub fn min() -> OpFn {
    OpFn::named("min", |call| {
        let [value] = take_args::<1>(call)?;
        extremum(value, Ordering::Less, "min of an empty sequence")
    })
}

fn extremum(value: Value, wanted: Ordering, empty: &str) -> Result<Value, ChainError> {
    let mut items = value.into_items()?.into_iter();
    let mut best = items.next().ok_or_else(|| ChainError::failure(empty))?;
    for item in items {
        if item.compare(&best)? == wanted {
            best = item;
        }
    }
    Ok(best)
}

/// Numeric sum of an iterable. All-int input sums to an int; any float
/// promotes the result to a float.
pub fn sum() -> OpFn {
    OpFn::named("sum", |call| {
        let [value] = take_args::<1>(call)?;
        let mut total = 0.0;
        let mut all_int = true;
        for item in value.into_items()? {
            match item {
                Value::Int(n) => total += n as f64,
                Value::Float(x) => {
                    all_int = false;
                    total += x;
                }
                other => {
                    return Err(ChainError::Kind {
                        expected: ValueKind::Float,
                        got: other.kind(),
                    })
                }
            }
        }
        Ok(if all_int {
            Value::Int(total as i64)
        } else {
            Value::Float(total)
        })
    })
}

/// The items of an iterable in reverse order, as a pending sequence.
pub fn reversed() -> OpFn {
    OpFn::named("reversed", |call| {
        let [value] = take_args::<1>(call)?;
        let mut items = value.into_items()?;
        items.reverse();
        Ok(Value::Lazy(crate::eval::seq::LazySeq::from_items(items)))
    })
}

/// The items of an iterable in ascending order.
pub fn sorted() -> OpFn {
    OpFn::named("sorted", |call| {
        let [value] = take_args::<1>(call)?;
        let mut items = value.into_items()?;
        let mut failed = None;
        items.sort_by(|a, b| match a.compare(b) {
            Ok(ordering) => ordering,
            Err(err) => {
                failed.get_or_insert(err);
                Ordering::Equal
            }
        });
        match failed {
            Some(err) => Err(err),
            None => Ok(Value::List(items)),
        }
    })
}

/// Round a number to the nearest int. Ints pass through.
pub fn round() -> OpFn {
    OpFn::named("round", |call| {
        let [value] = take_args::<1>(call)?;
        match value {
            Value::Int(n) => Ok(Value::Int(n)),
            Value::Float(x) => Ok(Value::Int(x.round() as i64)),
            other => Err(ChainError::Kind {
                expected: ValueKind::Float,
                got: other.kind(),
            }),
        }
    })
}

/// Render any value as a string.
pub fn to_str() -> OpFn {
    OpFn::named("to_str", |call| {
        let [value] = take_args::<1>(call)?;
        Ok(Value::Str(value.to_string()))
    })
}

/// Join an iterable of strings with a separator.
pub fn join(separator: impl Into<String>) -> OpFn {
    let separator = separator.into();
    OpFn::named("join", move |call| {
        let [value] = take_args::<1>(call)?;
        let mut parts = Vec::new();
        for item in value.into_items()? {
            match item {
                Value::Str(part) => parts.push(part),
                other => {
                    return Err(ChainError::Kind {
                        expected: ValueKind::Str,
                        got: other.kind(),
                    })
                }
            }
        }
        Ok(Value::Str(parts.join(&separator)))
    })
}
