// Chain
//
// Data transformation by successive calls, like pipes.
//
// Licensed under the MIT License.

// src/eval/unpack.rs
// Spread a value into an operation's arguments

use crate::error::ChainError;
use crate::value::Value;

use super::{CallArgs, OpFn};

/// Call `op` with `value` spread into it: a list spreads into positional
/// arguments, a map spreads into keyword arguments, a lazy sequence is
/// forced and then spread, and anything else is passed as the single
/// positional argument.
///
/// ```
/// use chain::{op3, unpack, Value};
///
/// let vector = Value::list([1, 2, 3].map(Value::from));
/// let sum = op3(|x, y, z| Ok(Value::Int(x.as_int()? + y.as_int()? + z.as_int()?)));
/// assert_eq!(unpack(&vector, &sum), Ok(Value::Int(6)));
/// ```
pub fn unpack(value: &Value, op: &OpFn) -> Result<Value, ChainError> {
    match value {
        Value::List(items) => op.call(CallArgs::positional(items.clone())),
        Value::Map(entries) => op.call(CallArgs {
            args: Vec::new(),
            kwargs: entries.clone(),
        }),
        Value::Lazy(lazy) => op.call(CallArgs::positional(lazy.force()?)),
        other => op.call(CallArgs::positional(vec![other.clone()])),
    }
}
