// Chain
//
// Data transformation by successive calls, like pipes.
//
// Licensed under the MIT License.

// src/eval/cascade.rs
// Method cascading: chain mutating calls, keep the receiver

use crate::core::methods::call_method;
use crate::error::ChainError;
use crate::value::Value;

use super::{CallArgs, OpFn};

/// Wraps a value so successive method calls read as one expression.
///
/// Each [`call`](Cascade::call) invokes the named method, keeps the
/// (possibly mutated) receiver, and discards the method's own return value.
/// This is the counterpart of a chain's method step, which keeps the return
/// value instead — mutating methods return `Unit`, so cascading is the form
/// that makes them composable.
///
/// ```
/// use chain::{Cascade, Value};
///
/// let result = Cascade::new(Value::list([]))
///     .call("append", [Value::Int(2)])
///     .call("append", [Value::Int(1)])
///     .call("reverse", [])
///     .call("append", [Value::Int(3)])
///     .end();
/// assert_eq!(result, Ok(Value::list([1, 2, 3].map(Value::from))));
/// ```
#[derive(Debug, Clone)]
pub struct Cascade {
    state: Result<Value, ChainError>,
}

impl Cascade {
    pub fn new(value: impl Into<Value>) -> Self {
        Cascade {
            state: Ok(value.into()),
        }
    }

    /// Invoke a method by name, returning the cascade for further calls.
    /// Unknown methods surface the same error the value's own dispatch
    /// raises, and skip the remaining calls.
    pub fn call(self, name: &str, args: impl IntoIterator<Item = Value>) -> Self {
        let state = match self.state {
            Ok(mut receiver) => {
                let args: Vec<Value> = args.into_iter().collect();
                match call_method(&mut receiver, name, &args) {
                    Ok(_) => Ok(receiver),
                    Err(err) => Err(err),
                }
            }
            Err(err) => Err(err),
        };
        Cascade { state }
    }

    /// Terminal read: the underlying value.
    pub fn end(&self) -> Result<Value, ChainError> {
        self.state.clone()
    }
}

/// Drives one operation with successive arguments.
///
/// Each [`call`](CallEach::call) invokes the operation once with the given
/// argument, discarding the result; useful for feeding a side-effecting
/// operation. The first error stops further calls and is reported by
/// [`finish`](CallEach::finish).
pub struct CallEach {
    op: OpFn,
    failed: Option<ChainError>,
}

impl CallEach {
    pub fn new(op: OpFn) -> Self {
        CallEach { op, failed: None }
    }

    pub fn call(mut self, arg: impl Into<Value>) -> Self {
        if self.failed.is_none() {
            if let Err(err) = self.op.call(CallArgs::positional(vec![arg.into()])) {
                self.failed = Some(err);
            }
        }
        self
    }

    pub fn finish(self) -> Result<(), ChainError> {
        match self.failed {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
