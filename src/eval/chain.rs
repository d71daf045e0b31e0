// Chain
//
// Data transformation by successive calls, like pipes.
//
// Licensed under the MIT License.

// src/eval/chain.rs
// The chain: a current value advanced one step at a time

use tracing::debug;

use crate::core::subst::Arg;
use crate::error::ChainError;
use crate::value::Value;

use super::seq::Seq;
use super::{apply, OpFn, Step};

/// Start a chain positioned at `value`.
pub fn given(value: impl Into<Value>) -> Chain {
    let value = value.into();
    debug!(kind = %value.kind(), "chain started");
    Chain { state: Ok(value) }
}

/// A running chain: the current value, or the first error.
///
/// Every step consumes the chain and returns it with the current value
/// replaced by the step's result. Once a step fails, the remaining steps are
/// skipped and the terminal read reports the error.
///
/// ```
/// use chain::{given, op1, Value};
///
/// let result = given(15)
///     .call(op1(|x| Ok(Value::Int(x.as_int()? + 15))))
///     .end();
/// assert_eq!(result, Ok(Value::Int(30)));
/// ```
#[derive(Debug, Clone)]
pub struct Chain {
    state: Result<Value, ChainError>,
}

impl Chain {
    /// Call an operation with the current value as its only argument.
    pub fn call(self, op: OpFn) -> Self {
        self.step(Step::Call {
            op,
            args: Vec::new(),
            kwargs: Vec::new(),
        })
    }

    /// Call an operation with extra positional arguments. `ANS` among the
    /// arguments resolves to the current value; if it appears, the current
    /// value is not prepended.
    pub fn call_with(self, op: OpFn, args: impl IntoIterator<Item = Arg>) -> Self {
        self.step(Step::Call {
            op,
            args: args.into_iter().collect(),
            kwargs: Vec::new(),
        })
    }

    /// Call an operation with positional and keyword arguments. `ANS` is
    /// substituted in both.
    pub fn call_kw<A, K, S>(self, op: OpFn, args: A, kwargs: K) -> Self
    where
        A: IntoIterator<Item = Arg>,
        K: IntoIterator<Item = (S, Arg)>,
        S: Into<String>,
    {
        self.step(Step::Call {
            op,
            args: args.into_iter().collect(),
            kwargs: kwargs
                .into_iter()
                .map(|(key, arg)| (key.into(), arg))
                .collect(),
        })
    }

    /// Bind a lazy sequence over the current value. The sequence's pipeline
    /// runs only when a later step materializes it.
    pub fn seq(self, seq: Seq) -> Self {
        self.step(Step::Sequence(seq))
    }

    /// Invoke a method by name on the current value; the method's return
    /// value becomes the new current value.
    pub fn invoke(self, name: &str, args: impl IntoIterator<Item = Arg>) -> Self {
        self.step(Step::Method {
            name: name.to_string(),
            args: args.into_iter().collect(),
        })
    }

    /// Spread the current value into an operation: a list becomes positional
    /// arguments, a map becomes keyword arguments.
    pub fn spread(self, op: OpFn) -> Self {
        self.step(Step::Spread(op))
    }

    /// Terminal read. Does not advance the chain; reading twice yields the
    /// same result.
    pub fn end(&self) -> Result<Value, ChainError> {
        self.state.clone()
    }

    /// Borrow the current value, if no step has failed.
    pub fn value(&self) -> Option<&Value> {
        self.state.as_ref().ok()
    }

    fn step(self, step: Step) -> Self {
        let state = match self.state {
            Ok(current) => apply(current, &step),
            Err(err) => Err(err),
        };
        Chain { state }
    }
}
