// Chain
//
// Data transformation by successive calls, like pipes.
//
// Licensed under the MIT License.

// src/eval/template.rs
// Reusable chains: record the steps now, supply the value later

use std::fmt;
use std::rc::Rc;

use crate::core::subst::Arg;
use crate::error::ChainError;
use crate::value::Value;

use super::seq::Seq;
use super::{apply, take_args, OpFn, Step};

/// A chain of steps with no starting value.
///
/// Steps are recorded with the same interface as [`Chain`](super::chain::Chain)
/// but deferred; [`end`](Template::end) produces a [`TemplateFn`] that replays
/// them against a concrete argument.
///
/// ```
/// use chain::{op1, Template, Value};
///
/// let add = |n: i64| op1(move |x| Ok(Value::Int(x.as_int()? + n)));
/// let operation = Template::new().call(add(2)).call(add(3)).end();
/// assert_eq!(operation.apply(1), Ok(Value::Int(6)));
/// ```
#[derive(Clone, Default)]
pub struct Template {
    name: Option<String>,
    steps: Vec<Step>,
}

impl Template {
    pub fn new() -> Self {
        Template {
            name: None,
            steps: Vec::new(),
        }
    }

    /// A template whose produced function carries a name in `Debug` output.
    pub fn named(name: impl Into<String>) -> Self {
        Template {
            name: Some(name.into()),
            steps: Vec::new(),
        }
    }

    pub fn call(self, op: OpFn) -> Self {
        self.step(Step::Call {
            op,
            args: Vec::new(),
            kwargs: Vec::new(),
        })
    }

    pub fn call_with(self, op: OpFn, args: impl IntoIterator<Item = Arg>) -> Self {
        self.step(Step::Call {
            op,
            args: args.into_iter().collect(),
            kwargs: Vec::new(),
        })
    }

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

    pub fn seq(self, seq: Seq) -> Self {
        self.step(Step::Sequence(seq))
    }

    pub fn invoke(self, name: &str, args: impl IntoIterator<Item = Arg>) -> Self {
        self.step(Step::Method {
            name: name.to_string(),
            args: args.into_iter().collect(),
        })
    }

    pub fn spread(self, op: OpFn) -> Self {
        self.step(Step::Spread(op))
    }

    /// Freeze the recorded steps into a reusable single-argument operation.
    pub fn end(self) -> TemplateFn {
        TemplateFn {
            name: self.name,
            steps: Rc::new(self.steps),
        }
    }

    fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }
}

/// The operation a [`Template`] produces: replays the recorded steps against
/// a concrete value and returns the final current value.
#[derive(Clone)]
pub struct TemplateFn {
    name: Option<String>,
    steps: Rc<Vec<Step>>,
}

impl TemplateFn {
    pub fn apply(&self, value: impl Into<Value>) -> Result<Value, ChainError> {
        let mut current = value.into();
        for step in self.steps.iter() {
            current = apply(current, step)?;
        }
        Ok(current)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// View the template as an ordinary unary operation, usable as a step
    /// inside another chain or template.
    pub fn as_op(&self) -> OpFn {
        let name = self.name.clone();
        let this = self.clone();
        let run = move |call| {
            let [value] = take_args::<1>(call)?;
            this.apply(value)
        };
        match name {
            Some(name) => OpFn::named(&name, run),
            None => OpFn::new(run),
        }
    }
}

impl fmt::Debug for TemplateFn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "<function {}>", name),
            None => write!(f, "<anonymous function>"),
        }
    }
}
