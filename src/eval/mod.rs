// Chain
//
// Data transformation by successive calls, like pipes.
//
// Licensed under the MIT License.

// src/eval/mod.rs
// The step evaluator shared by chains, templates, and cascades

pub mod cascade;
pub mod chain;
pub mod seq;
pub mod template;
pub mod unpack;

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::core::methods::call_method;
use crate::core::subst::{substitute_args, substitute_kwargs, Arg};
use crate::error::ChainError;
use crate::value::Value;

use seq::Seq;
use unpack::unpack;

// ============================================================================
// Operations
// ============================================================================

/// The arguments handed to an operation: substituted positionals plus
/// substituted keywords.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CallArgs {
    pub args: Vec<Value>,
    pub kwargs: BTreeMap<String, Value>,
}

impl CallArgs {
    pub fn positional(args: Vec<Value>) -> Self {
        CallArgs {
            args,
            kwargs: BTreeMap::new(),
        }
    }

    pub fn kwarg(&self, name: &str) -> Option<&Value> {
        self.kwargs.get(name)
    }
}

/// An operation a chain step can call: any closure from [`CallArgs`] to a
/// value, optionally carrying a name for error reports and `Debug` output.
#[derive(Clone)]
pub struct OpFn {
    name: Option<Rc<str>>,
    run: Rc<dyn Fn(CallArgs) -> Result<Value, ChainError>>,
}

impl OpFn {
    pub fn new(run: impl Fn(CallArgs) -> Result<Value, ChainError> + 'static) -> Self {
        OpFn {
            name: None,
            run: Rc::new(run),
        }
    }

    pub fn named(
        name: &str,
        run: impl Fn(CallArgs) -> Result<Value, ChainError> + 'static,
    ) -> Self {
        OpFn {
            name: Some(Rc::from(name)),
            run: Rc::new(run),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn call(&self, args: CallArgs) -> Result<Value, ChainError> {
        (self.run)(args)
    }
}

impl fmt::Debug for OpFn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "<operation {}>", name),
            None => write!(f, "<operation>"),
        }
    }
}

/// Pull exactly `N` positional arguments out of a call, rejecting keywords.
pub(crate) fn take_args<const N: usize>(call: CallArgs) -> Result<[Value; N], ChainError> {
    let got = call.args.len() + call.kwargs.len();
    if !call.kwargs.is_empty() {
        return Err(ChainError::Arity { expected: N, got });
    }
    <[Value; N]>::try_from(call.args).map_err(|_| ChainError::Arity { expected: N, got })
}

/// Wrap a unary closure on values as an operation.
pub fn op1<F>(f: F) -> OpFn
where
    F: Fn(Value) -> Result<Value, ChainError> + 'static,
{
    OpFn::new(move |call| {
        let [x] = take_args::<1>(call)?;
        f(x)
    })
}

/// Wrap a binary closure on values as an operation.
pub fn op2<F>(f: F) -> OpFn
where
    F: Fn(Value, Value) -> Result<Value, ChainError> + 'static,
{
    OpFn::new(move |call| {
        let [x, y] = take_args::<2>(call)?;
        f(x, y)
    })
}

/// Wrap a ternary closure on values as an operation.
pub fn op3<F>(f: F) -> OpFn
where
    F: Fn(Value, Value, Value) -> Result<Value, ChainError> + 'static,
{
    OpFn::new(move |call| {
        let [x, y, z] = take_args::<3>(call)?;
        f(x, y, z)
    })
}

// ============================================================================
// Steps
// ============================================================================

/// One pending transformation of the current value.
#[derive(Clone)]
pub(crate) enum Step {
    /// Call an operation, substituting `ANS` through the arguments first.
    Call {
        op: OpFn,
        args: Vec<Arg>,
        kwargs: Vec<(String, Arg)>,
    },
    /// Bind a lazy sequence over the current value.
    Sequence(Seq),
    /// Dispatch a method by name on the current value.
    Method { name: String, args: Vec<Arg> },
    /// Spread the current value into an operation's arguments.
    Spread(OpFn),
}

impl Step {
    fn kind(&self) -> &'static str {
        match self {
            Step::Call { .. } => "call",
            Step::Sequence(_) => "sequence",
            Step::Method { .. } => "method",
            Step::Spread(_) => "spread",
        }
    }
}

/// Apply one step to the current value, producing the next current value.
///
/// For call steps, the current value is prepended as the first positional
/// argument unless `ANS` appeared explicitly among the (positional or
/// keyword) arguments — an explicit sentinel takes over positioning.
pub(crate) fn apply(current: Value, step: &Step) -> Result<Value, ChainError> {
    trace!(step = step.kind(), "applying step");
    match step {
        Step::Call { op, args, kwargs } => {
            let (mut positional, explicit_args) = substitute_args(args, &current);
            let (keyword, explicit_kwargs) = substitute_kwargs(kwargs, &current);
            if !explicit_args && !explicit_kwargs {
                positional.insert(0, current);
            }
            op.call(CallArgs {
                args: positional,
                kwargs: keyword,
            })
        }
        Step::Sequence(seq) => Ok(Value::Lazy(seq.bind(&current)?)),
        Step::Method { name, args } => {
            let (positional, _) = substitute_args(args, &current);
            let mut receiver = current;
            call_method(&mut receiver, name, &positional)
        }
        Step::Spread(op) => unpack(&current, op),
    }
}
