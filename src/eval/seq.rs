// Chain
//
// Data transformation by successive calls, like pipes.
//
// Licensed under the MIT License.

// src/eval/seq.rs
// Lazy-sequence steps: a single iteration clause over the sentinel

use std::fmt;
use std::rc::Rc;

use crate::core::subst::Arg;
use crate::error::ChainError;
use crate::value::Value;

type SeqFn = dyn Fn(Value) -> Result<Value, ChainError>;

#[derive(Clone)]
pub(crate) enum SeqOp {
    Map(Rc<SeqFn>),
    Filter(Rc<SeqFn>),
}

// ============================================================================
// Sequence Builder
// ============================================================================

/// A lazy-sequence step: one iteration clause plus a map/filter pipeline.
///
/// The only permitted iteration source is [`ANS`](crate::ANS); binding the
/// sequence to a chain whose source is anything else is a validation error
/// naming the offending kind. The pipeline closures run only when a later
/// step materializes the sequence.
#[derive(Clone)]
pub struct Seq {
    source: Arg,
    ops: Vec<SeqOp>,
}

impl Seq {
    /// A sequence iterating over `source`, which must be the sentinel.
    pub fn over(source: impl Into<Arg>) -> Self {
        Seq {
            source: source.into(),
            ops: Vec::new(),
        }
    }

    /// Build a sequence from explicit iteration clauses.
    ///
    /// Exactly one clause is permitted; anything else fails here, at
    /// construction time, before any chain evaluates the sequence.
    pub fn over_all(sources: impl IntoIterator<Item = Arg>) -> Result<Self, ChainError> {
        let mut sources: Vec<Arg> = sources.into_iter().collect();
        match sources.pop() {
            Some(source) if sources.is_empty() => Ok(Seq {
                source,
                ops: Vec::new(),
            }),
            Some(_) => Err(ChainError::IterationClauses {
                got: sources.len() + 1,
            }),
            None => Err(ChainError::IterationClauses { got: 0 }),
        }
    }

    /// Transform each item.
    pub fn map(mut self, f: impl Fn(Value) -> Result<Value, ChainError> + 'static) -> Self {
        self.ops.push(SeqOp::Map(Rc::new(f)));
        self
    }

    /// Keep only items for which the predicate returns `true`.
    pub fn filter(
        mut self,
        predicate: impl Fn(Value) -> Result<Value, ChainError> + 'static,
    ) -> Self {
        self.ops.push(SeqOp::Filter(Rc::new(predicate)));
        self
    }

    /// Validate the clause source and bind the sequence over the current
    /// value. A lazy current value stays unforced; anything else is broken
    /// into an item snapshot. The pipeline itself remains pending.
    pub(crate) fn bind(&self, current: &Value) -> Result<LazySeq, ChainError> {
        match &self.source {
            Arg::Ans => {
                let source = match current {
                    Value::Lazy(inner) => LazySource::Chained(Box::new(inner.clone())),
                    other => LazySource::Items(other.clone().into_items()?),
                };
                Ok(LazySeq {
                    source,
                    ops: self.ops.clone(),
                })
            }
            Arg::Value(value) => Err(ChainError::IterateOver { kind: value.kind() }),
        }
    }
}

// ============================================================================
// Bound Sequences
// ============================================================================

/// A bound, not-yet-consumed sequence held as a chain's current value.
#[derive(Clone)]
pub struct LazySeq {
    source: LazySource,
    ops: Vec<SeqOp>,
}

#[derive(Clone)]
enum LazySource {
    Items(Vec<Value>),
    Chained(Box<LazySeq>),
}

impl LazySeq {
    pub(crate) fn from_items(items: Vec<Value>) -> Self {
        LazySeq {
            source: LazySource::Items(items),
            ops: Vec::new(),
        }
    }

    /// Run the pipeline and collect the items. Chained sources force their
    /// inner sequence first. Pipeline errors surface here, not at bind time.
    pub fn force(&self) -> Result<Vec<Value>, ChainError> {
        let items = match &self.source {
            LazySource::Items(items) => items.clone(),
            LazySource::Chained(inner) => inner.force()?,
        };
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            let mut value = item;
            let mut keep = true;
            for op in &self.ops {
                match op {
                    SeqOp::Map(f) => value = f(value)?,
                    SeqOp::Filter(predicate) => {
                        if !predicate(value.clone())?.as_bool()? {
                            keep = false;
                            break;
                        }
                    }
                }
            }
            if keep {
                out.push(value);
            }
        }
        Ok(out)
    }
}

impl fmt::Debug for LazySeq {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<lazy sequence>")
    }
}

// A pending sequence is never equal to anything, itself included; equality
// would have to run the pipeline.
impl PartialEq for LazySeq {
    fn eq(&self, _: &Self) -> bool {
        false
    }
}
