// Chain
//
// Data transformation by successive calls, like pipes.
//
// Licensed under the MIT License.

// src/lib.rs
// Chain library

//! Chain is a tiny tool for data transformation and data analysis by
//! successive operation calls and successive lazy-sequence consumption.
//!
//! A chain starts at a value ([`given`]) and advances one step at a time;
//! each step receives the previous step's result. The [`ANS`] sentinel
//! stands for the running value and may appear anywhere among a step's
//! arguments. The terminal read ([`Chain::end`]) returns the final value.
//!
//! ```
//! use chain::{given, ops, Seq, Value, ANS};
//!
//! let result = given("abcd")
//!     .call(ops::reversed())
//!     .seq(Seq::over(ANS).map(|c| Ok(Value::Str(c.as_str()?.to_uppercase()))))
//!     .call(ops::list())
//!     .end();
//! assert_eq!(
//!     result,
//!     Ok(Value::list(["D", "C", "B", "A"].map(Value::from))),
//! );
//! ```
//!
//! `reversed` runs with `"abcd"` as its argument. The lazy sequence then
//! iterates over `ANS` — the reversed characters — without consuming them;
//! `list` materializes the sequence, and `end` reads the result.

pub mod core;
pub mod error;
pub mod eval;
pub mod ops;
pub mod value;

// Re-export commonly used items
pub use crate::core::methods::call_method;
pub use crate::core::subst::{substitute_args, substitute_kwargs, Arg, ANS};
pub use error::ChainError;
pub use eval::cascade::{CallEach, Cascade};
pub use eval::chain::{given, Chain};
pub use eval::seq::{LazySeq, Seq};
pub use eval::template::{Template, TemplateFn};
pub use eval::unpack::unpack;
pub use eval::{op1, op2, op3, CallArgs, OpFn};
pub use value::{Value, ValueKind};
