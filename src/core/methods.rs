// Chain
//
// Data transformation by successive calls, like pipes.
//
// Licensed under the MIT License.

// src/core/methods.rs
// Method dispatch by name on dynamic values

use std::collections::BTreeMap;

use crate::error::ChainError;
use crate::value::{Value, ValueKind};

/// Invoke a named method on `receiver` with the given arguments.
///
/// This is the explicit counterpart of attribute forwarding: a chain step or
/// a cascade names the method, and dispatch happens on the receiver's kind.
/// Mutating methods (list `append`, map `insert`, ...) update the receiver in
/// place and return `Unit`; non-mutating methods leave the receiver alone and
/// return a fresh value.
pub fn call_method(
    receiver: &mut Value,
    name: &str,
    args: &[Value],
) -> Result<Value, ChainError> {
    match receiver {
        Value::Str(s) => str_method(s, name, args),
        Value::List(items) => list_method(items, name, args),
        Value::Map(entries) => map_method(entries, name, args),
        other => Err(ChainError::NoSuchMethod {
            kind: other.kind(),
            name: name.to_string(),
        }),
    }
}

fn expect_args(method: &str, args: &[Value], expected: usize) -> Result<(), ChainError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(ChainError::MethodArity {
            method: method.to_string(),
            expected,
            got: args.len(),
        })
    }
}

// ============================================================================
// String Methods
// ============================================================================

fn str_method(s: &mut String, name: &str, args: &[Value]) -> Result<Value, ChainError> {
    match name {
        "upper" => {
            expect_args(name, args, 0)?;
            Ok(Value::Str(s.to_uppercase()))
        }
        "lower" => {
            expect_args(name, args, 0)?;
            Ok(Value::Str(s.to_lowercase()))
        }
        "strip" => {
            expect_args(name, args, 0)?;
            Ok(Value::Str(s.trim().to_string()))
        }
        "replace" => {
            expect_args(name, args, 2)?;
            let old = args[0].as_str()?;
            let new = args[1].as_str()?;
            Ok(Value::Str(s.replace(old, new)))
        }
        "split" => {
            expect_args(name, args, 1)?;
            let separator = args[0].as_str()?;
            Ok(Value::List(
                s.split(separator).map(Value::from).collect(),
            ))
        }
        // The receiver is the separator; the argument supplies the parts.
        "join" => {
            expect_args(name, args, 1)?;
            let mut parts = Vec::new();
            for item in args[0].clone().into_items()? {
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
            Ok(Value::Str(parts.join(s)))
        }
        _ => Err(ChainError::NoSuchMethod {
            kind: ValueKind::Str,
            name: name.to_string(),
        }),
    }
}

// ============================================================================
// List Methods
// ============================================================================

fn list_method(items: &mut Vec<Value>, name: &str, args: &[Value]) -> Result<Value, ChainError> {
    match name {
        "append" => {
            expect_args(name, args, 1)?;
            items.push(args[0].clone());
            Ok(Value::Unit)
        }
        "extend" => {
            expect_args(name, args, 1)?;
            items.extend(args[0].clone().into_items()?);
            Ok(Value::Unit)
        }
        "insert" => {
            expect_args(name, args, 2)?;
            let index = args[0].as_int()?.max(0) as usize;
            let index = index.min(items.len());
            items.insert(index, args[1].clone());
            Ok(Value::Unit)
        }
        "pop" => {
            expect_args(name, args, 0)?;
            items
                .pop()
                .ok_or_else(|| ChainError::failure("pop from an empty list"))
        }
        "reverse" => {
            expect_args(name, args, 0)?;
            items.reverse();
            Ok(Value::Unit)
        }
        "sort" => {
            expect_args(name, args, 0)?;
            // Sort a copy first so a comparison error leaves the list as-is.
            let mut sorted = items.clone();
            let mut failed = None;
            sorted.sort_by(|a, b| match a.compare(b) {
                Ok(ordering) => ordering,
                Err(err) => {
                    failed.get_or_insert(err);
                    std::cmp::Ordering::Equal
                }
            });
            match failed {
                Some(err) => Err(err),
                None => {
                    *items = sorted;
                    Ok(Value::Unit)
                }
            }
        }
        "clear" => {
            expect_args(name, args, 0)?;
            items.clear();
            Ok(Value::Unit)
        }
        _ => Err(ChainError::NoSuchMethod {
            kind: ValueKind::List,
            name: name.to_string(),
        }),
    }
}

// ============================================================================
// Map Methods
// ============================================================================

fn map_method(
    entries: &mut BTreeMap<String, Value>,
    name: &str,
    args: &[Value],
) -> Result<Value, ChainError> {
    match name {
        "insert" => {
            expect_args(name, args, 2)?;
            let key = args[0].as_str()?.to_string();
            entries.insert(key, args[1].clone());
            Ok(Value::Unit)
        }
        "remove" => {
            expect_args(name, args, 1)?;
            let key = args[0].as_str()?;
            Ok(entries.remove(key).unwrap_or(Value::Unit))
        }
        "get" => {
            expect_args(name, args, 1)?;
            let key = args[0].as_str()?;
            Ok(entries.get(key).cloned().unwrap_or(Value::Unit))
        }
        "keys" => {
            expect_args(name, args, 0)?;
            Ok(Value::List(
                entries.keys().cloned().map(Value::Str).collect(),
            ))
        }
        "values" => {
            expect_args(name, args, 0)?;
            Ok(Value::List(entries.values().cloned().collect()))
        }
        _ => Err(ChainError::NoSuchMethod {
            kind: ValueKind::Map,
            name: name.to_string(),
        }),
    }
}
