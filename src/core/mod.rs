// Chain
//
// Data transformation by successive calls, like pipes.
//
// Licensed under the MIT License.

// src/core/mod.rs
// Sentinel substitution and method dispatch

pub mod methods;
pub mod subst;
