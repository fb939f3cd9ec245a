// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Scadgen Contributors

//! Geometry DAG module
//!
//! Immutable, hash-consed nodes shared by selections and the compiler.

mod interner;
mod node;

pub use node::Node;
