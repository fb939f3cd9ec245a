// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Scadgen Contributors

//! Object-to-script compilation: shared-subgraph factoring, module
//! numbering, and line emission.

mod compiler;
mod emitter;

pub use compiler::{compile, Compiled, CompileStats};
