// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Scadgen Contributors

//! Partition algebra module
//!
//! Selections name regions of space, objects partition it by selector
//! value, and composition combines objects while minimizing emitted terms.

mod object;
mod selection;
mod selector;

pub use object::{intersect, union, Object, Solid};
pub use selection::Selection;
pub use selector::Selector;
