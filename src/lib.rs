// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Scadgen Contributors

//! Scadgen
//!
//! An algebraic OpenSCAD generator. Shapes are boolean combinations of
//! named regions of space; composition picks whichever of a region or its
//! complement needs fewer terms, structurally identical subtrees are
//! interned once and factored into named modules, and the result renders
//! as a deterministic line-oriented script.

pub mod algebra;
pub mod compile;
pub mod config;
pub mod error;
pub mod graph;
pub mod io;
pub mod part;
pub mod pattern;
pub mod primitives;
pub mod scad;

pub use algebra::{intersect, union, Object, Selection, Selector, Solid};
pub use compile::{compile, Compiled, CompileStats};
pub use config::BuildConfig;
pub use error::{Error, Result};
pub use graph::Node;
pub use part::{compile_standard_parts, create_part, STANDARD_PIECES};
pub use pattern::Pattern;
pub use primitives::{cube, cylinder, prism, sphere};
pub use scad::Vec3;

/// Builds and compiles one piece from its pattern rows.
pub fn build_part(rows: &[&str]) -> Result<Compiled> {
    let pattern = Pattern::from_rows(rows)?;
    compile(&create_part(&pattern))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_square_piece() {
        let result = build_part(&["11", "11"]);
        assert!(result.is_ok());
    }
}
