// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Scadgen Contributors

//! Crate error type
//!
//! Typed failures for the compile and pattern layers. I/O and config paths
//! report through `anyhow` with context instead.

use thiserror::Error;

/// Failures surfaced by the compiler and the pattern layer.
#[derive(Debug, Error)]
pub enum Error {
    /// The top-level shape selects nothing; there is no geometry to emit.
    #[error("the top-level shape is void; nothing to render")]
    VoidRoot,

    /// The top-level shape is an infinite complement and cannot be emitted.
    #[error("the top-level shape is inverted; an unbounded complement cannot be rendered")]
    InvertedRoot,

    /// A tile pattern had rows of differing lengths.
    #[error("pattern is not rectangular: row {row} has {found} tiles, expected {expected}")]
    RaggedPattern {
        row: usize,
        found: usize,
        expected: usize,
    },

    /// A pattern row contained something other than '0' or '1'.
    #[error("pattern row {row} contains invalid tile character {found:?}")]
    InvalidTile { row: usize, found: char },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_descriptive() {
        assert!(Error::VoidRoot.to_string().contains("void"));
        assert!(Error::InvertedRoot.to_string().contains("inverted"));

        let ragged = Error::RaggedPattern {
            row: 1,
            found: 2,
            expected: 3,
        };
        assert!(ragged.to_string().contains("row 1"));
        assert!(ragged.to_string().contains("expected 3"));
    }
}
