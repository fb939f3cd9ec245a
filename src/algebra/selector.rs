// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Scadgen Contributors

//! Selector algebra
//!
//! Selectors are the key space that partitions an object's extent. The
//! algebra is closed: `add` is union-like, `mul` is intersection-like,
//! `neg` is complement, and `sub` derives from them. `bool` is the
//! canonical two-valued implementation; a caller may key objects by any
//! richer closed domain that implements the trait.

use std::fmt;

/// A value from a closed partition algebra, usable as an `Object` key.
///
/// `Ord` gives objects a deterministic key order, which keeps compiled
/// output byte-stable from run to run.
pub trait Selector: Clone + Ord + fmt::Debug {
    /// Union-like combination.
    fn add(&self, other: &Self) -> Self;

    /// Intersection-like combination.
    fn mul(&self, other: &Self) -> Self;

    /// Complement.
    fn neg(&self) -> Self;

    /// `a - b` is `a` with `b` removed.
    fn sub(&self, other: &Self) -> Self {
        self.mul(&other.neg())
    }

    /// Truthiness projection: whether this selector counts as "inside" when
    /// a shape is classified down to the two-valued domain for rendering.
    fn is_set(&self) -> bool;
}

impl Selector for bool {
    fn add(&self, other: &Self) -> Self {
        *self || *other
    }

    fn mul(&self, other: &Self) -> Self {
        *self && *other
    }

    fn neg(&self) -> Self {
        !*self
    }

    fn is_set(&self) -> bool {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_algebra_tables() {
        assert!(true.add(&false));
        assert!(false.add(&true));
        assert!(!false.add(&false));

        assert!(true.mul(&true));
        assert!(!true.mul(&false));

        assert!(!true.neg());
        assert!(false.neg());
    }

    #[test]
    fn test_sub_is_mul_with_complement() {
        assert!(true.sub(&false));
        assert!(!true.sub(&true));
        assert!(!false.sub(&false));
        assert!(!false.sub(&true));
    }

    #[test]
    fn test_truthiness() {
        assert!(true.is_set());
        assert!(!false.is_set());
    }
}
