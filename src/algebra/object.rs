// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Scadgen Contributors

//! Objects
//!
//! An object maps selector values to selections that together partition all
//! of space. Cross-object composition works the partition algebra: it takes
//! the cross product of the operand key sets, groups each combination under
//! the selector the operation yields, and materializes each group with the
//! cheaper of its two normal forms. The `+ * -` and unary `-` operators and
//! the translate/scale/rotate sugar are defined here as well.

use std::collections::BTreeMap;
use std::ops::{Add, Mul, Neg, Sub};

use crate::scad::{self, Vec3};

use super::selection::Selection;
use super::selector::Selector;

/// A partition of space keyed by selector values.
///
/// Keys live in an ordered map so composition and compilation visit them in
/// a deterministic order regardless of build history.
#[derive(Clone, Debug, PartialEq)]
pub struct Object<S> {
    selections: BTreeMap<S, Selection>,
}

/// The canonical two-valued shape: `true` selects the solid region.
pub type Solid = Object<bool>;

impl Object<bool> {
    /// Creates the canonical bipartition: `true` selects `selection`,
    /// `false` everything else.
    pub fn create(selection: Selection) -> Solid {
        let complement = selection.invert();
        let mut selections = BTreeMap::new();
        selections.insert(true, selection);
        selections.insert(false, complement);
        Object { selections }
    }
}

impl<S: Selector> Object<S> {
    /// Builds an object from explicit per-selector selections. The caller
    /// is responsible for the partition property: selections must be
    /// pairwise disjoint and cover all of space (unkeyed selectors are
    /// implicitly void).
    pub fn from_selections(selections: BTreeMap<S, Selection>) -> Object<S> {
        Object { selections }
    }

    /// The selection for `selector`; void when the selector is not keyed.
    pub fn selection(&self, selector: &S) -> Selection {
        self.selections
            .get(selector)
            .cloned()
            .unwrap_or_else(Selection::void)
    }

    pub fn selectors(&self) -> impl Iterator<Item = &S> {
        self.selections.keys()
    }

    /// Composes objects under a selector operation.
    ///
    /// Every combination of operand keys contributes the intersection of
    /// its per-object selections to the result selector the operation maps
    /// it to; combinations landing on the same result selector are unioned.
    /// When more combinations map to a selector than to all others
    /// combined, the complement form `invert(everything else)` is emitted
    /// instead, which keeps the term count minimal.
    ///
    /// The operation's result domain may differ from the operand domain;
    /// the compiler relies on this to classify any object down to `bool`.
    pub fn compose<T, F>(operation: F, objects: &[&Object<S>]) -> Object<T>
    where
        T: Selector,
        F: Fn(&[&S]) -> T,
    {
        let key_sets: Vec<Vec<&S>> = objects
            .iter()
            .map(|object| object.selections.keys().collect())
            .collect();

        let mut tally: BTreeMap<T, Vec<Vec<Selection>>> = BTreeMap::new();
        for_each_combination(&key_sets, |combination| {
            let result = operation(combination);
            let group: Vec<Selection> = objects
                .iter()
                .zip(combination)
                .map(|(object, selector)| object.selection(selector))
                .collect();
            tally.entry(result).or_default().push(group);
        });

        let total: usize = tally.values().map(Vec::len).sum();
        let mut selections = BTreeMap::new();
        for (selector, groups) in &tally {
            let selection = if groups.len() > total - groups.len() {
                let inverse: Vec<Vec<Selection>> = tally
                    .iter()
                    .filter(|(other, _)| *other != selector)
                    .flat_map(|(_, other_groups)| other_groups.iter().cloned())
                    .collect();
                combine(&inverse).invert()
            } else {
                combine(groups)
            };
            selections.insert(selector.clone(), selection);
        }

        Object { selections }
    }

    fn transform(&self, text: String) -> Object<S> {
        let selections = self
            .selections
            .iter()
            .map(|(selector, selection)| (selector.clone(), selection.transform(text.clone())))
            .collect();
        Object { selections }
    }

    /// Moves the object by `offset` millimeters.
    pub fn translate(&self, offset: Vec3) -> Object<S> {
        self.transform(scad::call("translate", &[offset.into()], &[]))
    }

    /// Scales per axis.
    pub fn scale(&self, factor: Vec3) -> Object<S> {
        self.transform(scad::call("scale", &[factor.into()], &[]))
    }

    /// Scales all axes by the same factor.
    pub fn scale_uniform(&self, factor: f64) -> Object<S> {
        self.scale(Vec3::new(factor, factor, factor))
    }

    /// Rotates `angle` radians around `axis`; degrees conversion happens at
    /// this boundary.
    pub fn rotate(&self, angle: f64, axis: Vec3) -> Object<S> {
        self.transform(scad::call(
            "rotate",
            &[scad::degrees(angle).into(), axis.into()],
            &[],
        ))
    }

    pub fn rotate_x(&self, angle: f64) -> Object<S> {
        self.rotate(angle, Vec3::x())
    }

    pub fn rotate_y(&self, angle: f64) -> Object<S> {
        self.rotate(angle, Vec3::y())
    }

    pub fn rotate_z(&self, angle: f64) -> Object<S> {
        self.rotate(angle, Vec3::z())
    }
}

/// Intersect within each combination, union across combinations.
fn combine(groups: &[Vec<Selection>]) -> Selection {
    let terms: Vec<Selection> = groups
        .iter()
        .map(|group| Selection::intersect(group))
        .collect();
    Selection::union(&terms)
}

/// Visits the cross product of the key sets without recursion; the
/// rightmost set varies fastest.
fn for_each_combination<'a, S, F>(key_sets: &[Vec<&'a S>], mut visit: F)
where
    F: FnMut(&[&'a S]),
{
    if key_sets.iter().any(|set| set.is_empty()) {
        return;
    }

    let mut indices = vec![0usize; key_sets.len()];
    let mut combination: Vec<&'a S> = key_sets.iter().map(|set| set[0]).collect();
    loop {
        visit(&combination);

        let mut position = key_sets.len();
        loop {
            if position == 0 {
                return;
            }
            position -= 1;
            indices[position] += 1;
            if indices[position] < key_sets[position].len() {
                combination[position] = key_sets[position][indices[position]];
                break;
            }
            indices[position] = 0;
            combination[position] = key_sets[position][0];
        }
    }
}

impl<S: Selector> Add for &Object<S> {
    type Output = Object<S>;

    fn add(self, other: &Object<S>) -> Object<S> {
        Object::compose(|s: &[&S]| s[0].add(s[1]), &[self, other])
    }
}

impl<S: Selector> Mul for &Object<S> {
    type Output = Object<S>;

    fn mul(self, other: &Object<S>) -> Object<S> {
        Object::compose(|s: &[&S]| s[0].mul(s[1]), &[self, other])
    }
}

impl<S: Selector> Sub for &Object<S> {
    type Output = Object<S>;

    fn sub(self, other: &Object<S>) -> Object<S> {
        Object::compose(|s: &[&S]| s[0].sub(s[1]), &[self, other])
    }
}

impl<S: Selector> Neg for &Object<S> {
    type Output = Object<S>;

    fn neg(self) -> Object<S> {
        Object::compose(|s: &[&S]| s[0].neg(), &[self])
    }
}

impl<S: Selector> Add for Object<S> {
    type Output = Object<S>;

    fn add(self, other: Object<S>) -> Object<S> {
        &self + &other
    }
}

impl<S: Selector> Mul for Object<S> {
    type Output = Object<S>;

    fn mul(self, other: Object<S>) -> Object<S> {
        &self * &other
    }
}

impl<S: Selector> Sub for Object<S> {
    type Output = Object<S>;

    fn sub(self, other: Object<S>) -> Object<S> {
        &self - &other
    }
}

impl<S: Selector> Neg for Object<S> {
    type Output = Object<S>;

    fn neg(self) -> Object<S> {
        -&self
    }
}

/// Unions a sequence of shapes, folding from the empty shape.
pub fn union(objects: impl IntoIterator<Item = Solid>) -> Solid {
    objects
        .into_iter()
        .fold(Object::create(Selection::void()), |acc, object| {
            &acc + &object
        })
}

/// Intersects a sequence of shapes, folding from all of space.
pub fn intersect(objects: impl IntoIterator<Item = Solid>) -> Solid {
    objects
        .into_iter()
        .fold(-Object::create(Selection::void()), |acc, object| {
            &acc * &object
        })
}
