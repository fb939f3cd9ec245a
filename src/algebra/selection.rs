// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Scadgen Contributors

//! Selections
//!
//! A selection names one region of space: the points selected by some graph
//! node, possibly inverted (everything except that region), or void (no
//! region at all). Inversion is a single polarity flag, never a nested
//! wrapper, so double inversion collapses by construction.

use crate::graph::Node;

/// A possibly-void, possibly-inverted reference to a graph node.
///
/// An inverted void still reports void: it has nothing to render even
/// though it covers all of space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    node: Option<Node>,
    inverted: bool,
}

impl Selection {
    /// The selection of nothing.
    pub fn void() -> Selection {
        Selection {
            node: None,
            inverted: false,
        }
    }

    /// Selects exactly the region of `node`.
    pub fn from_node(node: Node) -> Selection {
        Selection {
            node: Some(node),
            inverted: false,
        }
    }

    pub fn is_void(&self) -> bool {
        self.node.is_none()
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    pub fn node(&self) -> Option<&Node> {
        self.node.as_ref()
    }

    /// Complements the selection by toggling the polarity flag.
    pub fn invert(&self) -> Selection {
        Selection {
            node: self.node.clone(),
            inverted: !self.inverted,
        }
    }

    /// Wraps the selected region in a geometric transform. Void passes
    /// through untouched; the polarity flag is preserved.
    pub fn transform(&self, text: impl Into<String>) -> Selection {
        match &self.node {
            None => self.clone(),
            Some(node) => Selection {
                node: Some(Node::composite(text, vec![node.clone()])),
                inverted: self.inverted,
            },
        }
    }

    /// Intersects selections with term-count minimization.
    ///
    /// Inverted void operands are dropped (the complement of nothing is all
    /// of space, the identity for intersection) while a plain void operand
    /// makes the whole intersection void; the asymmetry is intentional.
    /// A region intersected with its own complement is likewise void.
    pub fn intersect(selections: &[Selection]) -> Selection {
        let mut nodes: Vec<Node> = Vec::new();
        let mut inverted_nodes: Vec<Node> = Vec::new();

        for selection in selections {
            match (&selection.node, selection.inverted) {
                (None, true) => {}
                (None, false) => return Selection::void(),
                (Some(node), true) => inverted_nodes.push(node.clone()),
                (Some(node), false) => nodes.push(node.clone()),
            }
        }

        if nodes.iter().any(|node| inverted_nodes.contains(node)) {
            return Selection::void();
        }

        match (nodes.is_empty(), inverted_nodes.is_empty()) {
            (false, false) => Selection::from_node(Node::difference(
                &Node::intersection_of(&nodes),
                &Node::union_of(&inverted_nodes),
            )),
            (true, false) => Selection::from_node(Node::union_of(&inverted_nodes)).invert(),
            (false, true) => Selection::from_node(Node::intersection_of(&nodes)),
            (true, true) => Selection::void(),
        }
    }

    /// Unions selections. Defined through De Morgan over `intersect`, so
    /// the two operations stay exact duals by construction.
    pub fn union(selections: &[Selection]) -> Selection {
        let inverted: Vec<Selection> = selections.iter().map(Selection::invert).collect();
        Selection::intersect(&inverted).invert()
    }
}
