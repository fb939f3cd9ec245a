// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Scadgen Contributors

//! Immutable geometry DAG nodes
//!
//! A `Node` is either an opaque text leaf or a textual operator over an
//! ordered list of child nodes. Every construction goes through the intern
//! table, so structurally equal subtrees share one allocation and equality
//! is a pointer check.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Weak};

use crate::scad;

use super::interner;

/// A shared, immutable term in the geometry DAG.
#[derive(Clone)]
pub struct Node(Arc<NodeData>);

pub(crate) struct NodeData {
    text: String,
    children: Vec<Node>,
    /// Structural hash, fixed at construction from the text and the
    /// children's hashes with a fixed-seed hasher, so it is stable across
    /// processes.
    hash: u64,
}

impl Node {
    /// Creates a leaf node from an opaque text fragment.
    pub fn primitive(text: impl Into<String>) -> Node {
        interner::intern(text.into(), Vec::new())
    }

    /// Creates an operator node over one or more children.
    pub fn composite(text: impl Into<String>, children: Vec<Node>) -> Node {
        debug_assert!(!children.is_empty(), "composite nodes take at least one child");
        interner::intern(text.into(), children)
    }

    /// Folds nodes into a `union()` composite. A single distinct node passes
    /// through unchanged.
    pub fn union_of(nodes: &[Node]) -> Node {
        Self::boolean("union", nodes)
    }

    /// Folds nodes into an `intersection()` composite. A single distinct
    /// node passes through unchanged.
    pub fn intersection_of(nodes: &[Node]) -> Node {
        Self::boolean("intersection", nodes)
    }

    /// Builds the two-child `difference()` of `left` minus `right`.
    pub fn difference(left: &Node, right: &Node) -> Node {
        Node::composite(
            scad::call("difference", &[], &[]),
            vec![left.clone(), right.clone()],
        )
    }

    /// Union and intersection are idempotent, so structurally duplicate
    /// operands are dropped before folding; the self-union of a shape is the
    /// shape itself, not a two-term union.
    fn boolean(operator: &str, nodes: &[Node]) -> Node {
        debug_assert!(!nodes.is_empty(), "boolean fold over no nodes");

        let mut unique: Vec<Node> = Vec::with_capacity(nodes.len());
        for node in nodes {
            if !unique.contains(node) {
                unique.push(node.clone());
            }
        }

        if let [single] = unique.as_slice() {
            return single.clone();
        }
        Node::composite(scad::call(operator, &[], &[]), unique)
    }

    pub fn text(&self) -> &str {
        &self.0.text
    }

    pub fn children(&self) -> &[Node] {
        &self.0.children
    }

    pub fn is_primitive(&self) -> bool {
        self.0.children.is_empty()
    }

    /// Stable address of the shared allocation; the intern table keys child
    /// lists by these.
    pub(crate) fn id(&self) -> usize {
        Arc::as_ptr(&self.0) as usize
    }

    pub(crate) fn alloc(text: String, children: Vec<Node>) -> Node {
        let hash = interner::structural_hash(&text, &children);
        Node(Arc::new(NodeData {
            text,
            children,
            hash,
        }))
    }

    pub(crate) fn from_data(data: Arc<NodeData>) -> Node {
        Node(data)
    }

    pub(crate) fn downgrade(&self) -> Weak<NodeData> {
        Arc::downgrade(&self.0)
    }

    pub(crate) fn structural_hash(&self) -> u64 {
        self.0.hash
    }
}

/// Interning makes structural equality a pointer check.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.0.hash);
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("text", &self.0.text)
            .field("children", &self.0.children.len())
            .finish()
    }
}
