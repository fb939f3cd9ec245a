// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Scadgen Contributors

//! Hash-consing table for graph nodes
//!
//! Every node construction passes through a process-wide table keyed by
//! (operator text, child identities). Hitting an existing entry returns the
//! shared allocation, which is what makes node equality a pointer check.
//! The table holds weak references only, so a node's lifetime is still
//! decided by the selections and objects that reference it; dead entries
//! are swept out amortized.

use std::hash::{BuildHasher, Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{LazyLock, Weak};

use ahash::RandomState;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use super::node::{Node, NodeData};

/// Below this many entries the sweep never runs.
const SWEEP_FLOOR: usize = 256;

/// Fixed-seed state so structural hashes are stable across runs.
static HASH_STATE: LazyLock<RandomState> =
    LazyLock::new(|| RandomState::with_seeds(0x6e6f, 0x6465, 0x7363, 0x6164));

static TABLE: LazyLock<Interner> = LazyLock::new(Interner::new);

pub(crate) fn intern(text: String, children: Vec<Node>) -> Node {
    TABLE.intern(text, children)
}

pub(crate) fn structural_hash(text: &str, children: &[Node]) -> u64 {
    let mut hasher = HASH_STATE.build_hasher();
    text.hash(&mut hasher);
    for child in children {
        hasher.write_u64(child.structural_hash());
    }
    hasher.finish()
}

#[derive(PartialEq, Eq, Hash)]
struct NodeKey {
    text: String,
    children: Vec<usize>,
}

struct Interner {
    entries: DashMap<NodeKey, Weak<NodeData>, RandomState>,
    sweep_at: AtomicUsize,
}

impl Interner {
    fn new() -> Self {
        Interner {
            entries: DashMap::with_hasher(RandomState::new()),
            sweep_at: AtomicUsize::new(SWEEP_FLOOR),
        }
    }

    fn intern(&self, text: String, children: Vec<Node>) -> Node {
        let key = NodeKey {
            text: text.clone(),
            children: children.iter().map(Node::id).collect(),
        };

        // The children vec pins every child allocation for the duration of
        // the lookup, so a live entry that matches the key can only be the
        // node built from exactly these children.
        let node = match self.entries.entry(key) {
            Entry::Occupied(mut entry) => match entry.get().upgrade() {
                Some(data) => Node::from_data(data),
                None => {
                    let node = Node::alloc(text, children);
                    entry.insert(node.downgrade());
                    node
                }
            },
            Entry::Vacant(entry) => {
                let node = Node::alloc(text, children);
                entry.insert(node.downgrade());
                node
            }
        };

        self.sweep_if_grown();
        node
    }

    /// Drops entries whose node has been freed. Runs when the table has
    /// doubled since the last sweep, keeping the amortized cost constant.
    fn sweep_if_grown(&self) {
        if self.entries.len() < self.sweep_at.load(Ordering::Relaxed) {
            return;
        }
        self.entries.retain(|_, weak| weak.strong_count() > 0);
        let next = (self.entries.len() * 2).max(SWEEP_FLOOR);
        self.sweep_at.store(next, Ordering::Relaxed);
    }
}
