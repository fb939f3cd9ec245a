// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Scadgen Contributors

//! Script compilation
//!
//! Collapses an object onto its material region, factors every shared
//! subgraph into a named module, and assembles the final script. The walk
//! records nodes in completion order (children before parents), so modules
//! are numbered and declared before any module that calls them.

use ahash::{AHashMap, AHashSet};
use serde::Serialize;

use crate::algebra::{Object, Selector};
use crate::error::Error;
use crate::graph::Node;
use crate::scad;

use super::emitter;

/// Counters describing one compilation.
#[derive(Debug, Clone, Serialize)]
pub struct CompileStats {
    /// Distinct nodes reachable from the root.
    pub nodes: usize,
    /// Nodes referenced more than once, each factored into a module.
    pub modules: usize,
    /// Emitted line count, blank separators included.
    pub lines: usize,
}

/// A compiled OpenSCAD script.
#[derive(Debug, Clone)]
pub struct Compiled {
    pub lines: Vec<String>,
    pub stats: CompileStats,
}

impl Compiled {
    /// The whole script as one newline-terminated string.
    pub fn text(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

/// Compiles an object down to OpenSCAD source.
///
/// Selectors are reduced to set / clear, and the script renders the region
/// selected by the set side. A region that covers nothing is reported as
/// [`Error::VoidRoot`]; one that covers all of space cannot be written as
/// finite geometry and is reported as [`Error::InvertedRoot`].
pub fn compile<S: Selector>(object: &Object<S>) -> Result<Compiled, Error> {
    let classified = Object::compose(|selectors: &[&S]| selectors[0].is_set(), &[object]);
    let selection = classified.selection(&true);

    let root = match selection.node() {
        None => return Err(Error::VoidRoot),
        Some(_) if selection.is_inverted() => return Err(Error::InvertedRoot),
        Some(node) => node.clone(),
    };

    let (order, reused) = walk(&root);

    // Completion order puts children first, so a module's dependencies get
    // lower numbers and their declarations land above its own.
    let mut replacements: AHashMap<Node, Node> = AHashMap::new();
    let mut modules: Vec<(String, Node)> = Vec::new();
    for node in &order {
        if reused.contains(node) {
            let name = format!("node_{}", modules.len() + 1);
            replacements.insert(node.clone(), Node::primitive(scad::call(&name, &[], &[])));
            modules.push((name, node.clone()));
        }
    }

    let mut lines = Vec::new();
    emitter::render_node(&root, &replacements, 0, &mut lines);
    for (name, node) in &modules {
        lines.push(String::new());
        emitter::render_module(name, node, &replacements, &mut lines);
    }

    let stats = CompileStats {
        nodes: order.len(),
        modules: modules.len(),
        lines: lines.len(),
    };
    Ok(Compiled { lines, stats })
}

/// Iterative post-order walk over the graph.
///
/// Returns every reachable node exactly once in completion order, plus the
/// set of nodes reached through more than one parent edge.
fn walk(root: &Node) -> (Vec<Node>, AHashSet<Node>) {
    enum Visit {
        Enter(Node),
        Exit(Node),
    }

    let mut seen: AHashSet<Node> = AHashSet::new();
    let mut reused: AHashSet<Node> = AHashSet::new();
    let mut order: Vec<Node> = Vec::new();

    let mut stack = vec![Visit::Enter(root.clone())];
    while let Some(visit) = stack.pop() {
        match visit {
            Visit::Enter(node) => {
                if !seen.insert(node.clone()) {
                    reused.insert(node);
                    continue;
                }
                stack.push(Visit::Exit(node.clone()));
                for child in node.children().iter().rev() {
                    stack.push(Visit::Enter(child.clone()));
                }
            }
            Visit::Exit(node) => order.push(node),
        }
    }

    (order, reused)
}
