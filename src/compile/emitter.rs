// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Scadgen Contributors

//! Line rendering
//!
//! Turns graph nodes into OpenSCAD statement lines: a leaf is its text plus
//! `;`, a single-child operator prefixes an indented child with no braces,
//! and a multi-child operator opens a `{` block. Rendering walks an
//! explicit stack so arbitrarily deep transform chains cannot overflow the
//! call stack.

use ahash::AHashMap;

use crate::graph::Node;

/// Renders `node` into `out` starting at `depth` tabs.
///
/// Children are resolved through `replacements` (reused nodes render as
/// their module reference); the top node itself never is, so a module body
/// cannot collapse into a call to itself.
pub(crate) fn render_node(
    node: &Node,
    replacements: &AHashMap<Node, Node>,
    depth: usize,
    out: &mut Vec<String>,
) {
    enum Task {
        Render(Node, usize),
        Close(usize),
    }

    let mut stack = vec![Task::Render(node.clone(), depth)];
    while let Some(task) = stack.pop() {
        match task {
            Task::Close(depth) => out.push(format!("{}}}", indent(depth))),
            Task::Render(node, depth) => match node.children() {
                [] => out.push(format!("{}{};", indent(depth), node.text())),
                [child] => {
                    out.push(format!("{}{}", indent(depth), node.text()));
                    stack.push(Task::Render(resolve(child, replacements), depth + 1));
                }
                children => {
                    out.push(format!("{}{} {{", indent(depth), node.text()));
                    stack.push(Task::Close(depth));
                    for child in children.iter().rev() {
                        stack.push(Task::Render(resolve(child, replacements), depth + 1));
                    }
                }
            },
        }
    }
}

/// Renders a `module <name>()` declaration with the node's lines indented
/// one level beneath the header.
pub(crate) fn render_module(
    name: &str,
    node: &Node,
    replacements: &AHashMap<Node, Node>,
    out: &mut Vec<String>,
) {
    out.push(format!("module {}()", name));
    render_node(node, replacements, 1, out);
}

fn resolve(node: &Node, replacements: &AHashMap<Node, Node>) -> Node {
    replacements.get(node).unwrap_or(node).clone()
}

fn indent(depth: usize) -> String {
    "\t".repeat(depth)
}
