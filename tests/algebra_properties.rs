// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Scadgen Contributors

//! Property tests for object composition
//!
//! Random boolean expressions over distinct leaf regions are built twice:
//! once through the object algebra and once as plain boolean functions of
//! leaf membership. Sampling membership assignments checks that the
//! emitted geometry selects exactly the points the expression describes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use scadgen::{intersect, union, Node, Selection, Solid};

enum Expr {
    Leaf(usize),
    Add(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Neg(Box<Expr>),
}

fn random_expr(rng: &mut StdRng, depth: usize, next_leaf: &mut usize) -> Expr {
    if depth == 0 || rng.gen_bool(0.3) {
        let leaf = Expr::Leaf(*next_leaf);
        *next_leaf += 1;
        return leaf;
    }

    match rng.gen_range(0..4) {
        0 => Expr::Add(
            Box::new(random_expr(rng, depth - 1, next_leaf)),
            Box::new(random_expr(rng, depth - 1, next_leaf)),
        ),
        1 => Expr::Mul(
            Box::new(random_expr(rng, depth - 1, next_leaf)),
            Box::new(random_expr(rng, depth - 1, next_leaf)),
        ),
        2 => Expr::Sub(
            Box::new(random_expr(rng, depth - 1, next_leaf)),
            Box::new(random_expr(rng, depth - 1, next_leaf)),
        ),
        _ => Expr::Neg(Box::new(random_expr(rng, depth - 1, next_leaf))),
    }
}

fn leaf_object(index: usize) -> Solid {
    Solid::create(Selection::from_node(Node::primitive(format!(
        "leaf_{}()",
        index
    ))))
}

fn build(expr: &Expr) -> Solid {
    match expr {
        Expr::Leaf(index) => leaf_object(*index),
        Expr::Add(a, b) => build(a) + build(b),
        Expr::Mul(a, b) => build(a) * build(b),
        Expr::Sub(a, b) => build(a) - build(b),
        Expr::Neg(a) => -build(a),
    }
}

fn eval_expr(expr: &Expr, membership: &[bool]) -> bool {
    match expr {
        Expr::Leaf(index) => membership[*index],
        Expr::Add(a, b) => eval_expr(a, membership) | eval_expr(b, membership),
        Expr::Mul(a, b) => eval_expr(a, membership) & eval_expr(b, membership),
        Expr::Sub(a, b) => eval_expr(a, membership) & !eval_expr(b, membership),
        Expr::Neg(a) => !eval_expr(a, membership),
    }
}

/// Interprets an emitted node as a membership predicate for one point.
fn eval_node(node: &Node, membership: &[bool]) -> bool {
    let children = node.children();
    if children.is_empty() {
        let index: usize = node
            .text()
            .trim_start_matches("leaf_")
            .trim_end_matches("()")
            .parse()
            .expect("leaf node text");
        return membership[index];
    }

    match node.text() {
        "union()" => children.iter().any(|child| eval_node(child, membership)),
        "intersection()" => children.iter().all(|child| eval_node(child, membership)),
        "difference()" => {
            eval_node(&children[0], membership)
                && !children[1..]
                    .iter()
                    .any(|child| eval_node(child, membership))
        }
        other => panic!("unexpected operator {:?}", other),
    }
}

fn eval_selection(selection: &Selection, membership: &[bool]) -> bool {
    match selection.node() {
        None => false,
        Some(node) => eval_node(node, membership) ^ selection.is_inverted(),
    }
}

#[test]
fn test_composition_matches_boolean_evaluation() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..60 {
        let mut next_leaf = 0;
        let expr = random_expr(&mut rng, 4, &mut next_leaf);
        let selected = build(&expr).selection(&true);

        for _ in 0..16 {
            let membership: Vec<bool> = (0..next_leaf).map(|_| rng.gen_bool(0.5)).collect();
            assert_eq!(
                eval_selection(&selected, &membership),
                eval_expr(&expr, &membership),
                "emitted geometry disagrees with the boolean expression"
            );
        }
    }
}

#[test]
fn test_composed_objects_partition_every_point() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..40 {
        let mut next_leaf = 0;
        let expr = random_expr(&mut rng, 3, &mut next_leaf);
        let object = build(&expr);

        for _ in 0..16 {
            let membership: Vec<bool> = (0..next_leaf).map(|_| rng.gen_bool(0.5)).collect();
            let inside = eval_selection(&object.selection(&true), &membership);
            let outside = eval_selection(&object.selection(&false), &membership);
            assert_ne!(inside, outside, "keys must split space into two parts");
        }
    }
}

#[test]
fn test_double_negation_restores_the_object() {
    let mut rng = StdRng::seed_from_u64(23);

    for _ in 0..40 {
        let mut next_leaf = 0;
        let expr = random_expr(&mut rng, 3, &mut next_leaf);
        let object = build(&expr);
        assert_eq!(-&(-&object), object);
    }
}

#[test]
fn test_de_morgan_duality_is_structural() {
    let a = leaf_object(0);
    let b = leaf_object(1);

    let sum = &a + &b;
    let dual = -(&(-&a) * &(-&b));
    assert_eq!(dual, sum);

    let product = &a * &b;
    let dual = -(&(-&a) + &(-&b));
    assert_eq!(dual, product);
}

#[test]
fn test_identity_objects_absorb() {
    let a = leaf_object(0);

    let nothing = Solid::create(Selection::void());
    assert_eq!(&a + &nothing, a);
    assert_eq!(&nothing + &a, a);

    let everything = -&nothing;
    assert_eq!(&a * &everything, a);
    assert_eq!(&everything * &a, a);
}

#[test]
fn test_sequence_folds_match_pairwise_operators() {
    let a = leaf_object(0);
    let b = leaf_object(1);
    let c = leaf_object(2);

    let folded = union([a.clone(), b.clone(), c.clone()]);
    let pairwise = &(&a + &b) + &c;
    assert_eq!(folded, pairwise);

    let folded = intersect([a.clone(), b.clone(), c.clone()]);
    let pairwise = &(&a * &b) * &c;
    assert_eq!(folded, pairwise);

    assert_eq!(union([a.clone()]), a);
    assert_eq!(intersect([a.clone()]), a);
}
