// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Scadgen Contributors

//! Unit solids
//!
//! Constructors for the base shapes everything else is scaled and moved
//! from. Each returns a fresh object over the interned leaf node, so two
//! calls produce regions the algebra recognizes as identical.

use crate::algebra::{Selection, Solid};
use crate::graph::Node;
use crate::scad::{self, Expr};

/// The unit cube spanning `[0, 1]` on every axis.
pub fn cube() -> Solid {
    solid(scad::call("cube", &[], &[]))
}

/// A cylinder of unit radius and height, rendered with 24 facets.
pub fn cylinder() -> Solid {
    solid(scad::call("cylinder", &[], &[("__fn", Expr::from(24))]))
}

/// A sphere of unit radius, rendered with 24 facets.
pub fn sphere() -> Solid {
    solid(scad::call("sphere", &[], &[("__fn", Expr::from(24))]))
}

/// A polygon in the XY plane extruded to unit height.
///
/// `points` trace the outline in order; the path closes itself. Scale on
/// Z to reach the intended height.
pub fn prism(points: &[(f64, f64)]) -> Solid {
    let paths: Vec<Expr> = (0..points.len()).map(Expr::from).collect();
    let outline = scad::call(
        "polygon",
        &[],
        &[
            ("points", Expr::from(points)),
            ("paths", Expr::List(vec![Expr::List(paths)])),
        ],
    );
    let extrude = scad::call("linear_extrude", &[Expr::from(1.0), Expr::from(false)], &[]);
    solid(format!("{} {{ {}; }}", extrude, outline))
}

fn solid(text: String) -> Solid {
    Solid::create(Selection::from_node(Node::primitive(text)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::compile;

    #[test]
    fn test_unit_solids_render_expected_calls() {
        assert_eq!(compile(&cube()).unwrap().text(), "cube();\n");
        assert_eq!(compile(&cylinder()).unwrap().text(), "cylinder($fn = 24);\n");
        assert_eq!(compile(&sphere()).unwrap().text(), "sphere($fn = 24);\n");
    }

    #[test]
    fn test_prism_renders_inline_extrusion() {
        let triangle = prism(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        assert_eq!(
            compile(&triangle).unwrap().text(),
            "linear_extrude(1, false) { polygon(points = [[0, 0], [1, 0], [0, 1]], paths = [[0, 1, 2]]); };\n"
        );
    }

    #[test]
    fn test_repeated_primitives_are_identical_regions() {
        let doubled = cube() + cube();
        assert_eq!(compile(&doubled).unwrap().text(), "cube();\n");
    }
}
