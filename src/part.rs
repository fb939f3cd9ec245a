// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Scadgen Contributors

//! Tetromino tray pieces
//!
//! Builds a printable piece from a tile pattern: a floor plate per filled
//! tile, walls along the outline, a bevel where two filled tiles meet the
//! boundary, and prism fills in the corners. Each feature carries a small
//! mask; the mask is slid and quarter-turned across the pattern, and every
//! position where it matches exactly contributes one placed copy.

use std::f64::consts::TAU;

use rayon::prelude::*;

use crate::algebra::{union, Solid};
use crate::compile::{compile, Compiled};
use crate::error::Result;
use crate::pattern::{rotate_point, Pattern};
use crate::primitives::{cube, prism};
use crate::scad::Vec3;

const WALL_THICKNESS: f64 = 1.0;
const WALL_HEIGHT: f64 = 9.0;
const TILE_SIZE: f64 = 8.0;
const PIECE_HEIGHT: f64 = WALL_HEIGHT + WALL_THICKNESS;

/// Overlap added where features meet, so the renderer never sees two faces
/// exactly coincide.
const EPS: f64 = 1e-3;

/// The five piece patterns shipped with the standard tray.
pub const STANDARD_PIECES: [(&str, &[&str]); 5] = [
    ("T", &["111", "010"]),
    ("L", &["111", "001"]),
    ("O", &["11", "11"]),
    ("I", &["1111"]),
    ("S", &["110", "011"]),
];

/// Builds the solid for one piece pattern.
pub fn create_part(pattern: &Pattern) -> Solid {
    let size_x = pattern.width() as i64;
    let size_y = pattern.height() as i64;

    let mut placements = Vec::new();
    for (mask, feature) in features() {
        for turns in 0..4 {
            let rotated = mask.rotated(turns);
            let mask_width = rotated.width() as i64;
            let mask_height = rotated.height() as i64;

            // Rotation pivots the mask about its lower-left tile; shifting
            // by the rotated far corner keeps the match position fixed.
            let (corner_x, corner_y) =
                rotate_point((mask.width() as i64, mask.height() as i64), turns);
            let offset_x = corner_x.min(0);
            let offset_y = corner_y.min(0);

            for iy in -1..=size_y - mask_height + 1 {
                for ix in -1..=size_x - mask_width + 1 {
                    let matches = (0..mask_width).all(|mx| {
                        (0..mask_height)
                            .all(|my| pattern.tile(ix + mx, iy + my) == rotated.tile(mx, my))
                    });
                    if matches {
                        let offset = Vec3::new(
                            (ix - offset_x) as f64 * TILE_SIZE,
                            (iy - offset_y) as f64 * TILE_SIZE,
                            0.0,
                        );
                        placements
                            .push(feature.rotate_z(TAU / 4.0 * turns as f64).translate(offset));
                    }
                }
            }
        }
    }

    union(placements)
}

/// Compiles all standard pieces, preserving their declared order.
pub fn compile_standard_parts() -> Result<Vec<(&'static str, Compiled)>> {
    STANDARD_PIECES
        .par_iter()
        .map(|(name, rows)| {
            let pattern = Pattern::from_rows(rows)?;
            let compiled = compile(&create_part(&pattern))?;
            Ok((*name, compiled))
        })
        .collect()
}

/// The feature catalog: each mask names a local tile neighborhood, the
/// solid is placed wherever the neighborhood occurs.
fn features() -> Vec<(Pattern, Solid)> {
    let floor = cube()
        .scale(Vec3::new(TILE_SIZE, TILE_SIZE, 1.0))
        .scale(Vec3::new(1.0, 1.0, WALL_THICKNESS))
        .translate(Vec3::new(0.0, 0.0, -WALL_THICKNESS));
    let wall = cube()
        .scale(Vec3::new(WALL_THICKNESS, TILE_SIZE + 2.0 * EPS, PIECE_HEIGHT))
        .translate(Vec3::new(TILE_SIZE, -EPS, -WALL_THICKNESS));
    let tile_bevel = prism(&[(0.0, 0.0), (1.0 + EPS, -EPS), (-EPS, 1.0 + EPS)])
        .scale(Vec3::new(1.0, 1.0, TILE_SIZE));
    let corner_fill = prism(&[(-EPS, -1.0 - EPS), (1.0, 0.0), (-EPS, 1.0 + EPS)])
        .scale(Vec3::new(1.0, 1.0, PIECE_HEIGHT));

    vec![
        (mask(&["1"]), floor),
        (mask(&["10"]), wall),
        (
            mask(&["11"]),
            tile_bevel
                .rotate_x(TAU / 4.0)
                .translate(Vec3::new(TILE_SIZE, TILE_SIZE, 0.0)),
        ),
        (
            mask(&["10", "00"]),
            corner_fill
                .rotate_z(0.0)
                .translate(Vec3::new(TILE_SIZE, TILE_SIZE, -WALL_THICKNESS)),
        ),
        (
            mask(&["11", "00"]),
            corner_fill
                .rotate_z(-TAU / 4.0)
                .translate(Vec3::new(TILE_SIZE, TILE_SIZE, -WALL_THICKNESS)),
        ),
    ]
}

/// Masks are fixed literals, so they skip the fallible parser.
fn mask(rows: &[&str]) -> Pattern {
    Pattern::from_tiles(
        rows.iter()
            .map(|row| row.chars().map(|tile| tile == '1').collect())
            .collect(),
    )
}
