// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Scadgen Contributors

//! Tile patterns
//!
//! A rectangular grid of filled and empty tiles, addressed with signed
//! coordinates so neighborhood scans can probe past the edges: anything
//! out of bounds reads as empty. Quarter-turn rotation follows the same
//! convention as [`rotate_point`], column `x` grows rightward and row `y`
//! grows upward in part space.

use crate::error::{Error, Result};

/// A rectangular grid of boolean tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    width: usize,
    rows: Vec<Vec<bool>>,
}

impl Pattern {
    /// Parses rows of `'0'` / `'1'` characters into a pattern.
    ///
    /// All rows must have the length of the first; anything but those two
    /// characters is rejected.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Pattern> {
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());
        let mut parsed = Vec::with_capacity(rows.len());

        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(Error::RaggedPattern {
                    row: index,
                    found,
                    expected: width,
                });
            }

            let mut tiles = Vec::with_capacity(width);
            for tile in row.chars() {
                match tile {
                    '0' => tiles.push(false),
                    '1' => tiles.push(true),
                    found => return Err(Error::InvalidTile { row: index, found }),
                }
            }
            parsed.push(tiles);
        }

        Ok(Pattern {
            width,
            rows: parsed,
        })
    }

    /// Builds a pattern from already-validated tile rows.
    pub(crate) fn from_tiles(rows: Vec<Vec<bool>>) -> Pattern {
        let width = rows.first().map_or(0, Vec::len);
        debug_assert!(rows.iter().all(|row| row.len() == width));
        Pattern { width, rows }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// The tile at column `x`, row `y`; positions outside the grid are
    /// empty.
    pub fn tile(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        y < self.rows.len() && x < self.width && self.rows[y][x]
    }

    /// The pattern rotated by `turns` quarter turns counterclockwise.
    pub fn rotated(&self, turns: usize) -> Pattern {
        let mut current = self.clone();
        for _ in 0..turns {
            let width = current.width as i64;
            let height = current.rows.len() as i64;
            let rows: Vec<Vec<bool>> = (0..width)
                .map(|row| {
                    (0..height)
                        .map(|column| current.tile(row, height - column - 1))
                        .collect()
                })
                .collect();
            current = Pattern {
                width: height as usize,
                rows,
            };
        }
        current
    }
}

/// Rotates a point by `turns` quarter turns counterclockwise around the
/// origin.
pub fn rotate_point(point: (i64, i64), turns: usize) -> (i64, i64) {
    let (mut x, mut y) = point;
    for _ in 0..turns {
        (x, y) = (-y, x);
    }
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_probe_tiles() {
        let pattern = Pattern::from_rows(&["111", "010"]).unwrap();
        assert_eq!(pattern.width(), 3);
        assert_eq!(pattern.height(), 2);
        assert!(pattern.tile(0, 0));
        assert!(!pattern.tile(0, 1));
        assert!(pattern.tile(1, 1));
    }

    #[test]
    fn test_out_of_bounds_reads_empty() {
        let pattern = Pattern::from_rows(&["11"]).unwrap();
        assert!(!pattern.tile(-1, 0));
        assert!(!pattern.tile(0, -1));
        assert!(!pattern.tile(2, 0));
        assert!(!pattern.tile(0, 1));
    }

    #[test]
    fn test_ragged_rows_are_rejected() {
        let result = Pattern::from_rows(&["111", "01"]);
        assert!(matches!(
            result,
            Err(Error::RaggedPattern {
                row: 1,
                found: 2,
                expected: 3,
            })
        ));
    }

    #[test]
    fn test_invalid_tile_character_is_rejected() {
        let result = Pattern::from_rows(&["1x"]);
        assert!(matches!(result, Err(Error::InvalidTile { row: 0, found: 'x' })));
    }

    #[test]
    fn test_rotation_transposes_dimensions() {
        let pattern = Pattern::from_rows(&["111", "010"]).unwrap();
        let rotated = pattern.rotated(1);
        assert_eq!(rotated.width(), 2);
        assert_eq!(rotated.height(), 3);
        assert_eq!(rotated, Pattern::from_rows(&["01", "11", "01"]).unwrap());
    }

    #[test]
    fn test_four_turns_restore_the_pattern() {
        let pattern = Pattern::from_rows(&["110", "011"]).unwrap();
        assert_eq!(pattern.rotated(4), pattern);
    }

    #[test]
    fn test_rotate_point_quarter_turns() {
        assert_eq!(rotate_point((3, 2), 0), (3, 2));
        assert_eq!(rotate_point((3, 2), 1), (-2, 3));
        assert_eq!(rotate_point((3, 2), 2), (-3, -2));
        assert_eq!(rotate_point((3, 2), 4), (3, 2));
    }
}
