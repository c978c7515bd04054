//! Symmetry-group operations for generating equivalent training states
//!
//! The eight spatial transforms form the dihedral group of the square. Each
//! one is a pure structural remapping: it reads a grid and returns a new,
//! independently-owned grid of the same dimensions. Mark inversion (player
//! one ↔ player two) lives on [`Grid::inverted`] since it permutes cell
//! values rather than positions.

use serde::{Deserialize, Serialize};

use crate::grid::{Cell, Grid};

/// A spatial symmetry of the square grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symmetry {
    Identity,
    /// 180-degree rotation (point reflection around the center)
    HalfTurn,
    /// 90-degree clockwise rotation
    RotateCw,
    /// 90-degree counterclockwise rotation
    RotateCcw,
    /// Reflection across the main diagonal (transpose)
    MainDiagonal,
    /// Reflection across the anti-diagonal
    AntiDiagonal,
    /// Reflection across the horizontal axis (top and bottom rows swap)
    HorizontalAxis,
    /// Reflection across the vertical axis (left and right columns swap)
    VerticalAxis,
}

impl Symmetry {
    /// All eight transforms, identity first
    pub fn all() -> [Symmetry; 8] {
        [
            Symmetry::Identity,
            Symmetry::HalfTurn,
            Symmetry::RotateCw,
            Symmetry::RotateCcw,
            Symmetry::MainDiagonal,
            Symmetry::AntiDiagonal,
            Symmetry::HorizontalAxis,
            Symmetry::VerticalAxis,
        ]
    }

    /// Source coordinates for output cell `(i, j)` on a grid of side `n`
    fn source(self, i: usize, j: usize, n: usize) -> (usize, usize) {
        match self {
            Symmetry::Identity => (i, j),
            Symmetry::HalfTurn => (n - 1 - i, n - 1 - j),
            Symmetry::RotateCw => (n - 1 - j, i),
            Symmetry::RotateCcw => (j, n - 1 - i),
            Symmetry::MainDiagonal => (j, i),
            Symmetry::AntiDiagonal => (n - 1 - j, n - 1 - i),
            Symmetry::HorizontalAxis => (n - 1 - i, j),
            Symmetry::VerticalAxis => (i, n - 1 - j),
        }
    }

    /// Apply the transform, producing a new grid
    pub fn apply(self, grid: &Grid) -> Grid {
        let n = grid.size;
        let mut cells = vec![Cell::Empty; n * n];
        for i in 0..n {
            for j in 0..n {
                let (si, sj) = self.source(i, j, n);
                cells[i * n + j] = grid.cells[si * n + sj];
            }
        }
        Grid { size: n, cells }
    }

    /// Map a flat action index to its position on the transformed grid.
    ///
    /// Pairing a transformed state with the transformed action keeps a
    /// recorded `(state, action)` training sample consistent under symmetry.
    pub fn transform_action(self, action: usize, size: usize) -> usize {
        // The cell read from source(d) lands at d, so an input cell moves to
        // the inverse transform's source position.
        let (si, sj) = self.inverse().source(action / size, action % size, size);
        si * size + sj
    }

    /// The transform undoing this one.
    ///
    /// Only the quarter-turn rotations are not self-inverse.
    pub fn inverse(self) -> Symmetry {
        match self {
            Symmetry::RotateCw => Symmetry::RotateCcw,
            Symmetry::RotateCcw => Symmetry::RotateCw,
            other => other,
        }
    }
}

impl Grid {
    /// 180-degree rotation: output `(i, j)` reads input `(n-1-i, n-1-j)`
    #[must_use = "transforms return a new grid; the original is unchanged"]
    pub fn symmetric_around_center(&self) -> Grid {
        Symmetry::HalfTurn.apply(self)
    }

    /// 90-degree clockwise rotation: output `(i, j)` reads input `(n-1-j, i)`
    #[must_use = "transforms return a new grid; the original is unchanged"]
    pub fn rot90_clockwise(&self) -> Grid {
        Symmetry::RotateCw.apply(self)
    }

    /// 90-degree counterclockwise rotation: output `(i, j)` reads input `(j, n-1-i)`
    #[must_use = "transforms return a new grid; the original is unchanged"]
    pub fn rot90_counterclockwise(&self) -> Grid {
        Symmetry::RotateCcw.apply(self)
    }

    /// Transpose: output `(i, j)` reads input `(j, i)`
    #[must_use = "transforms return a new grid; the original is unchanged"]
    pub fn sym_main_diag(&self) -> Grid {
        Symmetry::MainDiagonal.apply(self)
    }

    /// Anti-diagonal reflection: output `(i, j)` reads input `(n-1-j, n-1-i)`
    #[must_use = "transforms return a new grid; the original is unchanged"]
    pub fn sym_second_diag(&self) -> Grid {
        Symmetry::AntiDiagonal.apply(self)
    }

    /// Horizontal-axis reflection: output `(i, j)` reads input `(n-1-i, j)`
    #[must_use = "transforms return a new grid; the original is unchanged"]
    pub fn sym_horizontal_axis(&self) -> Grid {
        Symmetry::HorizontalAxis.apply(self)
    }

    /// Vertical-axis reflection: output `(i, j)` reads input `(i, n-1-j)`
    #[must_use = "transforms return a new grid; the original is unchanged"]
    pub fn sym_vertical_axis(&self) -> Grid {
        Symmetry::VerticalAxis.apply(self)
    }

    /// All eight symmetric variants of this grid, identity first.
    ///
    /// Training code pairs these with [`Grid::inverted`] to multiply one
    /// recorded position into the full set of equivalent samples.
    pub fn symmetric_states(&self) -> Vec<Grid> {
        Symmetry::all().iter().map(|t| t.apply(self)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asymmetric() -> Grid {
        // No spatial symmetry fixes this position
        Grid::from_digits("120 002 010").unwrap()
    }

    #[test]
    fn test_rot90_clockwise_mapping() {
        let grid = Grid::from_digits("120 000 000").unwrap();
        let rotated = grid.rot90_clockwise();
        // Top row moves to the right column
        assert_eq!(rotated.get(0, 2), grid.get(0, 0));
        assert_eq!(rotated.get(1, 2), grid.get(0, 1));
        assert_eq!(rotated.get(2, 2), grid.get(0, 2));
    }

    #[test]
    fn test_rot90_clockwise_has_order_four() {
        let grid = asymmetric();
        let back = grid
            .rot90_clockwise()
            .rot90_clockwise()
            .rot90_clockwise()
            .rot90_clockwise();
        assert_eq!(back, grid);
    }

    #[test]
    fn test_quarter_turns_cancel() {
        let grid = asymmetric();
        assert_eq!(grid.rot90_clockwise().rot90_counterclockwise(), grid);
        assert_eq!(grid.rot90_counterclockwise().rot90_clockwise(), grid);
    }

    #[test]
    fn test_reflections_are_involutions() {
        let grid = asymmetric();
        assert_eq!(grid.sym_main_diag().sym_main_diag(), grid);
        assert_eq!(grid.sym_second_diag().sym_second_diag(), grid);
        assert_eq!(grid.sym_horizontal_axis().sym_horizontal_axis(), grid);
        assert_eq!(grid.sym_vertical_axis().sym_vertical_axis(), grid);
        assert_eq!(grid.symmetric_around_center().symmetric_around_center(), grid);
    }

    #[test]
    fn test_half_turn_is_double_quarter_turn() {
        let grid = asymmetric();
        assert_eq!(
            grid.symmetric_around_center(),
            grid.rot90_clockwise().rot90_clockwise()
        );
    }

    #[test]
    fn test_main_diag_fixes_diagonal_cells() {
        let grid = Grid::from_digits("100 010 002").unwrap();
        assert_eq!(grid.sym_main_diag(), grid);
    }

    #[test]
    fn test_horizontal_axis_swaps_rows() {
        let grid = Grid::from_digits("120 000 000").unwrap();
        let flipped = grid.sym_horizontal_axis();
        assert_eq!(flipped.get(2, 0), grid.get(0, 0));
        assert_eq!(flipped.get(2, 1), grid.get(0, 1));
        assert_eq!(flipped.get(0, 0), grid.get(2, 0));
    }

    #[test]
    fn test_vertical_axis_swaps_columns() {
        let grid = Grid::from_digits("120 000 000").unwrap();
        let flipped = grid.sym_vertical_axis();
        assert_eq!(flipped.get(0, 2), grid.get(0, 0));
        assert_eq!(flipped.get(0, 1), grid.get(0, 1));
        assert_eq!(flipped.get(0, 0), grid.get(0, 2));
    }

    #[test]
    fn test_inverse_roundtrips_every_transform() {
        let grid = asymmetric();
        for transform in Symmetry::all() {
            let back = transform.inverse().apply(&transform.apply(&grid));
            assert_eq!(back, grid, "inverse failed for {transform:?}");
        }
    }

    #[test]
    fn test_symmetric_states_are_distinct_for_asymmetric_position() {
        let grid = asymmetric();
        let states = grid.symmetric_states();
        assert_eq!(states.len(), 8);
        assert_eq!(states[0], grid);
        for (a, state_a) in states.iter().enumerate() {
            for state_b in states.iter().skip(a + 1) {
                assert_ne!(state_a, state_b);
            }
        }
    }

    #[test]
    fn test_transform_action_follows_cells() {
        let grid = asymmetric();
        for transform in Symmetry::all() {
            let transformed = transform.apply(&grid);
            for action in 0..9 {
                let mapped = transform.transform_action(action, 3);
                assert_eq!(
                    transformed.cell(mapped),
                    grid.cell(action),
                    "cell did not follow action {action} under {transform:?}"
                );
            }
        }
    }

    #[test]
    fn test_transforms_on_larger_board() {
        let grid = Grid::from_digits("1000 0200 0000 0001").unwrap();
        let rotated = grid.rot90_clockwise();
        assert_eq!(rotated.get(0, 3), grid.get(0, 0));
        assert_eq!(rotated.get(1, 2), grid.get(1, 1));
        assert_eq!(
            rotated
                .rot90_clockwise()
                .rot90_clockwise()
                .rot90_clockwise(),
            grid
        );
    }
}
