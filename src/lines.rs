//! Winning-line analysis, generalized over the square dimension

use crate::grid::{Cell, Player};

/// Check whether the player occupies a full line.
///
/// Lines are scanned in the judge's order: each column, each row, the main
/// diagonal, then the anti-diagonal. Every line spans the full square
/// dimension, so a win requires `size` collinear marks.
pub fn has_full_line(cells: &[Cell], size: usize, player: Player) -> bool {
    let target = player.to_cell();

    for col in 0..size {
        if (0..size).all(|row| cells[row * size + col] == target) {
            return true;
        }
    }

    for row in 0..size {
        if (0..size).all(|col| cells[row * size + col] == target) {
            return true;
        }
    }

    if (0..size).all(|i| cells[i * size + i] == target) {
        return true;
    }

    (0..size).all(|i| cells[i * size + (size - 1 - i)] == target)
}
