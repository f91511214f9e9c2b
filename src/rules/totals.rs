//! Score totals.
//!
//! Unset cells contribute nothing. Totals are recomputed from the grid on
//! every read and never stored.

use crate::core::player::PlayerMap;
use crate::grid::{Cell, ScoreGrid};

/// Final total per player.
///
/// Panics if the grid has no players.
#[must_use]
pub fn totals(grid: &ScoreGrid) -> PlayerMap<i64> {
    let mut sums = PlayerMap::with_value(grid.players(), 0i64);
    for row in grid.iter_rows() {
        add_row(&mut sums, row);
    }
    sums
}

/// Running total per player through and including each round.
///
/// Entry `r` holds the standings after round `r`. Panics if the grid has
/// no players.
#[must_use]
pub fn running_totals(grid: &ScoreGrid) -> Vec<PlayerMap<i64>> {
    let mut sums = PlayerMap::with_value(grid.players(), 0i64);
    grid.iter_rows()
        .map(|row| {
            add_row(&mut sums, row);
            sums.clone()
        })
        .collect()
}

fn add_row(sums: &mut PlayerMap<i64>, row: &[Cell]) {
    for ((_, total), cell) in sums.iter_mut().zip(row) {
        if let Some(score) = cell.score {
            *total = total.saturating_add(score);
        }
    }
}
