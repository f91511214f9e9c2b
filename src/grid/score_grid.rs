//! The score grid: one cell per (round, player).
//!
//! ## Snapshots
//!
//! Rows live in an `im::Vector`, so cloning a grid is O(1) and a mutation
//! only copies the touched row. Every edit therefore leaves the previous
//! grid intact as an independent snapshot.
//!
//! ## Shape
//!
//! The shape is fixed at construction. A change of roster or variant builds
//! a new grid; nothing is carried across shapes. Restoring persisted data
//! follows the same rule: data of any other shape is discarded.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use super::cell::{parse_entry, Cell};
use crate::core::error::ScoreError;
use crate::rules::bidding;

/// Cells of one round, in seat order.
pub type Row = SmallVec<[Cell; 8]>;

/// Dense `rounds × players` grid of cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreGrid {
    rows: Vector<Row>,
    players: usize,
}

impl ScoreGrid {
    /// Create an all-empty grid.
    #[must_use]
    pub fn new(rounds: usize, players: usize) -> Self {
        let row: Row = SmallVec::from_elem(Cell::default(), players);
        Self {
            rows: std::iter::repeat(row).take(rounds).collect(),
            players,
        }
    }

    /// Number of rounds (rows).
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.rows.len()
    }

    /// Number of players (columns).
    #[must_use]
    pub fn players(&self) -> usize {
        self.players
    }

    /// Check whether the grid has exactly this shape.
    #[must_use]
    pub fn has_shape(&self, rounds: usize, players: usize) -> bool {
        self.rounds() == rounds && self.players == players
    }

    fn check(&self, round: usize, player: usize) -> Result<(), ScoreError> {
        if round >= self.rounds() {
            return Err(ScoreError::RoundOutOfRange { round, rounds: self.rounds() });
        }
        if player >= self.players {
            return Err(ScoreError::PlayerOutOfRange { player, players: self.players });
        }
        Ok(())
    }

    /// Get a cell.
    pub fn cell(&self, round: usize, player: usize) -> Result<&Cell, ScoreError> {
        self.check(round, player)?;
        Ok(&self.rows[round][player])
    }

    fn cell_mut(&mut self, round: usize, player: usize) -> Result<&mut Cell, ScoreError> {
        self.check(round, player)?;
        Ok(&mut self.rows[round][player])
    }

    /// Get the cells of one round.
    pub fn row(&self, round: usize) -> Result<&[Cell], ScoreError> {
        self.rows
            .get(round)
            .map(|row| row.as_slice())
            .ok_or(ScoreError::RoundOutOfRange { round, rounds: self.rounds() })
    }

    /// Iterate over rows in round order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(|row| row.as_slice())
    }

    /// Bids of one round, in seat order.
    pub fn bids(&self, round: usize) -> Result<Vec<Option<i64>>, ScoreError> {
        Ok(self.row(round)?.iter().map(|c| c.bid).collect())
    }

    // === Mutation ===

    /// Set a score from typed text. Empty or non-numeric text unsets the
    /// cell. Returns the stored value.
    pub fn set_score(
        &mut self,
        round: usize,
        player: usize,
        raw: &str,
    ) -> Result<Option<i64>, ScoreError> {
        let score = parse_entry(raw);
        self.cell_mut(round, player)?.score = score;
        debug!(round, player, ?score, "score entered");
        Ok(score)
    }

    /// Set a bid from typed text, with the same parsing as scores.
    pub fn set_bid(
        &mut self,
        round: usize,
        player: usize,
        raw: &str,
    ) -> Result<Option<i64>, ScoreError> {
        let bid = parse_entry(raw);
        self.cell_mut(round, player)?.bid = bid;
        debug!(round, player, ?bid, "bid entered");
        Ok(bid)
    }

    /// Flip the went-out flag of one cell. Returns the new value.
    pub fn toggle_went_out(&mut self, round: usize, player: usize) -> Result<bool, ScoreError> {
        let cell = self.cell_mut(round, player)?;
        cell.went_out = !cell.went_out;
        Ok(cell.went_out)
    }

    /// Flip the penalty card flag of one cell. When it becomes set, every
    /// other cell in the round is cleared. Returns the new value.
    pub fn set_penalty_holder(&mut self, round: usize, player: usize) -> Result<bool, ScoreError> {
        self.check(round, player)?;
        let row = &mut self.rows[round];

        let holds = !row[player].penalty_holder;
        if holds {
            for cell in row.iter_mut() {
                cell.penalty_holder = false;
            }
        }
        row[player].penalty_holder = holds;
        Ok(holds)
    }

    /// Score a bid as made or missed.
    ///
    /// Without a bid, or with a made bid too large to score, this does
    /// nothing. Applying the outcome the cell already shows clears the
    /// score instead, so the action toggles. Returns the stored score.
    pub fn apply_bid_outcome(
        &mut self,
        round: usize,
        player: usize,
        made: bool,
    ) -> Result<Option<i64>, ScoreError> {
        let cell = self.cell_mut(round, player)?;
        let Some(bid) = cell.bid else {
            return Ok(cell.score);
        };

        let Some(outcome) = bidding::bid_outcome_score(bid, made) else {
            return Ok(cell.score);
        };
        cell.score = if cell.score == Some(outcome) {
            None
        } else {
            Some(outcome)
        };
        debug!(round, player, made, score = ?cell.score, "bid outcome applied");
        Ok(cell.score)
    }

    // === Persistence ===

    fn matrix<T>(&self, f: impl Fn(&Cell) -> T) -> Vec<Vec<T>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(&f).collect())
            .collect()
    }

    /// Persisted form of the grid.
    #[must_use]
    pub fn to_data(&self) -> GridData {
        GridData {
            scores: self.matrix(|c| c.score),
            bids: self.matrix(|c| c.bid),
            went_out: self.matrix(|c| c.went_out),
            penalty_holder: self.matrix(|c| c.penalty_holder),
        }
    }

    /// Rebuild a grid of the given shape from persisted data.
    ///
    /// Data of any other shape is discarded and an empty grid returned.
    /// A row restored with several penalty card holders keeps the first.
    #[must_use]
    pub fn from_data(data: &GridData, rounds: usize, players: usize) -> Self {
        if !data.has_shape(rounds, players) {
            warn!(rounds, players, "persisted grid shape mismatch, starting empty");
            return Self::new(rounds, players);
        }

        let rows = (0..rounds)
            .map(|r| {
                let mut holder_seen = false;
                (0..players)
                    .map(|p| {
                        let holds = data.penalty_holder[r][p] && !holder_seen;
                        holder_seen |= holds;
                        Cell {
                            score: data.scores[r][p],
                            bid: data.bids[r][p],
                            went_out: data.went_out[r][p],
                            penalty_holder: holds,
                        }
                    })
                    .collect::<Row>()
            })
            .collect();

        Self { rows, players }
    }
}

/// Persisted grid: four `rounds × players` matrices.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridData {
    pub scores: Vec<Vec<Option<i64>>>,
    pub bids: Vec<Vec<Option<i64>>>,
    pub went_out: Vec<Vec<bool>>,
    pub penalty_holder: Vec<Vec<bool>>,
}

impl GridData {
    /// Check that all four matrices have exactly this shape.
    #[must_use]
    pub fn has_shape(&self, rounds: usize, players: usize) -> bool {
        fn matrix<T>(m: &[Vec<T>], rounds: usize, players: usize) -> bool {
            m.len() == rounds && m.iter().all(|row| row.len() == players)
        }

        matrix(&self.scores, rounds, players)
            && matrix(&self.bids, rounds, players)
            && matrix(&self.went_out, rounds, players)
            && matrix(&self.penalty_holder, rounds, players)
    }
}
