//! Score grid: the mutable (round × player) matrix of cells.
//!
//! The grid knows nothing about variants. Gating an edit on the active
//! variant's annotation is the session's job.

pub mod cell;
pub mod score_grid;

pub use cell::{parse_entry, Cell};
pub use score_grid::{GridData, Row, ScoreGrid};
