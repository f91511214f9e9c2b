//! Error types.
//!
//! Malformed score or bid text is not an error: it normalizes to an unset
//! cell. These variants cover structural misuse only (out-of-range indices,
//! annotations the active variant does not track, invalid rosters, actions
//! issued in the wrong phase) and failures of the persistence backend.

use thiserror::Error;

use super::config::Annotation;

/// Structural errors raised by the scoring core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("round {round} out of range (grid has {rounds} rounds)")]
    RoundOutOfRange { round: usize, rounds: usize },

    #[error("seat {player} out of range (grid has {players} players)")]
    PlayerOutOfRange { player: usize, players: usize },

    #[error("{0:?} annotations are not tracked by this game")]
    AnnotationDisabled(Annotation),

    #[error("roster of {count} players outside allowed range {min}..={max}")]
    RosterSize { count: usize, min: usize, max: usize },

    #[error("player names must not be empty")]
    EmptyPlayerName,

    #[error("duplicate player name: {0}")]
    DuplicatePlayerName(String),

    #[error("no game in progress")]
    NotInProgress,

    #[error("a game is already in progress")]
    AlreadyInProgress,
}

/// Errors raised by a [`KeyValueStore`](crate::session::KeyValueStore).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("serialization failed: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("store backend failed: {0}")]
    Backend(String),
}
