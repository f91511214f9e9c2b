//! Core types: seats, rosters, round markers, variant definitions, errors.
//!
//! This module contains the game-agnostic building blocks. Variants are
//! configured via `GameDefinition` rather than by modifying the core.

pub mod player;
pub mod roster;
pub mod round;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap};
pub use roster::{Roster, RosterDraft};
pub use round::{RoundDescriptor, RoundMarker};
pub use config::{
    Annotation, GameDefinition, LadderConfig, PassRotationConfig, PlayerBounds, RoundSpec,
    ScoringDirection,
};
pub use error::{ScoreError, StoreError};
