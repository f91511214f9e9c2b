//! # scorepad
//!
//! A configurable scorekeeping engine for multi-round card games.
//!
//! ## Design Principles
//!
//! 1. **Variant-Agnostic Core**: No game is special-cased. Variants describe
//!    their rounds, annotations and player bounds via `GameDefinition`.
//!
//! 2. **Derived, Not Stored**: Dealers, bid warnings and totals are pure
//!    functions of the definition and the grid, recomputed on every read.
//!
//! 3. **Forgiving Entry**: Malformed score text becomes an unset cell, a
//!    persisted grid of the wrong shape becomes an empty grid, and an unknown
//!    variant becomes the default one. Nothing typed by the operator halts
//!    the scoreboard.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Grid rows live in an `im` vector, so
//!   every edit leaves the previous grid as a cheap snapshot.
//!
//! - **Explicit Persistence Port**: The scorekeeper writes through a
//!   `KeyValueStore` after every change and reads it once when opened.
//!
//! ## Modules
//!
//! - `core`: Seats, rosters, round markers, variant definitions, errors
//! - `rules`: Round generation, dealer rotation, bid checks, totals
//! - `grid`: The score grid and its persisted form
//! - `games`: Built-in variants and the registry
//! - `session`: Running games, the Setup/InProgress lifecycle, persistence

pub mod core;
pub mod rules;
pub mod grid;
pub mod games;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    Roster, RosterDraft,
    RoundMarker, RoundDescriptor,
    Annotation, GameDefinition, LadderConfig, PassRotationConfig, PlayerBounds, RoundSpec,
    ScoringDirection,
    ScoreError, StoreError,
};

pub use crate::grid::{Cell, GridData, ScoreGrid};

pub use crate::games::GameRegistry;

pub use crate::session::{
    GameSession, KeyValueStore, MemoryStore, Phase, Scorekeeper, SessionMeta, Setup,
    StartingDealer, GRID_DATA_KEY, SESSION_META_KEY,
};
