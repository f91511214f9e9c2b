//! Player rosters.
//!
//! `RosterDraft` is the editable list of name slots used while a game is
//! being set up. Confirming it drops blank slots and validates the rest into
//! a `Roster`, the fixed, ordered player list of a running game.

use serde::{Deserialize, Serialize};

use super::config::PlayerBounds;
use super::error::ScoreError;
use super::player::PlayerId;

/// Ordered list of unique, non-empty player names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Validate names against `bounds`. Names are trimmed first.
    pub fn new<I, S>(names: I, bounds: PlayerBounds) -> Result<Self, ScoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut validated: Vec<String> = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(ScoreError::EmptyPlayerName);
            }
            if validated.iter().any(|n| n == name) {
                return Err(ScoreError::DuplicatePlayerName(name.to_string()));
            }
            validated.push(name.to_string());
        }

        if !bounds.contains(validated.len()) {
            return Err(ScoreError::RosterSize {
                count: validated.len(),
                min: bounds.min,
                max: bounds.max,
            });
        }

        Ok(Self { names: validated })
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a validated roster; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of the player in `seat`.
    #[must_use]
    pub fn name(&self, seat: PlayerId) -> Option<&str> {
        self.names.get(seat.index()).map(String::as_str)
    }

    /// Names in seat order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterate over (seat, name) pairs.
    pub fn seats(&self) -> impl Iterator<Item = (PlayerId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, n)| (PlayerId(i as u8), n.as_str()))
    }
}

/// Editable name slots for the setup screen.
///
/// The slot count stays within the variant's bounds: adding stops at `max`,
/// removing stops at `min`. Blank slots are allowed while editing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterDraft {
    slots: Vec<String>,
    bounds: PlayerBounds,
}

impl RosterDraft {
    /// A draft with the starting number of blank slots (two, or the
    /// variant minimum if larger).
    #[must_use]
    pub fn new(bounds: PlayerBounds) -> Self {
        let count = bounds.min.max(2).min(bounds.max);
        Self {
            slots: vec![String::new(); count],
            bounds,
        }
    }

    /// A draft pre-filled with `names`, refitted to `bounds`.
    #[must_use]
    pub fn from_names(names: Vec<String>, bounds: PlayerBounds) -> Self {
        let mut draft = Self { slots: names, bounds };
        draft.refit(bounds);
        draft
    }

    /// Adopt new bounds: pad with blank slots up to the minimum and drop
    /// slots past the maximum.
    pub fn refit(&mut self, bounds: PlayerBounds) {
        self.bounds = bounds;
        self.slots.truncate(bounds.max);
        let min_slots = bounds.min.max(2).min(bounds.max);
        while self.slots.len() < min_slots {
            self.slots.push(String::new());
        }
    }

    /// Current slots, blanks included.
    #[must_use]
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    /// Bounds the draft is fitted to.
    #[must_use]
    pub fn bounds(&self) -> PlayerBounds {
        self.bounds
    }

    /// Set the name in slot `index`.
    pub fn set_name(&mut self, index: usize, name: impl Into<String>) -> Result<(), ScoreError> {
        let players = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(ScoreError::PlayerOutOfRange { player: index, players })?;
        *slot = name.into();
        Ok(())
    }

    /// Append a blank slot. Returns false at the maximum.
    pub fn add_slot(&mut self) -> bool {
        if self.slots.len() >= self.bounds.max {
            return false;
        }
        self.slots.push(String::new());
        true
    }

    /// Remove slot `index`. Returns false at the minimum or for a bad index.
    pub fn remove_slot(&mut self, index: usize) -> bool {
        if self.slots.len() <= self.bounds.min || index >= self.slots.len() {
            return false;
        }
        self.slots.remove(index);
        true
    }

    /// Number of non-blank slots.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| !s.trim().is_empty()).count()
    }

    /// Whether enough names are filled in to start.
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.bounds.contains(self.filled())
    }

    /// Drop blank slots and validate the remaining names.
    pub fn confirm(&self) -> Result<Roster, ScoreError> {
        Roster::new(
            self.slots.iter().filter(|s| !s.trim().is_empty()),
            self.bounds,
        )
    }
}
