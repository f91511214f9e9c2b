//! Game variant configuration.
//!
//! Each supported game is described by a `GameDefinition`:
//! - `RoundSpec`: how the rounds are enumerated (fixed list or generator)
//! - `Annotation`: the single per-cell annotation the variant tracks
//! - Display and metadata toggles (dealer column, round labels, scoring direction)
//! - `PlayerBounds`: how many players the variant supports
//!
//! Definitions are immutable once built. The scoring core never branches on
//! a variant's name, only on these fields.

use serde::{Deserialize, Serialize};

use super::round::RoundMarker;

/// The per-cell annotation a variant activates.
///
/// Exactly one is active per variant, so combinations the scoreboard has no
/// use for (bids together with a penalty card holder) cannot be expressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Annotation {
    /// Scores only.
    #[default]
    None,
    /// Binary per-cell flag: the player went out this round.
    WentOut,
    /// Row-exclusive flag: the single holder of the penalty card this round.
    PenaltyCard,
    /// Each cell carries a bid with made/missed scoring.
    Bidding,
}

/// Which end of the standings wins.
///
/// Metadata for a ranking consumer; the core never ranks players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoringDirection {
    /// Lowest total wins.
    Ascending,
    /// Highest total wins.
    Descending,
}

/// Inclusive player-count bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerBounds {
    pub min: usize,
    pub max: usize,
}

impl PlayerBounds {
    /// Create bounds. Panics unless `1 <= min <= max <= 255`.
    #[must_use]
    pub fn new(min: usize, max: usize) -> Self {
        assert!(min > 0, "Must have at least 1 player");
        assert!(max <= 255, "At most 255 players supported");
        assert!(min <= max, "Minimum players exceeds maximum");
        Self { min, max }
    }

    /// Check whether `count` players are allowed.
    #[must_use]
    pub fn contains(&self, count: usize) -> bool {
        (self.min..=self.max).contains(&count)
    }
}

impl Default for PlayerBounds {
    fn default() -> Self {
        Self { min: 1, max: 255 }
    }
}

/// Parameters of the "down to one and back up" ladder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderConfig {
    /// Cards in the pool shared out between players.
    pub deck_size: usize,

    /// Largest hand dealt, regardless of how few players there are.
    pub max_hand: usize,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            deck_size: 52,
            max_hand: 10,
        }
    }
}

impl LadderConfig {
    /// Set the card pool size.
    #[must_use]
    pub fn with_deck_size(mut self, deck_size: usize) -> Self {
        self.deck_size = deck_size;
        self
    }

    /// Set the hand size cap.
    #[must_use]
    pub fn with_max_hand(mut self, max_hand: usize) -> Self {
        self.max_hand = max_hand;
        self
    }

    /// Peak hand size for `player_count` players. Zero for an empty table.
    #[must_use]
    pub fn peak(&self, player_count: usize) -> usize {
        self.deck_size
            .checked_div(player_count)
            .unwrap_or(0)
            .min(self.max_hand)
    }
}

/// Parameters of the trick-passing rotation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassRotationConfig {
    /// Number of rounds precomputed. Games longer than this are not expected.
    pub rounds: usize,
}

impl Default for PassRotationConfig {
    fn default() -> Self {
        Self { rounds: 50 }
    }
}

impl PassRotationConfig {
    /// Set the number of precomputed rounds.
    #[must_use]
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }
}

/// How a variant enumerates its rounds.
#[derive(Clone, Debug)]
pub enum RoundSpec {
    /// The same rounds regardless of player count.
    Fixed(Vec<RoundMarker>),
    /// Hand sizes from the peak down to one and back up.
    Ladder(LadderConfig),
    /// Right/left/across card passing.
    PassRotation(PassRotationConfig),
    /// Any other pure, deterministic generator of player count.
    Custom(fn(usize) -> Vec<RoundMarker>),
}

impl RoundSpec {
    /// Fixed numeric rounds.
    pub fn numbers(rounds: impl IntoIterator<Item = i64>) -> Self {
        Self::Fixed(rounds.into_iter().map(RoundMarker::Number).collect())
    }
}

/// Complete description of one game variant.
///
/// ## Example
///
/// ```
/// use scorepad::core::{Annotation, GameDefinition, RoundSpec, ScoringDirection};
///
/// let game = GameDefinition::new("Rummy", RoundSpec::numbers(1..=7))
///     .with_annotation(Annotation::WentOut)
///     .with_dealer()
///     .with_players(2, 6);
///
/// assert!(game.shows_went_out());
/// assert!(!game.bidding());
/// assert_eq!(game.scoring, ScoringDirection::Ascending);
/// ```
#[derive(Clone, Debug)]
pub struct GameDefinition {
    /// Unique name, also the display label.
    pub name: String,

    /// Round enumeration.
    pub rounds: RoundSpec,

    /// The annotation this variant tracks.
    pub annotation: Annotation,

    /// Whether the dealer column is meaningful.
    pub show_dealer: bool,

    /// Cosmetic round label (11 → "J"). Never affects scoring.
    pub round_label: Option<fn(&RoundMarker) -> String>,

    /// Which end of the standings wins.
    pub scoring: ScoringDirection,

    /// Supported player counts.
    pub players: PlayerBounds,
}

impl GameDefinition {
    /// Create a definition with no annotation, no dealer column and
    /// ascending scoring.
    pub fn new(name: impl Into<String>, rounds: RoundSpec) -> Self {
        Self {
            name: name.into(),
            rounds,
            annotation: Annotation::None,
            show_dealer: false,
            round_label: None,
            scoring: ScoringDirection::Ascending,
            players: PlayerBounds::default(),
        }
    }

    /// Set the tracked annotation.
    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotation = annotation;
        self
    }

    /// Show the dealer for each round.
    #[must_use]
    pub fn with_dealer(mut self) -> Self {
        self.show_dealer = true;
        self
    }

    /// Set the cosmetic round label function.
    #[must_use]
    pub fn with_round_label(mut self, label: fn(&RoundMarker) -> String) -> Self {
        self.round_label = Some(label);
        self
    }

    /// Set the scoring direction.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringDirection) -> Self {
        self.scoring = scoring;
        self
    }

    /// Set inclusive player-count bounds.
    #[must_use]
    pub fn with_players(mut self, min: usize, max: usize) -> Self {
        self.players = PlayerBounds::new(min, max);
        self
    }

    /// Does each cell carry a bid?
    #[must_use]
    pub fn bidding(&self) -> bool {
        self.annotation == Annotation::Bidding
    }

    /// Is the went-out flag meaningful?
    #[must_use]
    pub fn shows_went_out(&self) -> bool {
        self.annotation == Annotation::WentOut
    }

    /// Is the penalty card holder meaningful?
    #[must_use]
    pub fn shows_penalty_card(&self) -> bool {
        self.annotation == Annotation::PenaltyCard
    }
}
