//! Mexican Train dominoes: thirteen rounds from the double twelve down to
//! the double blank. Lowest total wins.

use crate::core::config::{Annotation, GameDefinition, RoundSpec, ScoringDirection};
use crate::core::round::RoundMarker;

pub const NAME: &str = "Mexican Train";

/// The engine double of the round, e.g. "12 | 12".
pub fn engine_double(round: &RoundMarker) -> String {
    format!("{round} | {round}")
}

#[must_use]
pub fn definition() -> GameDefinition {
    GameDefinition::new(NAME, RoundSpec::numbers((0..=12).rev()))
        .with_annotation(Annotation::WentOut)
        .with_dealer()
        .with_round_label(engine_double)
        .with_scoring(ScoringDirection::Ascending)
        .with_players(2, 20)
}
