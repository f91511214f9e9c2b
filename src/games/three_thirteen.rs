//! 3-13: eleven rounds dealing three up to thirteen cards, the round's
//! rank being wild. Lowest total wins.

use crate::core::config::{Annotation, GameDefinition, RoundSpec, ScoringDirection};
use crate::core::round::RoundMarker;

pub const NAME: &str = "3-13";

/// Face card name of the wild rank.
pub fn wild_rank(round: &RoundMarker) -> String {
    match round.as_number() {
        Some(11) => "J".to_string(),
        Some(12) => "Q".to_string(),
        Some(13) => "K".to_string(),
        _ => round.to_string(),
    }
}

#[must_use]
pub fn definition() -> GameDefinition {
    GameDefinition::new(NAME, RoundSpec::numbers(3..=13))
        .with_annotation(Annotation::WentOut)
        .with_dealer()
        .with_round_label(wild_rank)
        .with_scoring(ScoringDirection::Ascending)
        .with_players(2, 6)
}
