//! Hearts: each round passes cards right, left or across, and the holder
//! of the queen of spades is marked per round.

use crate::core::config::{Annotation, GameDefinition, PassRotationConfig, RoundSpec, ScoringDirection};

pub const NAME: &str = "Hearts";

#[must_use]
pub fn definition() -> GameDefinition {
    GameDefinition::new(NAME, RoundSpec::PassRotation(PassRotationConfig::default()))
        .with_annotation(Annotation::PenaltyCard)
        .with_dealer()
        .with_scoring(ScoringDirection::Descending)
        .with_players(3, 8)
}
