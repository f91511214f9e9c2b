//! Up and down the river ("Oh Poop"): hand sizes shrink to one card and
//! grow back, and every player bids the tricks they will take.

use crate::core::config::{Annotation, GameDefinition, LadderConfig, RoundSpec, ScoringDirection};

pub const NAME: &str = "Oh Poop";

#[must_use]
pub fn definition() -> GameDefinition {
    GameDefinition::new(NAME, RoundSpec::Ladder(LadderConfig::default()))
        .with_annotation(Annotation::Bidding)
        .with_dealer()
        .with_scoring(ScoringDirection::Ascending)
        .with_players(2, 20)
}
