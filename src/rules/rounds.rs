//! Round sequence generation.
//!
//! `resolve` turns a variant's `RoundSpec` into the concrete list of rounds
//! for a table size. The result fixes the grid's row count, so every
//! generator here is a pure function of its inputs: a reload must resolve
//! the same shape or the persisted grid is discarded.

use crate::core::config::{GameDefinition, LadderConfig, PassRotationConfig, RoundSpec};
use crate::core::round::{RoundDescriptor, RoundMarker};

/// Label of the pass-across round in the pass rotation.
pub const ACROSS: &str = "Across";

/// Resolve the ordered rounds of `definition` for `player_count` players.
///
/// Fixed round lists ignore the player count.
#[must_use]
pub fn resolve(definition: &GameDefinition, player_count: usize) -> Vec<RoundDescriptor> {
    let markers = match &definition.rounds {
        RoundSpec::Fixed(markers) => markers.clone(),
        RoundSpec::Ladder(config) => ladder(player_count, config),
        RoundSpec::PassRotation(config) => pass_rotation(player_count, config),
        RoundSpec::Custom(generate) => generate(player_count),
    };

    markers
        .into_iter()
        .map(|marker| RoundDescriptor::new(marker, definition.round_label))
        .collect()
}

/// Hand sizes from the peak down to 1, then from 2 back up to the peak.
///
/// The peak is `min(deck_size / player_count, max_hand)`. It opens and
/// closes the sequence, the single 1-card round sits in the middle, and
/// there are `2 * peak - 1` rounds.
///
/// ```
/// use scorepad::core::{LadderConfig, RoundMarker};
/// use scorepad::rules::rounds::ladder;
///
/// let rounds: Vec<i64> = ladder(13, &LadderConfig::default())
///     .iter()
///     .filter_map(RoundMarker::as_number)
///     .collect();
/// assert_eq!(rounds, vec![4, 3, 2, 1, 2, 3, 4]);
/// ```
#[must_use]
pub fn ladder(player_count: usize, config: &LadderConfig) -> Vec<RoundMarker> {
    let peak = config.peak(player_count) as i64;

    (1..=peak)
        .rev()
        .chain(2..=peak)
        .map(RoundMarker::Number)
        .collect()
}

/// Card-passing directions: "R{k}" then "L{k}" for k = 1, 2, ... up to
/// `player_count / 2`, then back to k = 1.
///
/// At an even table the right-pass slot at the largest k is replaced by a
/// single "Across" round before the cycle restarts.
#[must_use]
pub fn pass_rotation(player_count: usize, config: &PassRotationConfig) -> Vec<RoundMarker> {
    let max_k = player_count / 2;
    let even = player_count % 2 == 0;

    let mut rounds = Vec::with_capacity(config.rounds);
    let mut k = 1;
    let mut pass_right = true;

    for _ in 0..config.rounds {
        if pass_right {
            if k == max_k && even {
                rounds.push(RoundMarker::label(ACROSS));
                k = 1;
            } else {
                rounds.push(RoundMarker::Label(format!("R{k}")));
                pass_right = false;
            }
        } else {
            rounds.push(RoundMarker::Label(format!("L{k}")));
            k = if k == max_k { 1 } else { k + 1 };
            pass_right = true;
        }
    }

    rounds
}
