//! Dealer rotation.

use crate::core::player::PlayerId;

/// Seat dealing round `round` when `starting_dealer` dealt the first round.
///
/// The deal passes one seat along the roster each round.
///
/// Panics if `player_count` is zero.
#[must_use]
pub fn dealer_index(round: usize, starting_dealer: usize, player_count: usize) -> PlayerId {
    assert!(player_count > 0, "Must have at least 1 player");
    PlayerId(((round + starting_dealer) % player_count) as u8)
}
