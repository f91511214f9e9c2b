//! Bid checks and bid scoring.
//!
//! A made bid scores `BID_BONUS + bid`; a missed bid scores zero. The
//! "no exact total" house rule says the bids of a round must not add up to
//! the round's trick count, which makes the dealer (the last to bid) the
//! seat to warn. The warning is advisory and never blocks entry.

use crate::core::player::PlayerId;

/// Points awarded on top of the bid when it is made.
pub const BID_BONUS: i64 = 10;

/// True when every seat has bid and the bids sum to `tricks`.
#[must_use]
pub fn bid_sum_matches(tricks: i64, bids: &[Option<i64>]) -> bool {
    let mut sum = 0i64;
    for bid in bids {
        match bid {
            Some(b) => sum = sum.saturating_add(*b),
            None => return false,
        }
    }
    !bids.is_empty() && sum == tricks
}

/// Whether `seat` should be warned about the bid total of a round.
///
/// `tricks` is the round's trick count; rounds with a symbolic marker pass
/// `None` and are never flagged.
#[must_use]
pub fn is_dealer_bid_invalid(
    tricks: Option<i64>,
    seat: PlayerId,
    dealer: PlayerId,
    bids: &[Option<i64>],
) -> bool {
    match tricks {
        Some(tricks) => seat == dealer && bid_sum_matches(tricks, bids),
        None => false,
    }
}

/// True iff both values are present and the score is the made-bid score.
#[must_use]
pub fn bid_succeeded(score: Option<i64>, bid: Option<i64>) -> bool {
    match (score, bid) {
        (Some(score), Some(bid)) => bid.checked_add(BID_BONUS) == Some(score),
        _ => false,
    }
}

/// Score recorded for a bid outcome.
///
/// `None` when a made bid is too large to score.
#[must_use]
pub fn bid_outcome_score(bid: i64, made: bool) -> Option<i64> {
    if made {
        bid.checked_add(BID_BONUS)
    } else {
        Some(0)
    }
}
