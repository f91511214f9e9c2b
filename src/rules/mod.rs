//! Pure game-rule functions.
//!
//! Nothing here holds state: round sequences, dealers, bid warnings and
//! totals are recomputed from the definition and the grid on every read.
//!
//! - `rounds`: round enumeration per variant and table size
//! - `dealer`: dealer rotation
//! - `bidding`: bid total warning and bid scoring
//! - `totals`: final and running totals

pub mod rounds;
pub mod dealer;
pub mod bidding;
pub mod totals;

pub use rounds::{ladder, pass_rotation, resolve};
pub use dealer::dealer_index;
pub use bidding::{bid_succeeded, is_dealer_bid_invalid, BID_BONUS};
pub use totals::{running_totals, totals};
