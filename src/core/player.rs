//! Seats and per-seat values.
//!
//! A seat is a position in the roster. Its index fixes the column a player
//! scores in and where the dealer rotation starts counting from.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Roster position, 0-based. Tables hold at most 255 seats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(seat: u8) -> Self {
        Self(seat)
    }

    /// Column index of the seat.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Seats of a table with `player_count` players, in roster order.
    ///
    /// ```
    /// use scorepad::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(seats.len(), 4);
    /// assert_eq!(seats[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// One value per seat, in roster order. Standings are reported this way.
///
/// ```
/// use scorepad::core::{PlayerId, PlayerMap};
///
/// let mut standings = PlayerMap::with_value(3, 0i64);
/// for (seat, total) in standings.iter_mut() {
///     *total += 10 * seat.index() as i64;
/// }
///
/// assert_eq!(standings[PlayerId::new(2)], 20);
/// assert_eq!(standings.as_slice(), &[0, 10, 20]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerMap<T> {
    values: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Every seat starts at `value`.
    ///
    /// Panics unless there are 1 to 255 seats.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");
        Self {
            values: vec![value; player_count],
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all(self.values.len()).zip(self.values.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::all(self.values.len()).zip(self.values.iter_mut())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, seat: PlayerId) -> &T {
        &self.values[seat.index()]
    }
}
