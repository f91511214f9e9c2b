//! A running game: variant, roster, first dealer and score grid.
//!
//! The grid shape is fixed when the session is created: the variant's
//! rounds for the roster size by the roster size. Edits of annotations the
//! variant does not track are rejected with
//! [`ScoreError::AnnotationDisabled`].

use tracing::info;

use super::store::SessionMeta;
use crate::core::config::{Annotation, GameDefinition};
use crate::core::error::ScoreError;
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::roster::Roster;
use crate::core::round::RoundDescriptor;
use crate::grid::{Cell, GridData, ScoreGrid};
use crate::rules::{bidding, dealer, rounds, totals};

/// Variant + roster + starting dealer + grid.
#[derive(Clone, Debug)]
pub struct GameSession {
    definition: GameDefinition,
    roster: Roster,
    starting_dealer: usize,
    rounds: Vec<RoundDescriptor>,
    grid: ScoreGrid,
}

impl GameSession {
    /// Start a session with an empty grid.
    ///
    /// `starting_dealer` is taken modulo the roster size.
    #[must_use]
    pub fn new(definition: GameDefinition, roster: Roster, starting_dealer: usize) -> Self {
        Self::restore(definition, roster, starting_dealer, None)
    }

    /// Rebuild a session, reusing persisted grid data when its shape
    /// matches the freshly resolved one.
    #[must_use]
    pub fn restore(
        definition: GameDefinition,
        roster: Roster,
        starting_dealer: usize,
        data: Option<&GridData>,
    ) -> Self {
        let players = roster.len();
        let rounds = rounds::resolve(&definition, players);
        let grid = match data {
            Some(data) => ScoreGrid::from_data(data, rounds.len(), players),
            None => ScoreGrid::new(rounds.len(), players),
        };
        let starting_dealer = starting_dealer.checked_rem(players).unwrap_or(0);

        info!(
            game = %definition.name,
            players,
            rounds = rounds.len(),
            starting_dealer,
            "session ready"
        );

        Self {
            definition,
            roster,
            starting_dealer,
            rounds,
            grid,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn definition(&self) -> &GameDefinition {
        &self.definition
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Seat that deals the first round.
    #[must_use]
    pub fn starting_dealer(&self) -> usize {
        self.starting_dealer
    }

    #[must_use]
    pub fn rounds(&self) -> &[RoundDescriptor] {
        &self.rounds
    }

    #[must_use]
    pub fn grid(&self) -> &ScoreGrid {
        &self.grid
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.roster.len()
    }

    /// Get a cell.
    pub fn cell(&self, round: usize, seat: PlayerId) -> Result<&Cell, ScoreError> {
        self.grid.cell(round, seat.index())
    }

    /// Session-level state for persistence.
    #[must_use]
    pub fn meta(&self) -> SessionMeta {
        SessionMeta {
            game_name: self.definition.name.clone(),
            roster: self.roster.names().to_vec(),
            starting_dealer_offset: self.starting_dealer,
            in_progress: true,
        }
    }

    fn require(&self, annotation: Annotation) -> Result<(), ScoreError> {
        if self.definition.annotation == annotation {
            Ok(())
        } else {
            Err(ScoreError::AnnotationDisabled(annotation))
        }
    }

    fn round(&self, round: usize) -> Result<&RoundDescriptor, ScoreError> {
        self.rounds.get(round).ok_or(ScoreError::RoundOutOfRange {
            round,
            rounds: self.rounds.len(),
        })
    }

    // === Edits ===

    /// Enter a score. Non-numeric text leaves the cell unset.
    pub fn set_score(
        &mut self,
        round: usize,
        seat: PlayerId,
        raw: &str,
    ) -> Result<Option<i64>, ScoreError> {
        self.grid.set_score(round, seat.index(), raw)
    }

    /// Enter a bid. Bidding variants only.
    pub fn set_bid(
        &mut self,
        round: usize,
        seat: PlayerId,
        raw: &str,
    ) -> Result<Option<i64>, ScoreError> {
        self.require(Annotation::Bidding)?;
        self.grid.set_bid(round, seat.index(), raw)
    }

    /// Flip the went-out flag. Went-out variants only.
    pub fn toggle_went_out(&mut self, round: usize, seat: PlayerId) -> Result<bool, ScoreError> {
        self.require(Annotation::WentOut)?;
        self.grid.toggle_went_out(round, seat.index())
    }

    /// Flip the penalty card holder of a round. Penalty card variants only.
    pub fn set_penalty_holder(&mut self, round: usize, seat: PlayerId) -> Result<bool, ScoreError> {
        self.require(Annotation::PenaltyCard)?;
        self.grid.set_penalty_holder(round, seat.index())
    }

    /// Score a bid as made or missed, toggling. Bidding variants only.
    pub fn apply_bid_outcome(
        &mut self,
        round: usize,
        seat: PlayerId,
        made: bool,
    ) -> Result<Option<i64>, ScoreError> {
        self.require(Annotation::Bidding)?;
        self.grid.apply_bid_outcome(round, seat.index(), made)
    }

    // === Derived views ===

    /// Seat dealing `round`.
    pub fn dealer(&self, round: usize) -> Result<PlayerId, ScoreError> {
        self.round(round)?;
        Ok(dealer::dealer_index(round, self.starting_dealer, self.player_count()))
    }

    /// Whether `seat` should be warned that the bids of `round` add up to
    /// its trick count. Always false outside bidding variants.
    pub fn bid_warning(&self, round: usize, seat: PlayerId) -> Result<bool, ScoreError> {
        let tricks = self.round(round)?.tricks();
        if seat.index() >= self.player_count() {
            return Err(ScoreError::PlayerOutOfRange {
                player: seat.index(),
                players: self.player_count(),
            });
        }
        if !self.definition.bidding() {
            return Ok(false);
        }

        let dealer = self.dealer(round)?;
        let bids = self.grid.bids(round)?;
        Ok(bidding::is_dealer_bid_invalid(tricks, seat, dealer, &bids))
    }

    /// Whether `seat` made its bid in `round`.
    pub fn bid_succeeded(&self, round: usize, seat: PlayerId) -> Result<bool, ScoreError> {
        Ok(self.cell(round, seat)?.bid_succeeded())
    }

    /// Final total per player.
    #[must_use]
    pub fn totals(&self) -> PlayerMap<i64> {
        totals::totals(&self.grid)
    }

    /// Standings after each round.
    #[must_use]
    pub fn running_totals(&self) -> Vec<PlayerMap<i64>> {
        totals::running_totals(&self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{hearts, three_thirteen, up_and_down};

    fn roster(names: &[&str], game: &GameDefinition) -> Roster {
        Roster::new(names.iter().copied(), game.players).unwrap()
    }

    fn three_thirteen_session() -> GameSession {
        let game = three_thirteen::definition();
        let roster = roster(&["Ann", "Bo", "Cy"], &game);
        GameSession::new(game, roster, 1)
    }

    #[test]
    fn test_grid_shape_follows_rounds_and_roster() {
        let session = three_thirteen_session();
        assert!(session.grid().has_shape(11, 3));
        assert_eq!(session.rounds().len(), 11);
    }

    #[test]
    fn test_dealer_rotates_from_offset() {
        let session = three_thirteen_session();
        assert_eq!(session.dealer(0).unwrap(), PlayerId::new(1));
        assert_eq!(session.dealer(2).unwrap(), PlayerId::new(0));
        assert!(session.dealer(11).is_err());
    }

    #[test]
    fn test_starting_dealer_wraps() {
        let game = three_thirteen::definition();
        let roster = roster(&["Ann", "Bo"], &game);
        assert_eq!(GameSession::new(game, roster, 5).starting_dealer(), 1);
    }

    #[test]
    fn test_annotation_gating() {
        let mut session = three_thirteen_session();
        let seat = PlayerId::new(0);

        assert!(session.toggle_went_out(0, seat).unwrap());
        assert_eq!(
            session.set_bid(0, seat, "2"),
            Err(ScoreError::AnnotationDisabled(Annotation::Bidding))
        );
        assert_eq!(
            session.set_penalty_holder(0, seat),
            Err(ScoreError::AnnotationDisabled(Annotation::PenaltyCard))
        );
        assert_eq!(
            session.apply_bid_outcome(0, seat, true),
            Err(ScoreError::AnnotationDisabled(Annotation::Bidding))
        );
    }

    #[test]
    fn test_penalty_holder_in_hearts() {
        let game = hearts::definition();
        let roster = roster(&["Ann", "Bo", "Cy", "Di"], &game);
        let mut session = GameSession::new(game, roster, 0);

        session.set_penalty_holder(0, PlayerId::new(0)).unwrap();
        session.set_penalty_holder(0, PlayerId::new(2)).unwrap();

        assert!(!session.cell(0, PlayerId::new(0)).unwrap().penalty_holder);
        assert!(session.cell(0, PlayerId::new(2)).unwrap().penalty_holder);
        assert_eq!(
            session.toggle_went_out(0, PlayerId::new(1)),
            Err(ScoreError::AnnotationDisabled(Annotation::WentOut))
        );
    }

    #[test]
    fn test_bid_warning_only_for_dealer() {
        let game = up_and_down::definition();
        let roster = roster(&["Ann", "Bo"], &game);
        let mut session = GameSession::new(game, roster, 0);

        // Round 0 deals 10 cards; seat 0 deals.
        session.set_bid(0, PlayerId::new(0), "4").unwrap();
        session.set_bid(0, PlayerId::new(1), "6").unwrap();

        assert!(session.bid_warning(0, PlayerId::new(0)).unwrap());
        assert!(!session.bid_warning(0, PlayerId::new(1)).unwrap());
        assert!(session.bid_warning(0, PlayerId::new(2)).is_err());
    }

    #[test]
    fn test_bid_warning_off_outside_bidding() {
        let session = three_thirteen_session();
        assert!(!session.bid_warning(0, PlayerId::new(1)).unwrap());
    }

    #[test]
    fn test_totals_and_running_totals() {
        let mut session = three_thirteen_session();
        session.set_score(0, PlayerId::new(0), "10").unwrap();
        session.set_score(1, PlayerId::new(0), "5").unwrap();
        session.set_score(1, PlayerId::new(2), "x").unwrap();

        assert_eq!(session.totals().into_vec(), vec![15, 0, 0]);
        assert_eq!(session.running_totals()[0].as_slice(), &[10, 0, 0]);
        assert_eq!(session.running_totals().len(), 11);
    }

    #[test]
    fn test_restore_reuses_matching_grid() {
        let mut session = three_thirteen_session();
        session.set_score(3, PlayerId::new(1), "42").unwrap();
        let data = session.grid().to_data();

        let restored = GameSession::restore(
            session.definition().clone(),
            session.roster().clone(),
            session.starting_dealer(),
            Some(&data),
        );
        assert_eq!(restored.grid(), session.grid());
    }

    #[test]
    fn test_meta() {
        let meta = three_thirteen_session().meta();
        assert_eq!(meta.game_name, "3-13");
        assert_eq!(meta.roster, vec!["Ann", "Bo", "Cy"]);
        assert_eq!(meta.starting_dealer_offset, 1);
        assert!(meta.in_progress);
    }
}
