//! Session lifecycle tests.
//!
//! These tests drive the scorekeeper the way the operator-facing layer
//! does: pick a game, fill in the roster, start, edit cells, reload from
//! the store, and reset.

mod common;

use serde_json::Value;

use scorepad::core::{PlayerId, StoreError};
use scorepad::games::{hearts, mexican_train, three_thirteen, up_and_down, GameRegistry};
use scorepad::grid::GridData;
use scorepad::session::{
    store, KeyValueStore, MemoryStore, Scorekeeper, SessionMeta, StartingDealer,
    GRID_DATA_KEY, SESSION_META_KEY,
};

fn start(game: &str, names: &[&str], dealer: usize) -> Scorekeeper<MemoryStore> {
    common::init_logging();

    let mut keeper = Scorekeeper::open(GameRegistry::builtin(), MemoryStore::new());
    keeper.select_variant(game).unwrap();
    while keeper.setup().unwrap().draft().slots().len() < names.len() {
        assert!(keeper.add_player_slot().unwrap());
    }
    for (slot, name) in names.iter().enumerate() {
        keeper.set_player_name(slot, name).unwrap();
    }
    keeper.start(StartingDealer::Seat(dealer)).unwrap();
    keeper
}

fn reopen(keeper: Scorekeeper<MemoryStore>) -> Scorekeeper<MemoryStore> {
    Scorekeeper::open(GameRegistry::builtin(), keeper.into_store())
}

/// Bids summing to the round's trick count flag the dealer; the made-bid
/// outcome toggles the dealer's score.
#[test]
fn test_bidding_scenario() {
    let mut keeper = start(up_and_down::NAME, &["Ann", "Bo", "Cy", "Di"], 0);

    // 4 players: 10, 9, 8, 7, 6, 5, ... so round 5 deals five cards.
    let round = 5;
    let session = keeper.session().unwrap();
    assert_eq!(session.rounds()[round].tricks(), Some(5));
    let dealer = session.dealer(round).unwrap();
    assert_eq!(dealer, PlayerId::new(1));

    for seat in PlayerId::all(4) {
        keeper.set_bid(round, seat, "1").unwrap();
    }
    assert!(!keeper.session().unwrap().bid_warning(round, dealer).unwrap());

    keeper.set_bid(round, PlayerId::new(2), "2").unwrap();
    let session = keeper.session().unwrap();
    assert!(session.bid_warning(round, dealer).unwrap());
    assert!(!session.bid_warning(round, PlayerId::new(2)).unwrap());

    assert_eq!(keeper.apply_bid_outcome(round, dealer, true).unwrap(), Some(11));
    assert!(keeper.session().unwrap().bid_succeeded(round, dealer).unwrap());

    assert_eq!(keeper.apply_bid_outcome(round, dealer, true).unwrap(), None);
    assert_eq!(keeper.session().unwrap().cell(round, dealer).unwrap().score, None);
}

/// Declining the reset leaves both keys untouched.
#[test]
fn test_reset_declined() {
    let mut keeper = start(three_thirteen::NAME, &["Ann", "Bo"], 0);
    keeper.set_score(0, PlayerId::new(0), "15").unwrap();
    let before = keeper.store().clone();

    assert!(!keeper.reset(|_| false));

    assert!(keeper.is_in_progress());
    assert_eq!(keeper.store(), &before);
    assert_eq!(keeper.session().unwrap().totals().into_vec(), vec![15, 0]);
}

/// Confirming the reset clears both keys and returns to Setup.
#[test]
fn test_reset_confirmed() {
    let mut keeper = start(hearts::NAME, &["Ann", "Bo", "Cy"], 0);
    keeper.set_penalty_holder(0, PlayerId::new(1)).unwrap();

    assert!(keeper.reset(|session| session.roster().len() == 3));

    assert!(!keeper.is_in_progress());
    assert!(!keeper.store().contains(SESSION_META_KEY));
    assert!(!keeper.store().contains(GRID_DATA_KEY));

    let setup = keeper.setup().unwrap();
    assert_eq!(setup.definition().name, hearts::NAME);
    assert_eq!(setup.draft().filled(), 0);

    let reopened = reopen(keeper);
    assert!(!reopened.is_in_progress());
    assert_eq!(reopened.definition().name, three_thirteen::NAME);
}

/// A reload rehydrates the session and every kind of cell edit.
#[test]
fn test_reload_restores_session() {
    let mut keeper = start(three_thirteen::NAME, &["Ann", "Bo", "Cy"], 2);
    keeper.set_score(0, PlayerId::new(0), "12").unwrap();
    keeper.set_score(4, PlayerId::new(2), "7").unwrap();
    keeper.toggle_went_out(4, PlayerId::new(1)).unwrap();
    let grid = keeper.session().unwrap().grid().clone();

    let keeper = reopen(keeper);
    let session = keeper.session().unwrap();

    assert_eq!(session.definition().name, three_thirteen::NAME);
    assert_eq!(session.roster().names(), &["Ann", "Bo", "Cy"]);
    assert_eq!(session.starting_dealer(), 2);
    assert_eq!(session.dealer(0).unwrap(), PlayerId::new(2));
    assert_eq!(session.grid(), &grid);
    assert_eq!(session.totals().into_vec(), vec![12, 0, 7]);
}

/// A persisted grid whose shape no longer matches is replaced by an empty one.
#[test]
fn test_reload_discards_mismatched_grid() {
    let mut keeper = start(mexican_train::NAME, &["Ann", "Bo"], 0);
    keeper.set_score(0, PlayerId::new(0), "30").unwrap();

    let mut store = keeper.into_store();
    let mut meta: SessionMeta = store::load(&store, SESSION_META_KEY).unwrap().unwrap();
    meta.roster.push("Cy".to_string());
    store::save(&mut store, SESSION_META_KEY, &meta).unwrap();

    let keeper = Scorekeeper::open(GameRegistry::builtin(), store);
    let session = keeper.session().unwrap();

    assert!(session.grid().has_shape(13, 3));
    assert_eq!(session.totals().into_vec(), vec![0, 0, 0]);
}

/// An unknown persisted game name falls back to the default variant.
#[test]
fn test_reload_unknown_game_uses_default() {
    let mut store = MemoryStore::new();
    let meta = SessionMeta {
        game_name: "Canasta".to_string(),
        roster: vec!["Ann".to_string(), "Bo".to_string()],
        starting_dealer_offset: 1,
        in_progress: true,
    };
    store::save(&mut store, SESSION_META_KEY, &meta).unwrap();

    let keeper = Scorekeeper::open(GameRegistry::builtin(), store);
    let session = keeper.session().unwrap();

    assert_eq!(session.definition().name, three_thirteen::NAME);
    assert!(session.grid().has_shape(11, 2));
}

/// A persisted roster outside the variant's bounds returns to Setup.
#[test]
fn test_reload_invalid_roster_returns_to_setup() {
    let mut store = MemoryStore::new();
    let meta = SessionMeta {
        game_name: hearts::NAME.to_string(),
        roster: vec!["Ann".to_string(), "Bo".to_string()],
        starting_dealer_offset: 0,
        in_progress: true,
    };
    store::save(&mut store, SESSION_META_KEY, &meta).unwrap();

    let keeper = Scorekeeper::open(GameRegistry::builtin(), store);
    let setup = keeper.setup().unwrap();

    assert_eq!(setup.definition().name, hearts::NAME);
    assert_eq!(setup.draft().slots(), &["Ann", "Bo", ""]);
}

/// Garbage under either key degrades to a fresh state.
#[test]
fn test_reload_malformed_values() {
    let mut store = MemoryStore::new();
    store.set(SESSION_META_KEY, Value::from(42)).unwrap();
    let keeper = Scorekeeper::open(GameRegistry::builtin(), store);
    assert!(!keeper.is_in_progress());

    let mut keeper = start(three_thirteen::NAME, &["Ann", "Bo"], 0);
    keeper.set_score(0, PlayerId::new(0), "9").unwrap();
    let mut store = keeper.into_store();
    store.set(GRID_DATA_KEY, Value::from("corrupt")).unwrap();

    let keeper = Scorekeeper::open(GameRegistry::builtin(), store);
    let session = keeper.session().unwrap();
    assert!(session.grid().has_shape(11, 2));
    assert_eq!(session.totals().into_vec(), vec![0, 0]);
}

/// Setup progress survives a reload.
#[test]
fn test_reload_restores_setup_draft() {
    common::init_logging();

    let mut keeper = Scorekeeper::open(GameRegistry::builtin(), MemoryStore::new());
    keeper.select_variant(up_and_down::NAME).unwrap();
    keeper.set_player_name(0, "Ann").unwrap();

    let keeper = reopen(keeper);
    let setup = keeper.setup().unwrap();

    assert_eq!(setup.definition().name, up_and_down::NAME);
    assert_eq!(setup.draft().slots(), &["Ann", ""]);
}

/// Every grid edit is written through.
#[test]
fn test_edits_are_persisted() {
    let mut keeper = start(three_thirteen::NAME, &["Ann", "Bo"], 0);
    keeper.set_score(2, PlayerId::new(1), "21").unwrap();

    let data: GridData = store::load(keeper.store(), GRID_DATA_KEY).unwrap().unwrap();
    assert_eq!(data.scores[2][1], Some(21));
}

/// Store that refuses every write.
#[derive(Default)]
struct BrokenStore {
    writes: usize,
}

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<Value>, StoreError> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: Value) -> Result<(), StoreError> {
        self.writes += 1;
        Err(StoreError::Backend("disk full".to_string()))
    }

    fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend("disk full".to_string()))
    }
}

/// A failing store never blocks play.
#[test]
fn test_store_failures_do_not_block_edits() {
    common::init_logging();

    let mut keeper = Scorekeeper::open(GameRegistry::builtin(), BrokenStore::default());
    keeper.set_player_name(0, "Ann").unwrap();
    keeper.set_player_name(1, "Bo").unwrap();
    keeper.start(StartingDealer::Drawn(7)).unwrap();

    assert_eq!(keeper.set_score(0, PlayerId::new(1), "4").unwrap(), Some(4));
    assert!(keeper.toggle_went_out(0, PlayerId::new(1)).unwrap());
    assert!(keeper.store().writes >= 5);

    assert!(keeper.reset(|_| true));
    assert!(!keeper.is_in_progress());
}
