//! The scorekeeper state machine.
//!
//! ## Phases
//!
//! - `Setup`: a variant is selected and the roster is being assembled. No
//!   grid exists.
//! - `InProgress`: a [`GameSession`] is running and its grid is edited.
//!
//! `start` moves Setup → InProgress once the roster fits the variant's
//! bounds. `reset` moves back, but only after the operator confirms; it
//! clears everything persisted.
//!
//! ## Persistence
//!
//! Every change is written to the store right after it is applied:
//! session-level changes to `sessionMeta`, grid edits to `gridData`. A
//! failed write is logged and otherwise ignored, so the store can never
//! block the next edit.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{info, warn};

use super::game_session::GameSession;
use super::store::{self, KeyValueStore, SessionMeta, GRID_DATA_KEY, SESSION_META_KEY};
use crate::core::config::GameDefinition;
use crate::core::error::ScoreError;
use crate::core::player::PlayerId;
use crate::core::roster::{Roster, RosterDraft};
use crate::games::GameRegistry;
use crate::grid::GridData;

/// How the first dealer is chosen when a game starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartingDealer {
    /// An explicit seat, taken modulo the roster size.
    Seat(usize),
    /// A seat drawn reproducibly from a seed.
    Drawn(u64),
}

impl StartingDealer {
    fn resolve(self, player_count: usize) -> usize {
        match self {
            StartingDealer::Seat(seat) => seat % player_count,
            StartingDealer::Drawn(seed) => {
                ChaCha8Rng::seed_from_u64(seed).gen_range(0..player_count)
            }
        }
    }
}

/// Variant and roster draft of a game being set up.
#[derive(Clone, Debug)]
pub struct Setup {
    definition: GameDefinition,
    draft: RosterDraft,
}

impl Setup {
    fn new(definition: GameDefinition) -> Self {
        let draft = RosterDraft::new(definition.players);
        Self { definition, draft }
    }

    #[must_use]
    pub fn definition(&self) -> &GameDefinition {
        &self.definition
    }

    #[must_use]
    pub fn draft(&self) -> &RosterDraft {
        &self.draft
    }

    fn meta(&self) -> SessionMeta {
        SessionMeta {
            game_name: self.definition.name.clone(),
            roster: self.draft.slots().to_vec(),
            starting_dealer_offset: 0,
            in_progress: false,
        }
    }
}

/// Session lifecycle phase.
#[derive(Clone, Debug)]
pub enum Phase {
    Setup(Setup),
    InProgress(GameSession),
}

/// Owns the registry, the store and the current phase.
pub struct Scorekeeper<S: KeyValueStore> {
    registry: GameRegistry,
    store: S,
    phase: Phase,
}

impl<S: KeyValueStore> Scorekeeper<S> {
    /// Open the scorekeeper, rehydrating any session persisted in `store`.
    ///
    /// An unknown persisted variant falls back to the registry default. A
    /// persisted grid whose shape does not match the rehydrated session is
    /// discarded. A persisted roster that no longer fits its variant
    /// returns to Setup with the names pre-filled.
    ///
    /// Panics if the registry is empty.
    pub fn open(registry: GameRegistry, store: S) -> Self {
        let default = registry
            .default_definition()
            .cloned()
            .expect("Registry must contain at least one game");

        let meta: Option<SessionMeta> = store::load(&store, SESSION_META_KEY).unwrap_or_else(|e| {
            warn!(error = %e, "unreadable session meta, starting fresh");
            None
        });

        let phase = match meta {
            None => Phase::Setup(Setup::new(default)),
            Some(meta) => Self::rehydrate(&registry, &store, default, meta),
        };

        Self {
            registry,
            store,
            phase,
        }
    }

    fn rehydrate(registry: &GameRegistry, store: &S, default: GameDefinition, meta: SessionMeta) -> Phase {
        let definition = match registry.get(&meta.game_name) {
            Some(game) => game.clone(),
            None => {
                warn!(game = %meta.game_name, fallback = %default.name, "unknown persisted game");
                default
            }
        };

        if !meta.in_progress {
            let draft = RosterDraft::from_names(meta.roster, definition.players);
            return Phase::Setup(Setup { definition, draft });
        }

        match Roster::new(&meta.roster, definition.players) {
            Ok(roster) => {
                let data: Option<GridData> = store::load(store, GRID_DATA_KEY).unwrap_or_else(|e| {
                    warn!(error = %e, "unreadable grid data, starting empty");
                    None
                });
                info!(game = %definition.name, "rehydrating session");
                Phase::InProgress(GameSession::restore(
                    definition,
                    roster,
                    meta.starting_dealer_offset,
                    data.as_ref(),
                ))
            }
            Err(e) => {
                warn!(error = %e, "persisted roster rejected, returning to setup");
                let draft = RosterDraft::from_names(meta.roster, definition.players);
                Phase::Setup(Setup { definition, draft })
            }
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        matches!(self.phase, Phase::InProgress(_))
    }

    /// The running session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&GameSession> {
        match &self.phase {
            Phase::InProgress(session) => Some(session),
            Phase::Setup(_) => None,
        }
    }

    /// The setup state, if no game is running.
    #[must_use]
    pub fn setup(&self) -> Option<&Setup> {
        match &self.phase {
            Phase::Setup(setup) => Some(setup),
            Phase::InProgress(_) => None,
        }
    }

    /// The selected or running variant.
    #[must_use]
    pub fn definition(&self) -> &GameDefinition {
        match &self.phase {
            Phase::Setup(setup) => &setup.definition,
            Phase::InProgress(session) => session.definition(),
        }
    }

    #[must_use]
    pub fn registry(&self) -> &GameRegistry {
        &self.registry
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    fn persist<T: Serialize>(&mut self, key: &str, value: &T) {
        if let Err(e) = store::save(&mut self.store, key, value) {
            warn!(key, error = %e, "failed to persist");
        }
    }

    fn clear(&mut self, key: &str) {
        if let Err(e) = self.store.remove(key) {
            warn!(key, error = %e, "failed to clear");
        }
    }

    // === Setup ===

    fn setup_mut(&mut self) -> Result<&mut Setup, ScoreError> {
        match &mut self.phase {
            Phase::Setup(setup) => Ok(setup),
            Phase::InProgress(_) => Err(ScoreError::AlreadyInProgress),
        }
    }

    fn edit_setup<T>(&mut self, f: impl FnOnce(&mut Setup) -> Result<T, ScoreError>) -> Result<T, ScoreError> {
        let setup = self.setup_mut()?;
        let out = f(setup)?;
        let meta = setup.meta();
        self.persist(SESSION_META_KEY, &meta);
        Ok(out)
    }

    /// Select a variant by name. Unknown names select the default variant.
    /// The roster draft is refitted to the new bounds.
    pub fn select_variant(&mut self, name: &str) -> Result<&GameDefinition, ScoreError> {
        if !self.registry.contains(name) {
            warn!(game = name, "unknown game selected, using default");
        }
        let Some(definition) = self.registry.find_or_default(name).cloned() else {
            return Ok(self.definition());
        };

        self.edit_setup(|setup| {
            setup.draft.refit(definition.players);
            setup.definition = definition;
            Ok(())
        })?;
        Ok(self.definition())
    }

    /// Set the name in a roster slot.
    pub fn set_player_name(&mut self, slot: usize, name: &str) -> Result<(), ScoreError> {
        self.edit_setup(|setup| setup.draft.set_name(slot, name))
    }

    /// Add a blank roster slot. Returns false at the variant maximum.
    pub fn add_player_slot(&mut self) -> Result<bool, ScoreError> {
        self.edit_setup(|setup| Ok(setup.draft.add_slot()))
    }

    /// Remove a roster slot. Returns false at the variant minimum.
    pub fn remove_player_slot(&mut self, slot: usize) -> Result<bool, ScoreError> {
        self.edit_setup(|setup| Ok(setup.draft.remove_slot(slot)))
    }

    /// Confirm the roster and start the game.
    ///
    /// Blank slots are dropped. The grid shape and the first dealer are fixed
    /// for the lifetime of the session.
    pub fn start(&mut self, dealer: StartingDealer) -> Result<&GameSession, ScoreError> {
        let setup = self.setup_mut()?;
        let roster = setup.draft.confirm()?;
        let starting_dealer = dealer.resolve(roster.len());
        let session = GameSession::new(setup.definition.clone(), roster, starting_dealer);

        info!(
            game = %session.definition().name,
            players = session.player_count(),
            starting_dealer,
            "game started"
        );

        self.persist(SESSION_META_KEY, &session.meta());
        self.persist(GRID_DATA_KEY, &session.grid().to_data());
        self.phase = Phase::InProgress(session);

        self.session().ok_or(ScoreError::NotInProgress)
    }

    /// Return to Setup after the operator confirms.
    ///
    /// `confirm` is only asked while a game is running. Declining leaves
    /// everything, persisted state included, untouched. Returns whether the
    /// reset happened.
    pub fn reset(&mut self, confirm: impl FnOnce(&GameSession) -> bool) -> bool {
        let Phase::InProgress(session) = &self.phase else {
            return false;
        };
        if !confirm(session) {
            info!("reset declined");
            return false;
        }

        let setup = Setup::new(session.definition().clone());
        self.clear(SESSION_META_KEY);
        self.clear(GRID_DATA_KEY);
        self.phase = Phase::Setup(setup);
        info!("game reset");
        true
    }

    // === Grid edits ===

    fn edit<T>(&mut self, f: impl FnOnce(&mut GameSession) -> Result<T, ScoreError>) -> Result<T, ScoreError> {
        let Phase::InProgress(session) = &mut self.phase else {
            return Err(ScoreError::NotInProgress);
        };
        let out = f(session)?;
        let data = session.grid().to_data();
        self.persist(GRID_DATA_KEY, &data);
        Ok(out)
    }

    /// Enter a score.
    pub fn set_score(&mut self, round: usize, seat: PlayerId, raw: &str) -> Result<Option<i64>, ScoreError> {
        self.edit(|session| session.set_score(round, seat, raw))
    }

    /// Enter a bid.
    pub fn set_bid(&mut self, round: usize, seat: PlayerId, raw: &str) -> Result<Option<i64>, ScoreError> {
        self.edit(|session| session.set_bid(round, seat, raw))
    }

    /// Flip a went-out flag.
    pub fn toggle_went_out(&mut self, round: usize, seat: PlayerId) -> Result<bool, ScoreError> {
        self.edit(|session| session.toggle_went_out(round, seat))
    }

    /// Flip the penalty card holder of a round.
    pub fn set_penalty_holder(&mut self, round: usize, seat: PlayerId) -> Result<bool, ScoreError> {
        self.edit(|session| session.set_penalty_holder(round, seat))
    }

    /// Score a bid as made or missed.
    pub fn apply_bid_outcome(&mut self, round: usize, seat: PlayerId, made: bool) -> Result<Option<i64>, ScoreError> {
        self.edit(|session| session.apply_bid_outcome(round, seat, made))
    }
}
