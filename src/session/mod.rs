//! Session lifecycle and persistence.
//!
//! - `game_session`: a running game and its edit operations
//! - `scorekeeper`: the Setup / InProgress state machine
//! - `store`: the key-value persistence port

pub mod store;
pub mod game_session;
pub mod scorekeeper;

pub use store::{
    KeyValueStore, MemoryStore, SessionMeta, GRID_DATA_KEY, SESSION_META_KEY,
};
pub use game_session::GameSession;
pub use scorekeeper::{Phase, Scorekeeper, Setup, StartingDealer};
