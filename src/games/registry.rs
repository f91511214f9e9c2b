//! Game registry for definition lookup.
//!
//! The `GameRegistry` holds the selectable variants in presentation order.
//! The first registered variant is the default, used whenever a persisted
//! or requested name does not match anything.

use rustc_hash::FxHashMap;

use crate::core::config::GameDefinition;

/// Ordered registry of game definitions.
///
/// ## Example
///
/// ```
/// use scorepad::core::{GameDefinition, RoundSpec};
/// use scorepad::games::GameRegistry;
///
/// let mut registry = GameRegistry::new();
/// registry.register(GameDefinition::new("Rummy", RoundSpec::numbers(1..=7)));
///
/// assert_eq!(registry.get("Rummy").unwrap().name, "Rummy");
/// assert_eq!(registry.find_or_default("Canasta").unwrap().name, "Rummy");
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameRegistry {
    games: Vec<GameDefinition>,
    by_name: FxHashMap<String, usize>,
}

impl GameRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition.
    ///
    /// Panics if a definition with the same name already exists.
    pub fn register(&mut self, game: GameDefinition) {
        if self.by_name.contains_key(&game.name) {
            panic!("Game {:?} already registered", game.name);
        }
        self.by_name.insert(game.name.clone(), self.games.len());
        self.games.push(game);
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, game: GameDefinition) -> Self {
        self.register(game);
        self
    }

    /// Get a definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&GameDefinition> {
        self.by_name.get(name).map(|&i| &self.games[i])
    }

    /// The first registered definition.
    #[must_use]
    pub fn default_definition(&self) -> Option<&GameDefinition> {
        self.games.first()
    }

    /// Get a definition by name, falling back to the default.
    #[must_use]
    pub fn find_or_default(&self, name: &str) -> Option<&GameDefinition> {
        self.get(name).or_else(|| self.default_definition())
    }

    /// Check if a name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Get the number of registered games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Iterate over definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &GameDefinition> {
        self.games.iter()
    }

    /// Names in registration order, for the variant picker.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.games.iter().map(|g| g.name.as_str())
    }
}
