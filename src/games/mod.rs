//! Built-in game variants and the registry that offers them.
//!
//! Each variant module exposes its `NAME` and a `definition()` constructor.
//! `GameRegistry::builtin()` registers them in picker order; the first,
//! 3-13, is the default.

pub mod registry;
pub mod three_thirteen;
pub mod mexican_train;
pub mod up_and_down;
pub mod hearts;

pub use registry::GameRegistry;

impl GameRegistry {
    /// Registry of all built-in variants.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new()
            .with(three_thirteen::definition())
            .with(mexican_train::definition())
            .with(up_and_down::definition())
            .with(hearts::definition())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::rounds::resolve;

    #[test]
    fn test_builtin_order() {
        let registry = GameRegistry::builtin();
        let names: Vec<_> = registry.names().collect();

        assert_eq!(names, vec!["3-13", "Mexican Train", "Oh Poop", "Hearts"]);
        assert_eq!(registry.default_definition().unwrap().name, three_thirteen::NAME);
    }

    #[test]
    fn test_builtin_rounds_non_empty_for_all_counts() {
        for game in GameRegistry::builtin().iter() {
            for players in game.players.min..=game.players.max {
                assert!(
                    !resolve(game, players).is_empty(),
                    "{} with {} players has no rounds",
                    game.name,
                    players
                );
            }
        }
    }
}
