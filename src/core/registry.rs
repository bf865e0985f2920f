/// Game registry: display name to generator factory, plus the admission
/// policy medleys apply to their members.

use log::warn;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::fmt;

use crate::core::game::Game;
use crate::schema::descriptor::{GameDescriptor, Platform};
use crate::schema::options::GameOptions;

/// Builds a fresh generator bound to the given options.
pub type GameFactory = fn(&GameOptions) -> Box<dyn Game>;

#[derive(Clone, Copy)]
pub struct RegisteredGame {
    pub descriptor: &'static GameDescriptor,
    pub factory: GameFactory,
}

impl RegisteredGame {
    pub fn instantiate(&self, options: &GameOptions) -> Box<dyn Game> {
        (self.factory)(options)
    }
}

impl fmt::Debug for RegisteredGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredGame")
            .field("descriptor", self.descriptor)
            .finish_non_exhaustive()
    }
}

/// Read-only (after bootstrap) mapping of game names to factories.
///
/// Enumeration is ordered by name.
#[derive(Debug, Clone, Default)]
pub struct GameRegistry {
    games: BTreeMap<&'static str, RegisteredGame>,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every title in [`crate::games`].
    pub fn with_builtin_games() -> Self {
        let mut registry = Self::new();
        crate::games::register_builtin(&mut registry);
        registry
    }

    /// Register a generator. A previous entry with the same name is replaced
    /// and returned.
    pub fn register(
        &mut self,
        descriptor: &'static GameDescriptor,
        factory: GameFactory,
    ) -> Option<RegisteredGame> {
        let previous = self
            .games
            .insert(descriptor.name, RegisteredGame { descriptor, factory });
        if previous.is_some() {
            warn!("game '{}' registered twice; keeping the latest", descriptor.name);
        }
        previous
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredGame> {
        self.games.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.games.contains_key(name)
    }

    /// Registered names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.games.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn instantiate(&self, name: &str, options: &GameOptions) -> Option<Box<dyn Game>> {
        self.get(name).map(|entry| entry.instantiate(options))
    }
}

/// Which registered titles may join a medley.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformPolicy {
    pub excluded_platforms: FxHashSet<Platform>,
    pub allow_adult_only: bool,
}

impl Default for PlatformPolicy {
    fn default() -> Self {
        Self {
            excluded_platforms: [Platform::Ps5, Platform::Xsx, Platform::Sw]
                .into_iter()
                .collect(),
            allow_adult_only: false,
        }
    }
}

impl PlatformPolicy {
    pub fn from_options(options: &GameOptions) -> Self {
        Self {
            allow_adult_only: options.include_adult_only_or_unrated_games,
            ..Self::default()
        }
    }

    /// Only the primary platform counts.
    pub fn admits(&self, descriptor: &GameDescriptor) -> bool {
        (self.allow_adult_only || !descriptor.adult_only)
            && !self.excluded_platforms.contains(&descriptor.platform)
    }
}
