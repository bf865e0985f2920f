//! Built-in game generators.

pub mod hunting;
pub mod monster_hunter_3_ultimate;
pub mod monster_hunter_4_ultimate;
pub mod monster_hunter_generations_ultimate;
pub mod monster_hunter_world;

use crate::core::registry::GameRegistry;

pub use monster_hunter_3_ultimate::MonsterHunter3Ultimate;
pub use monster_hunter_4_ultimate::MonsterHunter4Ultimate;
pub use monster_hunter_generations_ultimate::MonsterHunterGenerationsUltimate;
pub use monster_hunter_world::MonsterHunterWorld;

/// Register every built-in title with `registry`.
pub fn register_builtin(registry: &mut GameRegistry) {
    registry.register(
        &monster_hunter_world::MONSTER_HUNTER_WORLD,
        MonsterHunterWorld::factory,
    );
    registry.register(
        &monster_hunter_3_ultimate::MONSTER_HUNTER_3_ULTIMATE,
        MonsterHunter3Ultimate::factory,
    );
    registry.register(
        &monster_hunter_4_ultimate::MONSTER_HUNTER_4_ULTIMATE,
        MonsterHunter4Ultimate::factory,
    );
    registry.register(
        &monster_hunter_generations_ultimate::MONSTER_HUNTER_GENERATIONS_ULTIMATE,
        MonsterHunterGenerationsUltimate::factory,
    );
}
