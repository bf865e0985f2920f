use rand::rngs::StdRng;
use std::sync::{Arc, OnceLock};

use super::hunting::{self, memo, sorted, without, HuntingTables};
use crate::core::game::{Game, GenerationError};
use crate::core::template::{ObjectiveTemplate, TokenProvider};
use crate::schema::descriptor::{GameDescriptor, Platform};
use crate::schema::options::GameOptions;

pub static MONSTER_HUNTER_WORLD: GameDescriptor = GameDescriptor {
    name: "Monster Hunter World",
    platform: Platform::Pc,
    other_platforms: &[Platform::Ps4, Platform::XOne],
    adult_only: false,
};

pub const ICEBORNE: &str = "monster_hunter_world_iceborne";
pub const INCLUDE_RANK: &str = "monster_hunter_world_include_rank";
pub const INCLUDE_EVENTS: &str = "monster_hunter_world_include_events";

const MONSTERS: &[&str] = &[
    "Ancient Leshen", "Anjanath", "Azure Rathalos", "Barroth", "Bazelgeuse", "Behemoth",
    "Black Diablos", "Deviljho", "Diablos", "Dodogama", "Great Girros", "Great Jagras",
    "Jyuratodus", "Kirin", "Kulu-Ya-Ku", "Kushala Daora", "Lavasioth", "Legiana", "Leshen",
    "Lunastra", "Nergigante", "Odogaron", "Paolumu", "Pink Rathian", "Pukei-Pukei", "Radobaan",
    "Rathalos", "Rathian", "Teostra", "Tobi Kadachi", "Tzitzi-Ya-Ku", "Uragaan", "Vaal Hazak",
    "Xeno'jiiva", "Zorah Magdaros",
];

const MONSTERS_ICEBORNE: &[&str] = &[
    "Acidic Glavenus", "Alatreon", "Banbaro", "Barioth", "Beotodus", "Blackveil Vaal Hazak",
    "Brachydios", "Brute Tigrex", "Coral Pukei-Pukei", "Ebony Odogaron", "Fatalis",
    "Frostfang Barioth", "Fulgur Anjanath", "Furious Rajang", "Glavenus", "Namielle",
    "Nargacuga", "Nightshade Paolumu", "Raging Brachydios", "Rajang", "Savage Deviljho",
    "Seething Bazelgeuse", "Shara Ishvalda", "Shrieking Legiana", "Stygian Zinogre", "Tigrex",
    "Velkhana", "Viper Tobi Kadachi", "Zinogre",
];

const MONSTERS_MASTER_RANK: &[&str] = &[
    "Gold Rathian", "Silver Rathalos", "Ruiner Nergigante", "Scarred Yian Garuga", "Yian Garuga",
];

const NON_CAPTURABLE: &[&str] = &[
    "Alatreon", "Ancient Leshen", "Behemoth", "Blackveil Vaal Hazak", "Fatalis", "Kulve Taroth",
    "Kushala Daora", "Leshen", "Lunastra", "Namielle", "Nergigante", "Raging Brachydios",
    "Ruiner Nergigante", "Safi'jiiva", "Shara Ishvalda", "Teostra", "Vaal Hazak", "Velkhana",
    "Xeno'jiiva", "Zorah Magdaros",
];

const VARIANTS: &[&str] = &["Subspecies", "Rare Species", "Variant Species", "Tempered"];

const STAGES: &[&str] = &[
    "Ancient Forest", "Wildspire Wastes", "Coral Highlands", "Rotten Vale", "Elder's Recess",
    "Confluence of Fates", "Everstream", "Arena", "Special Arena",
];

const STAGES_ICEBORNE: &[&str] = &[
    "Hoarfrost Reach", "Guiding Lands", "Origin Isle", "Castle Schrade", "Seliana Supply Cache",
];

const DROPS: &[&str] = &[
    "Bird Wyvern Gem", "Wyvern Gem", "Anjanath Plate", "Anjanath Gem", "Rathian Plate",
    "Rathian Ruby", "Legiana Plate", "Legiana Gem", "Odogaron Plate", "Odogaron Gem",
    "Rathalos Plate", "Rathalos Ruby", "Diablos Marrow", "Uragaan Marrow", "Uragaan Ruby",
    "Bazelgeuse Gem", "Deviljho Gem", "Zorah Magdaros Gem", "Nergigante Gem", "Teostra Gem",
    "Lunastra Gem", "Daora Gem", "Vaal Hazak Gem", "Xeno'jiiva Gem",
];

const DROPS_ICEBORNE: &[&str] = &[
    "Fey Wyvern Gem", "Large Wyvern Gem", "Large Elder Dragon Gem", "Anjanath Mantle",
    "Fulgur Anjanath Mantle", "Rathian Mantle", "Legiana Mantle", "Odogaron Mantle",
    "Ebony Odogaron Mantle", "Rathalos Mantle", "Blos Medulla", "Uragaan Pallium",
    "Nargacuga Mantle", "Tigrex Mantle", "Glavenus Mantle", "Brachydios Pallium",
    "Immortal Reactor", "Zinogre Skymerald", "Stygian Zinogre Skymerald", "Bazelgeuse Mantle",
    "Deviljho Crook", "Ghoulish Gold Gorer", "Rajang Heart", "Velkhana Crystal",
    "Shara Ishvalda Gem", "Azure Dragonsphire",
];

const TAILS: &[&str] = &[
    "Pukei-Pukei Tail", "Barroth Tail", "Anjanath Tail", "Great Girros Tail", "Odogaron Tail",
    "Rathalos Tail", "Azure Rathalos Tail", "Dodogama Tail", "Bazelgeuse Tail", "Deviljho Tail",
    "Nergigante Tail", "Teostra Tail", "Lunastra Tail", "Daora Tail", "Vaal Hazak Tail",
    "Xeno'jiiva Tail", "Behemoth Tail",
];

const TAILS_ICEBORNE: &[&str] = &[
    "Pukei-Pukei Lash", "Barroth Lash", "Anjanath Lash", "Great Girros Lash", "Odogaron Lash",
    "Rathalos Lash", "Azure Rathalos Lash", "Dodogama Lash", "Bazelgeuse Flail",
    "Deviljho Flail", "Nergigante Flail", "Teostra Lash", "Lunastra Lash", "Daora Lash",
    "Vaal Hazak Flail", "Coral Pukei-Pukei Lash", "Banbaro Lash", "Fulgur Anjanath Lash",
    "Ebony Odogaron Lash", "Barioth Lash", "Nargacuga Lash", "Tigrex Lash", "Glavenus Tailedge",
    "Acidic Glavenus Tailedge", "Brachydios Lash", "Zinogre Lash", "Stygian Zinogre Lash",
    "Velkhana Lash", "Namielle Lash", "Alatreon Diretail",
];

const TAILS_MASTER_RANK: &[&str] = &["Garuga Lash", "Silver Rathalos Lash"];

/// Content pools for World, gated by the Iceborne, master-rank and event
/// toggles.
#[derive(Debug, Default)]
pub struct WorldTables {
    pub iceborne: bool,
    pub include_rank: bool,
    pub include_events: bool,
    stages_base: OnceLock<Vec<String>>,
    drops_base: OnceLock<Vec<String>>,
    tails_base: OnceLock<Vec<String>>,
}

impl WorldTables {
    pub fn from_options(options: &GameOptions) -> Self {
        Self {
            iceborne: options.toggle(ICEBORNE),
            include_rank: options.toggle(INCLUDE_RANK),
            include_events: options.toggle(INCLUDE_EVENTS),
            ..Self::default()
        }
    }
}

impl HuntingTables for WorldTables {
    fn monsters(&self) -> Vec<String> {
        let mut monsters = hunting::owned(MONSTERS);
        if self.include_events {
            monsters.push("Kulve Taroth".to_string());
        }
        if self.iceborne {
            monsters.extend(hunting::owned(MONSTERS_ICEBORNE));
            if self.include_rank {
                monsters.extend(hunting::owned(MONSTERS_MASTER_RANK));
            }
            if self.include_events {
                monsters.push("Safi'jiiva".to_string());
            }
        }
        sorted(monsters)
    }

    fn capturable(&self) -> Vec<String> {
        without(self.monsters(), NON_CAPTURABLE)
    }

    fn variants(&self) -> Vec<String> {
        hunting::owned(VARIANTS)
    }

    fn stages(&self) -> Vec<String> {
        let mut stages = memo(&self.stages_base, STAGES).to_vec();
        if self.include_events {
            stages.push("Caverns of El Dorado".to_string());
        }
        if self.iceborne {
            stages.extend(hunting::owned(STAGES_ICEBORNE));
        }
        sorted(stages)
    }

    fn drops(&self) -> Vec<String> {
        let mut drops = memo(&self.drops_base, DROPS).to_vec();
        if self.include_events {
            drops.push("Kulve Taroth Golden Glimstone".to_string());
        }
        if self.iceborne {
            drops.extend(hunting::owned(DROPS_ICEBORNE));
            if self.include_events {
                drops.push("Zionium Crystal".to_string());
                drops.push("Golden Dragonsphire".to_string());
            }
        }
        sorted(drops)
    }

    fn tails(&self) -> Vec<String> {
        let mut tails = memo(&self.tails_base, TAILS).to_vec();
        if self.iceborne {
            tails.extend(hunting::owned(TAILS_ICEBORNE));
            if self.include_rank {
                tails.extend(hunting::owned(TAILS_MASTER_RANK));
            }
            if self.include_events {
                tails.push("Safi'jiiva Lash".to_string());
            }
        }
        sorted(tails)
    }
}

pub struct MonsterHunterWorld {
    tables: Arc<WorldTables>,
}

impl MonsterHunterWorld {
    pub fn new(options: &GameOptions) -> Self {
        Self {
            tables: Arc::new(WorldTables::from_options(options)),
        }
    }

    pub fn factory(options: &GameOptions) -> Box<dyn Game> {
        Box::new(Self::new(options))
    }
}

impl Game for MonsterHunterWorld {
    fn descriptor(&self) -> &GameDescriptor {
        &MONSTER_HUNTER_WORLD
    }

    fn optional_constraint_templates(
        &mut self,
        _rng: &mut StdRng,
    ) -> Result<Vec<ObjectiveTemplate>, GenerationError> {
        let mut templates = hunting::common_constraints(&self.tables);
        templates.extend([
            ObjectiveTemplate::new("Hunt as an investigation (if applicable)"),
            ObjectiveTemplate::new("Only run 5 or fewer Decorations"),
            ObjectiveTemplate::new("Don't use mantles/hunting tools"),
        ]);
        Ok(templates)
    }

    fn objective_templates(
        &mut self,
        _rng: &mut StdRng,
    ) -> Result<Vec<ObjectiveTemplate>, GenerationError> {
        let mut templates = hunting::common_objectives(
            &self.tables,
            ["Hunt 2 monsters in the STAGE", "Hunt 3 monsters in the STAGE"],
        );
        templates.push(
            ObjectiveTemplate::new("Complete a MONSTER investigation")
                .token("MONSTER", hunting::provider(&self.tables, WorldTables::monsters), 1),
        );

        if self.tables.iceborne {
            templates.push(
                ObjectiveTemplate::new("Hunt NUMBER monsters in the Guiding Lands")
                    .token("NUMBER", TokenProvider::new(|| (2..=6).map(|n| n.to_string()).collect()), 1)
                    .time_consuming()
                    .weight(2),
            );
        }

        Ok(templates)
    }
}
