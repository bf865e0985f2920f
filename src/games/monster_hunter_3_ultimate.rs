use rand::rngs::StdRng;
use std::sync::{Arc, OnceLock};

use super::hunting::{self, memo, sorted, without, HuntingTables};
use crate::core::game::{Game, GenerationError};
use crate::core::template::ObjectiveTemplate;
use crate::schema::descriptor::{GameDescriptor, Platform};
use crate::schema::options::GameOptions;

pub static MONSTER_HUNTER_3_ULTIMATE: GameDescriptor = GameDescriptor {
    name: "Monster Hunter 3 Ultimate",
    platform: Platform::WiiU,
    other_platforms: &[Platform::ThreeDs],
    adult_only: false,
};

pub const INCLUDE_RANK: &str = "monster_hunter_3_ultimate_aged_text_monsters";
pub const INCLUDE_DLC: &str = "monster_hunter_3_ultimate_include_dlcs";

const MONSTERS: &[&str] = &[
    "Great Jaggi", "Great Baggi", "Great Wroggi", "Arzuros", "Lagombi", "Volvidon", "Qurupeco",
    "Crimson Qurupeco", "Barroth", "Jade Barroth", "Uragaan", "Steel Uragaan", "Duramboros",
    "Rust Duramboros", "Rathian", "Pink Rathian", "Rathalos", "Azure Rathalos", "Diablos",
    "Black Diablos", "Gigginox", "Baleful Gigginox", "Barioth", "Sand Barioth", "Royal Ludroth",
    "Purple Ludroth", "Gobul", "Nibelsnarf", "Lagiacrus", "Ivory Lagiacrus", "Agnaktor",
    "Glacial Agnaktor", "Nargacuga", "Green Nargacuga", "Zinogre", "Stygian Zinogre",
    "Plesioth", "Green Plesioth", "Brachydios", "Ceadeus", "Goldbeard Ceadeus", "Deviljho",
    "Savage Deviljho", "Hallowed Jhen Mohran", "Alatreon", "Dire Miralis",
];

const MONSTERS_RANK: &[&str] = &[
    "Gold Rathian", "Silver Rathalos", "Abyssal Lagiacrus", "Lucent Nargacuga",
];

const NON_CAPTURABLE: &[&str] = &[
    "Ceadeus", "Goldbeard Ceadeus", "Jhen Mohran", "Hallowed Jhen Mohran", "Alatreon",
    "Dire Miralis",
];

// No Charge Blade or Insect Glaive before 4.
const WEAPONS: &[&str] = &[
    "Great Sword", "Long Sword", "Sword and Shield", "Dual Blades", "Hammer", "Hunting Horn",
    "Lance", "Gunlance", "Switch Axe", "Light Bowgun", "Heavy Bowgun", "Bow",
];

const STAGES: &[&str] = &[
    "Deserted Island/Moga Woods", "Sandy Plains", "Flooded Forest", "Tundra", "Volcano",
    "Misty Peaks", "Great Desert", "Ruins", "Tower", "Tainted Sea", "Sacred Land", "Land Arena",
    "Water Arena",
];

const DROPS: &[&str] = &[
    "Bird Wyvern Gem", "Fey Wyvern Gem", "Wyvern Stone", "Lrg Wyvern Stone", "Uragaan Marrow",
    "Uragaan Ruby", "Uragaan Pallium", "Duram Sacrum", "Durambolite", "Rathian Plate",
    "Rathian Ruby", "Rathian Mantle", "Rathalos Plate", "Rathalos Ruby", "Rathalos Mantle",
    "Rath Marrow", "Rath Medulla", "Lagiacrus Plate", "Lagia Sapphire", "Lagiacrus Mantle",
    "Narga Medulla", "Nargacuga Mantle", "Zinogre Jasper", "Zin Skymerald", "S.Zin Skymerald",
    "Brachydios Gem", "Brach Pallium", "Deep Dragongem", "Dark Dragongem", "Deviljho Gem",
    "Deviljho Crook", "Earth Dragongem", "Earth Drgnsphire", "Azure Dragongem",
    "Azure Drgnsphire", "Dire Dragongem",
];

const DROPS_RANK: &[&str] = &["A.Lagi Dynamo", "Cloudy Moonshard"];

const TAILS: &[&str] = &[
    "R. Ludroth Tail", "R. Ludroth Lash", "Barroth Tail", "Barroth Lash", "J. Barroth Tail",
    "J. Barroth Lash", "Rathalos Tail", "Rathalos Lash", "A. Rathalos Tail", "A. Rathalos Lash",
    "Lagiacrus Tail", "Lagiacrus Flail", "Barioth Tail", "Barioth Lash", "S. Barioth Tail",
    "S. Barioth Lash", "Diablos Tailcase", "Diablos Hardtail", "Agnaktor Tail", "G. Agnak Tail",
    "Brachydios Tail", "Duram Tailcase", "Duram Tailcase+", "Duram Hardtail",
    "R. Duram Hardtail", "Zinogre Tail", "Zinogre Lash", "S. Zinogre Lash", "Nargacuga Tail",
    "Nargacuga Lash", "Deviljho Tail", "Deviljho Flail", "Alatreon Tail", "Alatreon Diretail",
];

/// Content pools for 3 Ultimate, gated by the rank-monster and DLC toggles.
#[derive(Debug, Default)]
pub struct TriUltimateTables {
    pub include_rank: bool,
    pub include_dlc: bool,
    stages_base: OnceLock<Vec<String>>,
    drops_base: OnceLock<Vec<String>>,
    tails_base: OnceLock<Vec<String>>,
}

impl TriUltimateTables {
    pub fn from_options(options: &GameOptions) -> Self {
        Self {
            include_rank: options.toggle(INCLUDE_RANK),
            include_dlc: options.toggle(INCLUDE_DLC),
            ..Self::default()
        }
    }
}

impl HuntingTables for TriUltimateTables {
    fn monsters(&self) -> Vec<String> {
        let mut monsters = hunting::owned(MONSTERS);
        if self.include_rank {
            monsters.extend(hunting::owned(MONSTERS_RANK));
        }
        if self.include_dlc {
            monsters.push("Jhen Mohran".to_string());
        }
        sorted(monsters)
    }

    fn capturable(&self) -> Vec<String> {
        without(self.monsters(), NON_CAPTURABLE)
    }

    fn variants(&self) -> Vec<String> {
        let mut variants = hunting::owned(&["Subspecies", "Variant Species"]);
        if self.include_rank {
            variants.push("Rare Species".to_string());
        }
        variants
    }

    fn stages(&self) -> Vec<String> {
        sorted(memo(&self.stages_base, STAGES).to_vec())
    }

    fn drops(&self) -> Vec<String> {
        let mut drops = memo(&self.drops_base, DROPS).to_vec();
        if self.include_rank {
            drops.extend(hunting::owned(DROPS_RANK));
        }
        sorted(drops)
    }

    fn tails(&self) -> Vec<String> {
        let mut tails = memo(&self.tails_base, TAILS).to_vec();
        if self.include_rank {
            tails.push("S. Rathalos Lash".to_string());
        }
        sorted(tails)
    }

    fn weapons(&self) -> Vec<String> {
        hunting::owned(WEAPONS)
    }
}

pub struct MonsterHunter3Ultimate {
    tables: Arc<TriUltimateTables>,
}

impl MonsterHunter3Ultimate {
    pub fn new(options: &GameOptions) -> Self {
        Self {
            tables: Arc::new(TriUltimateTables::from_options(options)),
        }
    }

    pub fn factory(options: &GameOptions) -> Box<dyn Game> {
        Box::new(Self::new(options))
    }
}

impl Game for MonsterHunter3Ultimate {
    fn descriptor(&self) -> &GameDescriptor {
        &MONSTER_HUNTER_3_ULTIMATE
    }

    fn optional_constraint_templates(
        &mut self,
        _rng: &mut StdRng,
    ) -> Result<Vec<ObjectiveTemplate>, GenerationError> {
        let mut templates = hunting::common_constraints(&self.tables);
        templates.extend([
            ObjectiveTemplate::new("Clear 2 Subquests"),
            ObjectiveTemplate::new("Only run 8 or fewer Decorations"),
        ]);
        Ok(templates)
    }

    fn objective_templates(
        &mut self,
        _rng: &mut StdRng,
    ) -> Result<Vec<ObjectiveTemplate>, GenerationError> {
        Ok(hunting::common_objectives(
            &self.tables,
            ["Hunt 2 monsters in the STAGE", "Hunt 3 monsters in the STAGE"],
        ))
    }
}
