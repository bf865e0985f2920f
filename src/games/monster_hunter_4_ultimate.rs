use rand::rngs::StdRng;
use std::sync::{Arc, OnceLock};

use super::hunting::{self, memo, sorted, without, HuntingTables};
use crate::core::game::{Game, GenerationError};
use crate::core::template::ObjectiveTemplate;
use crate::schema::descriptor::{GameDescriptor, Platform};
use crate::schema::options::GameOptions;

pub static MONSTER_HUNTER_4_ULTIMATE: GameDescriptor = GameDescriptor {
    name: "Monster Hunter 4 Ultimate",
    platform: Platform::ThreeDs,
    other_platforms: &[],
    adult_only: false,
};

pub const AGED_TEXT_MONSTERS: &str = "monster_hunter_4_ultimate_aged_text_monsters";
pub const INCLUDE_APEX: &str = "monster_hunter_4_ultimate_include_apex";
pub const INCLUDE_DLC: &str = "monster_hunter_4_ultimate_include_dlcs";

const MONSTERS: &[&str] = &[
    "Ash Kecha Wacha", "Azure Rathalos", "Basarios", "Berserk Tetsucabra", "Black Diablos",
    "Black Gravios", "Blue Yian Kut-Ku", "Brachydios", "Brute Tigrex", "Cephadrome",
    "Congalala", "Daimyo Hermitaur", "Desert Seltas", "Desert Seltas Queen", "Deviljho",
    "Diablos", "Emerald Congalala", "Furious Rajang", "Gendrome", "Gogmazios", "Gore Magala",
    "Gravios", "Great Jaggi", "Gypceros", "Iodrome", "Kecha Wacha", "Khezu", "Kirin",
    "Kushala Daora", "Lagombi", "Monoblos", "Najarala", "Nerscylla", "Pink Rathian",
    "Plum Daimyo Hermitaur", "Purple Gypceros", "Rajang", "Rathalos", "Rathian", "Red Khezu",
    "Ruby Basarios", "Rusted Kushala Daora", "Seltas", "Seltas Queen", "Seregios",
    "Shagaru Magala", "Shrouded Nerscylla", "Stygian Zinogre", "Teostra", "Tetsucabra",
    "Tidal Najarala", "Tigerstripe Zamtrios", "Tigrex", "Ukanlos", "Velocidrome",
    "White Monoblos", "Yian Garuga", "Yian Kut-Ku", "Zamtrios", "Zinogre",
];

const MONSTERS_APEX: &[&str] = &[
    "Apex Gravios", "Apex Diablos", "Apex Tidal Najarala", "Apex Tigrex", "Apex Zinogre",
];

const MONSTERS_AGED_TEXT: &[&str] = &[
    "Molten Tigrex", "Akantor", "Chaotic Gore Magala", "Shah Dalamadur", "Raging Brachydios",
    "Crimson Fatalis",
];

const MONSTERS_DLC: &[&str] = &[
    "Silver Rathalos", "Gold Rathian", "Savage Deviljho", "Dah'ren Mohran", "Oroshi Kirin",
    "Dalamadur", "Fatalis", "Old Fatalis",
];

const NON_CAPTURABLE: &[&str] = &[
    "Akantor", "Ukanlos", "Kirin", "Oroshi Kirin", "Shagaru Magala", "Dah'ren Mohran",
    "Kushala Daora", "Rusted Kushala Daora", "Teostra", "Chameleos", "Dalamadur",
    "Shah Dalamadur", "Gogmazios", "Fatalis", "Crimson Fatalis", "Old Fatalis",
];

const VARIANTS: &[&str] = &["Subspecies", "Rare Species", "Variant Species", "Frenzied"];

const STAGES: &[&str] = &[
    "Ancestral Steppe", "Sunken Hollow", "Primal Forest", "Frozen Seaway", "Volcanic Hollow",
    "Heaven's Mount", "Dunes (Day)", "Dunes (Night)", "Sanctuary", "Ingle Isle", "Polar Field",
    "Battlequarters", "Tower Summit", "Everwood",
];

const DROPS: &[&str] = &[
    "Bird Wyvern Gem", "Fey Wyvern Gem", "Beast Gem", "Wyvern Gem", "Lrg Wyvern Gem",
    "Elder Dragon Gem", "Lrg Elder Dragon Gem", "Rathian Mantle", "Rathalos Mantle",
    "Rajang Heart", "Ghoulish Gold Gorer", "Zinogre Skymerald", "S. Zinogre Skymerald",
    "Brach Pallium", "Gravios Pallium", "B. Gravios Pallium", "Tigrex Mantle",
    "S. Magala Mantle", "Seregios Lens", "Deviljho Crook", "Silverpeak Corona", "Ukanlos Stone",
    "Wartorn Dragonsphire", "Ghoulish Gold Horn", "Najarala Medulla", "Rathian Ruby",
    "Rathalos Ruby", "Zinogre Jasper", "S. Zinogre Jasper", "Brach Gem", "Gravios Medulla",
    "Tigrex Jaw", "Pulsating Blastheart", "Gore Magala Nyctgem", "S. Magala Phosgem",
    "Seregios Dissenter", "Deviljho Gem", "Daora Gem", "Teostra Gem", "Akantor Gem",
    "Skyblade Gem", "Chameleos Gem", "Najarala Marrow", "Chilling Beak", "Rathian Plate",
    "Rathalos Plate", "Rath Marrow", "Zinogre Plate", "Brach Marrow", "Gore Magala Plate",
    "S. Magala Plate", "Earth Dragongem",
];

const DROPS_AGED_TEXT: &[&str] = &[
    "Immortal Reactor", "Dire Blastheart", "Gore Magala Mantle", "Conquest Sphere",
    "Skyblade Drgnsphire",
];

const TAILS: &[&str] = &[
    "Garuga Tail", "Garuga Lash", "Brach Tail", "Brach Lash", "Deviljho Tail", "Deviljho Flail",
    "Rathalos Tail", "Rathalos Lash", "A. Rathalos Tail", "A. Rathalos Lash", "S. Rathalos Tail",
    "Tigrex Tail", "Tigrex Lash", "M. Tigrex Tail", "Diablos Tailcase+", "Seregios Impaler",
    "Seregios Impaler+", "Gore Magala Tail", "Gore Magala Lash", "Akantor Tail", "Ukanlos Tail",
    "Ukanlos Flail", "Zinogre Tail", "Zinogre Lash", "S. Zinogre Tail", "S. Zinogre Lash",
    "S. Magala Tail", "S. Magala Lash", "Daora Tail", "Daora Lash", "Teostra Tail",
    "Teostra Lash", "Chameleos Lash", "Gogmazios Briartail",
];

const TAILS_AGED_TEXT: &[&str] = &["M. Tigrex Lash", "Akantor Flail"];

/// Content pools for 4 Ultimate, gated by the aged-text, apex and DLC
/// toggles.
#[derive(Debug, Default)]
pub struct UltimateTables {
    pub aged_text_monsters: bool,
    pub include_apex: bool,
    pub include_dlc: bool,
    stages_base: OnceLock<Vec<String>>,
    drops_base: OnceLock<Vec<String>>,
    tails_base: OnceLock<Vec<String>>,
}

impl UltimateTables {
    pub fn from_options(options: &GameOptions) -> Self {
        Self {
            aged_text_monsters: options.toggle(AGED_TEXT_MONSTERS),
            include_apex: options.toggle(INCLUDE_APEX),
            include_dlc: options.toggle(INCLUDE_DLC),
            ..Self::default()
        }
    }
}

impl HuntingTables for UltimateTables {
    fn monsters(&self) -> Vec<String> {
        let mut monsters = hunting::owned(MONSTERS);
        if self.include_apex {
            monsters.extend(hunting::owned(MONSTERS_APEX));
        }
        if self.aged_text_monsters {
            monsters.extend(hunting::owned(MONSTERS_AGED_TEXT));
            if self.include_apex {
                monsters.push("Apex Seregios".to_string());
            }
        }
        if self.include_dlc {
            monsters.extend(hunting::owned(MONSTERS_DLC));
            if self.include_apex {
                monsters.push("Apex Deviljho".to_string());
            }
        }
        sorted(monsters)
    }

    fn capturable(&self) -> Vec<String> {
        without(self.monsters(), NON_CAPTURABLE)
    }

    fn variants(&self) -> Vec<String> {
        let mut variants = hunting::owned(VARIANTS);
        if self.include_apex {
            variants.push("Apex".to_string());
        }
        variants
    }

    fn stages(&self) -> Vec<String> {
        let mut stages = memo(&self.stages_base, STAGES).to_vec();
        if self.include_dlc {
            stages.push("Castle Schrade".to_string());
        }
        sorted(stages)
    }

    fn drops(&self) -> Vec<String> {
        let mut drops = memo(&self.drops_base, DROPS).to_vec();
        if self.aged_text_monsters {
            drops.extend(hunting::owned(DROPS_AGED_TEXT));
        }
        if self.include_dlc {
            drops.push("Earth Dragonsphire".to_string());
        }
        sorted(drops)
    }

    fn tails(&self) -> Vec<String> {
        let mut tails = memo(&self.tails_base, TAILS).to_vec();
        if self.aged_text_monsters {
            tails.extend(hunting::owned(TAILS_AGED_TEXT));
        }
        if self.include_dlc {
            tails.push("S. Rathalos Lash".to_string());
        }
        sorted(tails)
    }
}

pub struct MonsterHunter4Ultimate {
    tables: Arc<UltimateTables>,
}

impl MonsterHunter4Ultimate {
    pub fn new(options: &GameOptions) -> Self {
        Self {
            tables: Arc::new(UltimateTables::from_options(options)),
        }
    }

    pub fn factory(options: &GameOptions) -> Box<dyn Game> {
        Box::new(Self::new(options))
    }
}

impl Game for MonsterHunter4Ultimate {
    fn descriptor(&self) -> &GameDescriptor {
        &MONSTER_HUNTER_4_ULTIMATE
    }

    fn optional_constraint_templates(
        &mut self,
        _rng: &mut StdRng,
    ) -> Result<Vec<ObjectiveTemplate>, GenerationError> {
        let mut templates = hunting::common_constraints(&self.tables);
        templates.extend([
            ObjectiveTemplate::new("Hunt as a Guild Quest (if applicable)"),
            ObjectiveTemplate::new("Clear 2 Subquests"),
            ObjectiveTemplate::new("Only run 8 or fewer Decorations"),
            ObjectiveTemplate::new("Don't use Wystones"),
        ]);
        Ok(templates)
    }

    fn objective_templates(
        &mut self,
        _rng: &mut StdRng,
    ) -> Result<Vec<ObjectiveTemplate>, GenerationError> {
        let mut templates =
            hunting::common_objectives(&self.tables, ["Hunt 2 STAGE monsters", "Hunt 3 STAGE monsters"]);
        templates.push(
            ObjectiveTemplate::new("Complete a Level 140 MONSTER Guild Quest")
                .token("MONSTER", hunting::provider(&self.tables, UltimateTables::monsters), 1)
                .time_consuming()
                .difficult(),
        );
        Ok(templates)
    }
}
