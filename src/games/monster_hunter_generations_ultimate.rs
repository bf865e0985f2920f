use rand::rngs::StdRng;
use std::sync::{Arc, OnceLock};

use super::hunting::{self, memo, sorted, without, HuntingTables};
use crate::core::game::{Game, GenerationError};
use crate::core::template::{ObjectiveTemplate, TokenProvider};
use crate::schema::descriptor::{GameDescriptor, Platform};
use crate::schema::options::GameOptions;

pub static MONSTER_HUNTER_GENERATIONS_ULTIMATE: GameDescriptor = GameDescriptor {
    name: "Monster Hunter Generations Ultimate",
    platform: Platform::Sw,
    other_platforms: &[Platform::ThreeDs],
    adult_only: false,
};

pub const INCLUDE_RANK_DEPENDENT: &str =
    "monster_hunter_generations_ultimate_include_rank_dependent_monsters";
pub const INCLUDE_DLC: &str = "monster_hunter_generations_ultimate_include_dlc";

const MONSTERS: &[&str] = &[
    "Agnaktor", "Ahtal-Ka", "Arzuros", "Astalos", "Barioth", "Barroth", "Basarios", "Blangonga",
    "Bloodbath Diablos", "Boltreaver Astalos", "Brachydios", "Bulldrome", "Cephadrome",
    "Congalala", "Crystalbeard Uragaan", "Daimyo Hermitaur", "Deadeye Yian Garuga", "Deviljho",
    "Diablos", "Dreadking Rathalos", "Dreadqueen Rathian", "Drilltusk Tetsucabra", "Duramboros",
    "Elderfrost Gammoth", "Furious Rajang", "Gammoth", "Gendrome", "Giadrome", "Glavenus",
    "Gore Magala", "Gravios", "Great Maccao", "Grimclaw Tigrex", "Gypceros",
    "Hellblade Glavenus", "Iodrome", "Kecha Wacha", "Khezu", "Kirin", "Lagiacrus", "Lagombi",
    "Lao-Shan Lung", "Lavasioth", "Malfestio", "Mizutsune", "Najarala", "Nakarkos", "Nargacuga",
    "Nerscylla", "Nibelsnarf", "Nightcloak Malfestio", "Plesioth", "Rajang", "Rathalos",
    "Rathian", "Redhelm Arzuros", "Royal Ludroth", "Rustrazor Ceanataur", "Seltas",
    "Seltas Queen", "Seregios", "Shagaru Magala", "Shogun Ceanataur", "Silverwind Ceanataur",
    "Snowbaron Lagombi", "Soulseer Mizutsune", "Stonefist Hermitaur", "Tetsucabra",
    "Thunderlord Zinogre", "Tigrex", "Uragaan", "Valstrax", "Velocidrome", "Volvidon",
    "Yian Garuga", "Yian Kut-Ku", "Zamtrios", "Zinogre",
];

const MONSTERS_RANK_DEPENDENT: &[&str] = &[
    "Chaotic Gore Magala", "Teostra", "Chameleos", "Kushala Daora", "Gold Rathian",
    "Silver Rathalos", "Furious Rajang", "Savage Deviljho", "Raging Brachydios", "Akantor",
    "Ukanlos", "Amatsu", "Alatreon", "Fatalis", "Crimson Fatalis", "Old Fatalis",
];

const NON_CAPTURABLE: &[&str] = &[
    "Ahtal-Ka", "Akantor", "Alatreon", "Amatsu", "Kirin", "Shagaru Magala", "Kushala Daora",
    "Rusted Kushala Daora", "Teostra", "Chameleos", "Fatalis", "Crimson Fatalis", "Old Fatalis",
];

const VARIANTS: &[&str] = &["Rare Species", "Variant Species", "Deviant", "Hyper"];

const STYLES: &[&str] = &["Guild", "Aerial", "Striker", "Adept", "Valor", "Alchemy"];

const STAGES: &[&str] = &[
    "Ancestral Steppe", "Primal Forest", "Frozen Seaway", "Volcanic Hollow", "Dunes", "Sanctuary",
    "Ingle Isle", "Polar Field", "Battlequarters", "Forlorn Arena",
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

const DROPS_RANK_DEPENDENT: &[&str] = &[
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

const TAILS_RANK_DEPENDENT: &[&str] = &["M. Tigrex Lash", "Akantor Flail"];

#[derive(Debug, Default)]
pub struct GenerationsTables {
    pub include_rank_dependent: bool,
    pub include_dlc: bool,
    stages_base: OnceLock<Vec<String>>,
    drops_base: OnceLock<Vec<String>>,
    tails_base: OnceLock<Vec<String>>,
}

impl GenerationsTables {
    pub fn from_options(options: &GameOptions) -> Self {
        Self {
            include_rank_dependent: options.toggle(INCLUDE_RANK_DEPENDENT),
            include_dlc: options.toggle(INCLUDE_DLC),
            ..Self::default()
        }
    }

    pub fn styles(&self) -> Vec<String> {
        hunting::owned(STYLES)
    }
}

impl HuntingTables for GenerationsTables {
    fn monsters(&self) -> Vec<String> {
        let mut monsters = hunting::owned(MONSTERS);
        if self.include_rank_dependent {
            monsters.extend(hunting::owned(MONSTERS_RANK_DEPENDENT));
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
        if self.include_dlc {
            stages.push("Castle Schrade".to_string());
        }
        sorted(stages)
    }

    fn drops(&self) -> Vec<String> {
        let mut drops = memo(&self.drops_base, DROPS).to_vec();
        if self.include_rank_dependent {
            drops.extend(hunting::owned(DROPS_RANK_DEPENDENT));
        }
        if self.include_dlc {
            drops.push("Earth Dragonsphire".to_string());
        }
        sorted(drops)
    }

    fn tails(&self) -> Vec<String> {
        let mut tails = memo(&self.tails_base, TAILS).to_vec();
        if self.include_rank_dependent {
            tails.extend(hunting::owned(TAILS_RANK_DEPENDENT));
        }
        if self.include_dlc {
            tails.push("S. Rathalos Lash".to_string());
        }
        sorted(tails)
    }

    // Palicoes can be hunted with too.
    fn weapons(&self) -> Vec<String> {
        let mut weapons = hunting::owned(hunting::WEAPONS);
        weapons.push("Prowler".to_string());
        weapons
    }
}

pub struct MonsterHunterGenerationsUltimate {
    tables: Arc<GenerationsTables>,
}

impl MonsterHunterGenerationsUltimate {
    pub fn new(options: &GameOptions) -> Self {
        Self {
            tables: Arc::new(GenerationsTables::from_options(options)),
        }
    }

    pub fn factory(options: &GameOptions) -> Box<dyn Game> {
        Box::new(Self::new(options))
    }
}

impl Game for MonsterHunterGenerationsUltimate {
    fn descriptor(&self) -> &GameDescriptor {
        &MONSTER_HUNTER_GENERATIONS_ULTIMATE
    }

    fn optional_constraint_templates(
        &mut self,
        _rng: &mut StdRng,
    ) -> Result<Vec<ObjectiveTemplate>, GenerationError> {
        let tables = Arc::clone(&self.tables);
        let mut templates = hunting::common_constraints(&self.tables);
        templates.extend([
            ObjectiveTemplate::new("Clear 2 Subquests"),
            ObjectiveTemplate::new("Only run 8 or fewer Decorations"),
            ObjectiveTemplate::new("Use STYLE style").token(
                "STYLE",
                TokenProvider::new(move || tables.styles()),
                1,
            ),
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
                .token("MONSTER", hunting::provider(&self.tables, GenerationsTables::monsters), 1)
                .time_consuming()
                .difficult(),
        );
        Ok(templates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn prowler_is_a_weapon() {
        let tables = GenerationsTables::from_options(&GameOptions::default());
        let weapons = tables.weapons();
        assert_eq!(weapons.len(), hunting::WEAPONS.len() + 1);
        assert_eq!(weapons.last().map(String::as_str), Some("Prowler"));
    }

    #[test]
    fn own_toggles_gate_rank_content() {
        let mut options = GameOptions::default();
        options.set_toggle(INCLUDE_RANK_DEPENDENT, false);
        let tables = GenerationsTables::from_options(&options);
        assert!(!tables.monsters().contains(&"Alatreon".to_string()));
        assert!(!tables.tails().contains(&"Akantor Flail".to_string()));

        options.set_toggle(INCLUDE_RANK_DEPENDENT, true);
        let tables = GenerationsTables::from_options(&options);
        assert!(tables.monsters().contains(&"Alatreon".to_string()));
        assert!(!tables.capturable().contains(&"Alatreon".to_string()));
    }

    #[test]
    fn boltreaver_and_brachydios_are_separate() {
        let monsters = GenerationsTables::from_options(&GameOptions::default()).monsters();
        assert!(monsters.contains(&"Boltreaver Astalos".to_string()));
        assert!(monsters.contains(&"Brachydios".to_string()));
    }

    #[test]
    fn style_constraint_resolves() {
        let mut game = MonsterHunterGenerationsUltimate::new(&GameOptions::default());
        let mut rng = StdRng::seed_from_u64(3);
        let constraints = game.optional_constraint_templates(&mut rng).unwrap();
        let style = constraints
            .iter()
            .find(|t| t.label == "Use STYLE style")
            .unwrap();
        let objective = crate::core::select::resolve(style, &mut rng).unwrap();
        let picked = objective
            .label
            .strip_prefix("Use ")
            .and_then(|rest| rest.strip_suffix(" style"))
            .unwrap();
        assert!(STYLES.contains(&picked));
    }
}
