/// Medley integration tests: built-in games composed through RON options.

use objective_engine::core::game::{run_cycle, GenerationError};
use objective_engine::core::medley::{MedleyComposer, MedleyState};
use objective_engine::core::registry::GameRegistry;
use objective_engine::core::select::{Objective, ObjectiveFilter};
use objective_engine::schema::medley::MedleyEntry;
use objective_engine::schema::options::{ConfigError, GameOptions};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use std::sync::Arc;

const TOKENS: &[&str] = &[
    "MONSTER", "WEAPON", "TIMER", "STAGE", "VARIANT", "DROP", "TAIL", "NUMBER", "STYLE",
];

const WORLD_PREFIX: &str = "Monster Hunter World: ";
const ULTIMATE_PREFIX: &str = "Monster Hunter 4 Ultimate: ";

fn composer_for(options: GameOptions) -> MedleyComposer {
    MedleyComposer::new(
        Arc::new(GameRegistry::with_builtin_games()),
        Arc::new(options),
    )
}

fn fixture_options() -> GameOptions {
    GameOptions::load_from_ron(Path::new("tests/fixtures/medleys.ron")).unwrap()
}

fn medley(name: &str, games: &[&str]) -> MedleyEntry {
    MedleyEntry {
        name: name.to_string(),
        games: games.iter().map(|g| g.to_string()).collect(),
        exclude_difficult: Vec::new(),
        exclude_time_consuming: Vec::new(),
    }
}

fn theme_and_catalog(composer: &mut MedleyComposer, rng: &mut StdRng) -> (String, Vec<Objective>) {
    let announcement = composer.generate_constraint_announcement(rng).unwrap();
    let catalog = composer.generate_objective_catalog(rng).unwrap();
    (announcement, catalog)
}

#[test]
fn hunters_choice_scenario() {
    let mut composer = composer_for(fixture_options());
    let mut rng = StdRng::seed_from_u64(42);

    let (announcement, catalog) = theme_and_catalog(&mut composer, &mut rng);
    assert_eq!(announcement, "Theme: Hunter's Choice");
    assert_eq!(
        composer.state(),
        &MedleyState::Materialized("Hunter's Choice".to_string())
    );

    let world: Vec<&Objective> = catalog
        .iter()
        .filter(|o| o.label.starts_with(WORLD_PREFIX))
        .collect();
    let ultimate: Vec<&Objective> = catalog
        .iter()
        .filter(|o| o.label.starts_with(ULTIMATE_PREFIX))
        .collect();

    assert_eq!(world.len() + ultimate.len(), catalog.len());
    // 16 World templates with Iceborne, minus its two difficult ones.
    assert_eq!(world.len(), 14);
    assert_eq!(ultimate.len(), 15);
    assert!(world.iter().all(|o| !o.is_difficult));
    assert!(ultimate.iter().any(|o| o.is_difficult));
}

#[test]
fn no_placeholder_survives_resolution() {
    let mut composer = composer_for(fixture_options());
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let (_, catalog) = theme_and_catalog(&mut composer, &mut rng);
        for objective in &catalog {
            for token in TOKENS {
                assert!(
                    !objective.label.contains(token),
                    "unresolved {} in '{}'",
                    token,
                    objective.label
                );
            }
        }
    }
}

#[test]
fn unknown_game_rejected_before_theme_selection() {
    let options =
        GameOptions::load_from_ron(Path::new("tests/fixtures/unknown_game.ron")).unwrap();
    let mut composer = composer_for(options);
    let mut rng = StdRng::seed_from_u64(0);

    let result = composer.generate_constraint_announcement(&mut rng);
    assert!(matches!(
        result,
        Err(GenerationError::Config(ConfigError::UnknownGame { ref game, .. }))
            if game == "Monster Hunter Freedom Unite"
    ));
    assert_eq!(composer.state(), &MedleyState::Uninitialized);
}

#[test]
fn catalog_before_theme_fails_fast() {
    let mut composer = composer_for(fixture_options());
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        composer.generate_objective_catalog(&mut rng),
        Err(GenerationError::ThemeNotSelected)
    ));
}

#[test]
fn switch_titles_are_dropped_from_members() {
    let options = GameOptions::default().with_medleys(vec![medley(
        "Mixed",
        &["Monster Hunter Generations Ultimate", "Monster Hunter World"],
    )]);
    let mut composer = composer_for(options);
    let mut rng = StdRng::seed_from_u64(5);

    let (_, catalog) = theme_and_catalog(&mut composer, &mut rng);
    assert!(!catalog.is_empty());
    assert!(catalog.iter().all(|o| o.label.starts_with(WORLD_PREFIX)));
}

#[test]
fn wii_u_title_joins_a_medley() {
    let mut entry = medley(
        "Old and New",
        &["Monster Hunter 3 Ultimate", "Monster Hunter World"],
    );
    entry.exclude_time_consuming = vec!["Monster Hunter 3 Ultimate".to_string()];
    let mut composer = composer_for(GameOptions::default().with_medleys(vec![entry]));
    let mut rng = StdRng::seed_from_u64(21);

    let (announcement, catalog) = theme_and_catalog(&mut composer, &mut rng);
    assert_eq!(announcement, "Theme: Old and New");

    let tri: Vec<&Objective> = catalog
        .iter()
        .filter(|o| o.label.starts_with("Monster Hunter 3 Ultimate: "))
        .collect();
    // 14 series templates, minus the two time-consuming ones.
    assert_eq!(tri.len(), 12);
    assert!(tri.iter().all(|o| !o.is_time_consuming));
    assert_eq!(catalog.len() - tri.len(), 16);
    assert!(catalog[tri.len()..]
        .iter()
        .all(|o| o.label.starts_with(WORLD_PREFIX)));
}

#[test]
fn fully_dropped_medley_yields_empty_catalog() {
    let options = GameOptions::default().with_medleys(vec![medley(
        "Handheld",
        &["Monster Hunter Generations Ultimate"],
    )]);
    let mut composer = composer_for(options);
    let mut rng = StdRng::seed_from_u64(5);

    let (announcement, catalog) = theme_and_catalog(&mut composer, &mut rng);
    assert_eq!(announcement, "Theme: Handheld");
    assert!(catalog.is_empty());
}

#[test]
fn same_seed_same_medley_output() {
    let options = GameOptions::default().with_medleys(vec![
        medley("A", &["Monster Hunter World"]),
        medley("B", &["Monster Hunter 4 Ultimate"]),
        medley("C", &["Monster Hunter World", "Monster Hunter 4 Ultimate"]),
    ]);

    let mut first = composer_for(options.clone());
    let mut second = composer_for(options);
    let mut rng_a = StdRng::seed_from_u64(1234);
    let mut rng_b = StdRng::seed_from_u64(1234);

    for _ in 0..5 {
        assert_eq!(
            theme_and_catalog(&mut first, &mut rng_a),
            theme_and_catalog(&mut second, &mut rng_b)
        );
    }
}

#[test]
fn full_cycle_announces_theme_and_draws_objectives() {
    let mut composer = composer_for(fixture_options());
    let mut rng = StdRng::seed_from_u64(9);

    let cycle = run_cycle(&mut composer, &mut rng, ObjectiveFilter::default(), 3, true).unwrap();
    let constraint = cycle.constraint.unwrap();
    assert_eq!(constraint.label, "Theme: Hunter's Choice");
    assert_eq!(cycle.objectives.len(), 3);
    for objective in &cycle.objectives {
        assert!(
            objective.label.starts_with(WORLD_PREFIX) || objective.label.starts_with(ULTIMATE_PREFIX)
        );
    }
}

#[test]
fn global_filter_applies_to_medleys() {
    let mut composer = composer_for(fixture_options());
    let mut rng = StdRng::seed_from_u64(9);
    let filter = ObjectiveFilter {
        include_difficult: false,
        include_time_consuming: false,
    };

    for _ in 0..10 {
        let cycle = run_cycle(&mut composer, &mut rng, filter, 4, false).unwrap();
        assert!(cycle.constraint.is_none());
        assert!(cycle
            .objectives
            .iter()
            .all(|o| !o.is_difficult && !o.is_time_consuming));
    }
}
