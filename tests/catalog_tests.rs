/// Built-in catalog tests: every title resolves under any toggle setting.

use objective_engine::core::game::{run_cycle, Game};
use objective_engine::core::registry::GameRegistry;
use objective_engine::core::select::{generate_objectives, resolve_all, ObjectiveFilter};
use objective_engine::games::{
    monster_hunter_3_ultimate, monster_hunter_4_ultimate, monster_hunter_generations_ultimate,
    monster_hunter_world,
};
use objective_engine::schema::options::GameOptions;
use rand::rngs::StdRng;
use rand::SeedableRng;

const TOGGLES: &[&str] = &[
    monster_hunter_3_ultimate::INCLUDE_RANK,
    monster_hunter_3_ultimate::INCLUDE_DLC,
    monster_hunter_world::ICEBORNE,
    monster_hunter_world::INCLUDE_RANK,
    monster_hunter_world::INCLUDE_EVENTS,
    monster_hunter_4_ultimate::AGED_TEXT_MONSTERS,
    monster_hunter_4_ultimate::INCLUDE_APEX,
    monster_hunter_4_ultimate::INCLUDE_DLC,
    monster_hunter_generations_ultimate::INCLUDE_RANK_DEPENDENT,
    monster_hunter_generations_ultimate::INCLUDE_DLC,
];

fn all_toggles(value: bool) -> GameOptions {
    let mut options = GameOptions::default();
    for key in TOGGLES {
        options.set_toggle(key, value);
    }
    options
}

fn check_every_template_resolves(options: &GameOptions) {
    let registry = GameRegistry::with_builtin_games();
    let mut rng = StdRng::seed_from_u64(7);

    for name in registry.names() {
        let mut game: Box<dyn Game> = registry.instantiate(name, options).unwrap();

        let constraints = game.optional_constraint_templates(&mut rng).unwrap();
        assert!(!constraints.is_empty(), "{} has no constraints", name);
        assert_eq!(resolve_all(&constraints, &mut rng).len(), constraints.len());

        let objectives = game.objective_templates(&mut rng).unwrap();
        assert!(objectives.len() >= 14, "{} catalog too small", name);
        assert_eq!(
            resolve_all(&objectives, &mut rng).len(),
            objectives.len(),
            "{} has a template that cannot resolve",
            name
        );
        for template in &objectives {
            assert!(template.unused_tokens().is_empty(), "{}: {}", name, template.label);
        }
    }
}

#[test]
fn builtin_catalogs_resolve_with_defaults() {
    check_every_template_resolves(&GameOptions::default());
}

#[test]
fn builtin_catalogs_resolve_with_everything_off() {
    check_every_template_resolves(&all_toggles(false));
}

#[test]
fn builtin_catalogs_resolve_with_everything_on() {
    check_every_template_resolves(&all_toggles(true));
}

#[test]
fn multi_value_drops_are_distinct() {
    let registry = GameRegistry::with_builtin_games();
    let mut game = registry
        .instantiate("Monster Hunter World", &GameOptions::default())
        .unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    let templates: Vec<_> = game
        .objective_templates(&mut rng)
        .unwrap()
        .into_iter()
        .filter(|t| t.label.ends_with("DROPS"))
        .collect();
    assert_eq!(templates.len(), 1);

    for _ in 0..50 {
        let objective = &generate_objectives(&templates, 1, &mut rng)[0];
        let (_, drops) = objective.label.split_once(": ").unwrap();
        let values: Vec<&str> = drops.split(", ").collect();
        assert_eq!(values.len(), 2);
        assert_ne!(values[0], values[1]);
    }
}

#[test]
fn single_title_cycle() {
    let registry = GameRegistry::with_builtin_games();
    let mut game = registry
        .instantiate("Monster Hunter 4 Ultimate", &GameOptions::default())
        .unwrap();
    let mut rng = StdRng::seed_from_u64(2);
    let cycle = run_cycle(game.as_mut(), &mut rng, ObjectiveFilter::default(), 5, true).unwrap();
    assert!(cycle.constraint.is_some());
    assert_eq!(cycle.objectives.len(), 5);
}
