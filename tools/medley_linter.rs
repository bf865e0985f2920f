/// Medley Linter: validates a medley configuration and lints every
/// registered template catalog.
///
/// Usage: medley_linter [<options.ron>] [--seed <n>]

use objective_engine::core::game::Game;
use objective_engine::core::medley::parse_medleys;
use objective_engine::core::registry::{GameRegistry, PlatformPolicy};
use objective_engine::core::template::ObjectiveTemplate;
use objective_engine::schema::medley::MedleyDefinition;
use objective_engine::schema::options::GameOptions;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rustc_hash::FxHashSet;
use std::path::Path;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        println!("Usage: medley_linter [<options.ron>] [--seed <n>]");
        process::exit(0);
    }

    let mut options_path = None;
    let mut seed: u64 = 0;

    let mut i = 1;
    while i < args.len() {
        if args[i] == "--seed" && i + 1 < args.len() {
            i += 1;
            seed = args[i].parse().unwrap_or(0);
        } else if options_path.is_none() {
            options_path = Some(args[i].clone());
        }
        i += 1;
    }

    let options = match options_path {
        Some(ref path) => match GameOptions::load_from_ron(Path::new(path)) {
            Ok(options) => options,
            Err(e) => {
                eprintln!("ERROR: Failed to load options: {}", e);
                process::exit(1);
            }
        },
        None => GameOptions::default(),
    };

    let registry = GameRegistry::with_builtin_games();
    let mut rng = StdRng::seed_from_u64(seed);

    println!("Linting {} registered games", registry.len());

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for name in registry.names() {
        let Some(mut game) = registry.instantiate(name, &options) else {
            continue;
        };
        lint_game(game.as_mut(), &mut rng, &mut errors, &mut warnings);
    }

    if !options.custom_medleys.is_empty() {
        let policy = PlatformPolicy::from_options(&options);
        match parse_medleys(&options.custom_medleys, &registry, &policy) {
            Ok(medleys) => {
                println!("Parsed {} custom medleys", medleys.len());
                for medley in &medleys {
                    lint_medley(medley, &registry, &options, &mut rng, &mut errors, &mut warnings);
                }
            }
            Err(e) => errors.push(format!("medley configuration: {}", e)),
        }
    }

    println!("\n=== Medley Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );

    if errors.is_empty() {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn lint_game(
    game: &mut dyn Game,
    rng: &mut StdRng,
    errors: &mut Vec<String>,
    warnings: &mut Vec<String>,
) {
    let name = game.name().to_string();

    match game.optional_constraint_templates(rng) {
        Ok(templates) => {
            for template in &templates {
                lint_template(&name, "constraint", template, errors, warnings);
            }
        }
        Err(e) => errors.push(format!("{}: constraint catalog failed: {}", name, e)),
    }

    match game.objective_templates(rng) {
        Ok(templates) => {
            if templates.is_empty() {
                warnings.push(format!("{}: empty objective catalog", name));
            }
            if templates.iter().all(|t| t.weight == 0) && !templates.is_empty() {
                errors.push(format!("{}: every objective has weight 0", name));
            }
            for template in &templates {
                lint_template(&name, "objective", template, errors, warnings);
            }
        }
        Err(e) => errors.push(format!("{}: objective catalog failed: {}", name, e)),
    }
}

fn lint_template(
    game: &str,
    kind: &str,
    template: &ObjectiveTemplate,
    errors: &mut Vec<String>,
    warnings: &mut Vec<String>,
) {
    for key in template.unused_tokens() {
        warnings.push(format!(
            "{} {} '{}': token '{}' never appears in the label",
            game, kind, template.label, key
        ));
    }

    if template.weight == 0 && kind == "objective" {
        warnings.push(format!("{} objective '{}' has weight 0", game, template.label));
    }

    for key in template.referenced_tokens() {
        let Some(spec) = template.tokens.get(&key) else {
            continue;
        };
        if spec.count == 0 {
            warnings.push(format!(
                "{} {} '{}': token '{}' draws zero values",
                game, kind, template.label, key
            ));
            continue;
        }
        let distinct: FxHashSet<String> = spec.provider.pool().into_iter().collect();
        if distinct.len() < spec.count {
            errors.push(format!(
                "{} {} '{}': token '{}' needs {} values, pool has {}",
                game,
                kind,
                template.label,
                key,
                spec.count,
                distinct.len()
            ));
        }
    }
}

fn lint_medley(
    medley: &MedleyDefinition,
    registry: &GameRegistry,
    options: &GameOptions,
    rng: &mut StdRng,
    errors: &mut Vec<String>,
    warnings: &mut Vec<String>,
) {
    if medley.members.is_empty() {
        warnings.push(format!("medley '{}' has no playable members", medley.name));
        return;
    }

    for member in &medley.members {
        let Some(mut game) = registry.instantiate(member.name, options) else {
            continue;
        };
        let templates = match game.objective_templates(rng) {
            Ok(templates) => templates,
            Err(e) => {
                errors.push(format!(
                    "medley '{}': '{}' objective catalog failed: {}",
                    medley.name, member.name, e
                ));
                continue;
            }
        };

        if medley.excludes_difficult(member.name) && !templates.iter().any(|t| t.is_difficult) {
            warnings.push(format!(
                "medley '{}': '{}' has no difficult objectives to exclude",
                medley.name, member.name
            ));
        }
        if medley.excludes_time_consuming(member.name)
            && !templates.iter().any(|t| t.is_time_consuming)
        {
            warnings.push(format!(
                "medley '{}': '{}' has no time-consuming objectives to exclude",
                medley.name, member.name
            ));
        }
    }
}
