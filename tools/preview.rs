/// Preview: interactive shell for trying medley configurations.
///
/// Usage: preview --options <path> [--seed <n>] [--count <n>]
///
/// Commands:
///   cycle            run one constraint + objective cycle
///   theme            draw a theme and print its announcement
///   catalog          print the resolved catalog for the current theme
///   seed <n>         reseed the generator
///   count <n>        objectives drawn per cycle
///   bulk <n>         run n cycles and print theme counts
///   games            list registered games
///   help             list commands
///   quit             exit

use objective_engine::core::game::run_cycle;
use objective_engine::core::medley::MedleyComposer;
use objective_engine::core::registry::GameRegistry;
use objective_engine::core::select::ObjectiveFilter;
use objective_engine::schema::options::GameOptions;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let mut options_path = None;
    let mut seed: u64 = 42;
    let mut count: usize = 3;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--options" if i + 1 < args.len() => {
                i += 1;
                options_path = Some(args[i].clone());
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = args[i].parse().unwrap_or(42);
            }
            "--count" if i + 1 < args.len() => {
                i += 1;
                count = args[i].parse().unwrap_or(3);
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let Some(path) = options_path else {
        eprintln!("ERROR: --options is required");
        print_usage();
        std::process::exit(1);
    };

    let options = match GameOptions::load_from_ron(Path::new(&path)) {
        Ok(options) => Arc::new(options),
        Err(e) => {
            eprintln!("ERROR: Failed to load options: {}", e);
            std::process::exit(1);
        }
    };
    let registry = Arc::new(GameRegistry::with_builtin_games());
    let filter = ObjectiveFilter::from_options(&options);

    println!(
        "Loaded {} custom medleys, {} registered games",
        options.custom_medleys.len(),
        registry.len()
    );
    println!("Seed: {}", seed);
    println!("Type 'help' for commands.\n");

    let mut composer = MedleyComposer::new(Arc::clone(&registry), Arc::clone(&options));
    let mut rng = StdRng::seed_from_u64(seed);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("preview> ");
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();

        match cmd.as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye.");
                break;
            }
            "help" | "h" | "?" => print_help(),
            "cycle" => match run_cycle(&mut composer, &mut rng, filter, count, true) {
                Ok(cycle) => {
                    println!("\n--- Cycle ---");
                    if let Some(theme) = composer.current_theme() {
                        println!("Theme: {}", theme);
                    }
                    if let Some(constraint) = &cycle.constraint {
                        println!("Constraint: {}", constraint.label);
                    }
                    for objective in &cycle.objectives {
                        println!("  - {}{}", objective.label, flags(objective.is_difficult, objective.is_time_consuming));
                    }
                    println!("--- End ---\n");
                }
                Err(e) => println!("ERROR: {}", e),
            },
            "theme" => match composer.generate_constraint_announcement(&mut rng) {
                Ok(announcement) => println!("{}", announcement),
                Err(e) => println!("ERROR: {}", e),
            },
            "catalog" => match composer.generate_objective_catalog(&mut rng) {
                Ok(catalog) => {
                    println!("{} objectives:", catalog.len());
                    for objective in &catalog {
                        println!("  - {}{}", objective.label, flags(objective.is_difficult, objective.is_time_consuming));
                    }
                }
                Err(e) => println!("ERROR: {}", e),
            },
            "seed" => {
                if parts.len() < 2 {
                    println!("Usage: seed <n>");
                    continue;
                }
                match parts[1].parse::<u64>() {
                    Ok(n) => {
                        rng = StdRng::seed_from_u64(n);
                        println!("Seed set to {}", n);
                    }
                    Err(_) => println!("Invalid seed: {}", parts[1]),
                }
            }
            "count" => {
                if parts.len() < 2 {
                    println!("Usage: count <n>  (current: {})", count);
                    continue;
                }
                match parts[1].parse::<usize>() {
                    Ok(n) => {
                        count = n;
                        println!("Objectives per cycle: {}", count);
                    }
                    Err(_) => println!("Invalid count: {}", parts[1]),
                }
            }
            "bulk" => {
                let n: usize = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(10);
                let mut themes: BTreeMap<String, usize> = BTreeMap::new();
                let mut objectives = 0;
                let mut failures = 0;
                for _ in 0..n {
                    match run_cycle(&mut composer, &mut rng, filter, count, false) {
                        Ok(cycle) => {
                            objectives += cycle.objectives.len();
                            if let Some(theme) = composer.current_theme() {
                                *themes.entry(theme.to_string()).or_default() += 1;
                            }
                        }
                        Err(e) => {
                            failures += 1;
                            println!("ERROR: {}", e);
                        }
                    }
                }
                println!("\n=== Bulk Stats ({} cycles) ===", n);
                for (theme, hits) in &themes {
                    println!("  {:<32} {}", theme, hits);
                }
                println!("Objectives drawn: {}", objectives);
                println!("Failed cycles: {}\n", failures);
            }
            "games" => {
                for name in registry.names() {
                    let Some(entry) = registry.get(name) else {
                        continue;
                    };
                    println!("  {}", entry.descriptor.name_with_platforms());
                }
            }
            _ => println!("Unknown command: {}. Type 'help' for commands.", cmd),
        }
    }
}

fn flags(difficult: bool, time_consuming: bool) -> &'static str {
    match (difficult, time_consuming) {
        (true, true) => "  [difficult, time-consuming]",
        (true, false) => "  [difficult]",
        (false, true) => "  [time-consuming]",
        (false, false) => "",
    }
}

fn print_usage() {
    println!("Usage: preview --options <path> [--seed <n>] [--count <n>]");
}

fn print_help() {
    println!("Commands:");
    println!("  cycle            run one constraint + objective cycle");
    println!("  theme            draw a theme and print its announcement");
    println!("  catalog          print the resolved catalog for the current theme");
    println!("  seed <n>         reseed the generator");
    println!("  count <n>        objectives drawn per cycle");
    println!("  bulk <n>         run n cycles and print theme counts");
    println!("  games            list registered games");
    println!("  help             list commands");
    println!("  quit             exit");
}
