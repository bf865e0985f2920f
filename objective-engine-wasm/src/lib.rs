//! WASM bindings for objective-engine: a seeded medley session for the web demo.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use objective_engine::core::game::run_cycle;
use objective_engine::core::medley::MedleyComposer;
use objective_engine::core::registry::GameRegistry;
use objective_engine::core::select::ObjectiveFilter;
use objective_engine::schema::options::GameOptions;

// ---------------------------------------------------------------------------
// Embedded demo configuration, compiled into the WASM binary
// ---------------------------------------------------------------------------
mod data {
    pub const DEFAULT_OPTIONS: &str = include_str!("../../demo_data/default_options.ron");
}

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
struct GameInfo {
    name: String,
    platforms: Vec<String>,
}

#[derive(serde::Serialize)]
struct CycleInfo {
    theme: Option<String>,
    constraint: Option<String>,
    objectives: Vec<objective_engine::core::select::Objective>,
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(|e| JsError::new(&format!("Serialization error: {e}")))
}

// ---------------------------------------------------------------------------
// MedleyDemo, the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct MedleyDemo {
    registry: Arc<GameRegistry>,
    options: Arc<GameOptions>,
    composer: MedleyComposer,
    rng: StdRng,
}

#[wasm_bindgen]
impl MedleyDemo {
    /// Create a session from a RON options document and a seed.
    #[wasm_bindgen(constructor)]
    pub fn new(options_ron: &str, seed: u64) -> Result<MedleyDemo, JsError> {
        let options = GameOptions::parse_ron(options_ron)
            .map_err(|e| JsError::new(&format!("Options parse error: {e}")))?;
        let options = Arc::new(options);
        let registry = Arc::new(GameRegistry::with_builtin_games());
        let composer = MedleyComposer::new(Arc::clone(&registry), Arc::clone(&options));

        Ok(MedleyDemo {
            registry,
            options,
            composer,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Create a session over the bundled demo configuration.
    pub fn with_defaults(seed: u64) -> Result<MedleyDemo, JsError> {
        Self::new(data::DEFAULT_OPTIONS, seed)
    }

    /// Draw a theme. Returns the `"Theme: <name>"` announcement.
    pub fn announce(&mut self) -> Result<String, JsError> {
        self.composer
            .generate_constraint_announcement(&mut self.rng)
            .map_err(|e| JsError::new(&format!("Theme error: {e}")))
    }

    /// Resolve the current theme's catalog. Returns a JSON array of objectives.
    pub fn catalog(&mut self) -> Result<String, JsError> {
        let catalog = self
            .composer
            .generate_objective_catalog(&mut self.rng)
            .map_err(|e| JsError::new(&format!("Catalog error: {e}")))?;
        to_json(&catalog)
    }

    /// Run a full cycle drawing `count` objectives. Returns JSON with the
    /// theme, optional constraint and objectives.
    pub fn cycle(&mut self, count: usize) -> Result<String, JsError> {
        let filter = ObjectiveFilter::from_options(&self.options);
        let cycle = run_cycle(&mut self.composer, &mut self.rng, filter, count, true)
            .map_err(|e| JsError::new(&format!("Cycle error: {e}")))?;
        let info = CycleInfo {
            theme: self.composer.current_theme().map(str::to_string),
            constraint: cycle.constraint.map(|c| c.label),
            objectives: cycle.objectives,
        };
        to_json(&info)
    }

    /// Return JSON array of registered games with their platforms.
    pub fn games(&self) -> Result<String, JsError> {
        let games: Vec<GameInfo> = self
            .registry
            .names()
            .filter_map(|name| self.registry.get(name))
            .map(|entry| GameInfo {
                name: entry.descriptor.name.to_string(),
                platforms: entry
                    .descriptor
                    .platforms()
                    .map(|p| p.label().to_string())
                    .collect(),
            })
            .collect();
        to_json(&games)
    }

    /// Return JSON array of configured medley names.
    pub fn themes(&self) -> Result<String, JsError> {
        let names: Vec<&str> = self
            .options
            .custom_medleys
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        to_json(&names)
    }

    /// Start over with a fresh composer and seed.
    pub fn reset(&mut self, seed: u64) {
        self.composer = MedleyComposer::new(Arc::clone(&self.registry), Arc::clone(&self.options));
        self.rng = StdRng::seed_from_u64(seed);
    }
}
