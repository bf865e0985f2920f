/// The game generator contract and the two-phase generation cycle.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::select::{generate_objective, generate_objectives, Objective, ObjectiveFilter};
use crate::core::template::ObjectiveTemplate;
use crate::schema::descriptor::GameDescriptor;
use crate::schema::options::ConfigError;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("objective catalog requested before a theme was selected")]
    ThemeNotSelected,
    #[error("current theme '{0}' is missing from the medley table")]
    ThemeMissing(String),
    #[error("no selectable objective for '{0}'")]
    NoSelectableObjective(String),
}

/// A title that can describe challenges for itself.
///
/// Within one cycle `optional_constraint_templates` is always called first,
/// then `objective_templates`, each exactly once.
pub trait Game {
    fn descriptor(&self) -> &GameDescriptor;

    /// Canonical display name, used for registry lookup and label prefixes.
    fn name(&self) -> &str {
        self.descriptor().name
    }

    /// Modifier templates that apply on top of whichever objective is chosen.
    fn optional_constraint_templates(
        &mut self,
        rng: &mut StdRng,
    ) -> Result<Vec<ObjectiveTemplate>, GenerationError>;

    /// The weighted catalog of primary objectives, built fresh on every call.
    fn objective_templates(
        &mut self,
        rng: &mut StdRng,
    ) -> Result<Vec<ObjectiveTemplate>, GenerationError>;
}

/// Output of one full generation cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycle {
    pub constraint: Option<Objective>,
    pub objectives: Vec<Objective>,
}

/// Run the constraint phase, then the main phase, and resolve `count`
/// objectives from the filtered catalog.
///
/// The constraint phase always runs, even when `with_constraint` is false,
/// because generators such as medleys pick their theme there.
pub fn run_cycle(
    game: &mut dyn Game,
    rng: &mut StdRng,
    filter: ObjectiveFilter,
    count: usize,
    with_constraint: bool,
) -> Result<Cycle, GenerationError> {
    let constraints = game.optional_constraint_templates(rng)?;
    let constraint = if with_constraint {
        generate_objective(&constraints, rng)
    } else {
        None
    };

    let catalog: Vec<ObjectiveTemplate> = game
        .objective_templates(rng)?
        .into_iter()
        .filter(|template| filter.admits(template))
        .collect();

    let objectives = generate_objectives(&catalog, count, rng);
    if count > 0 && objectives.is_empty() {
        return Err(GenerationError::NoSelectableObjective(
            game.name().to_string(),
        ));
    }

    Ok(Cycle {
        constraint,
        objectives,
    })
}
