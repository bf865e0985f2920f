/// Medley composer: merges several games into one themed generator.
///
/// A cycle runs the constraint phase (draw a theme, announce it) and then
/// the main phase (materialize the theme's members into one catalog).

use log::{debug, error, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;
use std::sync::Arc;

use crate::core::game::{Game, GenerationError};
use crate::core::registry::{GameRegistry, PlatformPolicy, RegisteredGame};
use crate::core::select::{resolve_all, Objective};
use crate::core::template::ObjectiveTemplate;
use crate::schema::descriptor::{GameDescriptor, Platform};
use crate::schema::medley::{MedleyDefinition, MedleyEntry};
use crate::schema::options::{ConfigError, GameOptions};

pub static CUSTOM_MEDLEY: GameDescriptor = GameDescriptor {
    name: "Custom Medley",
    platform: Platform::Meta,
    other_platforms: &[],
    adult_only: false,
};

/// Where the composer is within the current cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MedleyState {
    Uninitialized,
    ThemeSelected(String),
    Materialized(String),
}

#[derive(Debug)]
pub struct MedleyComposer {
    registry: Arc<GameRegistry>,
    options: Arc<GameOptions>,
    policy: PlatformPolicy,
    /// Parsed on the first constraint phase, then kept for the composer's lifetime.
    medleys: Option<Vec<MedleyDefinition>>,
    state: MedleyState,
}

impl MedleyComposer {
    pub fn new(registry: Arc<GameRegistry>, options: Arc<GameOptions>) -> Self {
        let policy = PlatformPolicy::from_options(&options);
        Self {
            registry,
            options,
            policy,
            medleys: None,
            state: MedleyState::Uninitialized,
        }
    }

    pub fn with_policy(mut self, policy: PlatformPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn state(&self) -> &MedleyState {
        &self.state
    }

    pub fn current_theme(&self) -> Option<&str> {
        match &self.state {
            MedleyState::Uninitialized => None,
            MedleyState::ThemeSelected(name) | MedleyState::Materialized(name) => Some(name),
        }
    }

    /// The validated medley table, parsing the options on first use.
    pub fn medleys(&mut self) -> Result<&[MedleyDefinition], ConfigError> {
        if self.medleys.is_none() {
            let parsed = parse_medleys(&self.options.custom_medleys, &self.registry, &self.policy)?;
            debug!("parsed {} custom medleys", parsed.len());
            self.medleys = Some(parsed);
        }
        Ok(self.medleys.as_deref().unwrap_or_default())
    }

    /// Constraint phase: draw a theme and return its announcement,
    /// `"Theme: <name>"`.
    pub fn generate_constraint_announcement(
        &mut self,
        rng: &mut StdRng,
    ) -> Result<String, GenerationError> {
        let theme = self
            .medleys()?
            .choose(rng)
            .map(|medley| medley.name.clone())
            .ok_or(ConfigError::EmptyMedleyList)?;

        let announcement = format!("Theme: {}", theme);
        self.state = MedleyState::ThemeSelected(theme);
        Ok(announcement)
    }

    /// Main phase: materialize the current theme and resolve every template
    /// once. Templates whose pools fall short are left out.
    pub fn generate_objective_catalog(
        &mut self,
        rng: &mut StdRng,
    ) -> Result<Vec<Objective>, GenerationError> {
        let templates = self.materialize(rng)?;
        Ok(resolve_all(&templates, rng))
    }

    fn materialize(&mut self, rng: &mut StdRng) -> Result<Vec<ObjectiveTemplate>, GenerationError> {
        let Some(theme) = self.current_theme().map(str::to_string) else {
            error!("medley catalog requested before the constraint phase selected a theme");
            return Err(GenerationError::ThemeNotSelected);
        };

        let medley = self
            .medleys
            .as_deref()
            .and_then(|medleys| medleys.iter().find(|m| m.name == theme))
            .cloned();
        let Some(medley) = medley else {
            error!("current theme '{}' is not in the medley table", theme);
            return Err(GenerationError::ThemeMissing(theme));
        };

        let mut catalog = Vec::new();
        for descriptor in &medley.members {
            let entry = lookup(&self.registry, &medley.name, descriptor.name)?;
            let mut game = entry.instantiate(&self.options);
            let name = game.name().to_string();
            let prefix = format!("{}: ", name);

            let templates = game.objective_templates(rng)?;
            let before = templates.len();
            let kept: Vec<ObjectiveTemplate> = templates
                .into_iter()
                .filter(|t| !(t.is_difficult && medley.excludes_difficult(&name)))
                .filter(|t| !(t.is_time_consuming && medley.excludes_time_consuming(&name)))
                .map(|t| disambiguate_tokens(&t, &name).with_label_prefix(&prefix))
                .collect();
            debug!(
                "medley '{}': {} of {} objectives kept for '{}'",
                medley.name,
                kept.len(),
                before,
                name
            );
            catalog.extend(kept);
        }

        self.state = MedleyState::Materialized(theme);
        Ok(catalog)
    }
}

impl Game for MedleyComposer {
    fn descriptor(&self) -> &GameDescriptor {
        &CUSTOM_MEDLEY
    }

    fn optional_constraint_templates(
        &mut self,
        rng: &mut StdRng,
    ) -> Result<Vec<ObjectiveTemplate>, GenerationError> {
        let announcement = self.generate_constraint_announcement(rng)?;
        Ok(vec![ObjectiveTemplate::new(announcement)])
    }

    fn objective_templates(
        &mut self,
        rng: &mut StdRng,
    ) -> Result<Vec<ObjectiveTemplate>, GenerationError> {
        self.materialize(rng)
    }
}

/// Validate raw medley entries against the registry.
///
/// Any unknown game, blank or duplicate name rejects the whole list. Members
/// the policy refuses are dropped here, not at selection time.
pub fn parse_medleys(
    entries: &[MedleyEntry],
    registry: &GameRegistry,
    policy: &PlatformPolicy,
) -> Result<Vec<MedleyDefinition>, ConfigError> {
    if entries.is_empty() {
        return Err(ConfigError::EmptyMedleyList);
    }

    let mut names = FxHashSet::default();
    let mut medleys = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        if entry.name.trim().is_empty() {
            return Err(ConfigError::EmptyName { index });
        }
        if !names.insert(entry.name.as_str()) {
            return Err(ConfigError::DuplicateMedley(entry.name.clone()));
        }

        let mut members = Vec::new();
        let mut listed: FxHashSet<&str> = FxHashSet::default();
        for game in &entry.games {
            let registered = lookup(registry, &entry.name, game)?;
            if !listed.insert(game.as_str()) {
                warn!("medley '{}' lists '{}' more than once", entry.name, game);
                continue;
            }
            if policy.admits(registered.descriptor) {
                members.push(registered.descriptor);
            } else {
                warn!(
                    "medley '{}': dropping '{}' ({}) under the platform policy",
                    entry.name, game, registered.descriptor.platform
                );
            }
        }

        for game in entry
            .exclude_difficult
            .iter()
            .chain(&entry.exclude_time_consuming)
        {
            lookup(registry, &entry.name, game)?;
            if !listed.contains(game.as_str()) {
                return Err(ConfigError::NotAMember {
                    medley: entry.name.clone(),
                    game: game.clone(),
                });
            }
        }

        if members.is_empty() {
            warn!("medley '{}' has no playable members", entry.name);
        }

        medleys.push(MedleyDefinition {
            name: entry.name.clone(),
            members,
            exclude_difficult: entry.exclude_difficult.iter().cloned().collect(),
            exclude_time_consuming: entry.exclude_time_consuming.iter().cloned().collect(),
        });
    }

    Ok(medleys)
}

fn lookup<'r>(
    registry: &'r GameRegistry,
    medley: &str,
    game: &str,
) -> Result<&'r RegisteredGame, ConfigError> {
    registry.get(game).ok_or_else(|| ConfigError::UnknownGame {
        medley: medley.to_string(),
        game: game.to_string(),
    })
}

/// Rename every token key that occurs inside `game_name`, so prefixing the
/// label with the name cannot create a stray placeholder.
///
/// `1` is appended until the new key is neither part of the name nor an
/// existing key.
pub fn disambiguate_tokens(template: &ObjectiveTemplate, game_name: &str) -> ObjectiveTemplate {
    let colliding: Vec<String> = template
        .tokens
        .keys()
        .filter(|key| !key.is_empty() && game_name.contains(key.as_str()))
        .cloned()
        .collect();

    let mut result = template.clone();
    for key in colliding {
        let mut renamed = format!("{}1", key);
        while game_name.contains(renamed.as_str()) || result.tokens.contains_key(&renamed) {
            renamed.push('1');
        }
        result = result.rename_token(&key, &renamed);
    }
    result
}
