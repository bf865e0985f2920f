/// Weighted objective selection and token resolution.

use log::debug;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::seq::index;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::template::{LabelSegment, ObjectiveTemplate};
use crate::schema::options::GameOptions;

/// A token pool too small for the requested number of distinct values.
///
/// Recovered locally: the template is dropped from the selectable set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("token '{token}' needs {requested} distinct values but its pool has {available}")]
pub struct ResolutionShortfall {
    pub token: String,
    pub requested: usize,
    pub available: usize,
}

/// A finished objective: rendered label plus classification flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    pub label: String,
    pub is_difficult: bool,
    pub is_time_consuming: bool,
}

/// Global include switches for difficult and time-consuming objectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectiveFilter {
    pub include_difficult: bool,
    pub include_time_consuming: bool,
}

impl Default for ObjectiveFilter {
    fn default() -> Self {
        Self {
            include_difficult: true,
            include_time_consuming: true,
        }
    }
}

impl ObjectiveFilter {
    pub fn from_options(options: &GameOptions) -> Self {
        Self {
            include_difficult: options.include_difficult_objectives,
            include_time_consuming: options.include_time_consuming_objectives,
        }
    }

    pub fn admits(&self, template: &ObjectiveTemplate) -> bool {
        (self.include_difficult || !template.is_difficult)
            && (self.include_time_consuming || !template.is_time_consuming)
    }
}

/// Draw one template with probability proportional to its weight.
///
/// Zero-weight templates are never drawn. Returns `None` when no template
/// has a positive weight.
pub fn pick_weighted<'a>(
    templates: &'a [ObjectiveTemplate],
    rng: &mut StdRng,
) -> Option<&'a ObjectiveTemplate> {
    let index = pick_index(templates.iter().map(|t| t.weight), rng)?;
    templates.get(index)
}

fn pick_index<I>(weights: I, rng: &mut StdRng) -> Option<usize>
where
    I: IntoIterator<Item = u32>,
{
    // Summed in u64 so large u32 weights cannot overflow. Fails on an empty
    // list or when every weight is zero.
    let dist: WeightedIndex<u64> =
        WeightedIndex::new(weights.into_iter().map(u64::from)).ok()?;
    Some(dist.sample(rng))
}

/// Fill every referenced token of `template` and render its label.
///
/// Each token draws `count` distinct values without replacement from its
/// deduplicated pool; all occurrences of the token share the same values,
/// joined with ", " when more than one.
pub fn resolve(
    template: &ObjectiveTemplate,
    rng: &mut StdRng,
) -> Result<Objective, ResolutionShortfall> {
    let segments = template.segments();
    let referenced: FxHashSet<&str> = segments
        .iter()
        .filter_map(|segment| match segment {
            LabelSegment::Token(key) => Some(key.as_str()),
            LabelSegment::Literal(_) => None,
        })
        .collect();

    let mut chosen: FxHashMap<&str, String> = FxHashMap::default();
    for (key, spec) in &template.tokens {
        if !referenced.contains(key.as_str()) {
            continue;
        }

        let pool = distinct(spec.provider.pool());
        if pool.len() < spec.count {
            return Err(ResolutionShortfall {
                token: key.clone(),
                requested: spec.count,
                available: pool.len(),
            });
        }

        let picked: Vec<&str> = index::sample(rng, pool.len(), spec.count)
            .into_iter()
            .map(|i| pool[i].as_str())
            .collect();
        chosen.insert(key.as_str(), picked.join(", "));
    }

    let label = segments
        .iter()
        .map(|segment| match segment {
            LabelSegment::Literal(text) => text.as_str(),
            LabelSegment::Token(key) => chosen.get(key.as_str()).map_or("", String::as_str),
        })
        .collect();

    Ok(Objective {
        label,
        is_difficult: template.is_difficult,
        is_time_consuming: template.is_time_consuming,
    })
}

/// Pick and resolve one objective. Templates that fall short are dropped
/// and the draw is repeated.
pub fn generate_objective(templates: &[ObjectiveTemplate], rng: &mut StdRng) -> Option<Objective> {
    generate_objectives(templates, 1, rng).pop()
}

/// Pick and resolve up to `count` independent objectives.
///
/// Draws are independent, so the same template may come up twice. A
/// template that falls short once stays out for the rest of the call.
pub fn generate_objectives(
    templates: &[ObjectiveTemplate],
    count: usize,
    rng: &mut StdRng,
) -> Vec<Objective> {
    let mut weights: Vec<u32> = templates.iter().map(|t| t.weight).collect();
    let mut objectives = Vec::with_capacity(count);

    while objectives.len() < count {
        let Some(index) = pick_index(weights.iter().copied(), rng) else {
            break;
        };
        match resolve(&templates[index], rng) {
            Ok(objective) => objectives.push(objective),
            Err(shortfall) => {
                debug!(
                    "template '{}' unselectable this cycle: {}",
                    templates[index].label, shortfall
                );
                weights[index] = 0;
            }
        }
    }

    objectives
}

/// Resolve every template once, in order, skipping shortfalls.
pub fn resolve_all(templates: &[ObjectiveTemplate], rng: &mut StdRng) -> Vec<Objective> {
    templates
        .iter()
        .filter_map(|template| match resolve(template, rng) {
            Ok(objective) => Some(objective),
            Err(shortfall) => {
                debug!("skipping template '{}': {}", template.label, shortfall);
                None
            }
        })
        .collect()
}

fn distinct(pool: Vec<String>) -> Vec<String> {
    let mut seen = FxHashSet::default();
    pool.into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::template::TokenProvider;
    use rand::SeedableRng;

    fn values(items: &[&str]) -> TokenProvider {
        TokenProvider::from_values(items.iter().copied())
    }

    #[test]
    fn slay_scenario_yields_pool_values_only() {
        let t = ObjectiveTemplate::new("Slay MONSTER").token("MONSTER", values(&["A", "B"]), 1);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let objective = resolve(&t, &mut rng).unwrap();
            assert!(
                objective.label == "Slay A" || objective.label == "Slay B",
                "unexpected label: {}",
                objective.label
            );
        }
    }

    #[test]
    fn zero_weight_never_picked() {
        let templates = vec![
            ObjectiveTemplate::new("never").weight(0),
            ObjectiveTemplate::new("sometimes").weight(1),
            ObjectiveTemplate::new("often").weight(5),
        ];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2000 {
            let picked = pick_weighted(&templates, &mut rng).unwrap();
            assert_ne!(picked.label, "never");
        }
    }

    #[test]
    fn all_zero_weights_pick_nothing() {
        let templates = vec![ObjectiveTemplate::new("a").weight(0)];
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick_weighted(&templates, &mut rng).is_none());
        assert!(pick_weighted(&[], &mut rng).is_none());
    }

    #[test]
    fn weights_near_u32_max_do_not_overflow() {
        let templates = vec![
            ObjectiveTemplate::new("heavy").weight(u32::MAX),
            ObjectiveTemplate::new("light").weight(1),
            ObjectiveTemplate::new("never").weight(0),
        ];
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..500 {
            let picked = pick_weighted(&templates, &mut rng).unwrap();
            assert_ne!(picked.label, "never");
        }
        assert_eq!(generate_objectives(&templates, 5, &mut rng).len(), 5);
    }

    #[test]
    fn multi_value_samples_are_distinct() {
        let t = ObjectiveTemplate::new("Obtain DROPS").token("DROPS", values(&["Gem", "Plate"]), 2);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let label = resolve(&t, &mut rng).unwrap().label;
            assert!(
                label == "Obtain Gem, Plate" || label == "Obtain Plate, Gem",
                "unexpected label: {label}"
            );
        }
    }

    #[test]
    fn duplicate_pool_entries_do_not_count_twice() {
        let t = ObjectiveTemplate::new("Obtain DROPS").token("DROPS", values(&["Gem", "Gem"]), 2);
        let mut rng = StdRng::seed_from_u64(3);
        let err = resolve(&t, &mut rng).unwrap_err();
        assert_eq!(
            err,
            ResolutionShortfall {
                token: "DROPS".to_string(),
                requested: 2,
                available: 1,
            }
        );
    }

    #[test]
    fn repeated_token_shares_value() {
        let t = ObjectiveTemplate::new("MONSTER then MONSTER").token("MONSTER", values(&["A", "B", "C"]), 1);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let label = resolve(&t, &mut rng).unwrap().label;
            let parts: Vec<&str> = label.split(" then ").collect();
            assert_eq!(parts[0], parts[1]);
        }
    }

    #[test]
    fn unreferenced_token_is_inert() {
        let t = ObjectiveTemplate::new("Clear 2 Subquests").token("EMPTY", values(&[]), 1);
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(resolve(&t, &mut rng).unwrap().label, "Clear 2 Subquests");
    }

    #[test]
    fn shortfall_template_is_skipped_not_fatal() {
        let templates = vec![
            ObjectiveTemplate::new("Hunt MONSTER").token("MONSTER", values(&[]), 1).weight(100),
            ObjectiveTemplate::new("Slay MONSTER").token("MONSTER", values(&["A"]), 1),
        ];
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            let objective = generate_objective(&templates, &mut rng).unwrap();
            assert_eq!(objective.label, "Slay A");
        }
    }

    #[test]
    fn nothing_resolvable_yields_none() {
        let templates = vec![ObjectiveTemplate::new("Hunt MONSTER").token("MONSTER", values(&[]), 1)];
        let mut rng = StdRng::seed_from_u64(9);
        assert!(generate_objective(&templates, &mut rng).is_none());
    }

    #[test]
    fn flags_are_carried() {
        let t = ObjectiveTemplate::new("Hard").difficult().time_consuming();
        let mut rng = StdRng::seed_from_u64(0);
        let objective = resolve(&t, &mut rng).unwrap();
        assert!(objective.is_difficult);
        assert!(objective.is_time_consuming);
    }

    #[test]
    fn resolve_all_skips_shortfalls() {
        let templates = vec![
            ObjectiveTemplate::new("Hunt MONSTER").token("MONSTER", values(&[]), 1),
            ObjectiveTemplate::new("Slay MONSTER").token("MONSTER", values(&["A"]), 1),
        ];
        let mut rng = StdRng::seed_from_u64(2);
        let all = resolve_all(&templates, &mut rng);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].label, "Slay A");
    }

    #[test]
    fn same_seed_same_objectives() {
        let templates = vec![
            ObjectiveTemplate::new("Slay MONSTER").token("MONSTER", values(&["A", "B", "C", "D"]), 1).weight(3),
            ObjectiveTemplate::new("Capture MONSTER").token("MONSTER", values(&["E", "F"]), 1),
        ];
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        assert_eq!(
            generate_objectives(&templates, 10, &mut rng1),
            generate_objectives(&templates, 10, &mut rng2)
        );
    }

    #[test]
    fn filter_admits() {
        let filter = ObjectiveFilter {
            include_difficult: false,
            include_time_consuming: true,
        };
        assert!(!filter.admits(&ObjectiveTemplate::new("x").difficult()));
        assert!(filter.admits(&ObjectiveTemplate::new("x").time_consuming()));
        assert!(ObjectiveFilter::default().admits(&ObjectiveTemplate::new("x").difficult()));
    }
}
