/// Shared pools and templates for the Monster Hunter titles.
///
/// Each title supplies its content tables through [`HuntingTables`]; the
/// objective shapes common to the series are built here once.

use std::collections::BTreeSet;
use std::sync::{Arc, OnceLock};

use crate::core::template::{ObjectiveTemplate, TokenProvider};

pub const WEAPONS: &[&str] = &[
    "Great Sword",
    "Long Sword",
    "Sword and Shield",
    "Dual Blades",
    "Hammer",
    "Hunting Horn",
    "Lance",
    "Gunlance",
    "Switch Axe",
    "Charge Blade",
    "Insect Glaive",
    "Light Bowgun",
    "Heavy Bowgun",
    "Bow",
];

pub const TIMERS: &[&str] = &["30 Minutes", "25 Minutes", "20 Minutes"];

/// Content pools a hunting title exposes to its templates.
///
/// Implementations read their configuration toggles on every call.
pub trait HuntingTables: Send + Sync + 'static {
    fn monsters(&self) -> Vec<String>;
    fn capturable(&self) -> Vec<String>;
    fn variants(&self) -> Vec<String>;
    fn stages(&self) -> Vec<String>;
    fn drops(&self) -> Vec<String>;
    fn tails(&self) -> Vec<String>;

    fn weapons(&self) -> Vec<String> {
        owned(WEAPONS)
    }

    fn timers(&self) -> Vec<String> {
        owned(TIMERS)
    }
}

/// Wrap one pool of `tables` as a token provider.
pub fn provider<T: HuntingTables>(tables: &Arc<T>, pool: fn(&T) -> Vec<String>) -> TokenProvider {
    let tables = Arc::clone(tables);
    TokenProvider::new(move || pool(&tables))
}

pub fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Sorted, duplicate-free pool.
pub fn sorted<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut items: Vec<String> = items.into_iter().collect();
    items.sort();
    items.dedup();
    items
}

/// `pool` minus `excluded`, sorted.
pub fn without(pool: Vec<String>, excluded: &[&str]) -> Vec<String> {
    let excluded: BTreeSet<&str> = excluded.iter().copied().collect();
    sorted(pool.into_iter().filter(|item| !excluded.contains(item.as_str())))
}

/// A base list converted once per generator instance.
pub fn memo<'a>(cell: &'a OnceLock<Vec<String>>, items: &[&str]) -> &'a [String] {
    cell.get_or_init(|| owned(items))
}

/// Constraint templates every title in the series shares.
pub fn common_constraints<T: HuntingTables>(tables: &Arc<T>) -> Vec<ObjectiveTemplate> {
    vec![
        ObjectiveTemplate::new("Use an element, or status, that the monster resists"),
        ObjectiveTemplate::new("Run a full set of MONSTER Armor")
            .token("MONSTER", provider(tables, T::monsters), 1),
        ObjectiveTemplate::new("Run a MONSTER Weapon (if possible)")
            .token("MONSTER", provider(tables, T::monsters), 1),
        ObjectiveTemplate::new("Your weapon type must be rarity level 4 or lower"),
    ]
}

/// The series' primary objective catalog.
///
/// `stage_labels` phrases the two- and three-monster stage hunts, which
/// differ between titles.
pub fn common_objectives<T: HuntingTables>(
    tables: &Arc<T>,
    stage_labels: [&str; 2],
) -> Vec<ObjectiveTemplate> {
    let monsters = || provider(tables, T::monsters);
    let capturable = || provider(tables, T::capturable);
    let weapons = || provider(tables, T::weapons);

    vec![
        ObjectiveTemplate::new("Slay MONSTER")
            .token("MONSTER", monsters(), 1)
            .weight(4),
        ObjectiveTemplate::new("Slay MONSTER using the following weapon: WEAPON")
            .token("MONSTER", monsters(), 1)
            .token("WEAPON", weapons(), 1)
            .weight(3),
        ObjectiveTemplate::new("Hunt MONSTER with its own Weapon")
            .token("MONSTER", monsters(), 1)
            .weight(2),
        ObjectiveTemplate::new("Hunt MONSTER within TIMER")
            .token("MONSTER", monsters(), 1)
            .token("TIMER", provider(tables, T::timers), 1)
            .weight(3),
        ObjectiveTemplate::new("Capture MONSTER")
            .token("MONSTER", capturable(), 1)
            .weight(4),
        ObjectiveTemplate::new("Capture MONSTER using the following weapon: WEAPON")
            .token("MONSTER", capturable(), 1)
            .token("WEAPON", weapons(), 1)
            .weight(3),
        ObjectiveTemplate::new("Carve the following Tail: TAIL")
            .token("TAIL", provider(tables, T::tails), 1)
            .weight(3),
        ObjectiveTemplate::new("Break 2 MONSTER parts")
            .token("MONSTER", monsters(), 1)
            .weight(2),
        ObjectiveTemplate::new(stage_labels[0])
            .token("STAGE", provider(tables, T::stages), 1)
            .weight(3),
        ObjectiveTemplate::new(stage_labels[1])
            .token("STAGE", provider(tables, T::stages), 1)
            .weight(2),
        ObjectiveTemplate::new("Hunt 3 VARIANT monsters")
            .token("VARIANT", provider(tables, T::variants), 1)
            .weight(2),
        ObjectiveTemplate::new("Hunt MONSTER without dying")
            .token("MONSTER", monsters(), 1)
            .difficult()
            .weight(2),
        ObjectiveTemplate::new("Wielding the WEAPON, obtain the following Drop: DROP")
            .token("WEAPON", weapons(), 1)
            .token("DROP", provider(tables, T::drops), 1)
            .time_consuming()
            .weight(2),
        ObjectiveTemplate::new(
            "Obtain the following Drops as Broken Part Rewards (when possible): DROPS",
        )
        .token("DROPS", provider(tables, T::drops), 2)
        .time_consuming()
        .difficult()
        .weight(1),
    ]
}
