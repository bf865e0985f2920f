use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::descriptor::GameDescriptor;

/// One raw medley entry as written in the options file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedleyEntry {
    pub name: String,
    pub games: Vec<String>,
    #[serde(default)]
    pub exclude_difficult: Vec<String>,
    #[serde(default)]
    pub exclude_time_consuming: Vec<String>,
}

/// A validated medley: members resolved against the registry and filtered
/// by platform policy.
#[derive(Debug, Clone)]
pub struct MedleyDefinition {
    pub name: String,
    pub members: Vec<&'static GameDescriptor>,
    pub exclude_difficult: FxHashSet<String>,
    pub exclude_time_consuming: FxHashSet<String>,
}

impl MedleyDefinition {
    /// True if difficult objectives of `game` are dropped in this medley.
    pub fn excludes_difficult(&self, game: &str) -> bool {
        self.exclude_difficult.contains(game)
    }

    /// True if time-consuming objectives of `game` are dropped in this medley.
    pub fn excludes_time_consuming(&self, game: &str) -> bool {
        self.exclude_time_consuming.contains(game)
    }

    pub fn member_names(&self) -> Vec<&'static str> {
        self.members.iter().map(|d| d.name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_optional_lists_default_to_empty() {
        let entry: MedleyEntry =
            ron::from_str(r#"(name: "Solo", games: ["Monster Hunter World"])"#).unwrap();
        assert_eq!(entry.name, "Solo");
        assert_eq!(entry.games, vec!["Monster Hunter World".to_string()]);
        assert!(entry.exclude_difficult.is_empty());
        assert!(entry.exclude_time_consuming.is_empty());
    }

    #[test]
    fn entry_missing_games_is_rejected() {
        let parsed: Result<MedleyEntry, _> = ron::from_str(r#"(name: "Broken")"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn exclusion_lookups() {
        let def = MedleyDefinition {
            name: "Test".to_string(),
            members: Vec::new(),
            exclude_difficult: ["A".to_string()].into_iter().collect(),
            exclude_time_consuming: FxHashSet::default(),
        };
        assert!(def.excludes_difficult("A"));
        assert!(!def.excludes_difficult("B"));
        assert!(!def.excludes_time_consuming("A"));
    }
}
