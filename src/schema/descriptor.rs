use serde::{Deserialize, Serialize};
use std::fmt;

/// Hardware or meta platform a title ships on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Pc,
    Ps4,
    Ps5,
    XOne,
    Xsx,
    Sw,
    WiiU,
    ThreeDs,
    /// Composed or virtual titles such as medleys.
    Meta,
}

impl Platform {
    /// Short display label: "PC", "PS4", "3DS", ...
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pc => "PC",
            Self::Ps4 => "PS4",
            Self::Ps5 => "PS5",
            Self::XOne => "XONE",
            Self::Xsx => "XSX",
            Self::Sw => "SW",
            Self::WiiU => "WIIU",
            Self::ThreeDs => "3DS",
            Self::Meta => "META",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Static identity of a game generator.
///
/// Every generator owns one of these as a `static`; the registry and the
/// medley composer only ever hold `&'static` references to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDescriptor {
    /// Canonical display name, unique across the registry.
    pub name: &'static str,
    pub platform: Platform,
    pub other_platforms: &'static [Platform],
    pub adult_only: bool,
}

impl GameDescriptor {
    /// All platforms, primary first.
    pub fn platforms(&self) -> impl Iterator<Item = Platform> + '_ {
        std::iter::once(self.platform).chain(self.other_platforms.iter().copied())
    }

    /// "Monster Hunter World (PC/PS4/XONE)"
    pub fn name_with_platforms(&self) -> String {
        let labels: Vec<&str> = self.platforms().map(|p| p.label()).collect();
        format!("{} ({})", self.name, labels.join("/"))
    }
}
