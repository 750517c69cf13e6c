//! Cities covered by the product
//!
//! Claims carry free-text cities; this closed set is only used for defaults
//! and filter menus.

use serde::{Deserialize, Serialize};

/// A city the product reports on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum City {
    /// Nation-wide, matches every claim in filters
    #[default]
    #[serde(rename = "All India")]
    AllIndia,
    /// Mumbai
    Mumbai,
    /// Coimbatore
    Coimbatore,
    /// Cochin (Kochi)
    Cochin,
}

impl City {
    /// Concrete cities, alphabetical, without the nation-wide entry
    pub const LOCAL: [Self; 3] = [Self::Cochin, Self::Coimbatore, Self::Mumbai];

    /// Display label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllIndia => "All India",
            Self::Mumbai => "Mumbai",
            Self::Coimbatore => "Coimbatore",
            Self::Cochin => "Cochin",
        }
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
