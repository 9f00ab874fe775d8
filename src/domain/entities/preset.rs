use crate::domain::errors::FilterError;
use std::str::FromStr;

/// One-tap bundles of draft assignments shown above the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickPreset {
    Recent,
    Worn,
    LeastWorn,
    HighValue,
    Old,
    Favorites,
}

impl QuickPreset {
    pub const ALL: [QuickPreset; 6] = [
        QuickPreset::Recent,
        QuickPreset::Worn,
        QuickPreset::LeastWorn,
        QuickPreset::HighValue,
        QuickPreset::Old,
        QuickPreset::Favorites,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            QuickPreset::Recent => "recent",
            QuickPreset::Worn => "worn",
            QuickPreset::LeastWorn => "least_worn",
            QuickPreset::HighValue => "high_value",
            QuickPreset::Old => "old",
            QuickPreset::Favorites => "favorites",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuickPreset::Recent => "Recently Added",
            QuickPreset::Worn => "Most Worn",
            QuickPreset::LeastWorn => "Least Worn",
            QuickPreset::HighValue => "High Value",
            QuickPreset::Old => "Oldest",
            QuickPreset::Favorites => "Favorites",
        }
    }
}

impl FromStr for QuickPreset {
    type Err = FilterError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        QuickPreset::ALL
            .into_iter()
            .find(|preset| preset.id() == id)
            .ok_or_else(|| FilterError::UnknownPreset(id.to_string()))
    }
}
