use super::{Condition, SortField};
use serde::{Deserialize, Serialize};

/// Filter and sort state held by the closet store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClosetFilters {
    pub category: String,
    pub brand: String,
    pub condition: Condition,
    pub only_favorited: bool,
    pub only_on_sale: bool,
    pub only_in_outfits: bool,
    pub sort_field: SortField,
    pub sort_ascending: bool,
}

impl ClosetFilters {
    /// Number of filters that currently narrow the closet. Condition and
    /// sorting always carry a value and are not counted.
    pub fn active_count(&self) -> usize {
        [
            !self.category.is_empty(),
            !self.brand.is_empty(),
            self.only_favorited,
            self.only_on_sale,
            self.only_in_outfits,
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn sort_direction_label(&self) -> &'static str {
        if self.sort_ascending {
            "ascending"
        } else {
            "descending"
        }
    }
}
