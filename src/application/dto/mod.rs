use crate::domain::entities::{Condition, SortField};
use std::fmt;

/// One call into the closet store's mutator API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreMutation {
    SetCategory(String),
    SetBrand(String),
    SetCondition(Condition),
    ToggleOnlyFavorited,
    ToggleOnlyOnSale,
    ToggleOnlyInOutfits,
    SetSorting(SortField, bool),
}

impl fmt::Display for StoreMutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreMutation::SetCategory(category) => write!(f, "setCategoryFilter({:?})", category),
            StoreMutation::SetBrand(brand) => write!(f, "setBrandFilter({:?})", brand),
            StoreMutation::SetCondition(condition) => {
                write!(f, "setConditionFilter({})", condition)
            }
            StoreMutation::ToggleOnlyFavorited => write!(f, "toggleShowOnlyFavorited()"),
            StoreMutation::ToggleOnlyOnSale => write!(f, "toggleShowOnlyOnSale()"),
            StoreMutation::ToggleOnlyInOutfits => write!(f, "toggleShowOnlyInOutfits()"),
            StoreMutation::SetSorting(field, ascending) => {
                write!(f, "setSorting({}, {})", field, ascending)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitReport {
    pub applied: Vec<StoreMutation>,
}

impl CommitReport {
    pub fn summary(&self) -> String {
        let calls: Vec<String> = self.applied.iter().map(|m| m.to_string()).collect();
        format!("Applied {} store updates: {}", calls.len(), calls.join(", "))
    }
}
