use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    DateAdded,
    Name,
    Price,
    WearCount,
    LastWorn,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::DateAdded,
        SortField::Name,
        SortField::Price,
        SortField::WearCount,
        SortField::LastWorn,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortField::DateAdded => "Date Added",
            SortField::Name => "Name",
            SortField::Price => "Price",
            SortField::WearCount => "Wear Count",
            SortField::LastWorn => "Last Worn",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
