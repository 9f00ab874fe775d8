use super::{ClosetFilters, Condition, QuickPreset, SortField, TextField};

/// Unsaved filter and sort settings edited by the filter screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterDraft {
    pub category: String,
    pub brand: String,
    pub size: String,
    pub color: String,
    pub condition: Condition,
    pub only_favorited: bool,
    pub only_on_sale: bool,
    pub only_in_outfits: bool,
    pub sort_field: SortField,
    pub sort_ascending: bool,
}

/// A single-field assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Text(TextField, String),
    Condition(Condition),
    OnlyFavorited(bool),
    OnlyOnSale(bool),
    OnlyInOutfits(bool),
    SortField(SortField),
    SortAscending(bool),
}

impl FieldUpdate {
    pub fn field_name(&self) -> String {
        match self {
            FieldUpdate::Text(field, _) => field.to_string(),
            FieldUpdate::Condition(_) => "condition".to_string(),
            FieldUpdate::OnlyFavorited(_) => "only_favorited".to_string(),
            FieldUpdate::OnlyOnSale(_) => "only_on_sale".to_string(),
            FieldUpdate::OnlyInOutfits(_) => "only_in_outfits".to_string(),
            FieldUpdate::SortField(_) => "sort_field".to_string(),
            FieldUpdate::SortAscending(_) => "sort_ascending".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEvent {
    Set(FieldUpdate),
    ApplyPreset(QuickPreset),
    ClearAll,
}

impl FilterDraft {
    /// Seeds a draft from the store. Size and color are not held by the
    /// store and always start empty. Stored values missing from the option
    /// lists start as "no filter".
    pub fn from_store(filters: &ClosetFilters) -> Self {
        Self {
            category: known_option(TextField::Category, &filters.category),
            brand: known_option(TextField::Brand, &filters.brand),
            size: String::new(),
            color: String::new(),
            condition: filters.condition,
            only_favorited: filters.only_favorited,
            only_on_sale: filters.only_on_sale,
            only_in_outfits: filters.only_in_outfits,
            sort_field: filters.sort_field,
            sort_ascending: filters.sort_ascending,
        }
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Category => &self.category,
            TextField::Brand => &self.brand,
            TextField::Size => &self.size,
            TextField::Color => &self.color,
        }
    }

    pub fn reduce(mut self, event: DraftEvent) -> Self {
        match event {
            DraftEvent::Set(update) => self.apply_update(update),
            DraftEvent::ApplyPreset(preset) => self.apply_preset(preset),
            DraftEvent::ClearAll => self = Self::default(),
        }
        self
    }

    fn apply_update(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Text(TextField::Category, value) => self.category = value,
            FieldUpdate::Text(TextField::Brand, value) => self.brand = value,
            FieldUpdate::Text(TextField::Size, value) => self.size = value,
            FieldUpdate::Text(TextField::Color, value) => self.color = value,
            FieldUpdate::Condition(condition) => self.condition = condition,
            FieldUpdate::OnlyFavorited(value) => self.only_favorited = value,
            FieldUpdate::OnlyOnSale(value) => self.only_on_sale = value,
            FieldUpdate::OnlyInOutfits(value) => self.only_in_outfits = value,
            FieldUpdate::SortField(field) => self.sort_field = field,
            FieldUpdate::SortAscending(value) => self.sort_ascending = value,
        }
    }

    fn apply_preset(&mut self, preset: QuickPreset) {
        match preset {
            QuickPreset::Recent => {
                self.sort_field = SortField::DateAdded;
                self.sort_ascending = true;
                self.only_favorited = false;
                self.only_on_sale = false;
                self.only_in_outfits = false;
            }
            QuickPreset::Worn => {
                self.sort_field = SortField::WearCount;
                self.sort_ascending = false;
            }
            QuickPreset::LeastWorn => {
                self.sort_field = SortField::WearCount;
                self.sort_ascending = true;
            }
            QuickPreset::HighValue => {
                self.sort_field = SortField::Price;
                self.sort_ascending = false;
            }
            QuickPreset::Old => {
                self.sort_field = SortField::DateAdded;
                self.sort_ascending = true;
            }
            QuickPreset::Favorites => self.only_favorited = true,
        }
    }
}

fn known_option(field: TextField, value: &str) -> String {
    if field.options().contains(&value) {
        value.to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn busy_draft() -> FilterDraft {
        FilterDraft {
            category: "Shoes".to_string(),
            brand: "Nike".to_string(),
            size: "M".to_string(),
            color: "Red".to_string(),
            condition: Condition::Fair,
            only_favorited: true,
            only_on_sale: true,
            only_in_outfits: true,
            sort_field: SortField::Name,
            sort_ascending: false,
        }
    }

    #[test]
    fn test_default_draft_values() {
        let draft = FilterDraft::default();
        assert_eq!(draft.category, "");
        assert_eq!(draft.brand, "");
        assert_eq!(draft.size, "");
        assert_eq!(draft.color, "");
        assert_eq!(draft.condition, Condition::New);
        assert!(!draft.only_favorited && !draft.only_on_sale && !draft.only_in_outfits);
        assert_eq!(draft.sort_field, SortField::DateAdded);
        assert!(!draft.sort_ascending);
    }

    #[test]
    fn test_from_store_copies_shared_fields_and_blanks_size_color() {
        let filters = ClosetFilters {
            category: "Dresses".to_string(),
            brand: "Zara".to_string(),
            condition: Condition::Good,
            only_favorited: true,
            only_on_sale: false,
            only_in_outfits: true,
            sort_field: SortField::LastWorn,
            sort_ascending: true,
        };

        let draft = FilterDraft::from_store(&filters);

        assert_eq!(draft.category, "Dresses");
        assert_eq!(draft.brand, "Zara");
        assert_eq!(draft.size, "");
        assert_eq!(draft.color, "");
        assert_eq!(draft.condition, Condition::Good);
        assert!(draft.only_favorited);
        assert!(!draft.only_on_sale);
        assert!(draft.only_in_outfits);
        assert_eq!(draft.sort_field, SortField::LastWorn);
        assert!(draft.sort_ascending);
    }

    #[test]
    fn test_from_store_drops_values_outside_option_lists() {
        let filters = ClosetFilters {
            category: "tops".to_string(),
            brand: "Acme".to_string(),
            only_on_sale: true,
            ..ClosetFilters::default()
        };

        let draft = FilterDraft::from_store(&filters);

        assert_eq!(draft.category, "");
        assert_eq!(draft.brand, "");
        assert!(draft.only_on_sale);
    }

    #[test]
    fn test_set_touches_only_the_named_field() {
        let before = busy_draft();
        let after = before
            .clone()
            .reduce(DraftEvent::Set(FieldUpdate::Text(TextField::Color, "Navy".to_string())));

        assert_eq!(after.color, "Navy");
        assert_eq!(FilterDraft { color: before.color.clone(), ..after }, before);
    }

    #[test]
    fn test_clear_all_restores_defaults() {
        let cleared = busy_draft().reduce(DraftEvent::ClearAll);
        assert_eq!(cleared, FilterDraft::default());

        let cleared_twice = FilterDraft::default().reduce(DraftEvent::ClearAll);
        assert_eq!(cleared_twice, FilterDraft::default());
    }

    #[test]
    fn test_favorites_preset_only_sets_favorited() {
        let mut before = busy_draft();
        before.only_favorited = false;

        let after = before.clone().reduce(DraftEvent::ApplyPreset(QuickPreset::Favorites));

        assert!(after.only_favorited);
        assert_eq!(FilterDraft { only_favorited: false, ..after }, before);
    }

    #[test]
    fn test_recent_preset_clears_flags_unconditionally() {
        let after = busy_draft().reduce(DraftEvent::ApplyPreset(QuickPreset::Recent));

        assert_eq!(after.sort_field, SortField::DateAdded);
        assert!(after.sort_ascending);
        assert!(!after.only_favorited);
        assert!(!after.only_on_sale);
        assert!(!after.only_in_outfits);
        assert_eq!(after.category, "Shoes");
        assert_eq!(after.condition, Condition::Fair);
    }

    #[test]
    fn test_sort_presets() {
        let cases = [
            (QuickPreset::Worn, SortField::WearCount, false),
            (QuickPreset::LeastWorn, SortField::WearCount, true),
            (QuickPreset::HighValue, SortField::Price, false),
            (QuickPreset::Old, SortField::DateAdded, true),
        ];

        for (preset, field, ascending) in cases {
            let before = busy_draft();
            let after = before.clone().reduce(DraftEvent::ApplyPreset(preset));
            assert_eq!(after.sort_field, field, "{:?}", preset);
            assert_eq!(after.sort_ascending, ascending, "{:?}", preset);
            assert_eq!(after.only_favorited, before.only_favorited);
            assert_eq!(after.only_on_sale, before.only_on_sale);
            assert_eq!(after.only_in_outfits, before.only_in_outfits);
        }
    }
}
