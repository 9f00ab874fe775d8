use crate::application::dto::StoreMutation;
use crate::domain::entities::{ClosetFilters, Condition, SortField};
use crate::domain::repositories::ClosetStore;
use anyhow::{Result, anyhow};
use std::sync::Mutex;

/// Closet store double that applies mutations like the real store and
/// records every successful call.
#[derive(Default)]
pub struct RecordingStore {
    filters: Mutex<ClosetFilters>,
    calls: Mutex<Vec<StoreMutation>>,
    fail_on: Option<StoreMutation>,
}

impl RecordingStore {
    pub fn with_filters(filters: ClosetFilters) -> Self {
        Self {
            filters: Mutex::new(filters),
            ..Self::default()
        }
    }

    pub fn failing_on(mutation: StoreMutation) -> Self {
        Self {
            fail_on: Some(mutation),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<StoreMutation> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, mutation: StoreMutation, apply: impl FnOnce(&mut ClosetFilters)) -> Result<()> {
        if self.fail_on.as_ref() == Some(&mutation) {
            return Err(anyhow!("store rejected {}", mutation));
        }
        apply(&mut *self.filters.lock().unwrap());
        self.calls.lock().unwrap().push(mutation);
        Ok(())
    }
}

impl ClosetStore for RecordingStore {
    fn current_filters(&self) -> ClosetFilters {
        self.filters.lock().unwrap().clone()
    }

    fn set_category_filter(&self, category: &str) -> Result<()> {
        let value = category.to_string();
        self.record(StoreMutation::SetCategory(value.clone()), |f| f.category = value)
    }

    fn set_brand_filter(&self, brand: &str) -> Result<()> {
        let value = brand.to_string();
        self.record(StoreMutation::SetBrand(value.clone()), |f| f.brand = value)
    }

    fn set_condition_filter(&self, condition: Condition) -> Result<()> {
        self.record(StoreMutation::SetCondition(condition), |f| f.condition = condition)
    }

    fn toggle_show_only_favorited(&self) -> Result<()> {
        self.record(StoreMutation::ToggleOnlyFavorited, |f| {
            f.only_favorited = !f.only_favorited
        })
    }

    fn toggle_show_only_on_sale(&self) -> Result<()> {
        self.record(StoreMutation::ToggleOnlyOnSale, |f| f.only_on_sale = !f.only_on_sale)
    }

    fn toggle_show_only_in_outfits(&self) -> Result<()> {
        self.record(StoreMutation::ToggleOnlyInOutfits, |f| {
            f.only_in_outfits = !f.only_in_outfits
        })
    }

    fn set_sorting(&self, field: SortField, ascending: bool) -> Result<()> {
        self.record(StoreMutation::SetSorting(field, ascending), |f| {
            f.sort_field = field;
            f.sort_ascending = ascending;
        })
    }
}
