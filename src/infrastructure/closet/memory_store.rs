use super::ClosetStateRepository;
use crate::domain::entities::{ClosetFilters, Condition, SortField};
use crate::domain::repositories::ClosetStore;
use anyhow::Result;
use std::sync::{Mutex, MutexGuard, PoisonError};

pub struct InMemoryClosetStore {
    state: Mutex<ClosetFilters>,
    repository: Option<ClosetStateRepository>,
}

impl InMemoryClosetStore {
    pub fn new(initial: ClosetFilters) -> Self {
        Self {
            state: Mutex::new(initial),
            repository: None,
        }
    }

    /// Loads the saved state and writes every later mutation back to it.
    pub fn persistent(repository: ClosetStateRepository) -> Result<Self> {
        let initial = repository.load()?;
        tracing::debug!(
            "Restored closet state with {} active filters",
            initial.active_count()
        );
        Ok(Self {
            state: Mutex::new(initial),
            repository: Some(repository),
        })
    }

    // The state is plain data, so a panic mid-update cannot leave it torn.
    fn lock(&self) -> MutexGuard<'_, ClosetFilters> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn update(&self, apply: impl FnOnce(&mut ClosetFilters)) -> Result<()> {
        let mut state = self.lock();
        let mut next = state.clone();
        apply(&mut next);

        if let Some(repository) = &self.repository {
            repository.save(&next)?;
        }

        *state = next;
        Ok(())
    }
}

impl Default for InMemoryClosetStore {
    fn default() -> Self {
        Self::new(ClosetFilters::default())
    }
}

impl ClosetStore for InMemoryClosetStore {
    fn current_filters(&self) -> ClosetFilters {
        self.lock().clone()
    }

    fn set_category_filter(&self, category: &str) -> Result<()> {
        tracing::trace!("setCategoryFilter({:?})", category);
        self.update(|state| state.category = category.to_string())
    }

    fn set_brand_filter(&self, brand: &str) -> Result<()> {
        tracing::trace!("setBrandFilter({:?})", brand);
        self.update(|state| state.brand = brand.to_string())
    }

    fn set_condition_filter(&self, condition: Condition) -> Result<()> {
        tracing::trace!("setConditionFilter({})", condition);
        self.update(|state| state.condition = condition)
    }

    fn toggle_show_only_favorited(&self) -> Result<()> {
        tracing::trace!("toggleShowOnlyFavorited()");
        self.update(|state| state.only_favorited = !state.only_favorited)
    }

    fn toggle_show_only_on_sale(&self) -> Result<()> {
        tracing::trace!("toggleShowOnlyOnSale()");
        self.update(|state| state.only_on_sale = !state.only_on_sale)
    }

    fn toggle_show_only_in_outfits(&self) -> Result<()> {
        tracing::trace!("toggleShowOnlyInOutfits()");
        self.update(|state| state.only_in_outfits = !state.only_in_outfits)
    }

    fn set_sorting(&self, field: SortField, ascending: bool) -> Result<()> {
        tracing::trace!("setSorting({}, {})", field, ascending);
        self.update(|state| {
            state.sort_field = field;
            state.sort_ascending = ascending;
        })
    }
}
