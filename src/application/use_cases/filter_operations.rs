use crate::application::dto::{CommitReport, StoreMutation};
use crate::domain::{
    entities::{ClosetFilters, FilterDraft, FlagCommitMode},
    repositories::ClosetStore,
};
use anyhow::{Context, Result};
use std::sync::Arc;

pub struct GetClosetFilters {
    store: Arc<dyn ClosetStore>,
}

impl GetClosetFilters {
    pub fn new(store: Arc<dyn ClosetStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self) -> ClosetFilters {
        self.store.current_filters()
    }
}

pub struct LoadFilterDraft {
    store: Arc<dyn ClosetStore>,
}

impl LoadFilterDraft {
    pub fn new(store: Arc<dyn ClosetStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self) -> FilterDraft {
        let filters = self.store.current_filters();
        tracing::debug!(
            "Loaded filter draft from store ({} active filters)",
            filters.active_count()
        );
        let draft = FilterDraft::from_store(&filters);
        if draft.category != filters.category || draft.brand != filters.brand {
            tracing::warn!(
                "Store holds filters outside the option lists (category {:?}, brand {:?}); starting from no filter",
                filters.category,
                filters.brand
            );
        }
        draft
    }
}

/// Works out which store mutators a commit has to call, in call order.
///
/// Active text filters, condition and sorting are always written. Size and
/// color live only in the draft and are never forwarded.
pub fn plan_commit(
    draft: &FilterDraft,
    current: &ClosetFilters,
    mode: FlagCommitMode,
) -> Vec<StoreMutation> {
    let mut plan = Vec::new();

    let (write_category, write_brand) = match mode {
        FlagCommitMode::Toggle => (!draft.category.is_empty(), !draft.brand.is_empty()),
        FlagCommitMode::Assign => (
            !draft.category.is_empty() || draft.category != current.category,
            !draft.brand.is_empty() || draft.brand != current.brand,
        ),
    };

    if write_category {
        plan.push(StoreMutation::SetCategory(draft.category.clone()));
    }
    if write_brand {
        plan.push(StoreMutation::SetBrand(draft.brand.clone()));
    }

    plan.push(StoreMutation::SetCondition(draft.condition));

    let flags = [
        (
            draft.only_favorited,
            current.only_favorited,
            StoreMutation::ToggleOnlyFavorited,
        ),
        (
            draft.only_on_sale,
            current.only_on_sale,
            StoreMutation::ToggleOnlyOnSale,
        ),
        (
            draft.only_in_outfits,
            current.only_in_outfits,
            StoreMutation::ToggleOnlyInOutfits,
        ),
    ];
    for (wanted, stored, toggle) in flags {
        let flip = match mode {
            FlagCommitMode::Toggle => wanted,
            FlagCommitMode::Assign => wanted != stored,
        };
        if flip {
            plan.push(toggle);
        }
    }

    plan.push(StoreMutation::SetSorting(draft.sort_field, draft.sort_ascending));

    plan
}

pub struct CommitFilterDraft {
    store: Arc<dyn ClosetStore>,
}

impl CommitFilterDraft {
    pub fn new(store: Arc<dyn ClosetStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self, draft: &FilterDraft, mode: FlagCommitMode) -> Result<CommitReport> {
        let current = self.store.current_filters();
        let plan = plan_commit(draft, &current, mode);
        tracing::debug!("Committing filter draft with {} store updates ({:?} mode)", plan.len(), mode);

        let mut report = CommitReport::default();
        for mutation in plan {
            self.apply(&mutation)
                .with_context(|| format!("Failed to apply {}", mutation))?;
            report.applied.push(mutation);
        }

        tracing::info!("{}", report.summary());
        Ok(report)
    }

    fn apply(&self, mutation: &StoreMutation) -> Result<()> {
        match mutation {
            StoreMutation::SetCategory(category) => self.store.set_category_filter(category),
            StoreMutation::SetBrand(brand) => self.store.set_brand_filter(brand),
            StoreMutation::SetCondition(condition) => self.store.set_condition_filter(*condition),
            StoreMutation::ToggleOnlyFavorited => self.store.toggle_show_only_favorited(),
            StoreMutation::ToggleOnlyOnSale => self.store.toggle_show_only_on_sale(),
            StoreMutation::ToggleOnlyInOutfits => self.store.toggle_show_only_in_outfits(),
            StoreMutation::SetSorting(field, ascending) => {
                self.store.set_sorting(*field, *ascending)
            }
        }
    }
}
