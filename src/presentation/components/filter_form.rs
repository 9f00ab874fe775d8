use crate::application::UseCaseContainer;
use crate::application::dto::CommitReport;
use crate::application::use_cases::{CommitFilterDraft, LoadFilterDraft};
use crate::domain::entities::{DraftEvent, FieldUpdate, FilterDraft, FlagCommitMode, QuickPreset};
use crate::domain::errors::FilterError;
use crate::domain::services::FilterOptionValidator;
use anyhow::Result;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    Editing,
    Committed,
    Cancelled,
}

/// State behind the filter & sort screen: a draft seeded from the closet
/// store that is either committed back to it or dropped.
pub struct FilterFormController {
    load_draft: Arc<LoadFilterDraft>,
    commit_draft: Arc<CommitFilterDraft>,
    draft: FilterDraft,
    outcome: FormOutcome,
}

impl FilterFormController {
    pub fn open(use_cases: &UseCaseContainer) -> Self {
        let mut controller = Self {
            load_draft: Arc::clone(&use_cases.load_draft),
            commit_draft: Arc::clone(&use_cases.commit_draft),
            draft: FilterDraft::default(),
            outcome: FormOutcome::Editing,
        };
        controller.initialize();
        controller
    }

    pub fn initialize(&mut self) {
        if self.is_closed() {
            tracing::warn!("Filter screen already closed, not reloading the draft");
            return;
        }
        self.draft = self.load_draft.execute();
    }

    pub fn draft(&self) -> &FilterDraft {
        &self.draft
    }

    pub fn outcome(&self) -> FormOutcome {
        self.outcome
    }

    pub fn is_closed(&self) -> bool {
        self.outcome != FormOutcome::Editing
    }

    pub fn set_field(&mut self, update: FieldUpdate) {
        if let Err(e) = FilterOptionValidator::validate_update(&update) {
            tracing::warn!("Ignoring edit: {}", e);
            return;
        }
        tracing::debug!("Draft {} updated", update.field_name());
        self.dispatch(DraftEvent::Set(update));
    }

    pub fn apply_quick_preset(&mut self, preset_id: &str) {
        match preset_id.parse::<QuickPreset>() {
            Ok(preset) => {
                tracing::debug!("Applying quick preset '{}'", preset.id());
                self.dispatch(DraftEvent::ApplyPreset(preset));
            }
            Err(e) => tracing::debug!("{}", e),
        }
    }

    pub fn clear_all(&mut self) {
        tracing::debug!("Clearing all draft filters");
        self.dispatch(DraftEvent::ClearAll);
    }

    pub fn commit(&mut self, mode: FlagCommitMode) -> Result<CommitReport> {
        if self.is_closed() {
            return Err(FilterError::ScreenClosed.into());
        }

        let report = self
            .commit_draft
            .execute(&self.draft, mode)
            .inspect_err(|e| tracing::error!("Failed to apply filters: {:#}", e))?;

        self.outcome = FormOutcome::Committed;
        Ok(report)
    }

    pub fn cancel(&mut self) {
        if self.is_closed() {
            return;
        }
        tracing::debug!("Filter screen cancelled, draft discarded");
        self.outcome = FormOutcome::Cancelled;
    }

    fn dispatch(&mut self, event: DraftEvent) {
        if self.is_closed() {
            tracing::warn!("Filter screen already closed, ignoring {:?}", event);
            return;
        }
        self.draft = std::mem::take(&mut self.draft).reduce(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::StoreMutation;
    use crate::application::test_support::RecordingStore;
    use crate::domain::entities::{ClosetFilters, Condition, SortField, TextField};
    use crate::domain::repositories::ClosetStore;

    fn open_with(filters: ClosetFilters) -> (Arc<RecordingStore>, FilterFormController) {
        let store = Arc::new(RecordingStore::with_filters(filters));
        let use_cases = UseCaseContainer::new(store.clone());
        let controller = FilterFormController::open(&use_cases);
        (store, controller)
    }

    fn text(field: TextField, value: &str) -> FieldUpdate {
        FieldUpdate::Text(field, value.to_string())
    }

    #[test]
    fn test_open_reads_store_into_draft() {
        let (store, controller) = open_with(ClosetFilters {
            category: "Tops".to_string(),
            only_in_outfits: true,
            sort_field: SortField::Name,
            ..ClosetFilters::default()
        });

        assert_eq!(controller.outcome(), FormOutcome::Editing);
        assert_eq!(controller.draft().category, "Tops");
        assert!(controller.draft().only_in_outfits);
        assert_eq!(controller.draft().sort_field, SortField::Name);
        assert!(store.calls().is_empty());
    }

    #[test]
    fn test_set_field_rejects_values_outside_options() {
        let (_store, mut controller) = open_with(ClosetFilters::default());

        controller.set_field(text(TextField::Size, "M"));
        controller.set_field(text(TextField::Size, "Gigantic"));
        controller.set_field(FieldUpdate::Condition(Condition::Poor));

        assert_eq!(controller.draft().size, "M");
        assert_eq!(controller.draft().condition, Condition::Poor);
    }

    #[test]
    fn test_unknown_preset_is_a_no_op() {
        let (_store, mut controller) = open_with(ClosetFilters {
            brand: "Adidas".to_string(),
            only_on_sale: true,
            ..ClosetFilters::default()
        });
        controller.set_field(text(TextField::Color, "Pink"));
        let before = controller.draft().clone();

        controller.apply_quick_preset("trending");
        controller.apply_quick_preset("");

        assert_eq!(controller.draft(), &before);
    }

    #[test]
    fn test_preset_ids_drive_the_draft() {
        let (_store, mut controller) = open_with(ClosetFilters::default());

        controller.apply_quick_preset("high_value");
        assert_eq!(controller.draft().sort_field, SortField::Price);
        assert!(!controller.draft().sort_ascending);

        controller.apply_quick_preset("favorites");
        assert!(controller.draft().only_favorited);

        controller.apply_quick_preset("recent");
        assert_eq!(controller.draft().sort_field, SortField::DateAdded);
        assert!(controller.draft().sort_ascending);
        assert!(!controller.draft().only_favorited);
    }

    #[test]
    fn test_clear_all_does_not_touch_store() {
        let stored = ClosetFilters {
            category: "Shoes".to_string(),
            only_favorited: true,
            ..ClosetFilters::default()
        };
        let (store, mut controller) = open_with(stored.clone());

        controller.clear_all();

        assert_eq!(controller.draft(), &FilterDraft::default());
        assert!(store.calls().is_empty());
        assert_eq!(store.current_filters(), stored);
    }

    #[test]
    fn test_commit_writes_and_closes() {
        let (store, mut controller) = open_with(ClosetFilters::default());
        controller.set_field(text(TextField::Category, "Tops"));

        let report = controller.commit(FlagCommitMode::Assign).unwrap();

        assert_eq!(controller.outcome(), FormOutcome::Committed);
        assert_eq!(report.applied.len(), 3);
        assert_eq!(
            store.calls(),
            vec![
                StoreMutation::SetCategory("Tops".to_string()),
                StoreMutation::SetCondition(Condition::New),
                StoreMutation::SetSorting(SortField::DateAdded, false),
            ]
        );

        let again = controller.commit(FlagCommitMode::Assign).unwrap_err();
        assert!(matches!(
            again.downcast_ref::<FilterError>(),
            Some(FilterError::ScreenClosed)
        ));
        assert_eq!(store.calls().len(), 3);
    }

    #[test]
    fn test_failed_commit_keeps_screen_open() {
        let store = Arc::new(RecordingStore::failing_on(StoreMutation::SetSorting(
            SortField::DateAdded,
            false,
        )));
        let use_cases = UseCaseContainer::new(store.clone());
        let mut controller = FilterFormController::open(&use_cases);

        assert!(controller.commit(FlagCommitMode::Toggle).is_err());
        assert_eq!(controller.outcome(), FormOutcome::Editing);
    }

    #[test]
    fn test_cancel_never_mutates_store() {
        let (store, mut controller) = open_with(ClosetFilters::default());
        controller.set_field(text(TextField::Brand, "Zara"));
        controller.set_field(FieldUpdate::OnlyOnSale(true));
        controller.apply_quick_preset("worn");

        controller.cancel();

        assert_eq!(controller.outcome(), FormOutcome::Cancelled);
        assert!(store.calls().is_empty());
        assert_eq!(store.current_filters(), ClosetFilters::default());
    }

    #[test]
    fn test_initialize_does_not_reopen_a_committed_form() {
        let (store, mut controller) = open_with(ClosetFilters::default());
        controller.set_field(text(TextField::Category, "Tops"));
        controller.commit(FlagCommitMode::Assign).unwrap();
        let calls_after_commit = store.calls().len();

        controller.initialize();

        assert_eq!(controller.outcome(), FormOutcome::Committed);
        assert!(controller.commit(FlagCommitMode::Assign).is_err());
        assert_eq!(store.calls().len(), calls_after_commit);
    }

    #[test]
    fn test_initialize_does_not_reopen_a_cancelled_form() {
        let (store, mut controller) = open_with(ClosetFilters::default());
        controller.cancel();

        controller.initialize();

        assert_eq!(controller.outcome(), FormOutcome::Cancelled);
        assert!(controller.commit(FlagCommitMode::Toggle).is_err());
        assert!(store.calls().is_empty());
    }

    #[test]
    fn test_edits_after_close_are_ignored() {
        let (_store, mut controller) = open_with(ClosetFilters::default());
        controller.cancel();

        controller.set_field(text(TextField::Category, "Tops"));
        controller.apply_quick_preset("favorites");

        assert_eq!(controller.draft(), &FilterDraft::default());
        assert_eq!(controller.outcome(), FormOutcome::Cancelled);
    }
}
