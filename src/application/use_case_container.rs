use crate::application::use_cases::*;
use crate::domain::repositories::ClosetStore;
use std::sync::Arc;

pub struct UseCaseContainer {
    pub get_filters: Arc<GetClosetFilters>,
    pub load_draft: Arc<LoadFilterDraft>,
    pub commit_draft: Arc<CommitFilterDraft>,
}

impl UseCaseContainer {
    pub fn new(closet_store: Arc<dyn ClosetStore>) -> Self {
        Self {
            get_filters: Arc::new(GetClosetFilters::new(Arc::clone(&closet_store))),
            load_draft: Arc::new(LoadFilterDraft::new(Arc::clone(&closet_store))),
            commit_draft: Arc::new(CommitFilterDraft::new(Arc::clone(&closet_store))),
        }
    }
}
