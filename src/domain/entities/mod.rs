pub mod closet_filters;
pub mod condition;
pub mod config;
pub mod filter_draft;
pub mod filter_options;
pub mod preset;
pub mod sort;

pub use closet_filters::ClosetFilters;
pub use condition::Condition;
pub use config::{AppConfig, FlagCommitMode, ThemeMode};
pub use filter_draft::{DraftEvent, FieldUpdate, FilterDraft};
pub use filter_options::TextField;
pub use preset::QuickPreset;
pub use sort::SortField;
