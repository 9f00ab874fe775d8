pub mod closet;
pub mod filters;
pub mod log;
pub mod settings;

pub use closet::{ClosetAction, ClosetScreen};
pub use filters::{FilterAction, FiltersScreen};
pub use log::{LogAction, LogPanel};
pub use settings::{SettingsAction, SettingsScreen};
