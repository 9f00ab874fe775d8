pub mod filter_form;
pub mod log_manager;
pub mod navigation;

pub use filter_form::{FilterFormController, FormOutcome};
pub use log_manager::{LogLevel, LogManager};
pub use navigation::{NavigationStack, Screen};
