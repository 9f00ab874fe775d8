use super::entities::TextField;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("unknown quick preset: {0}")]
    UnknownPreset(String),

    #[error("'{value}' is not a valid {field} option")]
    InvalidOption { field: TextField, value: String },

    #[error("the filter screen is already closed")]
    ScreenClosed,
}
