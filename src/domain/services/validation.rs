use crate::domain::entities::{FieldUpdate, TextField};
use crate::domain::errors::FilterError;

pub struct FilterOptionValidator;

impl FilterOptionValidator {
    pub fn validate_option(field: TextField, value: &str) -> bool {
        field.options().contains(&value)
    }

    /// Only text fields can go out of range; enum and flag updates are
    /// valid by construction.
    pub fn validate_update(update: &FieldUpdate) -> Result<(), FilterError> {
        if let FieldUpdate::Text(field, value) = update {
            if !Self::validate_option(*field, value) {
                return Err(FilterError::InvalidOption {
                    field: *field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}
